//! Resource query engine.
//!
//! A query narrows the corpus through a fixed sequence of stages and then
//! orders and truncates what is left:
//!
//! 1. free-text match (title, description, author, tags)
//! 2. category, kind and difficulty filters
//! 3. featured-only filter
//! 4. sort by the requested key
//! 5. truncate to `min(limit, cap)`
//!
//! The engine only borrows the corpus. Results are references into it.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Category, Difficulty, Resource, ResourceKind};
use crate::library::Corpus;

/// Result cap applied when nothing else is configured
pub const DEFAULT_RESULT_CAP: usize = 50;

/// Restriction on one enumerated attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisFilter<T> {
    /// No restriction (the "all" sentinel)
    Any,
    /// Keep records whose attribute equals this value
    Exactly(T),
    /// A value that names no variant; matches nothing
    Unrecognized(String),
}

impl<T> Default for AxisFilter<T> {
    fn default() -> Self {
        AxisFilter::Any
    }
}

impl<T: FromStr> AxisFilter<T> {
    /// Parse a user-supplied filter value.
    ///
    /// `"all"` (any case) and the empty string disable the filter. Values
    /// that do not parse are kept as [`AxisFilter::Unrecognized`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return AxisFilter::Any;
        }

        match trimmed.parse::<T>() {
            Ok(value) => AxisFilter::Exactly(value),
            Err(_) => {
                warn!(value = trimmed, "Unrecognized filter value, nothing will match");
                AxisFilter::Unrecognized(trimmed.to_string())
            }
        }
    }
}

impl<T: PartialEq> AxisFilter<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            AxisFilter::Any => true,
            AxisFilter::Exactly(expected) => expected == value,
            AxisFilter::Unrecognized(_) => false,
        }
    }
}

impl<T> From<T> for AxisFilter<T> {
    fn from(value: T) -> Self {
        AxisFilter::Exactly(value)
    }
}

/// Structured filters of a query. The default restricts nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilters {
    pub category: AxisFilter<Category>,
    pub kind: AxisFilter<ResourceKind>,
    pub difficulty: AxisFilter<Difficulty>,
    /// Keep only featured records
    pub featured_only: bool,
}

impl ResourceFilters {
    fn accepts(&self, resource: &Resource) -> bool {
        self.category.matches(&resource.category)
            && self.kind.matches(&resource.kind)
            && self.difficulty.matches(&resource.difficulty)
            && (!self.featured_only || resource.featured)
    }
}

/// Result ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Featured first, then most downloaded
    #[default]
    Relevance,
    Downloads,
    Citations,
    /// Most recently published first
    #[serde(alias = "date")]
    Recency,
}

impl SortKey {
    /// Compare two records under this key. `Less` means `a` comes first.
    pub fn compare(self, a: &Resource, b: &Resource) -> Ordering {
        match self {
            SortKey::Downloads => b.downloads.cmp(&a.downloads),
            SortKey::Citations => b.citations.cmp(&a.citations),
            // None < Some, so unparsable dates land after every real date
            SortKey::Recency => b.published.parsed().cmp(&a.published.parsed()),
            SortKey::Relevance => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.downloads.cmp(&a.downloads)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Relevance => write!(f, "relevance"),
            SortKey::Downloads => write!(f, "downloads"),
            SortKey::Citations => write!(f, "citations"),
            SortKey::Recency => write!(f, "recency"),
        }
    }
}

impl FromStr for SortKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortKey::Relevance),
            "downloads" => Ok(SortKey::Downloads),
            "citations" => Ok(SortKey::Citations),
            "recency" | "date" => Ok(SortKey::Recency),
            _ => anyhow::bail!("Unknown sort key: {}", s),
        }
    }
}

/// A complete query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceQuery {
    /// Free text; blank means no text filter
    pub text: String,
    pub filters: ResourceFilters,
    pub sort: SortKey,
    /// Requested result size; the engine cap still applies
    pub limit: Option<usize>,
}

impl ResourceQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<AxisFilter<Category>>) -> Self {
        self.filters.category = category.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<AxisFilter<ResourceKind>>) -> Self {
        self.filters.kind = kind.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<AxisFilter<Difficulty>>) -> Self {
        self.filters.difficulty = difficulty.into();
        self
    }

    pub fn featured_only(mut self, featured_only: bool) -> Self {
        self.filters.featured_only = featured_only;
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Output of a query
#[derive(Debug, Clone)]
pub struct QueryResults<'c> {
    /// Records that passed every filter, before truncation
    pub total_matches: usize,
    /// Ordered, truncated records
    pub resources: Vec<&'c Resource>,
}

/// Runs queries against a borrowed corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryEngine {
    cap: usize,
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_CAP)
    }
}

impl QueryEngine {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Effective result bound for a requested limit
    pub fn bound(&self, limit: Option<usize>) -> usize {
        limit.map_or(self.cap, |l| l.min(self.cap))
    }

    /// Run a query, returning the ordered and truncated records
    pub fn run<'c>(&self, corpus: &'c Corpus, query: &ResourceQuery) -> Vec<&'c Resource> {
        self.execute(corpus, query).resources
    }

    /// Run a query, also reporting how many records matched before truncation
    pub fn execute<'c>(&self, corpus: &'c Corpus, query: &ResourceQuery) -> QueryResults<'c> {
        // Blank text disables the stage; otherwise the text is matched as typed
        let needle = if query.text.trim().is_empty() {
            String::new()
        } else {
            query.text.to_lowercase()
        };

        let mut matched: Vec<&Resource> = corpus
            .iter()
            .filter(|r| needle.is_empty() || r.matches_text(&needle))
            .filter(|r| query.filters.accepts(r))
            .collect();

        // Stable: ties keep corpus order
        matched.sort_by(|a, b| query.sort.compare(a, b));

        let total_matches = matched.len();
        matched.truncate(self.bound(query.limit));

        debug!(
            text = %query.text,
            sort = %query.sort,
            total_matches,
            returned = matched.len(),
            "Query executed"
        );

        QueryResults {
            total_matches,
            resources: matched,
        }
    }
}

/// Run a query with the default cap
pub fn query<'c>(corpus: &'c Corpus, query: &ResourceQuery) -> Vec<&'c Resource> {
    QueryEngine::default().run(corpus, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceId;

    fn resource(id: &str, downloads: u64) -> Resource {
        Resource::new(id, format!("Resource {}", id), Category::Nutrition, ResourceKind::Article)
            .with_downloads(downloads)
    }

    fn ids(results: &[&Resource]) -> Vec<String> {
        results.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_axis_filter_parse() {
        assert_eq!(AxisFilter::<Category>::parse("all"), AxisFilter::Any);
        assert_eq!(AxisFilter::<Category>::parse("ALL"), AxisFilter::Any);
        assert_eq!(AxisFilter::<Category>::parse(""), AxisFilter::Any);
        assert_eq!(
            AxisFilter::<Category>::parse("fitness"),
            AxisFilter::Exactly(Category::Fitness)
        );
        assert_eq!(
            AxisFilter::<Category>::parse("cardiology"),
            AxisFilter::Unrecognized("cardiology".to_string())
        );
    }

    #[test]
    fn test_unrecognized_filter_matches_nothing() {
        let filter = AxisFilter::<Difficulty>::parse("expert");
        for difficulty in Difficulty::ALL {
            assert!(!filter.matches(&difficulty));
        }
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("date".parse::<SortKey>().unwrap(), SortKey::Recency);
        assert_eq!("Downloads".parse::<SortKey>().unwrap(), SortKey::Downloads);
        assert!("popularity".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_bound_respects_cap() {
        let engine = QueryEngine::new(50);
        assert_eq!(engine.bound(None), 50);
        assert_eq!(engine.bound(Some(10)), 10);
        assert_eq!(engine.bound(Some(500)), 50);
    }

    #[test]
    fn test_relevance_ties_keep_corpus_order() {
        let corpus = Corpus::new(vec![resource("a", 10), resource("b", 10), resource("c", 10)]).unwrap();
        let results = query(&corpus, &ResourceQuery::new());
        assert_eq!(ids(&results), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_recency_puts_malformed_dates_last() {
        let corpus = Corpus::new(vec![
            resource("bad", 1).with_published("not-a-date"),
            resource("old", 1).with_published("2022-01-01"),
            resource("new", 1).with_published("2024-06-30"),
        ])
        .unwrap();

        let results = query(&corpus, &ResourceQuery::new().sorted_by(SortKey::Recency));
        assert_eq!(ids(&results), vec!["new", "old", "bad"]);
    }

    #[test]
    fn test_execute_reports_total_before_truncation() {
        let corpus = Corpus::new((1..=8).map(|n| resource(&n.to_string(), n)).collect()).unwrap();
        let results = QueryEngine::new(3).execute(&corpus, &ResourceQuery::new());

        assert_eq!(results.total_matches, 8);
        assert_eq!(ids(&results.resources), vec!["8", "7", "6"]);
    }

    #[test]
    fn test_query_does_not_touch_corpus() {
        let corpus = Corpus::new(vec![resource("x", 3), resource("y", 9)]).unwrap();
        let before: Vec<ResourceId> = corpus.iter().map(|r| r.id.clone()).collect();

        let _ = query(&corpus, &ResourceQuery::new().sorted_by(SortKey::Downloads));

        let after: Vec<ResourceId> = corpus.iter().map(|r| r.id.clone()).collect();
        assert_eq!(before, after);
    }
}
