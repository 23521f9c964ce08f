//! The corpus: the single owner of all resource records.
//!
//! A corpus is built once (loaded from JSON or generated), validated, and
//! then only ever lent out by shared reference. There is no mutating API.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tokio::fs;
use tracing::info;

use super::generator::ResourceGenerator;
use super::stats::CorpusStats;
use crate::core::query::AxisFilter;
use crate::domain::{Category, Resource, ResourceId};

/// Number of records shown by the featured listing unless told otherwise
pub const DEFAULT_FEATURED_LIMIT: usize = 12;

/// Errors that can occur while building or persisting a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("Duplicate resource id: {0}")]
    DuplicateId(ResourceId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Immutable, validated set of resources
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    resources: Vec<Resource>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate identifiers
    pub fn new(resources: Vec<Resource>) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(resources.len());
        for resource in &resources {
            if !seen.insert(&resource.id) {
                return Err(CorpusError::DuplicateId(resource.id.clone()));
            }
        }

        Ok(Self { resources })
    }

    /// Generate a deterministic corpus from a seed
    pub fn generate(seed: u64, count: usize) -> Self {
        let resources = ResourceGenerator::new(seed).generate(count);
        info!(seed, count = resources.len(), "Generated corpus");
        // Generated ids are sequential, so they are unique.
        Self { resources }
    }

    /// Load a corpus from a JSON array on disk
    pub async fn load(path: &Path) -> Result<Self, CorpusError> {
        let content = fs::read_to_string(path).await?;
        let resources: Vec<Resource> = serde_json::from_str(&content)?;
        let corpus = Self::new(resources)?;

        info!(path = %path.display(), count = corpus.len(), "Loaded corpus");
        Ok(corpus)
    }

    /// Save the corpus as a pretty-printed JSON array
    pub async fn save(&self, path: &Path) -> Result<(), CorpusError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(&self.resources)?;
        fs::write(path, content).await?;
        Ok(())
    }

    /// Load `path` if it exists, otherwise generate from `seed`
    pub async fn open_or_generate(path: &Path, seed: u64, count: usize) -> Result<Self, CorpusError> {
        if path.exists() {
            Self::load(path).await
        } else {
            info!(path = %path.display(), "No corpus file, generating one in memory");
            Ok(Self::generate(seed, count))
        }
    }

    /// Get a resource by ID
    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| &r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.resources.iter()
    }

    pub fn as_slice(&self) -> &[Resource] {
        &self.resources
    }

    /// Get the number of resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Featured resources in corpus order
    pub fn featured(&self, limit: usize) -> Vec<&Resource> {
        self.resources.iter().filter(|r| r.featured).take(limit).collect()
    }

    /// Resources in one category (or all of them), in corpus order
    pub fn by_category(&self, category: &AxisFilter<Category>, limit: Option<usize>) -> Vec<&Resource> {
        let mut items: Vec<_> = self
            .resources
            .iter()
            .filter(|r| category.matches(&r.category))
            .collect();

        if let Some(limit) = limit {
            items.truncate(limit);
        }

        items
    }

    /// Aggregate counts over the whole corpus
    pub fn stats(&self) -> CorpusStats {
        CorpusStats::collect(self)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceKind;

    fn resource(id: &str, category: Category) -> Resource {
        Resource::new(id, format!("Title {}", id), category, ResourceKind::Article)
    }

    #[test]
    fn test_corpus_rejects_duplicate_ids() {
        let result = Corpus::new(vec![
            resource("a", Category::Fitness),
            resource("b", Category::Fitness),
            resource("a", Category::Nutrition),
        ]);

        match result {
            Err(CorpusError::DuplicateId(id)) => assert_eq!(id.as_str(), "a"),
            other => panic!("Expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_corpus_get() {
        let corpus = Corpus::new(vec![resource("a", Category::Fitness)]).unwrap();

        assert!(corpus.get(&ResourceId::new("a")).is_some());
        assert!(corpus.get(&ResourceId::new("z")).is_none());
    }

    #[test]
    fn test_featured_limit_and_order() {
        let corpus = Corpus::new(vec![
            resource("a", Category::Fitness).featured(),
            resource("b", Category::Fitness),
            resource("c", Category::Holistic).featured(),
            resource("d", Category::Holistic).featured(),
        ])
        .unwrap();

        let ids: Vec<_> = corpus.featured(2).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_corpus_iterates_by_reference() {
        let corpus = Corpus::new(vec![
            resource("a", Category::Fitness),
            resource("b", Category::Nutrition),
        ])
        .unwrap();

        let mut ids = Vec::new();
        for r in &corpus {
            ids.push(r.id.as_str());
        }
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(corpus.stats().total_resources, 2);
    }

    #[test]
    fn test_by_category() {
        let corpus = Corpus::new(vec![
            resource("a", Category::Fitness),
            resource("b", Category::Nutrition),
            resource("c", Category::Fitness),
        ])
        .unwrap();

        assert_eq!(corpus.by_category(&AxisFilter::Any, None).len(), 3);
        assert_eq!(
            corpus
                .by_category(&AxisFilter::Exactly(Category::Fitness), None)
                .len(),
            2
        );
        assert_eq!(
            corpus
                .by_category(&AxisFilter::Exactly(Category::Fitness), Some(1))
                .len(),
            1
        );
        assert!(corpus
            .by_category(&AxisFilter::Unrecognized("x".into()), None)
            .is_empty());
    }
}
