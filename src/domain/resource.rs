//! Content records held by the library.
//!
//! A [`Resource`] is the unit the query engine searches. Its enumerated
//! attributes are closed sets; anything else is rejected at parse time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Resource identifier, unique within a corpus
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier for the n-th generated resource (1-based)
    pub fn sequential(n: usize) -> Self {
        Self(format!("resource-{}", n))
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Topic area of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MentalHealth,
    Nutrition,
    Fitness,
    Autoimmune,
    Holistic,
    Inflammation,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::MentalHealth,
        Category::Nutrition,
        Category::Fitness,
        Category::Autoimmune,
        Category::Holistic,
        Category::Inflammation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::MentalHealth => "mental-health",
            Category::Nutrition => "nutrition",
            Category::Fitness => "fitness",
            Category::Autoimmune => "autoimmune",
            Category::Holistic => "holistic",
            Category::Inflammation => "inflammation",
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Category::MentalHealth => "Mental Health",
            Category::Nutrition => "Nutrition",
            Category::Fitness => "Fitness & Exercise",
            Category::Autoimmune => "Autoimmune Health",
            Category::Holistic => "Holistic Healing",
            Category::Inflammation => "Inflammatory Conditions",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "mental-health" | "mental_health" => Ok(Category::MentalHealth),
            "nutrition" => Ok(Category::Nutrition),
            "fitness" => Ok(Category::Fitness),
            "autoimmune" => Ok(Category::Autoimmune),
            "holistic" => Ok(Category::Holistic),
            "inflammation" => Ok(Category::Inflammation),
            _ => anyhow::bail!("Unknown category: {}", s),
        }
    }
}

/// Format of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Article,
    Guide,
    Tool,
    Download,
    Video,
    Audio,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Article,
        ResourceKind::Guide,
        ResourceKind::Tool,
        ResourceKind::Download,
        ResourceKind::Video,
        ResourceKind::Audio,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Article => "article",
            ResourceKind::Guide => "guide",
            ResourceKind::Tool => "tool",
            ResourceKind::Download => "download",
            ResourceKind::Video => "video",
            ResourceKind::Audio => "audio",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "article" => Ok(ResourceKind::Article),
            "guide" => Ok(ResourceKind::Guide),
            "tool" => Ok(ResourceKind::Tool),
            "download" => Ok(ResourceKind::Download),
            "video" => Ok(ResourceKind::Video),
            "audio" => Ok(ResourceKind::Audio),
            _ => anyhow::bail!("Unknown resource type: {}", s),
        }
    }
}

/// Reading level of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => anyhow::bail!("Unknown difficulty: {}", s),
        }
    }
}

/// Publication date as stored (`YYYY-MM-DD`).
///
/// The raw string is kept verbatim so that a corpus with a malformed date
/// still loads; [`PublishedDate::parsed`] returns `None` for those.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishedDate(String);

impl PublishedDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.0.trim(), Self::FORMAT).ok()
    }
}

impl From<NaiveDate> for PublishedDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.format(Self::FORMAT).to_string())
    }
}

impl std::fmt::Display for PublishedDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single content record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique identifier
    pub id: ResourceId,

    pub title: String,

    pub description: String,

    pub author: String,

    pub category: Category,

    /// Format (serialized as `type`)
    #[serde(rename = "type")]
    pub kind: ResourceKind,

    pub difficulty: Difficulty,

    /// Display hint such as "5 min read"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// Tags in display order
    #[serde(default)]
    pub tags: Vec<String>,

    pub downloads: u64,

    pub citations: u64,

    #[serde(rename = "publishedDate")]
    pub published: PublishedDate,

    /// Editorial promotion flag
    #[serde(default)]
    pub featured: bool,
}

impl Resource {
    /// Create a resource with zeroed metrics and no tags
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        kind: ResourceKind,
    ) -> Self {
        Self {
            id: ResourceId::new(id),
            title: title.into(),
            description: String::new(),
            author: String::new(),
            category,
            kind,
            difficulty: Difficulty::Beginner,
            read_time: None,
            tags: Vec::new(),
            downloads: 0,
            citations: 0,
            published: PublishedDate::new(""),
            featured: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = downloads;
        self
    }

    pub fn with_citations(mut self, citations: u64) -> Self {
        self.citations = citations;
        self
    }

    pub fn with_published(mut self, published: impl Into<PublishedDate>) -> Self {
        self.published = published.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Case-insensitive substring match over title, description, author and tags.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.author.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

impl From<&str> for PublishedDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
