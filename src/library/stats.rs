//! Aggregate statistics over a corpus.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{Category, Resource, ResourceKind};

/// Totals and breakdowns shown on the library overview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub total_resources: usize,
    pub total_downloads: u64,
    pub total_citations: u64,
    pub by_category: BTreeMap<Category, usize>,
    pub by_kind: BTreeMap<ResourceKind, usize>,
}

impl CorpusStats {
    pub fn collect<'a>(resources: impl IntoIterator<Item = &'a Resource>) -> Self {
        resources
            .into_iter()
            .fold(Self::default(), |mut stats, resource| {
                stats.total_resources += 1;
                // Metrics are unbounded u64, so totals saturate instead of wrapping
                stats.total_downloads = stats.total_downloads.saturating_add(resource.downloads);
                stats.total_citations = stats.total_citations.saturating_add(resource.citations);
                *stats.by_category.entry(resource.category).or_default() += 1;
                *stats.by_kind.entry(resource.kind).or_default() += 1;
                stats
            })
    }
}
