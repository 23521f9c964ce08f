//! Core query logic.
//!
//! - Query: filter, sort and truncate a corpus

pub mod query;

// Re-export commonly used types
pub use query::{
    query, AxisFilter, QueryEngine, QueryResults, ResourceFilters, ResourceQuery, SortKey,
    DEFAULT_RESULT_CAP,
};
