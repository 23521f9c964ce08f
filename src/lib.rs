//! reslib - Wellness resource library
//!
//! An immutable corpus of wellness content records and a query engine that
//! filters, sorts and bounds results over it.
//!
//! # Architecture
//!
//! - The corpus is built once (loaded from JSON or generated from a seed)
//!   and owned by the caller
//! - Queries borrow the corpus and return references into it
//! - Queries never fail: unknown filter values match nothing and malformed
//!   dates sort last
//!
//! # Modules
//!
//! - `domain`: Data structures (Resource, Category, ResourceKind, Difficulty)
//! - `core`: Query engine (ResourceQuery, QueryEngine, SortKey)
//! - `library`: Corpus ownership, generation and statistics
//! - `config`: Configuration file and environment resolution
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Search the library
//! reslib search arthritis --category nutrition --sort downloads
//!
//! # Write a reproducible sample corpus
//! reslib generate --seed 42 --count 2500
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod library;

// Re-export main types at crate root for convenience
pub use crate::core::{query, AxisFilter, QueryEngine, ResourceFilters, ResourceQuery, SortKey};
pub use domain::{Category, Difficulty, PublishedDate, Resource, ResourceId, ResourceKind};
pub use library::{Corpus, CorpusError, CorpusStats, ResourceGenerator};
