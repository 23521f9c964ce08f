//! Resource library: the corpus and the views over it.
//!
//! # Storage Layout
//!
//! ```text
//! ~/.reslib/
//! └── corpus.json               # JSON array of resources (camelCase keys)
//! ```
//!
//! When no corpus file exists the library generates one in memory from the
//! configured seed, so every query has something to run against.

pub mod corpus;
pub mod generator;
pub mod stats;

pub use corpus::{Corpus, CorpusError, DEFAULT_FEATURED_LIMIT};
pub use generator::{ResourceGenerator, DEFAULT_CORPUS_SIZE, DEFAULT_SEED};
pub use stats::CorpusStats;
