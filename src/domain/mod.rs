//! Domain types for the resource library.
//!
//! - Resource: a content record and its closed enumerations

pub mod resource;

// Re-export commonly used types
pub use resource::{Category, Difficulty, PublishedDate, Resource, ResourceId, ResourceKind};
