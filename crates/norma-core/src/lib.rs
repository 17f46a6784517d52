//! # norma-core
//!
//! Foundation crate for the norma retrieval engine.
//! Defines the data model, errors, config, and collaborator traits.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::NormaConfig;
pub use errors::{NormaError, NormaResult};
pub use models::{Chunk, QueryResult, RebuildReport, StructuralKind};
