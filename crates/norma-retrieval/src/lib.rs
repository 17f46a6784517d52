//! # norma-retrieval
//!
//! Query side of the engine: normalizes the question, draws top-k
//! candidates from the sparse and dense indexes, fuses them, re-ranks
//! with multiplicative topic and structure boosts, and returns the best
//! fragment with its metadata.

pub mod engine;
pub mod ranking;
pub mod search;
pub mod summary;

pub use engine::RetrievalEngine;
pub use ranking::{QueryContext, RankingPipeline, ScoringStage};
