//! Multiplicative re-ranking over fused candidates.
//!
//! The pipeline is an explicit ordered list of named stages applied
//! left-to-right over an accumulator that starts at the candidate's base
//! score, so stage order is visible, testable configuration rather than
//! incidental code order. Stages are pure: identical inputs always yield
//! bit-identical adjusted scores.

pub mod structure;
pub mod topic;

use norma_core::config::RetrievalConfig;
use norma_core::models::Chunk;

use crate::search::Candidate;

use structure::StructureStage;
use topic::{detect, Topic, TopicStage};

/// Per-query context shared by every stage.
#[derive(Debug, Clone)]
pub struct QueryContext {
    /// Normalized question text.
    pub normalized: String,
    /// Topic detected from the question's keywords, if any.
    pub topic: Option<Topic>,
}

impl QueryContext {
    pub fn new(normalized_question: &str) -> Self {
        Self {
            topic: detect(normalized_question),
            normalized: normalized_question.to_string(),
        }
    }
}

/// One named multiplicative adjustment.
pub trait ScoringStage: Send + Sync {
    fn name(&self) -> &'static str;

    /// Multiplier this stage contributes for one candidate; 1.0 is
    /// neutral.
    fn multiplier(&self, query: &QueryContext, chunk: &Chunk) -> f32;
}

/// Ordered stage list: topic boost first, structural boost second.
pub struct RankingPipeline {
    stages: Vec<Box<dyn ScoringStage>>,
}

impl RankingPipeline {
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            stages: vec![
                Box::new(TopicStage::from_config(config)),
                Box::new(StructureStage::from_config(config)),
            ],
        }
    }

    /// Names of the stages in application order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Adjusted score per candidate, same order as the input slice.
    pub fn rerank(
        &self,
        query: &QueryContext,
        chunks: &[Chunk],
        candidates: &[Candidate],
    ) -> Vec<f32> {
        candidates
            .iter()
            .map(|c| {
                let chunk = &chunks[c.index];
                self.stages
                    .iter()
                    .fold(c.base_score, |acc, stage| acc * stage.multiplier(query, chunk))
            })
            .collect()
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::from_config(&RetrievalConfig::default())
    }
}
