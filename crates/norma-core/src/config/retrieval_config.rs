use serde::{Deserialize, Serialize};

use super::defaults;

/// How a detected topic is matched against a candidate.
///
/// The two policies are deliberately not merged: filename matching can
/// penalize correct content indexed under a differently-named source,
/// while content matching can only boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicPolicy {
    /// Match by source filename; boosts matches, penalizes the rest.
    SourceFilename,
    /// Match by keywords in the candidate's own text; boost-only.
    ContentKeyword,
}

/// Query-time configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Candidates drawn from each of the two indexes before fusion.
    pub top_k: usize,
    pub topic_policy: TopicPolicy,
    /// Multiplier for topic-matching candidates (source-filename policy).
    pub topic_boost: f32,
    /// Multiplier for non-matching candidates under a detected topic
    /// (source-filename policy only).
    pub topic_penalty: f32,
    /// Multiplier for topic-matching candidates (content-keyword policy).
    pub topic_content_boost: f32,
    pub article_boost: f32,
    pub chapter_boost: f32,
    pub plain_multiplier: f32,
    /// When true, untitled chunks skip the structural stage entirely
    /// instead of taking the plain multiplier.
    pub exempt_untitled_from_structure: bool,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::TOP_K,
            topic_policy: TopicPolicy::SourceFilename,
            topic_boost: defaults::TOPIC_BOOST,
            topic_penalty: defaults::TOPIC_PENALTY,
            topic_content_boost: defaults::TOPIC_CONTENT_BOOST,
            article_boost: defaults::ARTICLE_BOOST,
            chapter_boost: defaults::CHAPTER_BOOST,
            plain_multiplier: defaults::PLAIN_MULTIPLIER,
            exempt_untitled_from_structure: false,
        }
    }
}
