//! Topic detection and the topic-match stage.
//!
//! Detection runs keyword membership over the normalized question. Two
//! matching policies exist and are deliberately kept apart: matching by
//! source filename can penalize correct content indexed under a
//! differently-named file, while matching by content keywords can only
//! boost.

use norma_core::config::{RetrievalConfig, TopicPolicy};
use norma_core::models::Chunk;

use super::{QueryContext, ScoringStage};

/// Coarse subject-matter tag detected from the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    /// Final graduation project regulations.
    Pfg,
    /// Enrollment and academic regulations.
    Academic,
    /// Research regulations.
    Research,
    /// General regime (faltas y sanciones).
    General,
}

/// Detect a topic from the normalized question. First match wins, in
/// the order below.
pub fn detect(normalized_question: &str) -> Option<Topic> {
    let q = normalized_question;
    if q.contains("pfg") || q.contains("proyecto final") {
        return Some(Topic::Pfg);
    }
    if q.contains("matr") || q.contains("acad") {
        return Some(Topic::Academic);
    }
    if q.contains("investig") {
        return Some(Topic::Research);
    }
    if q.contains("falta") || q.contains("sancion") {
        return Some(Topic::General);
    }
    None
}

/// Substrings a source filename must carry to belong to a topic.
fn source_markers(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Pfg => &["pfg", "proyecto"],
        Topic::Academic => &["academ"],
        Topic::Research => &["investig"],
        Topic::General => &["general"],
    }
}

/// Content keywords a chunk's own normalized text is matched against
/// under the content-keyword policy.
fn content_keywords(topic: Topic) -> &'static [&'static str] {
    match topic {
        Topic::Pfg => &["pfg", "proyecto final", "proyecto de graduacion", "tutor"],
        Topic::Academic => &["matricul", "academ", "calendario"],
        Topic::Research => &["investig"],
        Topic::General => &["falta", "sancion", "disciplin"],
    }
}

fn source_matches(source_id: &str, topic: Topic) -> bool {
    let name = source_id.to_lowercase();
    source_markers(topic).iter().any(|m| name.contains(m))
}

fn content_matches(normalized_text: &str, topic: Topic) -> bool {
    content_keywords(topic)
        .iter()
        .any(|kw| normalized_text.contains(kw))
}

/// Topic-match stage. Neutral when the question has no detectable topic.
pub struct TopicStage {
    policy: TopicPolicy,
    boost: f32,
    penalty: f32,
    content_boost: f32,
}

impl TopicStage {
    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self {
            policy: config.topic_policy,
            boost: config.topic_boost,
            penalty: config.topic_penalty,
            content_boost: config.topic_content_boost,
        }
    }
}

impl ScoringStage for TopicStage {
    fn name(&self) -> &'static str {
        "topic"
    }

    fn multiplier(&self, query: &QueryContext, chunk: &Chunk) -> f32 {
        let Some(topic) = query.topic else {
            return 1.0;
        };
        match self.policy {
            TopicPolicy::SourceFilename => {
                if source_matches(&chunk.source_id, topic) {
                    self.boost
                } else {
                    self.penalty
                }
            }
            TopicPolicy::ContentKeyword => {
                if content_matches(&chunk.normalized_text, topic) {
                    self.content_boost
                } else {
                    1.0
                }
            }
        }
    }
}
