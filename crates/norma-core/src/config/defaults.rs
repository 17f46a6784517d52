//! Hard defaults shared by the config structs.

/// Minimum whitespace-delimited tokens a chunk body must carry.
pub const MIN_CHUNK_TOKENS: usize = 20;

/// Vocabulary cap for the lexical index.
pub const MAX_VOCABULARY: usize = 25_000;

/// Candidates taken from each index before fusion.
pub const TOP_K: usize = 3;

/// Topic multipliers (source-filename policy).
pub const TOPIC_BOOST: f32 = 1.40;
pub const TOPIC_PENALTY: f32 = 0.55;

/// Topic multiplier (content-keyword policy, boost-only).
pub const TOPIC_CONTENT_BOOST: f32 = 1.30;

/// Structural multipliers.
pub const ARTICLE_BOOST: f32 = 1.20;
pub const CHAPTER_BOOST: f32 = 1.05;
pub const PLAIN_MULTIPLIER: f32 = 0.85;
