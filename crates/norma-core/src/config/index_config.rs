use serde::{Deserialize, Serialize};

use super::defaults;

/// Index-build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Chunks with fewer body tokens than this are dropped at build time
    /// (stray headers, empty trailing sections). Headless untitled chunks
    /// and bare chapter headers are exempt.
    pub min_chunk_tokens: usize,
    /// Lexical vocabulary cap; terms beyond the cap (by corpus frequency)
    /// are never indexed.
    pub max_vocabulary: usize,
    /// Keep chapter/title/section headers whose own body is short, so an
    /// article stays traceable to its chapter.
    pub retain_bare_headers: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_chunk_tokens: defaults::MIN_CHUNK_TOKENS,
            max_vocabulary: defaults::MAX_VOCABULARY,
            retain_bare_headers: true,
        }
    }
}
