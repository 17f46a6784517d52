use serde::{Deserialize, Serialize};

/// Best-matching fragment for one query. Constructed fresh per query,
/// never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    /// The winning chunk's text, blank runs collapsed.
    pub fragment: String,
    /// "Artículo N" when present in the fragment, else the chunk label.
    pub article_label: String,
    /// Originating document of the fragment.
    pub source_id: String,
    /// 1-based page where the fragment begins.
    pub page: Option<u32>,
    /// Post-re-rank score the fragment won with.
    pub score: f32,
}
