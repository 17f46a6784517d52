use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-document success entry in a rebuild report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedDocument {
    pub source_id: String,
    /// Pages that yielded extractable text.
    pub pages: usize,
    /// Chunks contributed to the snapshot.
    pub chunks: usize,
}

/// Per-document failure entry in a rebuild report.
///
/// A skipped document never aborts the rebuild; the rest of the corpus
/// stays queryable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedDocument {
    pub source_id: String,
    pub reason: String,
}

/// Aggregate outcome of one index rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RebuildReport {
    pub indexed: Vec<IndexedDocument>,
    pub skipped: Vec<SkippedDocument>,
    /// Total chunks in the new snapshot.
    pub total_chunks: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RebuildReport {
    /// True when every document was indexed.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
