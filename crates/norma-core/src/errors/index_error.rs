/// Index-build and persistence errors.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("document '{source_id}' could not be read: {reason}")]
    UnreadableDocument { source_id: String, reason: String },

    #[error("embedding provider '{provider}' failed: {reason}")]
    EmbeddingFailed { provider: String, reason: String },

    #[error("embedding row {row} has width {actual}, expected {expected}")]
    RaggedEmbedding {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("snapshot rows misaligned: {chunks} chunks, {lexical} lexical rows, {dense} dense rows")]
    Misaligned {
        chunks: usize,
        lexical: usize,
        dense: usize,
    },

    #[error("artifact '{artifact}' unreadable: {reason}")]
    ArtifactUnreadable { artifact: String, reason: String },

    #[error("artifact '{artifact}' could not be written: {reason}")]
    ArtifactWriteFailed { artifact: String, reason: String },
}
