/// Query-time errors. Returned to the caller as explicit outcomes,
/// never thrown across the snapshot boundary.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("no documents indexed")]
    EmptyCorpus,

    #[error("invalid k: {k} (must be at least 1)")]
    InvalidK { k: usize },
}
