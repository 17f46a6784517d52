pub mod index_error;
pub mod retrieval_error;

pub use index_error::IndexError;
pub use retrieval_error::RetrievalError;

/// Workspace-wide result alias.
pub type NormaResult<T> = Result<T, NormaError>;

/// Top-level error wrapping each subsystem's error enum.
#[derive(Debug, thiserror::Error)]
pub enum NormaError {
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),
}
