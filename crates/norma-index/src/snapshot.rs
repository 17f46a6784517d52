//! The immutable unit of consistency: chunks plus the two ordinal-aligned
//! index representations. Queries only ever observe a whole snapshot;
//! rebuilds replace it atomically.

use norma_core::errors::IndexError;
use norma_core::models::Chunk;

use crate::dense::DenseIndex;
use crate::lexical::LexicalIndex;

/// One fully built corpus index. Row `i` of both matrices corresponds to
/// `chunks[i]`.
#[derive(Debug, Clone)]
pub struct CorpusSnapshot {
    pub chunks: Vec<Chunk>,
    pub lexical: LexicalIndex,
    pub dense: DenseIndex,
}

impl CorpusSnapshot {
    /// Assemble and check the row-alignment invariant.
    pub fn new(
        chunks: Vec<Chunk>,
        lexical: LexicalIndex,
        dense: DenseIndex,
    ) -> Result<Self, IndexError> {
        let snapshot = Self {
            chunks,
            lexical,
            dense,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// An empty snapshot; queries against it report an empty corpus.
    pub fn empty() -> Self {
        Self {
            chunks: Vec::new(),
            lexical: LexicalIndex::fit(&[], 0),
            dense: DenseIndex::new(Vec::new()).expect("empty matrix is always well-formed"),
        }
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        if self.chunks.len() != self.lexical.len() || self.chunks.len() != self.dense.len() {
            return Err(IndexError::Misaligned {
                chunks: self.chunks.len(),
                lexical: self.lexical.len(),
                dense: self.dense.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
