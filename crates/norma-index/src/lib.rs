//! # norma-index
//!
//! Offline side of the retrieval engine: turns raw page text into an
//! immutable [`CorpusSnapshot`]. Structural segmentation, text
//! normalization, a frozen TF-IDF index, and a dense embedding matrix,
//! all ordinal-aligned.

pub mod builder;
pub mod dense;
pub mod fallback;
pub mod lexical;
pub mod normalizer;
pub mod persist;
pub mod segmenter;
pub mod snapshot;

pub use builder::{IndexBuilder, SourceDocument};
pub use dense::DenseIndex;
pub use fallback::HashingEmbedder;
pub use lexical::LexicalIndex;
pub use normalizer::normalize;
pub use snapshot::CorpusSnapshot;
