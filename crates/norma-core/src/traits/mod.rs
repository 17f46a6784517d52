pub mod embedding;
pub mod extractor;

pub use embedding::IEmbeddingProvider;
pub use extractor::{IPageExtractor, PageText};
