pub mod chunk;
pub mod query_result;
pub mod report;

pub use chunk::{Chunk, StructuralKind, UNTITLED_LABEL};
pub use query_result::QueryResult;
pub use report::{IndexedDocument, RebuildReport, SkippedDocument};
