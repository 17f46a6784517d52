use std::path::Path;

use crate::errors::NormaResult;

/// Raw text of one extractable page.
#[derive(Debug, Clone)]
pub struct PageText {
    /// 1-based page number.
    pub page: u32,
    pub text: String,
}

/// Page-text extraction, supplied by a collaborator (e.g. a PDF reader).
///
/// Pages yielding no text are simply omitted, not an error. A failed
/// document is reported through the `Err` branch and skipped by the
/// builder.
pub trait IPageExtractor: Send + Sync {
    fn extract_pages(&self, path: &Path) -> NormaResult<Vec<PageText>>;
}
