use serde::{Deserialize, Serialize};

/// Label assigned to a span with no structural header.
pub const UNTITLED_LABEL: &str = "untitled section";

/// Classification of a chunk by the lexical shape of its label.
///
/// Used exclusively to bias ranking; retrieval correctness never depends
/// on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralKind {
    /// "Artículo 12", "Art. 5": the normative unit users usually want.
    Article,
    /// "Capítulo III", "Sección segunda", "Título I".
    ChapterOrSection,
    /// No recognized header.
    Plain,
}

impl StructuralKind {
    /// Derive the kind from a structural label.
    ///
    /// Accent-insensitive prefix match on the lowercased label:
    /// `art…` → Article, `cap…`/`sec…`/`tit…` → ChapterOrSection,
    /// anything else (including [`UNTITLED_LABEL`]) → Plain.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        let folded: String = lower
            .chars()
            .take(4)
            .map(|c| match c {
                'í' => 'i',
                'ó' => 'o',
                _ => c,
            })
            .collect();

        if folded.starts_with("art") {
            StructuralKind::Article
        } else if folded.starts_with("cap")
            || folded.starts_with("sec")
            || folded.starts_with("tit")
        {
            StructuralKind::ChapterOrSection
        } else {
            StructuralKind::Plain
        }
    }
}

/// A contiguous span of source text bound to one structural label.
///
/// Chunks are created during segmentation and immutable afterwards; the
/// whole chunk set is replaced wholesale on every rebuild.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Originating document (filename or stable document key).
    pub source_id: String,
    /// 1-based page where the chunk begins, `None` when unavailable.
    pub page: Option<u32>,
    /// The header text that introduced this chunk, or [`UNTITLED_LABEL`].
    pub label: String,
    /// Derived from the label; ranking signal only.
    pub kind: StructuralKind,
    /// Label and body, newline-joined, as originally extracted.
    pub raw_text: String,
    /// Normalized form of `raw_text`; used for indexing, never shown.
    pub normalized_text: String,
}
