//! Structural segmentation: splits raw page text into chunks aligned to
//! the headers regulatory documents are organized by (capítulo, título,
//! sección, artículo). Splitting on structure rather than fixed-size
//! windows keeps each retrieval unit semantically whole and lets the
//! re-ranker use document structure as a relevance signal.

use std::sync::LazyLock;

use regex::Regex;

use norma_core::config::IndexConfig;
use norma_core::models::{Chunk, StructuralKind, UNTITLED_LABEL};
use norma_core::traits::PageText;

use crate::normalizer::normalize;

/// The single header pattern. Chapter/title/section headers take one
/// following token; article headers take a number with an optional
/// ordinal marker.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(cap[íi]tulo\s+\S+|t[íi]tulo\s+\S+|secci[oó]n\s+\S+|art[íi]culo\s+\d+º?|art\.\s*\d+)")
        .expect("header pattern is valid")
});

/// Segment the extracted pages of one document into chunks.
///
/// Each header opens a chunk whose body runs to the next header or end of
/// page. A page with no headers becomes exactly one untitled PLAIN chunk
/// carrying the whole page. Text before the first header on a page is
/// discarded.
pub fn segment(source_id: &str, pages: &[PageText], config: &IndexConfig) -> Vec<Chunk> {
    let mut chunks = Vec::new();

    for page in pages {
        segment_page(source_id, page, config, &mut chunks);
    }

    chunks
}

fn segment_page(source_id: &str, page: &PageText, config: &IndexConfig, out: &mut Vec<Chunk>) {
    let text = &page.text;
    let matches: Vec<_> = HEADER.find_iter(text).collect();

    if matches.is_empty() {
        out.push(make_chunk(
            source_id,
            page.page,
            UNTITLED_LABEL,
            StructuralKind::Plain,
            text.to_string(),
        ));
        return;
    }

    for (i, m) in matches.iter().enumerate() {
        let label = m.as_str().trim();
        let end = matches.get(i + 1).map_or(text.len(), |next| next.start());
        let body = text[m.end()..end].trim();
        let kind = StructuralKind::from_label(label);

        if body.split_whitespace().count() < config.min_chunk_tokens {
            // Almost always a false-positive match or an empty trailing
            // section. Bare chapter/section headers are kept so articles
            // stay traceable to their chapter.
            let keep = config.retain_bare_headers && kind == StructuralKind::ChapterOrSection;
            if !keep {
                continue;
            }
        }

        let raw = if body.is_empty() {
            label.to_string()
        } else {
            format!("{label}\n{body}")
        };
        out.push(make_chunk(source_id, page.page, label, kind, raw));
    }
}

fn make_chunk(
    source_id: &str,
    page: u32,
    label: &str,
    kind: StructuralKind,
    raw_text: String,
) -> Chunk {
    let normalized_text = normalize(&raw_text);
    Chunk {
        source_id: source_id.to_string(),
        page: Some(page),
        label: label.to_string(),
        kind,
        raw_text,
        normalized_text,
    }
}
