//! Offline index construction. Orchestrates extraction → segmentation →
//! normalization → lexical fit → batched embedding into one snapshot.
//!
//! A failed document never aborts the rebuild: it is skipped, logged,
//! and reported, so a corpus of N files stays queryable even when file
//! N+1 is corrupt.

use std::path::PathBuf;

use chrono::Utc;
use tracing::{debug, info, warn};

use norma_core::config::IndexConfig;
use norma_core::errors::NormaResult;
use norma_core::models::{IndexedDocument, RebuildReport, SkippedDocument};
use norma_core::traits::{IEmbeddingProvider, IPageExtractor};

use crate::dense::DenseIndex;
use crate::lexical::LexicalIndex;
use crate::segmenter;
use crate::snapshot::CorpusSnapshot;

/// One corpus file handed to a rebuild.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    /// Stable identifier, usually the filename.
    pub source_id: String,
    pub path: PathBuf,
}

impl SourceDocument {
    pub fn new(source_id: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            path: path.into(),
        }
    }
}

/// Builds immutable corpus snapshots. Idempotent for identical inputs.
pub struct IndexBuilder<'a> {
    extractor: &'a dyn IPageExtractor,
    embedder: &'a dyn IEmbeddingProvider,
    config: IndexConfig,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(
        extractor: &'a dyn IPageExtractor,
        embedder: &'a dyn IEmbeddingProvider,
        config: IndexConfig,
    ) -> Self {
        Self {
            extractor,
            embedder,
            config,
        }
    }

    /// Build a fresh snapshot over the given documents.
    ///
    /// Embeddings are computed in a single batched call. The returned
    /// report lists every document as indexed or skipped.
    pub fn rebuild(
        &self,
        documents: &[SourceDocument],
    ) -> NormaResult<(CorpusSnapshot, RebuildReport)> {
        let started_at = Utc::now();
        let mut chunks = Vec::new();
        let mut indexed = Vec::new();
        let mut skipped = Vec::new();

        for doc in documents {
            let pages = match self.extractor.extract_pages(&doc.path) {
                Ok(pages) => pages,
                Err(e) => {
                    warn!(source = %doc.source_id, error = %e, "skipping unreadable document");
                    skipped.push(SkippedDocument {
                        source_id: doc.source_id.clone(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if pages.is_empty() {
                warn!(source = %doc.source_id, "skipping document with no extractable text");
                skipped.push(SkippedDocument {
                    source_id: doc.source_id.clone(),
                    reason: "no extractable text".to_string(),
                });
                continue;
            }

            let doc_chunks = segmenter::segment(&doc.source_id, &pages, &self.config);
            debug!(
                source = %doc.source_id,
                pages = pages.len(),
                chunks = doc_chunks.len(),
                "segmented document"
            );
            indexed.push(IndexedDocument {
                source_id: doc.source_id.clone(),
                pages: pages.len(),
                chunks: doc_chunks.len(),
            });
            chunks.extend(doc_chunks);
        }

        let normalized: Vec<String> = chunks.iter().map(|c| c.normalized_text.clone()).collect();

        let lexical = LexicalIndex::fit(&normalized, self.config.max_vocabulary);
        info!(
            chunks = chunks.len(),
            vocabulary = lexical.vocabulary_size(),
            "lexical index fitted"
        );

        // One batched embedding call per rebuild.
        let embeddings = self.embedder.embed_batch(&normalized)?;
        let dense = DenseIndex::new(embeddings)?;
        info!(
            provider = self.embedder.name(),
            width = dense.dimensions(),
            "dense matrix built"
        );

        let snapshot = CorpusSnapshot::new(chunks, lexical, dense)?;

        let report = RebuildReport {
            indexed,
            skipped,
            total_chunks: snapshot.len(),
            started_at,
            finished_at: Utc::now(),
        };
        info!(
            indexed = report.indexed.len(),
            skipped = report.skipped.len(),
            total_chunks = report.total_chunks,
            "rebuild complete"
        );

        Ok((snapshot, report))
    }
}
