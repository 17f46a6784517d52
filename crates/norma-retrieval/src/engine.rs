//! The process-wide retrieval engine: explicit ownership of the corpus
//! snapshot, one read entry point (`query`) and one write entry point
//! (`rebuild`).
//!
//! The snapshot sits behind `RwLock<Arc<CorpusSnapshot>>`. Readers clone
//! the `Arc` out and score against it without holding the lock, so a
//! rebuild never blocks in-flight queries and a swap is a plain pointer
//! exchange: queries see either the old snapshot or the new one, never a
//! mix.

use std::sync::Arc;
use std::sync::LazyLock;

use parking_lot::RwLock;
use regex::Regex;
use tracing::{debug, info};

use norma_core::config::NormaConfig;
use norma_core::errors::{NormaResult, RetrievalError};
use norma_core::models::{QueryResult, RebuildReport};
use norma_core::traits::{IEmbeddingProvider, IPageExtractor};
use norma_index::builder::{IndexBuilder, SourceDocument};
use norma_index::normalizer::normalize;
use norma_index::snapshot::CorpusSnapshot;

use crate::ranking::{QueryContext, RankingPipeline};
use crate::search::{fuse, top_k};

/// "Artículo N" reference inside a fragment.
static ARTICLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)art[íi]culo\s*\d+º?").expect("article pattern is valid")
});

/// Runs of blank lines, collapsed before a fragment is returned.
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{2,}").expect("blank-run pattern is valid"));

pub struct RetrievalEngine {
    extractor: Arc<dyn IPageExtractor>,
    embedder: Arc<dyn IEmbeddingProvider>,
    config: NormaConfig,
    ranking: RankingPipeline,
    snapshot: RwLock<Arc<CorpusSnapshot>>,
}

impl RetrievalEngine {
    /// Engine with an empty snapshot; call [`rebuild`] before querying.
    ///
    /// [`rebuild`]: RetrievalEngine::rebuild
    pub fn new(
        extractor: Arc<dyn IPageExtractor>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: NormaConfig,
    ) -> Self {
        Self::with_snapshot(extractor, embedder, config, CorpusSnapshot::empty())
    }

    /// Engine over a pre-built snapshot (e.g. loaded from persisted
    /// artifacts).
    pub fn with_snapshot(
        extractor: Arc<dyn IPageExtractor>,
        embedder: Arc<dyn IEmbeddingProvider>,
        config: NormaConfig,
        snapshot: CorpusSnapshot,
    ) -> Self {
        let ranking = RankingPipeline::from_config(&config.retrieval);
        Self {
            extractor,
            embedder,
            config,
            ranking,
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// The currently active snapshot.
    pub fn snapshot(&self) -> Arc<CorpusSnapshot> {
        self.snapshot.read().clone()
    }

    /// Rebuild the index over `documents` and swap it in atomically.
    ///
    /// The new snapshot is fully constructed before the swap; on any
    /// build error the old snapshot stays active.
    pub fn rebuild(&self, documents: &[SourceDocument]) -> NormaResult<RebuildReport> {
        let builder = IndexBuilder::new(
            self.extractor.as_ref(),
            self.embedder.as_ref(),
            self.config.index.clone(),
        );
        let (snapshot, report) = builder.rebuild(documents)?;
        *self.snapshot.write() = Arc::new(snapshot);
        info!(
            indexed = report.indexed.len(),
            skipped = report.skipped.len(),
            chunks = report.total_chunks,
            "snapshot swapped"
        );
        Ok(report)
    }

    /// Answer `question` with the best-matching fragment, drawing `k`
    /// candidates from each index before fusion.
    pub fn query(&self, question: &str, k: usize) -> NormaResult<QueryResult> {
        if k == 0 {
            return Err(RetrievalError::InvalidK { k }.into());
        }

        let snapshot = self.snapshot();
        if snapshot.is_empty() {
            return Err(RetrievalError::EmptyCorpus.into());
        }
        let k = k.min(snapshot.len());

        let normalized = normalize(question);

        let lexical_scores = snapshot.lexical.score(&normalized);
        let lexical_top = top_k(&lexical_scores, k);

        // One embedding call per query.
        let query_embedding = self.embedder.embed(&normalized)?;
        let dense_scores = snapshot.dense.score(&query_embedding);
        let dense_top = top_k(&dense_scores, k);

        let candidates = fuse(&lexical_top, &dense_top, &dense_scores);
        debug!(
            lexical = lexical_top.len(),
            dense = dense_top.len(),
            fused = candidates.len(),
            "candidate sets fused"
        );

        let context = QueryContext::new(&normalized);
        let adjusted = self.ranking.rerank(&context, &snapshot.chunks, &candidates);

        // Arg-max with first-seen (lowest corpus index) winning ties:
        // candidates ascend by index and the comparison is strict.
        let mut best = 0usize;
        for i in 1..adjusted.len() {
            if adjusted[i] > adjusted[best] {
                best = i;
            }
        }
        let chunk = &snapshot.chunks[candidates[best].index];
        let fragment = BLANK_RUNS.replace_all(&chunk.raw_text, "\n").trim().to_string();
        let article_label = ARTICLE_REF
            .find(&fragment)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| chunk.label.clone());

        debug!(
            source = %chunk.source_id,
            label = %article_label,
            score = adjusted[best],
            "query answered"
        );

        Ok(QueryResult {
            fragment,
            article_label,
            source_id: chunk.source_id.clone(),
            page: chunk.page,
            score: adjusted[best],
        })
    }

    /// [`query`] with the configured default `k`.
    ///
    /// [`query`]: RetrievalEngine::query
    pub fn query_default(&self, question: &str) -> NormaResult<QueryResult> {
        self.query(question, self.config.retrieval.top_k)
    }
}
