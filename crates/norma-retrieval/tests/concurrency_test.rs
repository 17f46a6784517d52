//! Queries racing a rebuild must each observe one whole snapshot.

use std::sync::Arc;
use std::thread;

use norma_core::config::NormaConfig;
use norma_index::{HashingEmbedder, SourceDocument};
use norma_retrieval::RetrievalEngine;
use test_fixtures::{academico_pages, general_pages, pfg_pages, FixtureExtractor};

fn corpus_extractor() -> FixtureExtractor {
    let mut ex = FixtureExtractor::new();
    ex.insert("reglamento_pfg.pdf", pfg_pages());
    ex.insert("reglamento_academico.pdf", academico_pages());
    ex.insert("reglamento_general.pdf", general_pages());
    ex
}

fn docs(names: &[&str]) -> Vec<SourceDocument> {
    names.iter().map(|n| SourceDocument::new(*n, *n)).collect()
}

#[test]
fn queries_racing_rebuilds_always_see_one_snapshot() {
    let engine = Arc::new(RetrievalEngine::new(
        Arc::new(corpus_extractor()),
        Arc::new(HashingEmbedder::new(128)),
        NormaConfig::default(),
    ));
    engine
        .rebuild(&docs(&["reglamento_pfg.pdf", "reglamento_general.pdf"]))
        .unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                for _ in 0..50 {
                    let result = engine.query("sanciones por faltas graves del pfg", 3).unwrap();
                    // Whichever snapshot was active, metadata and
                    // fragment come from one chunk of it.
                    let from_known_corpus = [
                        "reglamento_pfg.pdf",
                        "reglamento_academico.pdf",
                        "reglamento_general.pdf",
                    ]
                    .contains(&result.source_id.as_str());
                    assert!(from_known_corpus, "unknown source {}", result.source_id);
                    assert!(result.score.is_finite());
                    assert!(!result.fragment.is_empty());
                }
            })
        })
        .collect();

    // Swap between the two corpora while readers run.
    for _ in 0..10 {
        engine
            .rebuild(&docs(&["reglamento_pfg.pdf", "reglamento_general.pdf"]))
            .unwrap();
        engine
            .rebuild(&docs(&[
                "reglamento_pfg.pdf",
                "reglamento_academico.pdf",
                "reglamento_general.pdf",
            ]))
            .unwrap();
    }

    for r in readers {
        r.join().unwrap();
    }
}

#[test]
fn reader_holding_old_snapshot_finishes_after_swap() {
    let engine = RetrievalEngine::new(
        Arc::new(corpus_extractor()),
        Arc::new(HashingEmbedder::new(128)),
        NormaConfig::default(),
    );
    engine
        .rebuild(&docs(&["reglamento_general.pdf"]))
        .unwrap();

    // Hold a reference to the outgoing snapshot across the swap.
    let old = engine.snapshot();
    engine.rebuild(&docs(&["reglamento_pfg.pdf"])).unwrap();

    assert!(old.chunks.iter().all(|c| c.source_id == "reglamento_general.pdf"));
    let new = engine.snapshot();
    assert!(new.chunks.iter().all(|c| c.source_id == "reglamento_pfg.pdf"));
}
