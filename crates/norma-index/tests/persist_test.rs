//! Artifact persistence: the three files are only valid as a set.

use norma_core::config::IndexConfig;
use norma_core::errors::{IndexError, NormaError};
use norma_index::{persist, HashingEmbedder, IndexBuilder, SourceDocument};
use test_fixtures::{general_pages, pfg_pages, FixtureExtractor};

fn build_snapshot() -> norma_index::CorpusSnapshot {
    let mut ex = FixtureExtractor::new();
    ex.insert("reglamento_pfg.pdf", pfg_pages());
    ex.insert("reglamento_general.pdf", general_pages());
    let embedder = HashingEmbedder::new(64);
    let builder = IndexBuilder::new(&ex, &embedder, IndexConfig::default());
    let (snapshot, _) = builder
        .rebuild(&[
            SourceDocument::new("reglamento_pfg.pdf", "reglamento_pfg.pdf"),
            SourceDocument::new("reglamento_general.pdf", "reglamento_general.pdf"),
        ])
        .unwrap();
    snapshot
}

#[test]
fn snapshot_survives_save_and_load() {
    let snapshot = build_snapshot();
    let dir = tempfile::tempdir().unwrap();

    persist::save(&snapshot, dir.path()).unwrap();
    let loaded = persist::load(dir.path()).unwrap();

    assert_eq!(loaded.len(), snapshot.len());
    loaded.validate().unwrap();
    let query = "faltas graves y sanciones";
    assert_eq!(loaded.lexical.score(query), snapshot.lexical.score(query));
    for (a, b) in loaded.chunks.iter().zip(&snapshot.chunks) {
        assert_eq!(a.source_id, b.source_id);
        assert_eq!(a.raw_text, b.raw_text);
    }
}

#[test]
fn all_three_artifacts_are_written() {
    let snapshot = build_snapshot();
    let dir = tempfile::tempdir().unwrap();
    persist::save(&snapshot, dir.path()).unwrap();

    for name in [
        persist::LEXICAL_ARTIFACT,
        persist::DENSE_ARTIFACT,
        persist::METADATA_ARTIFACT,
    ] {
        assert!(dir.path().join(name).exists(), "missing artifact {name}");
    }
}

#[test]
fn missing_artifact_is_reported() {
    let snapshot = build_snapshot();
    let dir = tempfile::tempdir().unwrap();
    persist::save(&snapshot, dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(persist::DENSE_ARTIFACT)).unwrap();

    let err = persist::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        NormaError::Index(IndexError::ArtifactUnreadable { .. })
    ));
}

#[test]
fn tampered_metadata_fails_alignment() {
    let snapshot = build_snapshot();
    let dir = tempfile::tempdir().unwrap();
    persist::save(&snapshot, dir.path()).unwrap();

    // Drop one chunk from the standalone metadata artifact.
    let meta_path = dir.path().join(persist::METADATA_ARTIFACT);
    let mut chunks: Vec<norma_core::models::Chunk> =
        serde_json::from_slice(&std::fs::read(&meta_path).unwrap()).unwrap();
    chunks.pop();
    std::fs::write(&meta_path, serde_json::to_vec(&chunks).unwrap()).unwrap();

    let err = persist::load(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        NormaError::Index(IndexError::Misaligned { .. })
    ));
}
