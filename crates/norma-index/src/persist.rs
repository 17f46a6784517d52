//! Snapshot persistence: three JSON artifacts regenerated together.
//!
//! `lexical.json` carries the chunks together with the frozen vectorizer
//! state and sparse rows; `dense.json` carries the embedding matrix;
//! `metadata.json` repeats the chunk list on its own for inspection and
//! debugging. The artifacts are only meaningful as a set; loading
//! cross-validates row alignment before a snapshot is produced.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use norma_core::errors::{IndexError, NormaResult};
use norma_core::models::Chunk;

use crate::dense::DenseIndex;
use crate::lexical::LexicalIndex;
use crate::snapshot::CorpusSnapshot;

pub const LEXICAL_ARTIFACT: &str = "lexical.json";
pub const DENSE_ARTIFACT: &str = "dense.json";
pub const METADATA_ARTIFACT: &str = "metadata.json";

#[derive(Serialize, Deserialize)]
struct LexicalArtifact {
    chunks: Vec<Chunk>,
    lexical: LexicalIndex,
}

/// Write all three artifacts for a snapshot into `dir`.
pub fn save(snapshot: &CorpusSnapshot, dir: &Path) -> NormaResult<()> {
    let lexical = LexicalArtifact {
        chunks: snapshot.chunks.clone(),
        lexical: snapshot.lexical.clone(),
    };
    write_artifact(dir, LEXICAL_ARTIFACT, &lexical)?;
    write_artifact(dir, DENSE_ARTIFACT, &snapshot.dense)?;
    write_artifact(dir, METADATA_ARTIFACT, &snapshot.chunks)?;
    info!(dir = %dir.display(), chunks = snapshot.len(), "snapshot persisted");
    Ok(())
}

/// Load a snapshot back from `dir`, validating that the artifacts still
/// belong together.
pub fn load(dir: &Path) -> NormaResult<CorpusSnapshot> {
    let artifact: LexicalArtifact = read_artifact(dir, LEXICAL_ARTIFACT)?;
    let dense: DenseIndex = read_artifact(dir, DENSE_ARTIFACT)?;
    let metadata: Vec<Chunk> = read_artifact(dir, METADATA_ARTIFACT)?;

    if metadata.len() != artifact.chunks.len() {
        return Err(IndexError::Misaligned {
            chunks: metadata.len(),
            lexical: artifact.chunks.len(),
            dense: dense.len(),
        }
        .into());
    }

    let snapshot = CorpusSnapshot::new(artifact.chunks, artifact.lexical, dense)?;
    info!(dir = %dir.display(), chunks = snapshot.len(), "snapshot loaded");
    Ok(snapshot)
}

fn write_artifact<T: Serialize>(dir: &Path, name: &str, value: &T) -> Result<(), IndexError> {
    let bytes = serde_json::to_vec(value).map_err(|e| IndexError::ArtifactWriteFailed {
        artifact: name.to_string(),
        reason: e.to_string(),
    })?;
    fs::write(dir.join(name), bytes).map_err(|e| IndexError::ArtifactWriteFailed {
        artifact: name.to_string(),
        reason: e.to_string(),
    })
}

fn read_artifact<T: for<'de> Deserialize<'de>>(dir: &Path, name: &str) -> Result<T, IndexError> {
    let bytes = fs::read(dir.join(name)).map_err(|e| IndexError::ArtifactUnreadable {
        artifact: name.to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_slice(&bytes).map_err(|e| IndexError::ArtifactUnreadable {
        artifact: name.to_string(),
        reason: e.to_string(),
    })
}
