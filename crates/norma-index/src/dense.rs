//! Dense semantic index: one embedding row per chunk, L2-normalized at
//! build time so query scoring is a single dot product per row.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use norma_core::errors::IndexError;

/// Dense matrix of shape (chunk_count × embedding_width).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseIndex {
    rows: Vec<Vec<f32>>,
    dimensions: usize,
}

impl DenseIndex {
    /// Build from collaborator-computed embeddings. Every row must share
    /// one width; rows are normalized in place.
    pub fn new(mut embeddings: Vec<Vec<f32>>) -> Result<Self, IndexError> {
        let dimensions = embeddings.first().map_or(0, Vec::len);
        for (i, row) in embeddings.iter_mut().enumerate() {
            if row.len() != dimensions {
                return Err(IndexError::RaggedEmbedding {
                    row: i,
                    expected: dimensions,
                    actual: row.len(),
                });
            }
            l2_normalize(row);
        }
        Ok(Self {
            rows: embeddings,
            dimensions,
        })
    }

    /// Cosine similarity of the query embedding against every row.
    pub fn score(&self, query_embedding: &[f32]) -> Vec<f32> {
        let mut query = query_embedding.to_vec();
        l2_normalize(&mut query);
        self.rows.par_iter().map(|row| dot(row, &query)).collect()
    }

    /// Similarity of the query against a single row; used to score fused
    /// candidates without rescanning the matrix.
    pub fn score_one(&self, query_embedding: &[f32], row: usize) -> f32 {
        let mut query = query_embedding.to_vec();
        l2_normalize(&mut query);
        dot(&self.rows[row], &query)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }
}

fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in v {
            *x /= norm;
        }
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
