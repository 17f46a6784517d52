//! Candidate fusion: the union of the lexical and dense top-k lists.
//!
//! The lexical list contributes membership only; every fused candidate
//! is scored on the dense scale so the re-ranker works over one
//! comparable base. Lexical matching recalls candidates dense embeddings
//! under-rank (rare domain terms, article numbers).

use std::collections::BTreeSet;

/// A fused candidate: corpus index plus its dense base score.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub index: usize,
    pub base_score: f32,
}

/// Indices of the `k` highest scores, descending; ties go to the lower
/// index for determinism.
pub fn top_k(scores: &[f32], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        scores[b]
            .partial_cmp(&scores[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.cmp(&b))
    });
    order.truncate(k);
    order
}

/// Deduplicated union of the two top-k lists, in corpus order, with the
/// dense similarity attached as each candidate's base score.
pub fn fuse(lexical_top: &[usize], dense_top: &[usize], dense_scores: &[f32]) -> Vec<Candidate> {
    let union: BTreeSet<usize> = lexical_top.iter().chain(dense_top).copied().collect();
    union
        .into_iter()
        .map(|index| Candidate {
            index,
            base_score: dense_scores[index],
        })
        .collect()
}
