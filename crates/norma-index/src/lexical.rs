//! Sparse TF-IDF index over unigrams and bigrams.
//!
//! The vocabulary is fitted once over the full corpus and frozen; query
//! terms outside it contribute zero weight, which is expected and not an
//! error. Rows are L2-normalized so cosine similarity reduces to a
//! sparse dot product.

use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Frozen lexical index state: vocabulary, idf weights, and one sparse
/// unit-norm row per chunk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalIndex {
    vocabulary: HashMap<String, u32>,
    idf: Vec<f32>,
    /// Per-chunk sparse vectors, term ids ascending.
    rows: Vec<Vec<(u32, f32)>>,
}

/// Unigrams plus adjacent bigrams of a normalized text.
fn terms_of(text: &str) -> Vec<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut terms: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }
    terms
}

fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for term in terms_of(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

impl LexicalIndex {
    /// Fit the index over the normalized corpus texts.
    ///
    /// Vocabulary selection keeps the `max_vocabulary` most frequent terms
    /// (ties broken alphabetically) and is deterministic for a fixed
    /// corpus. Idf uses the smoothed form `ln((1+n)/(1+df)) + 1`.
    pub fn fit(texts: &[String], max_vocabulary: usize) -> Self {
        let per_doc: Vec<HashMap<String, u32>> = texts.iter().map(|t| term_counts(t)).collect();

        let mut totals: HashMap<&str, u64> = HashMap::new();
        let mut df: HashMap<&str, u32> = HashMap::new();
        for counts in &per_doc {
            for (term, count) in counts {
                *totals.entry(term).or_insert(0) += u64::from(*count);
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, u64)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_vocabulary);

        let mut selected: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
        selected.sort_unstable();

        let vocabulary: HashMap<String, u32> = selected
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i as u32))
            .collect();

        let n = texts.len() as f32;
        let mut idf = vec![0.0f32; vocabulary.len()];
        for (term, &id) in &vocabulary {
            let d = df.get(term.as_str()).copied().unwrap_or(0) as f32;
            idf[id as usize] = ((1.0 + n) / (1.0 + d)).ln() + 1.0;
        }

        let rows = per_doc
            .iter()
            .map(|counts| Self::weigh(counts, &vocabulary, &idf))
            .collect();

        Self {
            vocabulary,
            idf,
            rows,
        }
    }

    /// Sparse unit-norm tf-idf vector for one document's term counts.
    fn weigh(
        counts: &HashMap<String, u32>,
        vocabulary: &HashMap<String, u32>,
        idf: &[f32],
    ) -> Vec<(u32, f32)> {
        let mut entries: Vec<(u32, f32)> = counts
            .iter()
            .filter_map(|(term, &count)| {
                vocabulary
                    .get(term)
                    .map(|&id| (id, count as f32 * idf[id as usize]))
            })
            .collect();
        entries.sort_unstable_by_key(|&(id, _)| id);

        let norm: f32 = entries.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }
        entries
    }

    /// Project a normalized query through the frozen vocabulary.
    /// Out-of-vocabulary terms simply drop out.
    fn vectorize(&self, normalized_query: &str) -> Vec<(u32, f32)> {
        Self::weigh(&term_counts(normalized_query), &self.vocabulary, &self.idf)
    }

    /// Cosine similarity of the query against every chunk row.
    pub fn score(&self, normalized_query: &str) -> Vec<f32> {
        let query = self.vectorize(normalized_query);
        self.rows
            .par_iter()
            .map(|row| sparse_dot(&query, row))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    #[cfg(test)]
    fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

/// Dot product of two sparse vectors with ascending term ids.
fn sparse_dot(a: &[(u32, f32)], b: &[(u32, f32)]) -> f32 {
    let (mut i, mut j) = (0usize, 0usize);
    let mut acc = 0.0f32;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                acc += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    acc
}
