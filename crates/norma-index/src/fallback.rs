//! Deterministic hashing embedding provider.
//!
//! Buckets normalized unigrams and bigrams into a fixed-width vector via
//! FNV-1a and weights by in-document frequency. Not as semantically rich
//! as a neural model, but runs with no external dependencies, which makes
//! it the offline and test provider. Tokenization goes through the same
//! normalizer as the index, so provider and index agree on token
//! boundaries.

use norma_core::errors::NormaResult;
use norma_core::traits::IEmbeddingProvider;

use crate::normalizer::normalize;

const BIGRAM_WEIGHT: f32 = 0.5;

pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a bucket for a term.
    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        (h as usize) % dims
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let normalized = normalize(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let mut v = vec![0.0f32; self.dimensions];
        if tokens.is_empty() || self.dimensions == 0 {
            return v;
        }

        let total = tokens.len() as f32;
        for tok in &tokens {
            v[Self::bucket(tok, self.dimensions)] += 1.0 / total;
        }
        // Bigram buckets keep phrases like "articulo 12" distinguishable
        // from their constituent words.
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            v[Self::bucket(&bigram, self.dimensions)] += BIGRAM_WEIGHT / total;
        }

        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for x in &mut v {
                *x /= norm;
            }
        }
        v
    }
}

impl IEmbeddingProvider for HashingEmbedder {
    fn embed(&self, text: &str) -> NormaResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn embed_batch(&self, texts: &[String]) -> NormaResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashing-fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_embeds_to_zero_vector() {
        let p = HashingEmbedder::new(128);
        let v = p.embed("").unwrap();
        assert_eq!(v.len(), 128);
        assert!(v.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn output_is_unit_norm() {
        let p = HashingEmbedder::new(256);
        let v = p.embed("el tutor del pfg sera designado").unwrap();
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "expected unit norm, got {norm}");
    }

    #[test]
    fn deterministic() {
        let p = HashingEmbedder::new(256);
        assert_eq!(
            p.embed("¿Qué dice el Artículo 12?").unwrap(),
            p.embed("¿Qué dice el Artículo 12?").unwrap()
        );
    }

    #[test]
    fn accent_variants_embed_identically() {
        let p = HashingEmbedder::new(256);
        assert_eq!(
            p.embed("Artículo 12").unwrap(),
            p.embed("articulo 12").unwrap()
        );
    }

    #[test]
    fn batch_matches_individual() {
        let p = HashingEmbedder::new(128);
        let texts = vec!["capitulo tercero".to_string(), "seccion segunda".to_string()];
        let batch = p.embed_batch(&texts).unwrap();
        for (i, text) in texts.iter().enumerate() {
            assert_eq!(batch[i], p.embed(text).unwrap());
        }
    }

    #[test]
    fn related_texts_score_higher_than_unrelated() {
        let p = HashingEmbedder::new(512);
        let a = p.embed("el tutor del proyecto final de graduacion").unwrap();
        let b = p.embed("quien puede ser tutor del proyecto").unwrap();
        let c = p.embed("regimen de faltas y sanciones disciplinarias").unwrap();

        let ab: f32 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
        let ac: f32 = a.iter().zip(&c).map(|(x, y)| x * y).sum();
        assert!(ab > ac);
    }
}
