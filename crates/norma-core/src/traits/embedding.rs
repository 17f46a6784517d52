use crate::errors::NormaResult;

/// Dense embedding provider, supplied by a collaborator.
///
/// Must be deterministic for a fixed model version. Batch at build time;
/// at query time issue exactly one call per query.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a fixed-width vector.
    fn embed(&self, text: &str) -> NormaResult<Vec<f32>>;

    /// Embed a batch of texts in one call.
    fn embed_batch(&self, texts: &[String]) -> NormaResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
