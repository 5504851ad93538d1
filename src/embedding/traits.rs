// Text embedder trait: the swap-ready abstraction.
//
// The default implementation uses a local ONNX sentence transformer.
// A static word-vector table is available for lightweight setups.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for mapping text to a fixed-length vector. Implementations must be
/// async because model inference is offloaded to blocking threads.
#[async_trait]
pub trait TextEmbedder: Send + Sync {
    /// Length of every vector this embedder produces.
    fn dimension(&self) -> usize;

    /// Embed multiple texts, returning vectors in the same order.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single document.
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.embed_batch(&[text.to_string()]).await?;
        if vectors.len() != 1 {
            anyhow::bail!("Embedder returned {} vectors for one text", vectors.len());
        }
        Ok(vectors.remove(0))
    }
}
