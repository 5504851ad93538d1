// Sentence embedding using all-MiniLM-L6-v2 via ONNX Runtime.
//
// Each document is tokenized, run through the BERT encoder, and mean-pooled
// over its tokens (weighted by the attention mask) into one 384-dimensional
// vector. The model runs locally with no API calls.

use std::path::Path;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use async_trait::async_trait;
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::debug;

use super::download::{MODEL_FILE, TOKENIZER_FILE};
use super::traits::TextEmbedder;

/// Embedding dimension for all-MiniLM-L6-v2.
pub const EMBEDDING_DIM: usize = 384;

/// Local ONNX sentence embedder.
///
/// ort::Session::run takes &mut self and spawn_blocking needs 'static, so the
/// session lives behind Arc<Mutex>. The tokenizer is read-only and only
/// needs the Arc.
pub struct OnnxEmbedder {
    session: Arc<Mutex<Session>>,
    tokenizer: Arc<Tokenizer>,
}

impl OnnxEmbedder {
    /// Load the sentence embedding model and tokenizer from the given directory.
    ///
    /// Expects `model.onnx` and `tokenizer.json` in the directory.
    /// Call `download::download_model()` first if they don't exist.
    pub fn load(model_dir: &Path) -> Result<Self> {
        let model_path = model_dir.join(MODEL_FILE);
        let tokenizer_path = model_dir.join(TOKENIZER_FILE);

        if !model_path.exists() {
            anyhow::bail!(
                "Embedding model not found: {}\nRun `newsprobe download-model` to download it.",
                model_path.display()
            );
        }
        if !tokenizer_path.exists() {
            anyhow::bail!(
                "Embedding tokenizer not found: {}\nRun `newsprobe download-model` to download it.",
                tokenizer_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(&model_path)
            .with_context(|| {
                format!(
                    "Failed to load embedding model from {}",
                    model_path.display()
                )
            })?;

        let tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("Failed to load embedding tokenizer: {}", e))?;

        debug!(
            "Loaded sentence embedding model from {}",
            model_dir.display()
        );

        Ok(Self {
            session: Arc::new(Mutex::new(session)),
            tokenizer: Arc::new(tokenizer),
        })
    }
}

#[async_trait]
impl TextEmbedder for OnnxEmbedder {
    fn dimension(&self) -> usize {
        EMBEDDING_DIM
    }

    /// CPU-bound work is offloaded to spawn_blocking to keep the async
    /// runtime responsive.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let session = Arc::clone(&self.session);
        let tokenizer = Arc::clone(&self.tokenizer);
        let texts = texts.to_vec();

        tokio::task::spawn_blocking(move || embed_sync(&session, &tokenizer, &texts))
            .await
            .context("spawn_blocking panicked")?
    }
}

/// Synchronous embedding: tokenization, inference, and mean pooling.
fn embed_sync(
    session: &Mutex<Session>,
    tokenizer: &Tokenizer,
    texts: &[String],
) -> Result<Vec<Vec<f32>>> {
    let encodings: Vec<_> = texts
        .iter()
        .map(|t| {
            tokenizer
                .encode(t.as_str(), true)
                .map_err(|e| anyhow::anyhow!("Tokenization failed: {}", e))
        })
        .collect::<Result<Vec<_>>>()?;

    let batch_size = encodings.len();
    let max_len = encodings
        .iter()
        .map(|e| e.get_ids().len())
        .max()
        .unwrap_or(0);

    if max_len == 0 {
        return Ok(vec![vec![0.0; EMBEDDING_DIM]; batch_size]);
    }

    // BERT inputs, right-padded to max_len with pad id 0:
    //   input_ids, attention_mask (1 = real token), token_type_ids (all 0)
    let mut input_ids_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);
    let mut attention_mask_flat: Vec<i64> = Vec::with_capacity(batch_size * max_len);

    for enc in &encodings {
        let ids = enc.get_ids();
        let pad_len = max_len - ids.len();

        input_ids_flat.extend(ids.iter().map(|&id| id as i64));
        attention_mask_flat.extend(enc.get_attention_mask().iter().map(|&m| m as i64));

        input_ids_flat.extend(std::iter::repeat_n(0i64, pad_len));
        attention_mask_flat.extend(std::iter::repeat_n(0i64, pad_len));
    }
    let token_type_ids_flat = vec![0i64; batch_size * max_len];

    let shape = [batch_size as i64, max_len as i64];

    let input_ids_tensor =
        Tensor::from_array((shape, input_ids_flat)).context("Failed to create input_ids tensor")?;
    let attention_mask_tensor = Tensor::from_array((shape, attention_mask_flat.clone()))
        .context("Failed to create attention_mask tensor")?;
    let token_type_ids_tensor = Tensor::from_array((shape, token_type_ids_flat))
        .context("Failed to create token_type_ids tensor")?;

    // Output is last_hidden_state: [batch, seq_len, 384]
    let hidden_states = {
        let mut session = session
            .lock()
            .map_err(|e| anyhow::anyhow!("Session lock poisoned: {}", e))?;

        let outputs = session
            .run(ort::inputs! {
                "input_ids" => input_ids_tensor,
                "attention_mask" => attention_mask_tensor,
                "token_type_ids" => token_type_ids_tensor
            })
            .context("Embedding ONNX inference failed")?;

        let (_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .context("Failed to extract embedding output tensor")?;

        data.to_vec()
    };

    if hidden_states.len() != batch_size * max_len * EMBEDDING_DIM {
        anyhow::bail!(
            "Embedding model returned {} values, expected [{}, {}, {}]",
            hidden_states.len(),
            batch_size,
            max_len,
            EMBEDDING_DIM
        );
    }

    let embeddings = mean_pool(&hidden_states, &attention_mask_flat, batch_size, max_len);

    debug!(
        batch_size = batch_size,
        dim = EMBEDDING_DIM,
        "Computed sentence embeddings"
    );

    Ok(embeddings)
}

/// Average token embeddings per document, weighted by the attention mask,
/// then scale each average to unit length.
///
/// The published all-MiniLM-L6-v2 pipeline ends in a Normalize layer, so a
/// classifier fitted on its sentence embeddings expects unit vectors.
///
/// `hidden_states` is a flattened `[batch, seq_len, EMBEDDING_DIM]` tensor and
/// `mask` a flattened `[batch, seq_len]` mask. Documents with an all-zero
/// mask come back as zero vectors.
fn mean_pool(hidden_states: &[f32], mask: &[i64], batch_size: usize, seq_len: usize) -> Vec<Vec<f32>> {
    let mut embeddings = Vec::with_capacity(batch_size);

    for i in 0..batch_size {
        let mut sum = vec![0.0_f64; EMBEDDING_DIM];
        let mut mask_sum = 0.0_f64;

        for j in 0..seq_len {
            let mask_val = mask[i * seq_len + j] as f64;
            if mask_val > 0.0 {
                mask_sum += mask_val;
                let offset = (i * seq_len + j) * EMBEDDING_DIM;
                for (k, acc) in sum.iter_mut().enumerate() {
                    *acc += hidden_states[offset + k] as f64 * mask_val;
                }
            }
        }

        if mask_sum > 0.0 {
            for val in &mut sum {
                *val /= mask_sum;
            }
        }

        embeddings.push(l2_normalize(sum));
    }

    embeddings
}

/// Scale to unit L2 norm. Zero vectors stay zero.
fn l2_normalize(vector: Vec<f64>) -> Vec<f32> {
    let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm < f64::EPSILON {
        return vector.into_iter().map(|v| v as f32).collect();
    }
    vector.into_iter().map(|v| (v / norm) as f32).collect()
}
