// Inference: text in, verdict out.
//
// A Predictor is built once at process start from an embedder and a
// classifier, then shared (behind Arc) by every request. Empty input
// short-circuits before either model is touched.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::classifier::label::Label;
use crate::classifier::logistic::LogisticRegression;
use crate::classifier::traits::Classifier;
use crate::config::{Config, EmbedderBackend};
use crate::embedding::onnx::OnnxEmbedder;
use crate::embedding::traits::TextEmbedder;
use crate::embedding::word_vectors::WordVectorEmbedder;
use crate::output::truncate_chars;

/// Warning shown when no text was submitted.
pub const EMPTY_INPUT_WARNING: &str = "Masukkan teks berita terlebih dahulu.";

/// Outcome of one prediction request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    /// No text (or only whitespace): nothing was computed.
    Empty,
    /// The classifier emitted a known label.
    Classified { label: Label, score: f64 },
    /// The classifier emitted a class id outside {0, 1}.
    Unrecognized { class: i64 },
}

impl Verdict {
    /// The sentence shown to the user for this verdict.
    pub fn message(&self) -> String {
        match self {
            Verdict::Empty => EMPTY_INPUT_WARNING.to_string(),
            Verdict::Classified { label, .. } => label.message(),
            Verdict::Unrecognized { class } => {
                format!("The classifier returned an unrecognized label ({class}).")
            }
        }
    }

    pub fn label(&self) -> Option<Label> {
        match self {
            Verdict::Classified { label, .. } => Some(*label),
            _ => None,
        }
    }
}

/// Process-wide embedder + classifier pair.
pub struct Predictor {
    embedder: Arc<dyn TextEmbedder>,
    classifier: Arc<dyn Classifier>,
}

impl Predictor {
    /// Pair an embedder with a classifier. Fails if the embedder's vectors
    /// don't have the width the classifier was trained on.
    pub fn new(embedder: Arc<dyn TextEmbedder>, classifier: Arc<dyn Classifier>) -> Result<Self> {
        if embedder.dimension() != classifier.n_features() {
            anyhow::bail!(
                "Embedder produces {}-dim vectors but the classifier expects {} features.\n\
                 The classifier must be trained on the same embedding model.",
                embedder.dimension(),
                classifier.n_features()
            );
        }
        Ok(Self {
            embedder,
            classifier,
        })
    }

    /// Load both models as configured. Any failure here is fatal to startup.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.require_models()?;

        let embedder: Arc<dyn TextEmbedder> = match config.embedder_backend {
            EmbedderBackend::Onnx => Arc::new(OnnxEmbedder::load(&config.model_dir)?),
            EmbedderBackend::WordVectors => {
                let path = config
                    .word_vectors_path
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("NEWSPROBE_WORD_VECTORS not set"))?;
                Arc::new(WordVectorEmbedder::load(path)?)
            }
        };
        let classifier: Arc<dyn Classifier> =
            Arc::new(LogisticRegression::load(&config.classifier_path)?);

        let predictor = Self::new(embedder, classifier)?;
        info!(
            backend = ?config.embedder_backend,
            dim = predictor.dimension(),
            classifier = %config.classifier_path.display(),
            "Models loaded"
        );
        Ok(predictor)
    }

    pub fn dimension(&self) -> usize {
        self.embedder.dimension()
    }

    pub fn classes(&self) -> &[i64] {
        self.classifier.classes()
    }

    /// Classify one piece of news text.
    ///
    /// Whitespace-only input returns `Verdict::Empty` without calling either
    /// model. Otherwise the text is embedded and classified as a one-row batch.
    pub async fn predict(&self, text: &str) -> Result<Verdict> {
        if text.trim().is_empty() {
            debug!("Empty input, skipping prediction");
            return Ok(Verdict::Empty);
        }

        let vector = self.embedder.embed(text).await?;
        let predictions = self.classifier.predict(&[vector])?;
        let Some(prediction) = predictions.first() else {
            anyhow::bail!("Classifier returned no prediction");
        };

        let verdict = match Label::from_class(prediction.class) {
            Some(label) => Verdict::Classified {
                label,
                score: prediction.score,
            },
            None => {
                warn!(class = prediction.class, "Classifier returned an unrecognized label");
                Verdict::Unrecognized {
                    class: prediction.class,
                }
            }
        };

        debug!(
            verdict = ?verdict,
            text_preview = %truncate_chars(text, 50),
            "Classified text"
        );
        Ok(verdict)
    }
}
