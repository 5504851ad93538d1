use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default location of the exported classifier, relative to the working directory.
pub const DEFAULT_CLASSIFIER_PATH: &str = "./logistic_regression_model.json";

/// Which text embedding backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum EmbedderBackend {
    /// Local ONNX sentence transformer (default)
    Onnx,
    /// Static word vectors averaged per document
    WordVectors,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which embedder to use (default: Onnx)
    pub embedder_backend: EmbedderBackend,
    /// Directory containing the ONNX embedding model files
    pub model_dir: PathBuf,
    /// Word vector file, only read when embedder_backend is WordVectors
    pub word_vectors_path: Option<PathBuf>,
    /// JSON export of the trained logistic regression
    pub classifier_path: PathBuf,
    pub bind: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every field has a default, so this only fails on a malformed port.
    pub fn load() -> Result<Self> {
        let embedder_backend = match env::var("NEWSPROBE_EMBEDDER").as_deref() {
            Ok("word-vectors") | Ok("word_vectors") => EmbedderBackend::WordVectors,
            // "onnx" or unset both default to ONNX
            _ => EmbedderBackend::Onnx,
        };

        let model_dir = env::var("NEWSPROBE_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| crate::embedding::download::default_model_dir());

        let port = match env::var("NEWSPROBE_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("NEWSPROBE_PORT must be a port number ({raw}): {e}"))?,
            Err(_) => 8501,
        };

        Ok(Self {
            embedder_backend,
            model_dir,
            word_vectors_path: env::var("NEWSPROBE_WORD_VECTORS").ok().map(PathBuf::from),
            classifier_path: env::var("NEWSPROBE_CLASSIFIER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CLASSIFIER_PATH)),
            bind: env::var("NEWSPROBE_BIND").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port,
        })
    }

    /// Check that the classifier artifact exists.
    pub fn require_classifier(&self) -> Result<()> {
        if !self.classifier_path.exists() {
            anyhow::bail!(
                "Classifier not found: {}\n\
                 Set NEWSPROBE_CLASSIFIER_PATH to the exported logistic regression JSON.",
                self.classifier_path.display()
            );
        }
        Ok(())
    }

    /// Validate that the chosen embedder backend has what it needs.
    /// For ONNX: model files must exist (or user should run download-model).
    /// For word vectors: NEWSPROBE_WORD_VECTORS must point at an existing file.
    pub fn require_embedder(&self) -> Result<()> {
        match self.embedder_backend {
            EmbedderBackend::Onnx => {
                if !crate::embedding::download::model_files_present(&self.model_dir) {
                    anyhow::bail!(
                        "ONNX embedding model not found in {}\n\
                         Run `newsprobe download-model` to download it.\n\
                         Or set NEWSPROBE_EMBEDDER=word-vectors to use a word vector file instead.",
                        self.model_dir.display()
                    );
                }
                Ok(())
            }
            EmbedderBackend::WordVectors => match &self.word_vectors_path {
                Some(path) if path.exists() => Ok(()),
                Some(path) => anyhow::bail!("Word vector file not found: {}", path.display()),
                None => anyhow::bail!(
                    "NEWSPROBE_WORD_VECTORS not set. Point it at a word vector text file."
                ),
            },
        }
    }

    /// Run every artifact check needed before building a Predictor.
    pub fn require_models(&self) -> Result<()> {
        self.require_embedder()?;
        self.require_classifier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            embedder_backend: EmbedderBackend::WordVectors,
            model_dir: std::env::temp_dir().join("newsprobe-test-nonexistent"),
            word_vectors_path: None,
            classifier_path: std::env::temp_dir().join("newsprobe-test-nonexistent.json"),
            bind: "127.0.0.1".to_string(),
            port: 8501,
        }
    }

    #[test]
    fn test_missing_classifier_is_an_error() {
        let err = base_config().require_classifier().unwrap_err();
        assert!(err.to_string().contains("Classifier not found"));
    }

    #[test]
    fn test_word_vectors_require_path() {
        let err = base_config().require_embedder().unwrap_err();
        assert!(err.to_string().contains("NEWSPROBE_WORD_VECTORS"));
    }

    #[test]
    fn test_onnx_requires_model_files() {
        let mut config = base_config();
        config.embedder_backend = EmbedderBackend::Onnx;
        let err = config.require_embedder().unwrap_err();
        assert!(err.to_string().contains("download-model"));
    }
}
