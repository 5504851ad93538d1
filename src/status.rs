// System status display: configured artifacts, their presence, and the
// classifier's shape.

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::classifier::logistic::LogisticRegression;
use crate::classifier::traits::Classifier;
use crate::config::{Config, EmbedderBackend};
use crate::embedding::download::model_files_present;

/// Display model status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    for line in report(config) {
        println!("{line}");
    }
    Ok(())
}

/// Status lines for the configured embedder, classifier, and page address.
///
/// The embedder is only checked for presence. The classifier is small enough
/// to parse, so its width and classes are reported too.
pub fn report(config: &Config) -> Vec<String> {
    let mut lines = vec![format!("Embedder backend: {:?}", config.embedder_backend)];

    match config.embedder_backend {
        EmbedderBackend::Onnx => {
            let present = model_files_present(&config.model_dir);
            lines.push(format!(
                "Embedding model: {} ({})",
                config.model_dir.display(),
                presence(present)
            ));
            if !present {
                lines.push("  Run `newsprobe download-model` to fetch it".to_string());
            }
        }
        EmbedderBackend::WordVectors => lines.push(match &config.word_vectors_path {
            Some(path) => format!(
                "Word vectors: {} ({}, {})",
                path.display(),
                presence(path.exists()),
                file_size(path)
            ),
            None => format!("Word vectors: {}", "NEWSPROBE_WORD_VECTORS not set".yellow()),
        }),
    }

    lines.push(classifier_line(&config.classifier_path));
    lines.push(format!("Page: http://{}:{}", config.bind, config.port));
    lines
}

fn classifier_line(path: &Path) -> String {
    if !path.exists() {
        return format!("Classifier: {} ({})", path.display(), presence(false));
    }
    match LogisticRegression::load(path) {
        Ok(model) => format!(
            "Classifier: {} ({}, {} features, classes {:?})",
            path.display(),
            file_size(path),
            model.n_features(),
            model.classes()
        ),
        Err(e) => format!("Classifier: {} ({} {e:#})", path.display(), "invalid:".red()),
    }
}

fn presence(present: bool) -> colored::ColoredString {
    if present {
        "present".green()
    } else {
        "missing".red()
    }
}

fn file_size(path: &Path) -> String {
    std::fs::metadata(path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }

    fn config(classifier_path: std::path::PathBuf) -> Config {
        Config {
            embedder_backend: EmbedderBackend::WordVectors,
            model_dir: std::env::temp_dir(),
            word_vectors_path: None,
            classifier_path,
            bind: "0.0.0.0".to_string(),
            port: 9000,
        }
    }

    #[test]
    fn test_report_lists_page_when_classifier_missing() {
        let lines = report(&config(
            std::env::temp_dir().join("newsprobe-status-missing.json"),
        ));
        assert!(lines.iter().any(|l| l.starts_with("Classifier:") && l.contains("missing")));
        assert_eq!(lines.last().unwrap(), "Page: http://0.0.0.0:9000");
    }

    #[test]
    fn test_report_shows_classifier_shape() {
        let path = std::env::temp_dir().join("newsprobe-status-classifier.json");
        std::fs::write(&path, r#"{"classes":[0,1],"coef":[[1.0,2.0,3.0]],"intercept":[0.0]}"#)
            .unwrap();

        let lines = report(&config(path.clone()));
        let classifier = lines.iter().find(|l| l.starts_with("Classifier:")).unwrap();
        assert!(classifier.contains("3 features"));
        assert!(classifier.contains("[0, 1]"));
        assert_eq!(lines.last().unwrap(), "Page: http://0.0.0.0:9000");

        std::fs::remove_file(&path).unwrap();
    }
}
