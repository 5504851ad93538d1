// Logistic regression loaded from a JSON export of a fitted linear model.
//
// The artifact mirrors the fitted attributes of a scikit-learn
// LogisticRegression:
//
//   { "classes": [0, 1], "coef": [[w0, w1, ...]], "intercept": [b] }
//
// Binary models carry a single coefficient row whose positive side is
// classes[1]. Multi-class models carry one row per class and predict the
// argmax.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use super::traits::{Classifier, Prediction};

#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    classes: Vec<i64>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LogisticRegression {
    /// Load and validate a classifier from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read classifier from {}", path.display()))?;
        let model = Self::from_json(&contents)
            .with_context(|| format!("Invalid classifier file {}", path.display()))?;

        debug!(
            classes = ?model.classes,
            n_features = model.n_features(),
            "Loaded logistic regression from {}",
            path.display()
        );
        Ok(model)
    }

    /// Parse and validate a classifier from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: LogisticRegression =
            serde_json::from_str(json).context("Classifier JSON does not match the expected shape")?;
        model.validate()?;
        Ok(model)
    }

    /// Build a classifier from its parts, validating the shapes.
    pub fn new(classes: Vec<i64>, coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Result<Self> {
        let model = Self {
            classes,
            coef,
            intercept,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        if self.classes.len() < 2 {
            anyhow::bail!("classifier needs at least 2 classes, found {}", self.classes.len());
        }
        let expected_rows = if self.classes.len() == 2 { 1 } else { self.classes.len() };
        if self.coef.len() != expected_rows {
            anyhow::bail!(
                "{} classes need {} coefficient row(s), found {}",
                self.classes.len(),
                expected_rows,
                self.coef.len()
            );
        }
        if self.intercept.len() != self.coef.len() {
            anyhow::bail!(
                "intercept has {} entries but coef has {} rows",
                self.intercept.len(),
                self.coef.len()
            );
        }
        let width = self.coef[0].len();
        if width == 0 {
            anyhow::bail!("coefficient rows are empty");
        }
        if let Some(row) = self.coef.iter().position(|r| r.len() != width) {
            anyhow::bail!(
                "coefficient row {} has {} features, expected {}",
                row,
                self.coef[row].len(),
                width
            );
        }
        Ok(())
    }

    /// Raw decision values (w·x + b), one per coefficient row.
    pub fn decision_function(&self, row: &[f32]) -> Result<Vec<f64>> {
        if row.len() != self.n_features() {
            anyhow::bail!(
                "feature vector has {} entries, classifier expects {}",
                row.len(),
                self.n_features()
            );
        }
        Ok(self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(weights, b)| {
                weights
                    .iter()
                    .zip(row)
                    .map(|(w, &x)| w * x as f64)
                    .sum::<f64>()
                    + b
            })
            .collect())
    }

    fn predict_row(&self, row: &[f32]) -> Result<Prediction> {
        let decision = self.decision_function(row)?;

        if let [d] = decision.as_slice() {
            let p_positive = sigmoid(*d);
            return Ok(if *d > 0.0 {
                Prediction {
                    class: self.classes[1],
                    score: p_positive,
                }
            } else {
                Prediction {
                    class: self.classes[0],
                    score: 1.0 - p_positive,
                }
            });
        }

        let probs = softmax(&decision);
        // First maximum wins on ties, matching argmax.
        let mut best = 0;
        for (i, p) in probs.iter().enumerate() {
            if *p > probs[best] {
                best = i;
            }
        }
        Ok(Prediction {
            class: self.classes[best],
            score: probs[best],
        })
    }
}

impl Classifier for LogisticRegression {
    fn n_features(&self) -> usize {
        self.coef[0].len()
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<Prediction>> {
        rows.iter().map(|row| self.predict_row(row)).collect()
    }
}

/// Sigmoid activation: maps any real number to (0, 1).
fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

fn softmax(values: &[f64]) -> Vec<f64> {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = values.iter().map(|v| (v - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
