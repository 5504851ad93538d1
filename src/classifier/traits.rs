// Classifier trait: the swap-ready abstraction.

use anyhow::Result;

/// One classifier output: the predicted class id and the model's score
/// for it (0.0 to 1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class: i64,
    pub score: f64,
}

/// Trait for mapping feature vectors to class ids.
///
/// Inference over a linear model is a handful of dot products, so the trait
/// is synchronous.
pub trait Classifier: Send + Sync {
    /// Number of features every input row must have.
    fn n_features(&self) -> usize;

    /// Class ids the model can emit, in model order.
    fn classes(&self) -> &[i64];

    /// Predict a class for every row, returning results in the same order.
    fn predict(&self, rows: &[Vec<f32>]) -> Result<Vec<Prediction>>;
}
