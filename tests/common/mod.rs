// Shared fixtures: a tiny word-vector table and a linear classifier that
// together separate sensational claims (class 0) from finance reporting
// (class 1).

#![allow(dead_code)]

use std::sync::Arc;

use newsprobe::classifier::logistic::LogisticRegression;
use newsprobe::embedding::word_vectors::WordVectorEmbedder;
use newsprobe::inference::Predictor;

pub const FAKE_TEXT: &str = "The earth is flat and NASA is hiding it.";
pub const REAL_TEXT: &str = "The central bank raised interest rates by 0.25% today.";

/// First axis: sensational (-1) vs. financial (+1). Second axis is noise.
pub const WORD_VECTORS: &str = "\
flat -1.0 0.3
nasa -1.0 -0.2
hiding -1.0 0.1
bank 1.0 0.2
interest 1.0 -0.1
rates 1.0 0.4
";

pub fn embedder() -> WordVectorEmbedder {
    WordVectorEmbedder::parse(WORD_VECTORS).unwrap()
}

/// Positive first axis means REAL.
pub fn classifier_with_classes(classes: Vec<i64>) -> LogisticRegression {
    LogisticRegression::new(classes, vec![vec![2.0, 0.0]], vec![0.0]).unwrap()
}

pub fn predictor() -> Predictor {
    Predictor::new(Arc::new(embedder()), Arc::new(classifier_with_classes(vec![0, 1]))).unwrap()
}
