// Classification: trait-based abstraction over the trained linear model.
//
// The Classifier trait maps feature vectors to integer class ids. The
// Label enum closes the set of class ids the page knows how to render.

pub mod label;
pub mod logistic;
pub mod traits;
