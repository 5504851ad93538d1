// newsprobe: fake news detection demo
//
// This is the library root. Text flows embedding -> classifier -> verdict,
// and the web page and CLI both sit on top of the shared Predictor.

pub mod classifier;
pub mod config;
pub mod embedding;
pub mod inference;
pub mod output;
pub mod status;

#[cfg(feature = "web")]
pub mod web;
