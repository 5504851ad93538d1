// Text embedding: trait-based abstraction for swappable vectorizers.
//
// The TextEmbedder trait turns a document into one fixed-length vector.
// OnnxEmbedder runs a local sentence transformer; WordVectorEmbedder averages
// static word vectors. The classifier only ever sees the resulting vector.

pub mod download;
pub mod onnx;
pub mod traits;
pub mod word_vectors;
