// Static word-vector embedder.
//
// A document vector is the plain average of the vectors of its known tokens,
// the same composition a classic word2vec/GloVe pipeline uses. Tokens missing
// from the table are skipped; a document with no known tokens maps to the
// zero vector.
//
// File format: one entry per line, `word f1 f2 ... fN`, whitespace separated.
// An optional first line `count dim` (word2vec text header) is accepted.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use regex_lite::Regex;
use tracing::debug;

use super::traits::TextEmbedder;

/// Word-vector table plus the tokenizer that feeds it.
pub struct WordVectorEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    dimension: usize,
    token_pattern: Regex,
}

impl WordVectorEmbedder {
    /// Load a word vector text file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word vectors from {}", path.display()))?;
        let embedder = Self::parse(&contents)
            .with_context(|| format!("Invalid word vector file {}", path.display()))?;

        debug!(
            words = embedder.vectors.len(),
            dim = embedder.dimension,
            "Loaded word vectors from {}",
            path.display()
        );
        Ok(embedder)
    }

    /// Parse word vectors from their text form.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut vectors = HashMap::new();
        let mut dimension: Option<usize> = None;

        for (line_no, line) in contents.lines().enumerate() {
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let values: Vec<f32> = fields
                .map(|f| f.parse::<f32>())
                .collect::<std::result::Result<_, _>>()
                .with_context(|| format!("line {}: non-numeric vector component", line_no + 1))?;

            // word2vec text header: "<count> <dim>"
            if line_no == 0 && values.len() == 1 && word.parse::<usize>().is_ok() {
                continue;
            }
            if values.is_empty() {
                anyhow::bail!("line {}: word '{}' has no vector", line_no + 1, word);
            }

            match dimension {
                None => dimension = Some(values.len()),
                Some(dim) if dim != values.len() => anyhow::bail!(
                    "line {}: expected {} components, found {}",
                    line_no + 1,
                    dim,
                    values.len()
                ),
                Some(_) => {}
            }
            // Tables are frequency-ordered; the first casing seen wins.
            vectors.entry(word.to_lowercase()).or_insert(values);
        }

        let Some(dimension) = dimension else {
            anyhow::bail!("no word vectors found");
        };

        Ok(Self {
            vectors,
            dimension,
            token_pattern: token_pattern(),
        })
    }

    /// Number of words in the table.
    pub fn vocabulary_size(&self) -> usize {
        self.vectors.len()
    }

    /// Average the vectors of every known token in `text`.
    pub fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut sum = vec![0.0_f64; self.dimension];
        let mut known = 0usize;

        let lowered = text.to_lowercase();
        for token in self.token_pattern.find_iter(&lowered) {
            if let Some(vector) = self.vectors.get(token.as_str()) {
                for (acc, &v) in sum.iter_mut().zip(vector) {
                    *acc += v as f64;
                }
                known += 1;
            }
        }

        if known > 0 {
            for val in &mut sum {
                *val /= known as f64;
            }
        }
        sum.into_iter().map(|v| v as f32).collect()
    }
}

#[async_trait]
impl TextEmbedder for WordVectorEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    // Table lookups are cheap enough to stay on the async thread.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_sync(t)).collect())
    }
}

fn token_pattern() -> Regex {
    // Numbers with decimals first, then any run of characters that are
    // neither whitespace nor ASCII punctuation, joined by inner ' or -.
    Regex::new(r"[0-9]+(?:[.,][0-9]+)*%?|[^\s!-/:-@\[-`{-~]+(?:['\-][^\s!-/:-@\[-`{-~]+)*")
        .expect("valid token pattern")
}
