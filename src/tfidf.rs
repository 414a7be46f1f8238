// src/tfidf.rs
use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// Lower-cased word tokens of at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Fitted vocabulary and smoothed idf weights. Vocabulary indices follow
/// the sorted term order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdf {
    vocab: BTreeMap<String, usize>,
    idf: Vec<f32>,
}

#[derive(Debug, Default)]
pub struct TfIdfBuilder {
    documents: Vec<Vec<String>>,
}

impl TfIdfBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, document: &str) {
        self.documents.push(tokenize(document));
    }

    pub fn build(self) -> TfIdf {
        let mut doc_count: BTreeMap<String, usize> = BTreeMap::new();
        for doc in &self.documents {
            let seen: BTreeSet<&String> = doc.iter().collect();
            for word in seen {
                *doc_count.entry(word.clone()).or_insert(0) += 1;
            }
        }

        // idf = ln((1 + n) / (1 + df)) + 1
        let total_docs = self.documents.len() as f32;
        let mut vocab = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_count.len());
        for (index, (word, count)) in doc_count.into_iter().enumerate() {
            idf.push(((1.0 + total_docs) / (1.0 + count as f32)).ln() + 1.0);
            vocab.insert(word, index);
        }

        TfIdf { vocab, idf }
    }
}

impl TfIdf {
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    pub fn idf(&self, term: &str) -> Option<f32> {
        self.vocab.get(&term.to_lowercase()).map(|&i| self.idf[i])
    }

    /// Dense L2-normalised tf-idf row. Unknown terms are ignored, so text
    /// with no known term maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f32> {
        let mut row = vec![0.0f32; self.idf.len()];
        for token in tokenize(document) {
            if let Some(&index) = self.vocab.get(&token) {
                row[index] += 1.0;
            }
        }
        for (value, idf) in row.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm: f32 = row.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut row {
                *value /= norm;
            }
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> TfIdf {
        let mut builder = TfIdfBuilder::new();
        builder.add("Accounting and taxation");
        builder.add("accounting, auditing");
        builder.add("a b design");
        builder.build()
    }

    #[test]
    fn tokens_need_two_word_characters() {
        assert_eq!(tokenize("C++ a UI/UX c# Go"), vec!["ui", "ux", "go"]);
    }

    #[test]
    fn idf_is_smoothed() {
        let model = fitted();
        // "accounting" appears in 2 of 3 documents.
        let expected = (4.0f32 / 3.0).ln() + 1.0;
        assert!((model.idf("Accounting").unwrap() - expected).abs() < 1e-6);
        assert_eq!(model.idf("a"), None);
        assert_eq!(model.len(), 5);
    }

    #[test]
    fn rows_are_unit_length() {
        let model = fitted();
        let row = model.transform("accounting accounting design");
        let norm: f32 = row.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
        assert!(model.transform("unknown words only").iter().all(|x| *x == 0.0));
    }
}
