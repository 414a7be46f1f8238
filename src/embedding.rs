//! Sentence embedding backends.

use std::hash::{Hash, Hasher};
use std::path::Path;

use rust_bert::pipelines::sentence_embeddings::{
    SentenceEmbeddingsBuilder, SentenceEmbeddingsModel, SentenceEmbeddingsModelType,
};
use siphasher::sip::SipHasher13;
use tch::Device;
use tracing::info;

use crate::error::{CareerError, Result};

/// Turns text into fixed-length vectors. Career vectors and profile vectors
/// must come from the same embedder for their cosine to mean anything.
pub trait Embedder {
    fn name(&self) -> &'static str;

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
        self.embed(&[text])?
            .pop()
            .ok_or_else(|| CareerError::Embedding("embedder returned no vector".to_string()))
    }
}

/// all-MiniLM-L6-v2 through rust-bert.
pub struct MiniLmEmbedder {
    model: SentenceEmbeddingsModel,
}

impl MiniLmEmbedder {
    /// Downloads (first run) and loads the model. Weights are cached under
    /// `cache_dir`.
    pub fn load(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)?;
        std::env::set_var("RUSTBERT_CACHE", cache_dir);

        let device = Device::cuda_if_available();
        info!(?device, cache = %cache_dir.display(), "Loading all-MiniLM-L6-v2");

        let model = SentenceEmbeddingsBuilder::remote(SentenceEmbeddingsModelType::AllMiniLmL6V2)
            .with_device(device)
            .create_model()
            .map_err(|e| CareerError::Embedding(e.to_string()))?;
        Ok(MiniLmEmbedder { model })
    }
}

impl Embedder for MiniLmEmbedder {
    fn name(&self) -> &'static str {
        "all-MiniLM-L6-v2"
    }

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.model
            .encode(texts)
            .map_err(|e| CareerError::Embedding(e.to_string()))
    }
}

// Changing these keys changes every hashed vector.
const HASH_KEY_0: u64 = 0x0123_4567_89ab_cdef;
const HASH_KEY_1: u64 = 0xfedc_ba98_7654_3210;

pub const HASHING_DIMENSION: usize = 384;

/// Deterministic bag-of-words embedder using signed feature hashing over
/// lower-cased word unigrams and bigrams. No model download, so tests and
/// offline runs use it.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimension: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        HashingEmbedder::new(HASHING_DIMENSION)
    }
}

impl HashingEmbedder {
    pub fn new(dimension: usize) -> Self {
        HashingEmbedder {
            dimension: dimension.max(1),
        }
    }

    fn hash(token: &str) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(HASH_KEY_0, HASH_KEY_1);
        token.hash(&mut hasher);
        hasher.finish()
    }

    fn add_token(&self, vector: &mut [f32], token: &str) {
        let h = Self::hash(token);
        let index = (h % self.dimension as u64) as usize;
        // top bit picks the sign
        let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
        vector[index] += sign;
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let words: Vec<String> = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| w.chars().count() > 1)
            .map(str::to_lowercase)
            .collect();

        let mut vector = vec![0.0f32; self.dimension];
        for word in &words {
            self.add_token(&mut vector, word);
        }
        for pair in words.windows(2) {
            self.add_token(&mut vector, &format!("{} {}", pair[0], pair[1]));
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        vector
    }
}

impl Embedder for HashingEmbedder {
    fn name(&self) -> &'static str {
        "hashing"
    }

    fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|text| self.embed_text(text)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::cosine_similarity;

    #[test]
    fn hashing_is_deterministic_and_normalized() {
        let embedder = HashingEmbedder::default();
        let a = embedder.embed_one("Accounting, auditing and taxation").unwrap();
        let b = embedder.embed_one("Accounting, auditing and taxation").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), HASHING_DIMENSION);
        let norm: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_text_embeds_to_zero() {
        let embedder = HashingEmbedder::default();
        let v = embedder.embed_one("   ").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn shared_words_raise_similarity() {
        let embedder = HashingEmbedder::default();
        let vectors = embedder
            .embed(&[
                "I enjoy accounting and taxes",
                "Accounting, auditing, taxes and financial reporting",
                "Design aircraft and spacecraft",
            ])
            .unwrap();
        let near = cosine_similarity(&vectors[0], &vectors[1]);
        let far = cosine_similarity(&vectors[0], &vectors[2]);
        assert!(near > far, "near={near} far={far}");
    }
}
