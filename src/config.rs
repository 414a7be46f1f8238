use std::path::PathBuf;

use anyhow::{bail, Result};

/// Which sentence embedding backend to build the career vectors with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderKind {
    MiniLm,
    Hashing,
}

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; CLI flags override the path settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_dir: PathBuf,
    pub details_path: PathBuf,
    pub classifier_path: PathBuf,
    pub output_dir: PathBuf,
    pub embedder: EmbedderKind,
    pub typst_bin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let model_dir = PathBuf::from(env_or("CAREER_MODEL_DIR", "model"));
        let details_path = std::env::var("CAREER_DETAILS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| model_dir.join("career_details.json"));
        let classifier_path = std::env::var("CAREER_CLASSIFIER_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| model_dir.join("career_model.json"));

        let embedder = match env_or("CAREER_EMBEDDER", "minilm").to_lowercase().as_str() {
            "minilm" | "all-minilm-l6-v2" => EmbedderKind::MiniLm,
            "hashing" | "hash" => EmbedderKind::Hashing,
            other => bail!("CAREER_EMBEDDER must be 'minilm' or 'hashing', got '{other}'"),
        };

        Ok(Config {
            model_dir,
            details_path,
            classifier_path,
            output_dir: PathBuf::from(env_or("CAREER_OUTPUT_DIR", ".")),
            embedder,
            typst_bin: env_or("CAREER_TYPST_BIN", "typst"),
        })
    }

    /// Directory rust-bert downloads and caches model weights into.
    pub fn model_cache_dir(&self) -> PathBuf {
        self.model_dir.join(".hf_cache")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
