//! Career recommendations for students.
//!
//! A [`Recommender`] is built once from the static taxonomy, the career
//! detail catalog and a sentence embedder. Each [`UserProfile`] is turned into
//! free text, scored against every career by cosine similarity, filtered by
//! stream and Science focus, expanded with related roles, boosted and cut to
//! six. [`ResumeWriter`] renders a matching resume to PDF through Typst.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod dashboard;
pub mod embedding;
pub mod engine;
pub mod error;
pub mod filter;
pub mod profile;
pub mod ranker;
pub mod resume;
pub mod scoring;
pub mod taxonomy;
pub mod tfidf;
pub mod utils;

pub use catalog::{CareerDetail, Catalog};
pub use config::{Config, EmbedderKind};
pub use embedding::{Embedder, HashingEmbedder, MiniLmEmbedder};
pub use engine::{Recommender, MAX_RECOMMENDATIONS};
pub use error::{CareerError, Result};
pub use profile::{PersonalInfo, UserProfile};
pub use ranker::ScoredCareer;
pub use resume::ResumeWriter;
pub use taxonomy::{ScienceFocus, Stream, Taxonomy};
