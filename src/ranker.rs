//! Raw semantic similarity between a profile and every career.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{embedding_text, Catalog};
use crate::embedding::Embedder;
use crate::error::{CareerError, Result};
use crate::utils::cosine_similarity;

/// A career with its current score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCareer {
    pub career: String,
    pub score: f32,
}

impl ScoredCareer {
    pub fn new(career: impl Into<String>, score: f32) -> Self {
        ScoredCareer {
            career: career.into(),
            score,
        }
    }
}

/// Highest score first, ties by name.
pub fn sort_descending(list: &mut [ScoredCareer]) {
    list.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.career.cmp(&b.career))
    });
}

/// Career name → vector, computed once over the catalog.
pub struct EmbeddingCache {
    entries: Vec<(String, Vec<f32>)>,
}

impl EmbeddingCache {
    pub fn build(catalog: &Catalog, embedder: &dyn Embedder) -> Result<Self> {
        let (names, texts): (Vec<&str>, Vec<&str>) = catalog
            .iter()
            .map(|(name, detail)| (name, embedding_text(name, detail)))
            .unzip();

        let vectors = embedder.embed(&texts)?;
        if vectors.len() != names.len() {
            return Err(CareerError::Embedding(format!(
                "expected {} career vectors, got {}",
                names.len(),
                vectors.len()
            )));
        }

        let entries = names
            .into_iter()
            .map(String::from)
            .zip(vectors)
            .collect::<Vec<_>>();
        debug!(careers = entries.len(), embedder = embedder.name(), "Career embeddings cached");
        Ok(EmbeddingCache { entries })
    }

    pub fn get(&self, career: &str) -> Option<&[f32]> {
        self.entries
            .iter()
            .find(|(name, _)| name == career)
            .map(|(_, v)| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn careers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// Cosine of the profile text against every cached career, in cache order.
/// Whitespace-only text scores every career 0 without calling the embedder.
pub fn rank_by_similarity(
    profile_text: &str,
    embedder: &dyn Embedder,
    cache: &EmbeddingCache,
) -> Result<Vec<ScoredCareer>> {
    if profile_text.trim().is_empty() {
        return Ok(cache.careers().map(|c| ScoredCareer::new(c, 0.0)).collect());
    }

    let query = embedder.embed_one(profile_text)?;
    Ok(cache
        .entries
        .iter()
        .map(|(name, vector)| ScoredCareer::new(name.as_str(), cosine_similarity(&query, vector)))
        .collect())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::embedding::HashingEmbedder;
    use crate::taxonomy::Taxonomy;

    fn fixture() -> (Catalog, HashingEmbedder) {
        let taxonomy = Taxonomy::build();
        (Catalog::build(BTreeMap::new(), &taxonomy), HashingEmbedder::default())
    }

    #[test]
    fn cache_covers_the_catalog() {
        let (catalog, embedder) = fixture();
        let cache = EmbeddingCache::build(&catalog, &embedder).unwrap();
        assert_eq!(cache.len(), catalog.len());
        assert!(cache.get("Doctor").is_some());
        assert!(cache.get("Astronaut").is_none());
    }

    #[test]
    fn blank_text_scores_zero() {
        let (catalog, embedder) = fixture();
        let cache = EmbeddingCache::build(&catalog, &embedder).unwrap();
        let scores = rank_by_similarity("  \n", &embedder, &cache).unwrap();
        assert_eq!(scores.len(), cache.len());
        assert!(scores.iter().all(|s| s.score == 0.0));
    }

    #[test]
    fn related_text_ranks_the_right_career_high() {
        let (catalog, embedder) = fixture();
        let cache = EmbeddingCache::build(&catalog, &embedder).unwrap();
        let mut scores = rank_by_similarity(
            "Manage financial records, conduct audits, tax consultancy and regulatory compliance",
            &embedder,
            &cache,
        )
        .unwrap();
        sort_descending(&mut scores);
        assert_eq!(scores[0].career, "Chartered Accountant (CA)");
        assert!(scores.iter().all(|s| (-1.0..=1.0).contains(&s.score)));
    }

    #[test]
    fn sort_breaks_ties_by_name() {
        let mut list = vec![
            ScoredCareer::new("Nurse", 0.5),
            ScoredCareer::new("Dentist", 0.5),
            ScoredCareer::new("Doctor", 0.9),
        ];
        sort_descending(&mut list);
        let names: Vec<_> = list.iter().map(|s| s.career.as_str()).collect();
        assert_eq!(names, ["Doctor", "Dentist", "Nurse"]);
    }
}
