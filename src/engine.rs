//! The read-only recommendation context and the full ranking pipeline.

use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::{colleges_for, roadmap_with_milestone, CareerDetail, Catalog, College};
use crate::classifier::CareerClassifier;
use crate::config::{Config, EmbedderKind};
use crate::embedding::{Embedder, HashingEmbedder, MiniLmEmbedder};
use crate::error::Result;
use crate::filter::{is_valid_for_profile, prefilter, stream_fallbacks};
use crate::profile::UserProfile;
use crate::ranker::{rank_by_similarity, EmbeddingCache, ScoredCareer};
use crate::scoring::{apply_bonuses, expand_related};
use crate::taxonomy::Taxonomy;

pub const MAX_RECOMMENDATIONS: usize = 6;

/// Everything built once at startup. Ranking only reads from it.
pub struct Recommender {
    taxonomy: Taxonomy,
    catalog: Catalog,
    embedder: Box<dyn Embedder>,
    cache: EmbeddingCache,
    classifier: Option<CareerClassifier>,
}

impl Recommender {
    /// Builds the context from explicit parts. Career vectors are computed here.
    pub fn new(taxonomy: Taxonomy, catalog: Catalog, embedder: Box<dyn Embedder>) -> Result<Self> {
        let cache = EmbeddingCache::build(&catalog, embedder.as_ref())?;
        info!(
            careers = cache.len(),
            embedder = embedder.name(),
            "Recommender ready"
        );
        Ok(Recommender {
            taxonomy,
            catalog,
            embedder,
            cache,
            classifier: None,
        })
    }

    /// Loads the embedder named in the config, the detail overrides and the
    /// optional classifier artifact.
    pub fn from_config(config: &Config) -> Result<Self> {
        let taxonomy = Taxonomy::build();
        let catalog = Catalog::load(&config.details_path, &taxonomy);
        let embedder: Box<dyn Embedder> = match config.embedder {
            EmbedderKind::MiniLm => Box::new(MiniLmEmbedder::load(&config.model_cache_dir())?),
            EmbedderKind::Hashing => Box::new(HashingEmbedder::default()),
        };
        let mut recommender = Recommender::new(taxonomy, catalog, embedder)?;
        recommender.load_classifier(&config.classifier_path);
        Ok(recommender)
    }

    /// Offline context with the hashing embedder and no overrides.
    pub fn offline() -> Result<Self> {
        let taxonomy = Taxonomy::build();
        let catalog = Catalog::build(Default::default(), &taxonomy);
        Recommender::new(taxonomy, catalog, Box::new(HashingEmbedder::default()))
    }

    /// A missing or unreadable artifact only leaves the classifier absent.
    pub fn load_classifier(&mut self, path: &Path) {
        match CareerClassifier::load(path) {
            Ok(classifier) => {
                info!(path = %path.display(), labels = classifier.labels().len(), "Classifier loaded");
                self.classifier = Some(classifier);
            }
            Err(e) => warn!(path = %path.display(), "Classifier not loaded: {}", e),
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn classifier(&self) -> Option<&CareerClassifier> {
        self.classifier.as_ref()
    }

    /// Up to six careers for the profile, best first, scores in `[0, 1]`.
    pub fn recommend(&self, profile: &UserProfile) -> Result<Vec<ScoredCareer>> {
        let text = profile.profile_text();
        let raw = rank_by_similarity(&text, self.embedder.as_ref(), &self.cache)?;

        let candidates = prefilter(&self.taxonomy, raw, profile);
        debug!(candidates = candidates.len(), "Pre-filtered candidates");

        let expanded = expand_related(candidates, profile);
        let boosted = apply_bonuses(&self.taxonomy, expanded, profile);
        debug!(ranked = boosted.len(), "Applied bonuses");

        Ok(self.finalize(boosted, profile))
    }

    fn finalize(&self, ranked: Vec<ScoredCareer>, profile: &UserProfile) -> Vec<ScoredCareer> {
        let mut valid: Vec<ScoredCareer> = ranked
            .into_iter()
            .filter(|c| is_valid_for_profile(&self.taxonomy, &c.career, profile))
            .collect();
        if valid.is_empty() {
            debug!(stream = %profile.stream, "Final check emptied the list, using stream fallbacks");
            valid = stream_fallbacks(&self.taxonomy, profile);
        }
        for career in &mut valid {
            career.score = career.score.clamp(0.0, 1.0);
        }
        valid.truncate(MAX_RECOMMENDATIONS);
        valid
    }

    pub fn detail(&self, career: &str) -> Cow<'_, CareerDetail> {
        self.catalog.detail(career, &self.taxonomy)
    }

    /// Career roadmap with the Science focus exam milestone when it applies.
    pub fn roadmap(&self, career: &str, profile: &UserProfile) -> Vec<String> {
        let detail = self.detail(career);
        roadmap_with_milestone(&detail.roadmap, profile.stream, profile.effective_focus())
    }

    pub fn colleges(&self, career: &str) -> &'static [College] {
        colleges_for(career, &self.taxonomy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{ScienceFocus, Stream};

    #[test]
    fn recommendations_are_bounded_and_valid() {
        let recommender = Recommender::offline().unwrap();
        let mut profile = UserProfile::new(Stream::Arts);
        profile.field = "Media & Journalism".to_string();
        profile.free_text = "I love writing stories and interviewing people".to_string();

        let recs = recommender.recommend(&profile).unwrap();
        assert!(!recs.is_empty());
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
        assert!(recs.iter().all(|r| (0.0..=1.0).contains(&r.score)));
        assert!(recs
            .iter()
            .all(|r| is_valid_for_profile(recommender.taxonomy(), &r.career, &profile)));
    }

    #[test]
    fn roadmap_gets_focus_milestone() {
        let recommender = Recommender::offline().unwrap();
        let mut profile = UserProfile::new(Stream::Science);
        profile.focus = Some(ScienceFocus::Medical);
        let steps = recommender.roadmap("Psychologist", &profile);
        assert!(steps[1].contains("NEET-UG"));
    }

    #[test]
    fn missing_classifier_is_not_fatal() {
        let mut recommender = Recommender::offline().unwrap();
        let dir = tempfile::tempdir().unwrap();
        recommender.load_classifier(&dir.path().join("career_model.json"));
        assert!(recommender.classifier().is_none());
    }
}
