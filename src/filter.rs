//! Stream and Science-focus validity, the candidate pre-filter and the
//! fallback lists used when similarity gives nothing to work with.

use tracing::debug;

use crate::profile::UserProfile;
use crate::ranker::{sort_descending, ScoredCareer};
use crate::taxonomy::{
    cluster_roles, focus_field_tags, hobby_fields, pathway_labels, stream_fields,
    subject_fields, ScienceFocus, Stream, Taxonomy,
};

pub const CANDIDATE_LIMIT: usize = 8;
pub const FALLBACK_LIMIT: usize = 4;
pub const FALLBACK_SCORE: f32 = 0.6;

pub const DEFAULT_MIX: [&str; 4] = ["Software Engineer", "Data Scientist", "Doctor", "Business Manager"];

/// Unmapped roles are open to every stream.
pub fn is_valid_for_stream(taxonomy: &Taxonomy, role: &str, stream: Stream) -> bool {
    match taxonomy.streams_of(role) {
        Some(streams) => streams.contains(&stream),
        None => true,
    }
}

pub fn is_valid_for_focus(taxonomy: &Taxonomy, role: &str, focus: Option<ScienceFocus>) -> bool {
    let Some(focus) = focus else {
        return true;
    };
    let tags = focus_field_tags(Some(focus));
    if tags.is_empty() {
        return true;
    }
    let fields = taxonomy.fields_of(role);
    fields.is_empty() || fields.iter().any(|field| tags.contains(field))
}

/// Both checks for the profile's stream and effective focus.
pub fn is_valid_for_profile(taxonomy: &Taxonomy, role: &str, profile: &UserProfile) -> bool {
    is_valid_for_stream(taxonomy, role, profile.stream)
        && is_valid_for_focus(taxonomy, role, profile.effective_focus())
}

/// Drops invalid careers and keeps the best eight. Falls back to
/// [`field_fallbacks`] when nothing valid scores above zero.
pub fn prefilter(
    taxonomy: &Taxonomy,
    scores: Vec<ScoredCareer>,
    profile: &UserProfile,
) -> Vec<ScoredCareer> {
    let mut valid: Vec<ScoredCareer> = scores
        .into_iter()
        .filter(|s| is_valid_for_profile(taxonomy, &s.career, profile))
        .collect();

    if valid.iter().all(|s| s.score == 0.0) {
        debug!(valid = valid.len(), "No similarity signal, using field fallbacks");
        return field_fallbacks(taxonomy, profile);
    }

    sort_descending(&mut valid);
    valid.truncate(CANDIDATE_LIMIT);
    valid
}

/// First four valid roles from the first source that yields any: the selected
/// field, the Science pathways, the subject, the hobby, then the stream.
pub fn field_fallbacks(taxonomy: &Taxonomy, profile: &UserProfile) -> Vec<ScoredCareer> {
    let mut sources: Vec<Vec<&str>> = Vec::new();

    if let Some(field) = profile.selected_field() {
        sources.push(vec![field]);
    }
    if profile.stream == Stream::Science {
        sources.push(pathway_labels(profile.effective_focus()));
    }
    sources.push(subject_fields(&profile.subject).to_vec());
    sources.push(hobby_fields(&profile.hobby).to_vec());
    sources.push(stream_fields(profile.stream).to_vec());

    sources
        .iter()
        .map(|fields| valid_cluster_roles(taxonomy, fields, profile))
        .find(|roles| !roles.is_empty())
        .unwrap_or_default()
        .into_iter()
        .map(|role| ScoredCareer::new(role, FALLBACK_SCORE))
        .collect()
}

/// Used when the final validity re-check empties the list.
pub fn stream_fallbacks(taxonomy: &Taxonomy, profile: &UserProfile) -> Vec<ScoredCareer> {
    let fields = match profile.stream {
        Stream::Science => pathway_labels(profile.effective_focus()),
        stream => stream_fields(stream).to_vec(),
    };

    let mut roles = valid_cluster_roles(taxonomy, &fields, profile);
    if roles.is_empty() {
        roles = DEFAULT_MIX.to_vec();
    }
    roles
        .into_iter()
        .map(|role| ScoredCareer::new(role, FALLBACK_SCORE))
        .collect()
}

fn valid_cluster_roles(
    taxonomy: &Taxonomy,
    fields: &[&str],
    profile: &UserProfile,
) -> Vec<&'static str> {
    let mut roles: Vec<&'static str> = Vec::new();
    for field in fields {
        for role in cluster_roles(field) {
            if roles.len() == FALLBACK_LIMIT {
                return roles;
            }
            if !roles.contains(role) && is_valid_for_profile(taxonomy, role, profile) {
                roles.push(*role);
            }
        }
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science(focus: ScienceFocus) -> UserProfile {
        let mut profile = UserProfile::new(Stream::Science);
        profile.focus = Some(focus);
        profile
    }

    #[test]
    fn stream_validity_is_open_world() {
        let taxonomy = Taxonomy::build();
        assert!(is_valid_for_stream(&taxonomy, "Chartered Accountant (CA)", Stream::Commerce));
        assert!(!is_valid_for_stream(&taxonomy, "Chartered Accountant (CA)", Stream::Arts));
        assert!(is_valid_for_stream(&taxonomy, "Astronaut", Stream::Arts));
    }

    #[test]
    fn focus_validity_uses_field_tags() {
        let taxonomy = Taxonomy::build();
        let medical = Some(ScienceFocus::Medical);
        assert!(is_valid_for_focus(&taxonomy, "Doctor", medical));
        assert!(!is_valid_for_focus(&taxonomy, "Civil Engineer", medical));
        assert!(is_valid_for_focus(&taxonomy, "Astronaut", medical));
        assert!(is_valid_for_focus(&taxonomy, "Civil Engineer", None));
    }

    #[test]
    fn prefilter_keeps_top_eight_valid() {
        let taxonomy = Taxonomy::build();
        let profile = UserProfile::new(Stream::Commerce);
        let scores: Vec<ScoredCareer> = taxonomy
            .all_roles()
            .iter()
            .enumerate()
            .map(|(i, role)| ScoredCareer::new(*role, 0.01 * (i % 50) as f32 + 0.01))
            .collect();

        let kept = prefilter(&taxonomy, scores, &profile);
        assert_eq!(kept.len(), CANDIDATE_LIMIT);
        assert!(kept.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(kept
            .iter()
            .all(|s| is_valid_for_stream(&taxonomy, &s.career, Stream::Commerce)));
    }

    #[test]
    fn zero_scores_fall_back_to_selected_field() {
        let taxonomy = Taxonomy::build();
        let mut profile = science(ScienceFocus::NonMedical);
        profile.field = "Engineering & Technology".to_string();
        let scores = vec![ScoredCareer::new("Software Engineer", 0.0)];

        let fallback = prefilter(&taxonomy, scores, &profile);
        let names: Vec<_> = fallback.iter().map(|s| s.career.as_str()).collect();
        assert_eq!(
            names,
            ["Software Engineer", "Mechanical Engineer", "Civil Engineer", "Electrical Engineer"]
        );
        assert!(fallback.iter().all(|s| s.score == FALLBACK_SCORE));
    }

    #[test]
    fn fallback_skips_empty_sources() {
        let taxonomy = Taxonomy::build();
        let mut profile = UserProfile::new(Stream::Arts);
        profile.field = "Not A Field".to_string();
        profile.subject = "Psychology".to_string();

        let fallback = field_fallbacks(&taxonomy, &profile);
        assert_eq!(fallback.first().map(|s| s.career.as_str()), Some("Psychologist"));
        assert!(fallback.len() <= FALLBACK_LIMIT);
    }

    #[test]
    fn stream_fallback_follows_focus_pathways() {
        let taxonomy = Taxonomy::build();
        let profile = science(ScienceFocus::Medical);
        let fallback = stream_fallbacks(&taxonomy, &profile);
        assert_eq!(fallback.len(), FALLBACK_LIMIT);
        assert!(fallback
            .iter()
            .all(|s| is_valid_for_profile(&taxonomy, &s.career, &profile)));
    }
}
