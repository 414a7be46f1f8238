use std::collections::BTreeSet;

use tracing::debug;

use crate::filter::{is_valid_for_focus, FALLBACK_SCORE};
use crate::profile::UserProfile;
use crate::ranker::{sort_descending, ScoredCareer};
use crate::taxonomy::{cluster_roles, focus_field_tags, pathway_labels, Stream, Taxonomy};

const INJECT_RATIO: f32 = 0.85;
const PRESENT_BOOST: f32 = 0.05;

const FIELD_BONUS: f32 = 0.4;
const STREAM_BONUS: f32 = 0.1;
const FOCUS_BONUS: f32 = 0.25;
const INTEREST_BONUS: f32 = 0.3;

/// Roles the profile points at directly: the selected field's cluster, the
/// subject and hobby clusters and, for Science, the focus clusters.
pub fn related_targets(profile: &UserProfile) -> Vec<&'static str> {
    let mut fields: Vec<&str> = Vec::new();
    if let Some(field) = profile.selected_field() {
        fields.push(field);
    }
    fields.extend(profile.interest_fields());
    if profile.stream == Stream::Science {
        let focus = profile.effective_focus();
        fields.extend(focus_field_tags(focus));
        fields.extend(pathway_labels(focus));
    }

    let mut targets: Vec<&'static str> = Vec::new();
    for field in fields {
        for role in cluster_roles(field) {
            if !targets.contains(role) {
                targets.push(*role);
            }
        }
    }
    targets
}

/// Injects related roles the similarity pass missed and nudges the ones it
/// found. Result is sorted, highest first.
pub fn expand_related(candidates: Vec<ScoredCareer>, profile: &UserProfile) -> Vec<ScoredCareer> {
    let targets = related_targets(profile);
    if targets.is_empty() {
        return candidates;
    }

    let max_score = candidates
        .iter()
        .map(|c| c.score)
        .fold(f32::NEG_INFINITY, f32::max);
    let base = if max_score.is_finite() && max_score > 0.0 {
        max_score * INJECT_RATIO
    } else {
        FALLBACK_SCORE
    };

    let mut expanded = candidates;
    let mut injected = 0usize;
    for target in targets {
        match expanded.iter_mut().find(|c| c.career == target) {
            Some(existing) => existing.score = (existing.score + PRESENT_BOOST).min(1.0),
            None => {
                expanded.push(ScoredCareer::new(target, base));
                injected += 1;
            }
        }
    }
    debug!(injected, total = expanded.len(), "Expanded related careers");

    sort_descending(&mut expanded);
    expanded
}

/// Adds the field, stream, focus and interest bonuses and re-sorts.
/// Without a selected field, interest field or focus the list is returned as is.
pub fn apply_bonuses(
    taxonomy: &Taxonomy,
    ranked: Vec<ScoredCareer>,
    profile: &UserProfile,
) -> Vec<ScoredCareer> {
    let selected = profile.selected_field();
    let interest: BTreeSet<&'static str> = profile.interest_fields().into_iter().collect();
    let focus = profile.effective_focus();

    if selected.is_none() && interest.is_empty() && focus.is_none() {
        return ranked;
    }

    let mut boosted: Vec<ScoredCareer> = ranked
        .into_iter()
        .map(|mut career| {
            let bonus = career_bonus(taxonomy, &career.career, profile, selected, &interest);
            career.score = (career.score + bonus).clamp(0.0, 1.0);
            career
        })
        .collect();

    sort_descending(&mut boosted);
    boosted
}

fn career_bonus(
    taxonomy: &Taxonomy,
    career: &str,
    profile: &UserProfile,
    selected: Option<&str>,
    interest: &BTreeSet<&'static str>,
) -> f32 {
    let fields = taxonomy.fields_of(career);

    let mut bonus = if selected.is_some_and(|wanted| fields.iter().any(|field| *field == wanted)) {
        FIELD_BONUS
    } else if taxonomy
        .streams_of(career)
        .is_some_and(|streams| streams.contains(&profile.stream))
    {
        STREAM_BONUS
    } else {
        0.0
    };

    let focus = profile.effective_focus();
    if focus.is_some() && is_valid_for_focus(taxonomy, career, focus) {
        bonus = bonus.max(FOCUS_BONUS);
    }
    if fields.iter().any(|field| interest.contains(field)) {
        bonus = bonus.max(INTEREST_BONUS);
    }
    bonus
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ScienceFocus;

    fn commerce_finance() -> UserProfile {
        let mut profile = UserProfile::new(Stream::Commerce);
        profile.field = "Finance & Accounting Path".to_string();
        profile
    }

    #[test]
    fn missing_targets_are_injected_below_the_leader() {
        let candidates = vec![
            ScoredCareer::new("Business Analyst", 0.5),
            ScoredCareer::new("Chartered Accountant (CA)", 0.4),
        ];
        let expanded = expand_related(candidates, &commerce_finance());

        let ca = expanded.iter().find(|c| c.career == "Chartered Accountant (CA)").unwrap();
        assert!((ca.score - 0.45).abs() < 1e-6);
        let cma = expanded
            .iter()
            .find(|c| c.career == "Cost & Management Accountant (CMA)")
            .unwrap();
        assert!((cma.score - 0.5 * INJECT_RATIO).abs() < 1e-6);
        assert_eq!(expanded[0].career, "Business Analyst");
    }

    #[test]
    fn empty_candidates_inject_at_fallback_score() {
        let expanded = expand_related(Vec::new(), &commerce_finance());
        assert_eq!(expanded.len(), 4);
        assert!(expanded.iter().all(|c| c.score == FALLBACK_SCORE));
    }

    #[test]
    fn boost_is_capped_at_one() {
        let expanded = expand_related(
            vec![ScoredCareer::new("Chartered Accountant (CA)", 0.99)],
            &commerce_finance(),
        );
        assert_eq!(expanded[0].score, 1.0);
    }

    #[test]
    fn field_match_beats_stream_match() {
        let taxonomy = Taxonomy::build();
        let ranked = vec![
            ScoredCareer::new("Business Manager / Corporate Strategist", 0.5),
            ScoredCareer::new("Chartered Accountant (CA)", 0.3),
        ];
        let boosted = apply_bonuses(&taxonomy, ranked, &commerce_finance());
        assert_eq!(boosted[0].career, "Chartered Accountant (CA)");
        assert!((boosted[0].score - 0.7).abs() < 1e-6);
        assert!((boosted[1].score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn no_preferences_leave_ranking_untouched() {
        let taxonomy = Taxonomy::build();
        let ranked = vec![
            ScoredCareer::new("Judge", 0.2),
            ScoredCareer::new("Lawyer", 0.4),
        ];
        let profile = UserProfile::new(Stream::Arts);
        assert_eq!(apply_bonuses(&taxonomy, ranked.clone(), &profile), ranked);
    }

    #[test]
    fn negative_scores_are_floored() {
        let taxonomy = Taxonomy::build();
        let mut profile = UserProfile::new(Stream::Science);
        profile.focus = Some(ScienceFocus::Medical);
        let boosted = apply_bonuses(
            &taxonomy,
            vec![ScoredCareer::new("Civil Engineer", -0.8)],
            &profile,
        );
        assert_eq!(boosted[0].score, 0.0);
    }

    #[test]
    fn science_targets_include_focus_clusters() {
        let mut profile = UserProfile::new(Stream::Science);
        profile.focus = Some(ScienceFocus::Medical);
        let targets = related_targets(&profile);
        assert!(targets.contains(&"Doctor"));
        assert!(targets.contains(&"Dentist"));
    }
}
