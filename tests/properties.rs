use proptest::prelude::*;
use proptest::sample::{select, Index};
use proptest::test_runner::{Config, TestRunner};

use career_matcher::filter::is_valid_for_profile;
use career_matcher::taxonomy::{fields_for, HOBBY_OPTIONS, SUBJECT_OPTIONS};
use career_matcher::{Recommender, ScienceFocus, Stream, UserProfile, MAX_RECOMMENDATIONS};

fn profiles() -> impl Strategy<Value = UserProfile> {
    (
        select(Stream::ALL.to_vec()),
        proptest::option::of(select(vec![ScienceFocus::Medical, ScienceFocus::NonMedical])),
        proptest::option::of(any::<Index>()),
        proptest::option::of(select(HOBBY_OPTIONS.to_vec())),
        proptest::option::of(select(SUBJECT_OPTIONS.to_vec())),
        "[a-z ]{0,40}",
    )
        .prop_map(|(stream, focus, field, hobby, subject, text)| {
            let mut profile = UserProfile::new(stream);
            profile.focus = focus;
            let fields = fields_for(stream, profile.effective_focus());
            if let Some(index) = field.filter(|_| !fields.is_empty()) {
                profile.field = fields[index.index(fields.len())].to_string();
            }
            profile.hobby = hobby.unwrap_or_default().to_string();
            profile.subject = subject.unwrap_or_default().to_string();
            profile.free_text = text;
            profile
        })
}

// One recommender for every case; building it embeds the whole catalog.
#[test]
fn recommendations_hold_their_invariants() {
    let recommender = Recommender::offline().unwrap();
    let mut runner = TestRunner::new(Config {
        cases: 64,
        ..Config::default()
    });

    runner
        .run(&profiles(), |profile| {
            let recs = recommender.recommend(&profile).unwrap();

            prop_assert!(!recs.is_empty());
            prop_assert!(recs.len() <= MAX_RECOMMENDATIONS);
            for rec in &recs {
                prop_assert!((0.0..=1.0).contains(&rec.score), "{} scored {}", rec.career, rec.score);
                prop_assert!(
                    is_valid_for_profile(recommender.taxonomy(), &rec.career, &profile),
                    "{} is not open to {:?}",
                    rec.career,
                    profile
                );
            }
            prop_assert!(recs.windows(2).all(|w| w[0].score >= w[1].score));

            let again = recommender.recommend(&profile).unwrap();
            prop_assert_eq!(recs, again);
            Ok(())
        })
        .unwrap();
}
