use std::fs;

use career_matcher::catalog::{builtin_details, Catalog};
use career_matcher::{Recommender, Stream, Taxonomy, UserProfile};

#[test]
fn missing_override_file_keeps_builtin_records() {
    let taxonomy = Taxonomy::build();
    let dir = tempfile::tempdir().unwrap();
    let catalog = Catalog::load(&dir.path().join("career_details.json"), &taxonomy);

    for (name, detail) in builtin_details() {
        assert_eq!(catalog.get(&name), Some(&detail));
    }
}

#[test]
fn empty_override_file_keeps_builtin_records() {
    let taxonomy = Taxonomy::build();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("career_details.json");
    fs::write(&path, "{}").unwrap();

    let catalog = Catalog::load(&path, &taxonomy);
    for (name, detail) in builtin_details() {
        assert_eq!(catalog.get(&name), Some(&detail), "{name} changed");
    }
}

#[test]
fn override_file_replaces_and_fills() {
    let taxonomy = Taxonomy::build();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("career_details.json");
    fs::write(
        &path,
        r#"{
            "Chartered Accountant (CA)": {
                "salary": "₹9-40 LPA",
                "skills": "Accounting, Auditing, GST",
                "roadmap": ["ignored"]
            },
            "Astronaut": {
                "description": "Travels to space.",
                "roadmap": ["Study physics", "Join a space agency"]
            }
        }"#,
    )
    .unwrap();

    let catalog = Catalog::load(&path, &taxonomy);
    let builtin = builtin_details();

    let ca = catalog.get("Chartered Accountant (CA)").unwrap();
    let seeded = &builtin["Chartered Accountant (CA)"];
    assert_eq!(ca.salary, "₹9-40 LPA");
    assert_eq!(ca.skills, ["Accounting", "Auditing", "GST"]);
    assert_eq!(ca.roadmap, seeded.roadmap);
    assert_eq!(ca.description, seeded.description);

    let astronaut = catalog.get("Astronaut").unwrap();
    assert_eq!(astronaut.description, "Travels to space.");
    assert_eq!(astronaut.roadmap.len(), 2);
}

#[test]
fn invalid_override_file_is_ignored() {
    let taxonomy = Taxonomy::build();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("career_details.json");
    fs::write(&path, "{ not json").unwrap();

    let catalog = Catalog::load(&path, &taxonomy);
    let fresh = Catalog::build(Default::default(), &taxonomy);
    assert_eq!(catalog.len(), fresh.len());
}

#[test]
fn every_recommendation_has_a_detail_record() {
    let recommender = Recommender::offline().unwrap();
    let mut profile = UserProfile::new(Stream::Arts);
    profile.free_text = "I like painting and designing posters".to_string();

    for rec in recommender.recommend(&profile).unwrap() {
        let detail = recommender.detail(&rec.career);
        assert!(!detail.description.is_empty());
        assert!(!detail.roadmap.is_empty());
    }
}
