//! Unit tests for the player directory

use super::*;
use serde_json::json;

fn sample_listing() -> Value {
    json!({
        "players": [
            {
                "id": "p1",
                "thumbnail": "https://img.canpl.ca/p1-thumb.jpg",
                "default": "https://img.canpl.ca/p1.jpg",
                "bio": "Academy graduate.",
                "name": "Kwasi Poku"
            },
            {
                "id": "p2",
                "thumbnail": "",
                "default": "https://img.canpl.ca/p2.jpg",
                "bio": null,
                "name": "Terran Campbell"
            },
            { "thumbnail": "https://img.canpl.ca/anon.jpg", "name": "No Id" },
            { "id": "", "name": "Blank Id" },
            { "id": 42, "name": "Numeric Id" }
        ]
    })
}

fn person(id: &str) -> Person {
    Person {
        id: id.to_string(),
        first_name: "Kwasi".to_string(),
        last_name: "Poku".to_string(),
        match_name: Some("K. Poku".to_string()),
        ..Default::default()
    }
}

#[test]
fn test_from_listing_builds_entries() {
    let directory = PlayerDirectory::from_listing(&sample_listing()).unwrap();

    assert_eq!(directory.len(), 3);

    let p1 = directory.get("p1").unwrap();
    assert_eq!(p1.photo_url, "https://img.canpl.ca/p1-thumb.jpg");
    assert_eq!(p1.bio, "Academy graduate.");
    assert_eq!(p1.name, "Kwasi Poku");
}

#[test]
fn test_from_listing_photo_falls_back_to_default() {
    let directory = PlayerDirectory::from_listing(&sample_listing()).unwrap();

    let p2 = directory.get("p2").unwrap();
    assert_eq!(p2.photo_url, "https://img.canpl.ca/p2.jpg");
    assert_eq!(p2.bio, "");
}

#[test]
fn test_from_listing_accepts_numeric_ids() {
    let directory = PlayerDirectory::from_listing(&sample_listing()).unwrap();
    assert_eq!(directory.get("42").unwrap().name, "Numeric Id");
    assert_eq!(directory.get("42").unwrap().photo_url, "");
}

#[test]
fn test_from_listing_without_players_key() {
    assert!(PlayerDirectory::from_listing(&json!({ "data": [] })).is_none());
    assert!(PlayerDirectory::from_listing(&json!({ "players": "oops" })).is_none());
    assert!(PlayerDirectory::from_listing(&json!([])).is_none());
}

#[test]
fn test_enrich_known_id_sets_photo_and_bio_only() {
    let directory = PlayerDirectory::from_listing(&sample_listing()).unwrap();
    let mut record = person("p1");
    record.photo_url = Some("old.jpg".to_string());

    directory.enrich(&mut record, "p1");

    assert_eq!(record.photo_url.as_deref(), Some("https://img.canpl.ca/p1-thumb.jpg"));
    assert_eq!(record.bio.as_deref(), Some("Academy graduate."));
    assert_eq!(record.id, "p1");
    assert_eq!(record.first_name, "Kwasi");
    assert_eq!(record.last_name, "Poku");
    assert_eq!(record.match_name.as_deref(), Some("K. Poku"));
    assert!(record.name.is_none());
}

#[test]
fn test_enrich_unknown_id_passes_through() {
    let directory = PlayerDirectory::from_listing(&sample_listing()).unwrap();
    let original = person("nobody");
    let mut record = original.clone();

    directory.enrich(&mut record, "nobody");

    assert_eq!(record, original);
}

#[test]
fn test_empty_directory_never_changes_records() {
    let directory = PlayerDirectory::empty();
    let original = person("p1");
    let mut record = original.clone();

    directory.enrich(&mut record, "p1");

    assert!(directory.is_empty());
    assert_eq!(record, original);
}

#[test]
fn test_enrich_people_uses_each_person_id() {
    let directory = PlayerDirectory::from_listing(&sample_listing()).unwrap();
    let mut people = vec![person("p1"), person("p2"), person("zz"), person("")];

    directory.enrich_people(&mut people);

    assert!(people[0].photo_url.is_some());
    assert_eq!(people[1].photo_url.as_deref(), Some("https://img.canpl.ca/p2.jpg"));
    assert!(people[2].photo_url.is_none());
    assert!(people[3].photo_url.is_none());
}
