use std::path::PathBuf;

use content::{FileContentSource, StaticContentSource};

use super::*;

fn write_temp(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("server-state-{}-{name}", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

const GOOD_DOC: &str = r#"{
  "headerData": { "logo": "/logo.png" },
  "curtainTypes": [
    { "name": "Sheer Curtains", "image": "X", "href": "/Curtains/sheers" }
  ]
}"#;

const DUPLICATE_DOC: &str = r#"{
  "headerData": { "logo": "/logo.png" },
  "curtainTypes": [
    { "id": "a", "name": "Sheer Curtains", "image": "X", "href": "/Curtains/sheers" },
    { "id": "b", "name": "Sheer Curtains", "image": "Y", "href": "/Curtains/other" }
  ]
}"#;

#[test]
fn new_assembles_static_catalogue() {
    let state = AppState::new(Arc::new(StaticContentSource::new())).unwrap();
    let props = state.snapshot();
    assert_eq!(props.banner.len(), 4);
    assert_eq!(props.curtain_types.len(), 4);
    assert_eq!(state.source_label(), "built-in catalogue");
}

#[test]
fn new_rejects_duplicate_keys() {
    let path = write_temp("dup.json", DUPLICATE_DOC);
    let source = FileContentSource::new(&path).unwrap();
    assert!(matches!(AppState::new(Arc::new(source)), Err(ContentError::DuplicateKey { .. })));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn reload_publishes_new_props() {
    let path = write_temp("reload-ok.json", GOOD_DOC);
    let state = AppState::new(Arc::new(FileContentSource::new(&path).unwrap())).unwrap();
    assert!(state.snapshot().new_arrivals.is_empty());

    std::fs::write(
        &path,
        r#"{"headerData":{"logo":"/logo.png"},"newArrivals":[{"title":"Linen","image":"L","href":"/products/linen"}]}"#,
    )
    .unwrap();
    let fresh = state.reload().unwrap();
    assert_eq!(fresh.new_arrivals.len(), 1);
    assert_eq!(state.snapshot().new_arrivals[0].id.as_str(), "linen");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn failed_reload_keeps_previous_props() {
    let path = write_temp("reload-bad.json", GOOD_DOC);
    let state = AppState::new(Arc::new(FileContentSource::new(&path).unwrap())).unwrap();
    let before = state.snapshot();

    std::fs::write(&path, DUPLICATE_DOC).unwrap();
    assert!(state.reload().is_err());
    assert_eq!(*state.snapshot(), *before);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn clones_share_published_props() {
    let path = write_temp("shared.json", GOOD_DOC);
    let state = AppState::new(Arc::new(FileContentSource::new(&path).unwrap())).unwrap();
    let other = state.clone();

    std::fs::write(&path, r#"{"headerData":{"logo":"/new-logo.png"}}"#).unwrap();
    state.reload().unwrap();
    assert_eq!(other.snapshot().header_data.logo, "/new-logo.png");

    std::fs::remove_file(&path).unwrap();
}
