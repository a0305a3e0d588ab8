//! Loading descriptors from disk.

use std::fs;

use modegen_manifest::{Descriptor, Error};
use tempfile::TempDir;

#[test]
fn test_merges_files_in_argument_order() {
    let temp = TempDir::new().unwrap();
    let base = temp.path().join("base.json");
    let extra = temp.path().join("extra.toml");
    fs::write(&base, r#"{"owner":"platform","data":[{"value":"dev","default":true}]}"#).unwrap();
    fs::write(&extra, "owner = \"release\"\n\n[[data]]\nvalue = \"prod\"\n").unwrap();

    let descriptor = Descriptor::from_files([&base, &extra]).unwrap();

    let literals: Vec<_> = descriptor
        .entries()
        .unwrap()
        .iter()
        .map(|e| e.field("value").and_then(|v| v.as_str()).unwrap())
        .collect();
    assert_eq!(literals, ["dev", "prod"]);
    assert_eq!(
        descriptor.field("owner").and_then(|v| v.as_str()),
        Some("release")
    );
    assert_eq!(descriptor.documents().len(), 2);
    assert!(descriptor.sources()[1].ends_with("extra.toml"));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.json");

    let err = Descriptor::from_files([&missing]).unwrap_err();

    match *err {
        Error::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn test_stops_at_first_malformed_file() {
    let temp = TempDir::new().unwrap();
    let good = temp.path().join("good.json");
    let bad = temp.path().join("bad.json");
    fs::write(&good, r#"{"data":[{"value":"dev"}]}"#).unwrap();
    fs::write(&bad, "{ not json").unwrap();

    let err = Descriptor::from_files([&good, &bad]).unwrap_err();

    match *err {
        Error::Parse { filename, .. } => assert!(filename.ends_with("bad.json")),
        other => panic!("expected parse error, got {other:?}"),
    }
}
