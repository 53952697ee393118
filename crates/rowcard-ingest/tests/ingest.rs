use std::fs;
use std::path::Path;

use rowcard_ingest::{
    IngestError, load_profile, parse_json_records, read_csv_records, read_records, save_profile,
};
use rowcard_model::{FieldDef, Profile};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_csv_with_multiline_cells() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(
        &dir,
        "tickets.csv",
        "TicketID,Summary,Description\n\
         ABC-1,Login fails,\"Steps:\n// internal note\nopen app\"\n\
         ABC-2,,\n",
    );
    let table = read_csv_records(&path).expect("read csv");

    assert_eq!(table.headers, vec!["TicketID", "Summary", "Description"]);
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.records[0].get("Description"),
        Some("Steps:\n// internal note\nopen app")
    );
    assert_eq!(table.records[1].get("Summary"), Some(""));
    let columns: Vec<&str> = table.records[1].keys().collect();
    assert_eq!(columns, vec!["TicketID", "Summary", "Description"]);
}

#[test]
fn empty_csv_yields_empty_table() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "empty.csv", "");
    let table = read_csv_records(&path).expect("read csv");
    assert!(table.headers.is_empty());
    assert!(table.is_empty());
}

#[test]
fn json_rows_keep_nulls_and_stringify_scalars() {
    let text = r#"[
        { "TicketID": "ABC-1", "Points": 3, "Blocked": false, "Assignee": null },
        { "TicketID": "ABC-2", "Sprint": "7" }
    ]"#;
    let table = parse_json_records(text, Path::new("rows.json")).expect("parse rows");

    assert_eq!(
        table.headers,
        vec!["TicketID", "Points", "Blocked", "Assignee", "Sprint"]
    );
    let first = &table.records[0];
    assert_eq!(first.get("Points"), Some("3"));
    assert_eq!(first.get("Blocked"), Some("false"));
    assert!(first.contains_key("Assignee"));
    assert_eq!(first.get("Assignee"), None);
    assert!(!table.records[1].contains_key("Points"));
}

#[test]
fn json_rows_reject_non_arrays() {
    let err = parse_json_records(r#"{ "a": 1 }"#, Path::new("rows.json")).unwrap_err();
    assert!(matches!(err, IngestError::JsonRows { .. }));

    let err = parse_json_records(r#"[ { "a": [1, 2] } ]"#, Path::new("rows.json")).unwrap_err();
    assert!(err.to_string().contains("nested values"));
}

#[test]
fn dispatches_on_extension() {
    let dir = TempDir::new().expect("temp dir");
    let csv = write(&dir, "data.CSV", "A\n1\n");
    let json = write(&dir, "data.json", r#"[{"A": "1"}]"#);
    let xlsx = write(&dir, "data.xlsx", "");

    assert_eq!(read_records(&csv).expect("csv").records[0].get("A"), Some("1"));
    assert_eq!(read_records(&json).expect("json").records[0].get("A"), Some("1"));
    assert!(matches!(
        read_records(&xlsx),
        Err(IngestError::UnsupportedFormat { .. })
    ));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    let err = read_records(&dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn profile_save_and_load() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("profile.json");
    let profile = Profile::default()
        .with_meta_title("Release notes")
        .with_field_added(FieldDef::new("Summary", "Summary").with_class("title"));

    save_profile(&profile, &path).expect("save profile");
    let loaded = load_profile(&path).expect("load profile");
    assert_eq!(loaded, profile);
}

#[test]
fn invalid_profile_file_is_a_profile_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write(&dir, "broken.json", "{ \"schema\": 5 }");
    let err = load_profile(&path).unwrap_err();
    assert!(matches!(err, IngestError::Profile { .. }));
}
