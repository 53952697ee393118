//! End-to-end tests for the CLI commands on temporary files.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tempfile::TempDir;

use rowcard_cli::cli::{CheckArgs, RenderArgs, SchemaArgs};
use rowcard_cli::commands::{run_check, run_render, run_schema};
use rowcard_ingest::load_profile;

const TICKETS_CSV: &str = "\
TicketID,Status,Summary
ABC-1,Open,\"Ticket: K-1
// internal note
Fix login\"
ABC-2,Rejected,Ticket: K-2
// ABC-3,Open,skipped
,,
";

const PROFILE_JSON: &str = r##"{
  "meta": { "title": "Sprint review", "template": "jira" },
  "styles": {
    "types": {
      "title": { "fontSize": 14, "color": "#0747A6", "fontWeight": "bold" },
      "body": { "fontSize": 11, "color": "#172B4D" }
    }
  },
  "schema": [
    { "id": "TicketID", "label": "Ticket", "type": "title", "width": "50%",
      "link": "https://jira.example.com/browse/${}" },
    { "id": "Status", "label": "Status", "width": "25%",
      "rules": [ { "matches": "Rejected", "hide": true } ] },
    { "id": "key", "label": "Key", "sourceField": "Summary", "regex": "Ticket: (\\S+)" }
  ]
}"##;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn render_args(data: &Path, profile: &Path, output: Option<PathBuf>) -> RenderArgs {
    RenderArgs {
        data: data.to_path_buf(),
        profile: profile.to_path_buf(),
        output,
        case_insensitive_rules: false,
        date: NaiveDate::from_ymd_opt(2026, 10, 18),
        dry_run: false,
    }
}

#[test]
fn render_writes_plan() {
    let dir = TempDir::new().expect("temp dir");
    let data = write(&dir, "tickets.csv", TICKETS_CSV);
    let profile = write(&dir, "jira.json", PROFILE_JSON);
    let output = dir.path().join("plan.json");

    let result = run_render(&render_args(&data, &profile, Some(output.clone()))).expect("render");
    assert_eq!(result.stats.input_rows, 4);
    assert_eq!(result.stats.dropped_rows, 2);
    assert_eq!(result.stats.hidden_rows, 1);
    assert_eq!(result.cards, 1);
    assert_eq!(result.output.as_deref(), Some(output.as_path()));
    assert!(result.profile_issues.issues.is_empty());

    let plan: Value = serde_json::from_str(&fs::read_to_string(&output).expect("read plan"))
        .expect("plan is JSON");
    assert_eq!(plan["header"]["title"], "Sprint review");
    assert_eq!(plan["header"]["project"], "Nezadáno");
    assert_eq!(plan["header"]["generatedOn"], "18. 10. 2026");
    assert_eq!(plan["header"]["titleColor"], "#0747A6");

    let fields = &plan["cards"][0]["fields"];
    assert_eq!(fields[0]["id"], "TicketID");
    assert_eq!(
        fields[0]["linkTarget"],
        "https://jira.example.com/browse/ABC-1"
    );
    assert_eq!(fields[0]["style"]["color"], "#0052CC");
    assert_eq!(fields[0]["style"]["fontWeight"], "bold");
    assert_eq!(fields[1]["gridColumns"], 3);
    assert_eq!(fields[2]["displayText"], "K-1");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let data = write(&dir, "tickets.csv", TICKETS_CSV);
    let profile = write(&dir, "jira.json", PROFILE_JSON);
    let output = dir.path().join("plan.json");

    let mut args = render_args(&data, &profile, Some(output.clone()));
    args.dry_run = true;
    let result = run_render(&args).expect("render");
    assert_eq!(result.cards, 1);
    assert_eq!(result.output, None);
    assert!(!output.exists());
}

#[test]
fn case_insensitive_rules_hide_more_rows() {
    let dir = TempDir::new().expect("temp dir");
    let data = write(
        &dir,
        "tickets.csv",
        "TicketID,Status\nABC-1,rejected\nABC-2,Open\n",
    );
    let profile = write(&dir, "jira.json", PROFILE_JSON);

    let mut args = render_args(&data, &profile, None);
    args.dry_run = true;
    assert_eq!(run_render(&args).expect("render").cards, 2);

    args.case_insensitive_rules = true;
    assert_eq!(run_render(&args).expect("render").cards, 1);
}

#[test]
fn render_reports_bad_profile() {
    let dir = TempDir::new().expect("temp dir");
    let data = write(&dir, "tickets.csv", TICKETS_CSV);
    let profile = write(&dir, "broken.json", "{ \"schema\": [");

    let error = run_render(&render_args(&data, &profile, None)).expect_err("bad profile");
    assert!(format!("{error:#}").contains("load profile"));
}

#[test]
fn schema_saves_into_directory_with_template_name() {
    let dir = TempDir::new().expect("temp dir");
    let data = write(&dir, "tickets.csv", TICKETS_CSV);
    let base = write(&dir, "jira.json", PROFILE_JSON);
    let out_dir = dir.path().join("profiles");
    fs::create_dir(&out_dir).expect("create dir");

    let result = run_schema(&SchemaArgs {
        data,
        profile: Some(base),
        output: Some(out_dir.clone()),
    })
    .expect("schema");
    let saved = out_dir.join("jira_updated.json");
    assert_eq!(result.output.as_deref(), Some(saved.as_path()));
    assert_eq!(result.headers, vec!["TicketID", "Status", "Summary"]);

    let profile = load_profile(&saved).expect("saved profile loads");
    let ids: Vec<&str> = profile.schema.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["TicketID", "Status", "Summary"]);
    assert_eq!(profile.schema[2].label, "Summary");
    assert_eq!(profile.meta.title, "Sprint review");
    assert_eq!(profile.styles.types.len(), 2);
}

#[test]
fn check_flags_profile_errors() {
    let dir = TempDir::new().expect("temp dir");
    let clean = write(&dir, "clean.json", PROFILE_JSON);
    let result = run_check(&CheckArgs { profile: clean }).expect("check");
    assert!(!result.report.has_errors());
    assert_eq!(result.fields, 3);
    assert_eq!(result.style_classes, 2);

    let broken = write(
        &dir,
        "broken.json",
        r#"{ "schema": [ { "id": "key", "sourceField": "Summary", "regex": "(" } ] }"#,
    );
    let result = run_check(&CheckArgs { profile: broken }).expect("check");
    assert!(result.report.has_errors());
    // The body class is not registered in this profile.
    assert_eq!(result.report.warning_count(), 1);
}
