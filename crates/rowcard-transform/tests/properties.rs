//! Property tests for pipeline invariants.

use proptest::prelude::*;
use rowcard_model::{FieldDef, PipelineOptions, Profile, Record, Rule};
use rowcard_transform::{process_records, process_text};
use rowcard_transform::resolve::{MAX_DISPLAY_LINES, TRUNCATION_MARKER};

fn profile() -> Profile {
    Profile::default()
        .with_field_added(FieldDef::new("id", "Id"))
        .with_field_added(FieldDef::new("code", "Code").with_extraction("text", r"CODE-(\d+)"))
        .with_field_added(FieldDef::new("state", "State").with_rule(Rule::new("hidden").hiding()))
}

fn row_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop_oneof![Just("open".to_string()), Just("hidden".to_string()), Just(String::new())],
        "[a-z ]{0,8}(CODE-[0-9]{1,3})?[a-z ]{0,8}",
    )
}

proptest! {
    #[test]
    fn output_keeps_input_order(rows in prop::collection::vec(row_strategy(), 0..24)) {
        let records: Vec<Record> = rows
            .iter()
            .enumerate()
            .map(|(index, (state, text))| {
                [
                    ("id", index.to_string()),
                    ("state", state.clone()),
                    ("text", text.clone()),
                ]
                .into_iter()
                .collect()
            })
            .collect();
        let output = process_records(&records, &profile(), &PipelineOptions::default());

        let ids: Vec<usize> = output
            .records
            .iter()
            .map(|r| r.record.text("id").parse().unwrap())
            .collect();
        prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        let expected = rows.iter().filter(|(state, _)| state != "hidden").count();
        prop_assert_eq!(output.records.len(), expected);
        prop_assert_eq!(output.stats.hidden_rows, rows.len() - expected);
    }

    #[test]
    fn rerunning_on_output_is_stable(rows in prop::collection::vec(row_strategy(), 1..12)) {
        let records: Vec<Record> = rows
            .iter()
            .enumerate()
            .map(|(index, (state, text))| {
                [
                    ("id", index.to_string()),
                    ("state", state.clone()),
                    ("text", text.clone()),
                ]
                .into_iter()
                .collect()
            })
            .collect();
        let profile = profile();
        let first = process_records(&records, &profile, &PipelineOptions::default());
        let again: Vec<Record> = first.records.iter().map(|r| r.record.clone()).collect();
        let second = process_records(&again, &profile, &PipelineOptions::default());

        prop_assert_eq!(first.records, second.records);
    }

    #[test]
    fn display_text_never_exceeds_limit(lines in prop::collection::vec("[a-z*]{0,6}", 0..40)) {
        let text = process_text(Some(&lines.join("\n")));
        let count = text.lines().count();
        prop_assert!(count <= MAX_DISPLAY_LINES + 1);
        if count == MAX_DISPLAY_LINES + 1 {
            prop_assert_eq!(text.lines().last(), Some(TRUNCATION_MARKER));
        }
        prop_assert!(text.lines().all(|line| !line.trim().is_empty() && line.trim() != "*"));
    }
}
