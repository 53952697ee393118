//! Profile checks.
//!
//! None of these block the pipeline (a bad pattern still renders as
//! "Regex Error"); they exist so profile authors see problems before a
//! document is produced.

use std::collections::BTreeSet;

use rowcard_model::{
    FieldDef, IssueSeverity, LINK_PLACEHOLDER, Profile, ProfileIssue, ProfileReport,
};

use crate::extract::compile_pattern;

pub const EMPTY_FIELD_ID: &str = "RC001";
pub const INVALID_PATTERN: &str = "RC002";
pub const INCOMPLETE_EXTRACTION: &str = "RC003";
pub const UNKNOWN_STYLE_CLASS: &str = "RC004";
pub const DUPLICATE_FIELD_ID: &str = "RC005";
pub const LINK_WITHOUT_PLACEHOLDER: &str = "RC006";

fn issue(
    code: &str,
    severity: IssueSeverity,
    index: usize,
    field: &FieldDef,
    message: String,
) -> ProfileIssue {
    ProfileIssue {
        code: code.to_string(),
        message,
        severity,
        field_index: Some(index),
        field_id: Some(field.id.clone()).filter(|id| !id.is_empty()),
    }
}

/// Check every schema field of `profile`.
pub fn check_profile(profile: &Profile) -> ProfileReport {
    let mut issues = Vec::new();
    let mut seen_ids = BTreeSet::new();
    for (index, field) in profile.schema.iter().enumerate() {
        if field.id.trim().is_empty() {
            issues.push(issue(
                EMPTY_FIELD_ID,
                IssueSeverity::Error,
                index,
                field,
                format!("field #{} has no id", index + 1),
            ));
        } else if !seen_ids.insert(field.id.as_str()) {
            issues.push(issue(
                DUPLICATE_FIELD_ID,
                IssueSeverity::Warning,
                index,
                field,
                format!("field id `{}` is used more than once; the last one wins", field.id),
            ));
        }

        match (&field.source_field, &field.regex) {
            (Some(_), Some(pattern)) => {
                if let Err(error) = compile_pattern(pattern) {
                    issues.push(issue(
                        INVALID_PATTERN,
                        IssueSeverity::Error,
                        index,
                        field,
                        format!("regex `{pattern}` does not compile: {error}"),
                    ));
                }
            }
            (None, Some(_)) => issues.push(issue(
                INCOMPLETE_EXTRACTION,
                IssueSeverity::Warning,
                index,
                field,
                "regex is set but sourceField is missing; the pattern is ignored".to_string(),
            )),
            (Some(_), None) => issues.push(issue(
                INCOMPLETE_EXTRACTION,
                IssueSeverity::Warning,
                index,
                field,
                "sourceField is set but regex is missing; the source is ignored".to_string(),
            )),
            (None, None) => {}
        }

        if profile.type_style(&field.class).is_none() {
            issues.push(issue(
                UNKNOWN_STYLE_CLASS,
                IssueSeverity::Warning,
                index,
                field,
                format!("style class `{}` is not defined; default style applies", field.class),
            ));
        }

        if let Some(template) = &field.link {
            if !template.contains(LINK_PLACEHOLDER) {
                issues.push(issue(
                    LINK_WITHOUT_PLACEHOLDER,
                    IssueSeverity::Warning,
                    index,
                    field,
                    format!("link `{template}` has no {LINK_PLACEHOLDER} placeholder"),
                ));
            }
        }
    }
    ProfileReport { issues }
}
