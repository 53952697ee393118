pub mod edit;
pub mod error;
pub mod issues;
pub mod options;
pub mod profile;
pub mod record;
pub mod style;

pub use edit::NEW_FIELD_LABEL;
pub use error::{ProfileError, Result};
pub use issues::{IssueSeverity, ProfileIssue, ProfileReport};
pub use options::{PipelineOptions, RuleMatchMode};
pub use profile::{FieldDef, FieldWidth, LINK_PLACEHOLDER, Profile, ProfileMeta, Rule};
pub use record::{ProcessedRecord, Record};
pub use style::{
    DEFAULT_COLOR, DEFAULT_FONT_SIZE, DEFAULT_FONT_WEIGHT, GlobalStyles, HeaderStyle, StyleClass,
    StyleDescriptor, StylePatch, Styles, TypeStyle,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_report_counts() {
        let report = ProfileReport {
            issues: vec![
                ProfileIssue {
                    code: "RC002".to_string(),
                    message: "invalid regex".to_string(),
                    severity: IssueSeverity::Error,
                    field_index: Some(0),
                    field_id: Some("ticket".to_string()),
                },
                ProfileIssue {
                    code: "RC004".to_string(),
                    message: "unknown style class".to_string(),
                    severity: IssueSeverity::Warning,
                    field_index: Some(1),
                    field_id: Some("summary".to_string()),
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
    }

    #[test]
    fn rule_match_modes() {
        assert!(RuleMatchMode::Exact.matches("Done", "Done"));
        assert!(!RuleMatchMode::Exact.matches("done", "Done"));
        assert!(RuleMatchMode::CaseInsensitive.matches("done", "DONE"));
    }
}
