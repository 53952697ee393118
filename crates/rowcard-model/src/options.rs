//! Configuration options for the record pipeline.

use serde::{Deserialize, Serialize};

/// Mode for comparing a field value against `Rule::matches`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleMatchMode {
    /// Byte-for-byte string equality.
    #[default]
    Exact,
    /// Equality after Unicode lowercasing of both sides.
    CaseInsensitive,
}

impl RuleMatchMode {
    pub fn matches(self, value: &str, expected: &str) -> bool {
        match self {
            RuleMatchMode::Exact => value == expected,
            RuleMatchMode::CaseInsensitive => value.to_lowercase() == expected.to_lowercase(),
        }
    }
}

/// Options controlling record processing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// How rule literals are compared with resolved field values.
    pub rule_matching: RuleMatchMode,
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule_matching(mut self, mode: RuleMatchMode) -> Self {
        self.rule_matching = mode;
        self
    }
}
