//! Conditional rules: row suppression and per-field style overrides.

use indexmap::IndexMap;
use tracing::{debug, trace};

use rowcard_model::{FieldDef, ProcessedRecord, Record, RuleMatchMode, StylePatch};

/// Outcome of evaluating every rule of a schema against one record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleVerdict {
    /// Set once any matching rule has `hide: true`; never cleared.
    pub hidden: bool,
    /// Style override per field id, from the last matching rule of that field.
    pub overrides: IndexMap<String, StylePatch>,
}

/// Counts reported by [`RuleEngine::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleStats {
    pub evaluated: usize,
    pub hidden: usize,
    pub styled: usize,
}

/// Evaluates the rules declared in a schema.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    schema: &'a [FieldDef],
    mode: RuleMatchMode,
}

impl<'a> RuleEngine<'a> {
    pub fn new(schema: &'a [FieldDef]) -> Self {
        Self {
            schema,
            mode: RuleMatchMode::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RuleMatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Evaluate all rules, in schema then declaration order, for one record.
    pub fn evaluate(&self, record: &Record) -> RuleVerdict {
        let mut verdict = RuleVerdict::default();
        for field in self.schema.iter().filter(|field| !field.rules.is_empty()) {
            let value = record.text(&field.id);
            for rule in &field.rules {
                if !self.mode.matches(value, &rule.matches) {
                    continue;
                }
                trace!(field_id = %field.id, matches = %rule.matches, hide = rule.hide, "rule matched");
                if rule.hide {
                    verdict.hidden = true;
                }
                verdict
                    .overrides
                    .insert(field.id.clone(), rule.style.clone());
            }
        }
        verdict
    }

    /// Drop hidden records and pair the rest with their overrides.
    ///
    /// Surviving records keep their input order.
    pub fn apply(&self, records: Vec<Record>) -> (Vec<ProcessedRecord>, RuleStats) {
        let mut stats = RuleStats {
            evaluated: records.len(),
            ..RuleStats::default()
        };
        let mut visible = Vec::with_capacity(records.len());
        for record in records {
            let verdict = self.evaluate(&record);
            if verdict.hidden {
                stats.hidden += 1;
                continue;
            }
            if !verdict.overrides.is_empty() {
                stats.styled += 1;
            }
            visible.push(ProcessedRecord {
                record,
                style_overrides: verdict.overrides,
            });
        }
        debug!(
            evaluated = stats.evaluated,
            hidden = stats.hidden,
            styled = stats.styled,
            mode = ?self.mode,
            "rules applied"
        );
        (visible, stats)
    }
}

/// Apply the rules of `schema` with the given match mode.
pub fn apply_rules(
    records: Vec<Record>,
    schema: &[FieldDef],
    mode: RuleMatchMode,
) -> (Vec<ProcessedRecord>, RuleStats) {
    RuleEngine::new(schema).with_mode(mode).apply(records)
}
