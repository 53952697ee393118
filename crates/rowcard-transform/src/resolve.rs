//! Style resolution and display-text processing for one field instance.
//!
//! Layers, lowest precedence first:
//!
//! 1. the base style of the field's class from `styles.types`, or the
//!    built-in default when the class is not registered;
//! 2. the override selected by the field's rules, merged key by key;
//! 3. link presentation, when the field has a link template and a value.

use serde::Serialize;

use rowcard_model::{
    FieldDef, LINK_PLACEHOLDER, ProcessedRecord, Profile, StyleDescriptor, StylePatch, TypeStyle,
};

/// Longest display text, in lines, before truncation.
pub const MAX_DISPLAY_LINES: usize = 20;
/// Line appended to truncated display text.
pub const TRUNCATION_MARKER: &str = "...(truncated)";
pub const LINK_COLOR: &str = "#0052CC";
pub const LINK_DECORATION: &str = "underline";

/// Display-ready form of one field of one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedField {
    pub display_text: String,
    pub style: StyleDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
}

/// Clean a value for display.
///
/// Lines that are a lone `*` are dropped, blank lines are removed so
/// paragraphs are separated by a single line break, and the result is
/// trimmed. More than [`MAX_DISPLAY_LINES`] lines are cut and marked.
pub fn process_text(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let lines: Vec<&str> = value
        .lines()
        .filter(|line| line.trim() != "*")
        .filter(|line| !line.trim().is_empty())
        .collect();
    let text = lines.join("\n");
    let text = text.trim();
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() <= MAX_DISPLAY_LINES {
        return text.to_string();
    }
    let mut kept = lines[..MAX_DISPLAY_LINES].join("\n");
    kept.push('\n');
    kept.push_str(TRUNCATION_MARKER);
    kept
}

/// Link target for `field`, substituting the first placeholder with `value`.
///
/// Empty or absent values produce no link. A template without the
/// placeholder is used as-is.
pub fn link_target(field: &FieldDef, value: Option<&str>) -> Option<String> {
    let template = field.link.as_deref()?;
    let value = value.filter(|value| !value.is_empty())?;
    Some(template.replacen(LINK_PLACEHOLDER, value, 1))
}

/// Layer base style, rule override and link presentation.
pub fn resolve_style(
    base: Option<&TypeStyle>,
    rule_override: Option<&StylePatch>,
    linked: bool,
) -> StyleDescriptor {
    let mut style = match base {
        Some(base) => StyleDescriptor::from(base),
        None => StyleDescriptor::default(),
    };
    if let Some(patch) = rule_override {
        style.apply(patch);
    }
    if linked {
        style.color = LINK_COLOR.to_string();
        style.text_decoration = Some(LINK_DECORATION.to_string());
    }
    style
}

/// Resolve one field from its raw value, base style and rule override.
pub fn resolve(
    field: &FieldDef,
    value: Option<&str>,
    base: Option<&TypeStyle>,
    rule_override: Option<&StylePatch>,
) -> ResolvedField {
    let link_target = link_target(field, value);
    ResolvedField {
        display_text: process_text(value),
        style: resolve_style(base, rule_override, link_target.is_some()),
        link_target,
    }
}

/// Resolve `field` of a processed record against the profile's style registry.
pub fn resolve_field(profile: &Profile, field: &FieldDef, record: &ProcessedRecord) -> ResolvedField {
    resolve(
        field,
        record.record.get(&field.id),
        profile.type_style(&field.class),
        record.style_override(&field.id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_asterisk_lines_and_blank_runs() {
        let value = "  Intro\n*\n\n\n  indented\n \t\nEnd *\n";
        assert_eq!(process_text(Some(value)), "Intro\n  indented\nEnd *");
    }

    #[test]
    fn absent_value_is_empty_text() {
        assert_eq!(process_text(None), "");
    }

    #[test]
    fn truncates_after_twenty_lines() {
        let value: Vec<String> = (1..=25).map(|n| format!("line {n}")).collect();
        let text = process_text(Some(&value.join("\n")));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), MAX_DISPLAY_LINES + 1);
        assert_eq!(lines[0], "line 1");
        assert_eq!(lines[19], "line 20");
        assert_eq!(lines[20], TRUNCATION_MARKER);
    }

    #[test]
    fn exactly_twenty_lines_are_kept_whole() {
        let value: Vec<String> = (1..=20).map(|n| format!("line {n}")).collect();
        let text = process_text(Some(&value.join("\n")));
        assert!(!text.contains(TRUNCATION_MARKER));
        assert_eq!(text.lines().count(), 20);
    }

    #[test]
    fn link_substitutes_placeholder_once() {
        let field = FieldDef::new("key", "Key").with_link("https://x/${}?again=${}");
        assert_eq!(
            link_target(&field, Some("ABC-1")).as_deref(),
            Some("https://x/ABC-1?again=${}")
        );
        assert_eq!(link_target(&field, Some("")), None);
        assert_eq!(link_target(&field, None), None);
        assert_eq!(link_target(&FieldDef::new("key", "Key"), Some("ABC-1")), None);
    }

    #[test]
    fn unknown_class_uses_default_style() {
        let style = resolve_style(None, None, false);
        assert_eq!(style.font_size, 10.0);
        assert_eq!(style.color, "#000000");
        assert_eq!(style.font_weight, "normal");
        assert_eq!(style.text_decoration, None);
    }
}
