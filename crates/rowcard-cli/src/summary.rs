use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rowcard_model::{IssueSeverity, ProfileIssue, ProfileReport};

use crate::types::{CheckResult, RenderResult, SchemaResult};

/// Print the render summary to stderr, keeping stdout free for the plan.
pub fn print_render_summary(result: &RenderResult) {
    eprintln!("Data: {}", result.data_path.display());
    eprintln!("Profile: {}", result.profile_path.display());
    match (&result.output, result.dry_run) {
        (_, true) => eprintln!("Render plan: not written (dry run)"),
        (Some(path), false) => eprintln!("Render plan: {}", path.display()),
        (None, false) => eprintln!("Render plan: stdout"),
    }

    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input rows"),
        header_cell("Dropped"),
        header_cell("Hidden"),
        header_cell("Cards"),
        header_cell("Fields"),
        header_cell("Derived"),
        header_cell("Bad patterns"),
    ]);
    apply_table_style(&mut table);
    for index in 0..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(stats.input_rows),
        count_cell(stats.dropped_rows, Color::DarkYellow),
        count_cell(stats.hidden_rows, Color::DarkYellow),
        Cell::new(result.cards)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(result.fields),
        Cell::new(stats.derived_fields),
        count_cell(stats.invalid_patterns, Color::Red),
    ]);
    eprintln!("{table}");
    if let Some(table) = issue_table(&result.profile_issues) {
        eprintln!();
        eprintln!("Profile issues:");
        eprintln!("{table}");
    }
}

pub fn print_schema_summary(result: &SchemaResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Field")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, header) in result.headers.iter().enumerate() {
        table.add_row(vec![dim_cell(index + 1), Cell::new(header)]);
    }
    eprintln!("Data: {} ({} rows)", result.data_path.display(), result.rows);
    if let Some(path) = &result.output {
        eprintln!("Profile: {}", path.display());
    }
    eprintln!("{table}");
}

pub fn print_check_summary(result: &CheckResult) {
    println!("Profile: {}", result.profile_path.display());
    println!(
        "Fields: {}, style classes: {}",
        result.fields, result.style_classes
    );
    match issue_table(&result.report) {
        Some(table) => println!("{table}"),
        None => println!("No issues found."),
    }
    print_counts(&result.report, &result.profile_path);
}

fn print_counts(report: &ProfileReport, path: &Path) {
    let errors = report.error_count();
    let warnings = report.warning_count();
    if errors > 0 || warnings > 0 {
        println!(
            "{}: {errors} error(s), {warnings} warning(s)",
            path.display()
        );
    }
}

fn issue_table(report: &ProfileReport) -> Option<Table> {
    if report.issues.is_empty() {
        return None;
    }
    let mut issues: Vec<&ProfileIssue> = report.issues.iter().collect();
    issues.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.field_index.cmp(&b.field_index))
            .then_with(|| a.code.cmp(&b.code))
    });
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("#"),
        header_cell("Field"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            issue
                .field_index
                .map_or_else(|| dim_cell("-"), |index| Cell::new(index + 1)),
            issue
                .field_id
                .as_deref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(&issue.message),
        ]);
    }
    Some(table)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
