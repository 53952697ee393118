use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span, warn};

use rowcard_ingest::{load_profile, read_records, save_profile};
use rowcard_model::{PipelineOptions, Profile, RuleMatchMode};
use rowcard_transform::{RenderPlan, build_render_plan, check_profile, process_records};

use crate::cli::{CheckArgs, RenderArgs, SchemaArgs};
use crate::types::{CheckResult, RenderResult, SchemaResult};

pub fn run_render(args: &RenderArgs) -> Result<RenderResult> {
    let render_span = info_span!("render", data = %args.data.display());
    let _render_guard = render_span.enter();

    // =========================================================================
    // Stage 1: Load profile and data
    // =========================================================================
    let profile = load_profile(&args.profile)
        .with_context(|| format!("load profile {}", args.profile.display()))?;
    let profile_issues = check_profile(&profile);
    for issue in &profile_issues.issues {
        warn!(
            code = %issue.code,
            field_index = ?issue.field_index,
            severity = ?issue.severity,
            "{}",
            issue.message
        );
    }

    let load_start = Instant::now();
    let table = read_records(&args.data)
        .with_context(|| format!("read data {}", args.data.display()))?;
    info!(
        rows = table.len(),
        columns = table.headers.len(),
        duration_ms = load_start.elapsed().as_millis(),
        "data loaded"
    );

    // =========================================================================
    // Stage 2: Pipeline - sanitize, extract, apply rules
    // =========================================================================
    let options = PipelineOptions::new().with_rule_matching(if args.case_insensitive_rules {
        RuleMatchMode::CaseInsensitive
    } else {
        RuleMatchMode::Exact
    });
    let output = process_records(&table.records, &profile, &options);

    // =========================================================================
    // Stage 3: Resolve styles into the render plan
    // =========================================================================
    let generated_on = args.date.unwrap_or_else(|| Local::now().date_naive());
    let plan = build_render_plan(&profile, &output.records, generated_on);

    // =========================================================================
    // Stage 4: Output
    // =========================================================================
    if !args.dry_run {
        write_plan(&plan, args.output.as_deref())?;
    }

    Ok(RenderResult {
        data_path: args.data.clone(),
        profile_path: args.profile.clone(),
        output: args.output.clone().filter(|_| !args.dry_run),
        stats: output.stats,
        fields: profile.schema.len(),
        cards: plan.cards.len(),
        profile_issues,
        dry_run: args.dry_run,
    })
}

/// Serialize the plan to `path`, or to stdout when no path is given.
fn write_plan(plan: &RenderPlan, path: Option<&Path>) -> Result<()> {
    let mut json = serde_json::to_string_pretty(plan).context("serialize render plan")?;
    json.push('\n');
    match path {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("write render plan {}", path.display()))?;
            info!(path = %path.display(), cards = plan.cards.len(), "render plan written");
        }
        None => {
            io::stdout()
                .lock()
                .write_all(json.as_bytes())
                .context("write render plan to stdout")?;
        }
    }
    Ok(())
}

pub fn run_schema(args: &SchemaArgs) -> Result<SchemaResult> {
    let schema_span = info_span!("schema", data = %args.data.display());
    let _schema_guard = schema_span.enter();

    let table = read_records(&args.data)
        .with_context(|| format!("read data {}", args.data.display()))?;
    let base = match &args.profile {
        Some(path) => {
            load_profile(path).with_context(|| format!("load profile {}", path.display()))?
        }
        None => Profile::default(),
    };
    let profile = base.with_schema_from_headers(&table.headers);

    let output = match &args.output {
        Some(path) => {
            let target = schema_target(&profile, path);
            save_profile(&profile, &target)
                .with_context(|| format!("save profile {}", target.display()))?;
            info!(path = %target.display(), fields = profile.schema.len(), "profile saved");
            Some(target)
        }
        None => {
            let json = profile.to_json_pretty().context("serialize profile")?;
            println!("{json}");
            None
        }
    };

    Ok(SchemaResult {
        data_path: args.data.clone(),
        output,
        headers: table.headers,
        rows: table.records.len(),
    })
}

/// A directory output receives the profile under its save file name.
fn schema_target(profile: &Profile, output: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(profile.save_file_name())
    } else {
        output.to_path_buf()
    }
}

pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    let profile = load_profile(&args.profile)
        .with_context(|| format!("load profile {}", args.profile.display()))?;
    let report = check_profile(&profile);
    info!(
        profile = %args.profile.display(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "profile checked"
    );
    Ok(CheckResult {
        profile_path: args.profile.clone(),
        fields: profile.schema.len(),
        style_classes: profile.styles.types.len(),
        report,
    })
}
