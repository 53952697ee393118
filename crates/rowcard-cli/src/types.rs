use std::path::PathBuf;

use rowcard_model::ProfileReport;
use rowcard_transform::PipelineStats;

#[derive(Debug)]
pub struct RenderResult {
    pub data_path: PathBuf,
    pub profile_path: PathBuf,
    /// `None` when the plan went to stdout or nothing was written.
    pub output: Option<PathBuf>,
    pub stats: PipelineStats,
    pub fields: usize,
    pub cards: usize,
    pub profile_issues: ProfileReport,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct SchemaResult {
    pub data_path: PathBuf,
    pub output: Option<PathBuf>,
    pub headers: Vec<String>,
    pub rows: usize,
}

#[derive(Debug)]
pub struct CheckResult {
    pub profile_path: PathBuf,
    pub fields: usize,
    pub style_classes: usize,
    pub report: ProfileReport,
}
