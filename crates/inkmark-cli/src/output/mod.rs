mod delimited;
mod json;
mod table;

use anyhow::Result;
use serde::Serialize;

use inkmark_engine::RunSummary;
use inkmark_types::{IterationResult, Mode};

use crate::args::OutputFormat;

/// Analysis of one input (file or stdin).
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: String,
    pub results: Vec<IterationResult>,
    pub summary: RunSummary,
}

/// Whole-run report handed to the renderers; also the JSON document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: String,
    pub test_case: Option<String>,
    pub mode: Mode,
    pub summary: RunSummary,
    pub files: Vec<FileReport>,
}

pub fn render(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => table::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Csv => delimited::render(report),
    }
}
