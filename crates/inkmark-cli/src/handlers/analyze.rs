use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use walkdir::WalkDir;

use inkmark_engine::{analyze_log, summarize};
use inkmark_types::{IterationResult, Mode};

use crate::args::OutputFormat;
use crate::output::{self, FileReport, Report};

pub fn run(
    paths: Vec<PathBuf>,
    mode: Mode,
    test_case: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let files = if paths.is_empty() {
        vec![analyze_stdin(mode)?]
    } else {
        let inputs = collect_inputs(&paths)?;
        // Independent per file; merged back in input order
        inputs
            .par_iter()
            .map(|path| analyze_file(path, mode))
            .collect::<Result<Vec<_>>>()?
    };

    for file in &files {
        if file.results.is_empty() {
            eprintln!("note: {} produced no complete iterations", file.source);
        }
    }

    let all_results: Vec<IterationResult> = files
        .iter()
        .flat_map(|file| file.results.iter().cloned())
        .collect();

    let report = Report {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        test_case,
        mode,
        summary: summarize(&all_results),
        files,
    };

    output::render(&report, format)
}

/// Expand directory arguments into their *.log / *.txt files (sorted),
/// pass file arguments through untouched.
fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && is_capture_file(entry.path()) {
                    inputs.push(entry.into_path());
                }
            }
        } else {
            inputs.push(path.clone());
        }
    }
    Ok(inputs)
}

fn is_capture_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("log") | Some("txt")
    )
}

fn analyze_file(path: &Path, mode: Mode) -> Result<FileReport> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read capture {}", path.display()))?;
    Ok(file_report(path.display().to_string(), &text, mode))
}

fn analyze_stdin(mode: Mode) -> Result<FileReport> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read capture from stdin")?;
    Ok(file_report("<stdin>".to_string(), &text, mode))
}

fn file_report(source: String, text: &str, mode: Mode) -> FileReport {
    let results = analyze_log(text, mode);
    let summary = summarize(&results);
    FileReport {
        source,
        results,
        summary,
    }
}
