use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use inkmark_engine::extract::{
    extract_end_marker, extract_end_timestamp, extract_marker, extract_start_timestamp,
    extract_update,
};
use inkmark_engine::{analyze_segment, split_iterations};
use inkmark_types::{Mode, UNKNOWN_WAVEFORM};

/// Per-line dump of what the extractors see in a capture, segment by
/// segment, followed by each segment's verdict. Diagnostic counterpart
/// to `analyze` for captures that unexpectedly yield nothing.
pub fn run(file: &Path, mode: Mode) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("failed to read capture {}", file.display()))?;

    let segments = split_iterations(&text);
    println!(
        "{}: {} segment(s), mode {}",
        file.display(),
        segments.len(),
        mode
    );

    for segment in &segments {
        println!("\nITERATION_{}", segment.label);

        // Mirrors the analyzer's sticky start: only the first hit counts
        let mut start_found = false;
        for line in segment.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let mut notes = Vec::new();

            if !start_found {
                if let Some(stamp) = extract_start_timestamp(line, mode) {
                    notes.push(format!("start={}", stamp));
                    start_found = true;
                }
            }

            if let Some(marker) = extract_marker(line) {
                notes.push(format!("marker={}", marker));
            }

            if line.contains("Sending update") {
                if let Some(update) = extract_update(line) {
                    notes.push(format!(
                        "update height={} waveform={}",
                        update.height,
                        update.waveform.as_deref().unwrap_or(UNKNOWN_WAVEFORM)
                    ));
                }
            }

            if line.contains("update end marker=") && line.contains("end time=") {
                if let (Some(marker), Some(time)) =
                    (extract_end_marker(line), extract_end_timestamp(line))
                {
                    notes.push(format!("end marker={} time={}", marker, time));
                }
            }

            if !notes.is_empty() {
                println!("  {}", line.trim());
                println!("    -> {}", notes.join(", "));
            }
        }

        match analyze_segment(segment, mode) {
            Some(result) => println!(
                "  verdict: marker {} height {} waveform {} duration {:.3}s",
                result.marker,
                result.height,
                result.waveform,
                result.duration_secs()
            ),
            None => println!("  verdict: incomplete, no result"),
        }
    }

    Ok(())
}
