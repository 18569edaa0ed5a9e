use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use inkmark_types::IterationResult;

use super::Report;

/// Result tables with an all-heights detail block per iteration and a
/// run summary, colored when stdout is a terminal.
pub fn render(report: &Report) -> Result<()> {
    let color = std::io::stdout().is_terminal();

    println!(
        "Test Case: {}",
        report.test_case.as_deref().unwrap_or("Not specified")
    );
    println!("Mode: {}", report.mode.describe());
    println!("Generated: {}", report.generated_at);

    for file in &report.files {
        println!("\n== {} ==", file.source);
        if file.results.is_empty() {
            println!("  (no complete iterations)");
            continue;
        }

        println!(
            "{:<10} {:>12} {:>8} {:>8} {:>8} {:>8}  {}",
            "Iteration", "Duration(s)", "Start", "Stop", "Marker", "Height", "Waveform"
        );
        for result in &file.results {
            let duration = format!("{:.3}", result.duration_secs());
            let duration = if color {
                format!("{}", duration.yellow().bold())
            } else {
                duration
            };
            println!(
                "{:<10} {:>12} {:>8} {:>8} {:>8} {:>8}  {}",
                result.iteration,
                duration,
                result.start,
                result.stop,
                result.marker,
                result.height,
                result.waveform
            );
        }

        for result in &file.results {
            print_heights(result, color);
        }
    }

    println!("\nIterations: {}", report.summary.iterations);
    if let Some(stats) = &report.summary.durations {
        println!("Average Duration: {:.3} s", stats.avg_ms / 1000.0);
        println!("Min Duration: {:.3} s", f64::from(stats.min_ms) / 1000.0);
        println!("Max Duration: {:.3} s", f64::from(stats.max_ms) / 1000.0);
    }

    Ok(())
}

fn print_heights(result: &IterationResult, color: bool) {
    println!("\n  ITERATION_{} heights:", result.iteration);
    for entry in &result.all_heights {
        let selected = entry.marker == result.marker;
        let line = format!(
            "    marker {}: {}px, {}{}",
            entry.marker,
            entry.height,
            entry.waveform,
            if selected { " [selected]" } else { "" }
        );
        if selected && color {
            println!("{}", line.yellow());
        } else {
            println!("{}", line);
        }
    }
}
