// Engine crate - core extraction pipeline (segmentation, line scan, marker selection)
// This layer is pure text computation; file handling and presentation live in the CLI

pub mod analyze;
pub mod extract;
pub mod segment;
pub mod summary;

pub use analyze::analyze_segment;
pub use segment::{Segment, split_iterations};
pub use summary::{DurationStats, RunSummary, summarize};

use inkmark_types::{IterationResult, Mode};

// Façade API - Stable public interface for the CLI layer

/// Run the full pipeline over a raw capture: split into iterations and
/// analyze each in order. Iterations missing a start event, update
/// observations, or end times are omitted from the output.
pub fn analyze_log(text: &str, mode: Mode) -> Vec<IterationResult> {
    split_iterations(text)
        .iter()
        .filter_map(|segment| analyze_segment(segment, mode))
        .collect()
}
