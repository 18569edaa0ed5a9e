use serde::{Deserialize, Serialize};

use crate::mode::Mode;

/// Sentinel waveform name for updates whose waveform could not be read
/// (or reported the auto-selection placeholder).
pub const UNKNOWN_WAVEFORM: &str = "unknown";

/// One display update as last observed for a marker within an iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightEntry {
    pub marker: String,
    pub height: u32,
    pub waveform: String,
}

/// Completion time as last observed for a marker within an iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndTimeEntry {
    pub marker: String,
    /// Sub-second completion stamp, truncated to its last six digits
    pub time: u32,
    /// The line the stamp was read from
    pub line: String,
}

/// Measurement produced for one iteration of a capture.
///
/// Created once per segment that carried a start event, at least one
/// update observation, and at least one end-time observation; never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationResult {
    /// Iteration label as captured from the `ITERATION_<digits>` token
    /// ("01" for unlabeled captures)
    pub iteration: String,
    /// Six-digit start stamp derived from the mode's trigger line
    pub start: u32,
    /// End stamp of the selected update
    pub stop: u32,
    /// Marker whose update drove the measurement
    pub marker: String,
    /// |stop - start|, clock wraparound folded to its magnitude
    pub duration_ms: u32,
    pub height: u32,
    pub waveform: String,
    /// The line the start stamp was read from
    pub start_line: String,
    /// Last-write snapshot of every marker's update, in first-seen order
    pub all_heights: Vec<HeightEntry>,
    /// Last-write snapshot of every marker's end time, in first-seen order
    pub end_times: Vec<EndTimeEntry>,
    pub mode: Mode,
}

impl IterationResult {
    /// Duration in seconds, for display alongside millisecond-grain data.
    pub fn duration_secs(&self) -> f64 {
        f64::from(self.duration_ms) / 1000.0
    }
}
