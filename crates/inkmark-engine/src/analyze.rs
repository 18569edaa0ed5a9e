//! Per-iteration scan and marker selection.
//!
//! The scan is a fold of [`ScanState`] over the segment's lines; nothing
//! outside the accumulator is mutated, so analyzing the same segment
//! twice produces identical results.

use indexmap::IndexMap;

use inkmark_types::{EndTimeEntry, HeightEntry, IterationResult, Mode, UNKNOWN_WAVEFORM};

use crate::extract;
use crate::segment::Segment;

/// Last update observed for a marker. A marker that reports again
/// overwrites this wholesale; earlier heights do not participate in
/// selection.
#[derive(Debug, Clone)]
struct UpdateObservation {
    height: u32,
    waveform: String,
}

/// Last completion stamp observed for a marker, with its source line.
#[derive(Debug, Clone)]
struct EndObservation {
    time: u32,
    line: String,
}

/// Accumulator threaded through the line scan.
#[derive(Debug, Default)]
struct ScanState {
    /// First start stamp found, with its source line; sticky
    start: Option<(u32, String)>,
    /// Most recently seen marker id; sticky until reassigned
    current_marker: Option<String>,
    heights: IndexMap<String, UpdateObservation>,
    end_times: IndexMap<String, EndObservation>,
}

fn scan_line(mut state: ScanState, line: &str, mode: Mode) -> ScanState {
    if line.trim().is_empty() {
        return state;
    }

    if state.start.is_none() {
        if let Some(stamp) = extract::extract_start_timestamp(line, mode) {
            state.start = Some((stamp, line.trim().to_string()));
        }
    }

    if let Some(marker) = extract::extract_marker(line) {
        state.current_marker = Some(marker);
    }

    if line.contains("Sending update") {
        if let Some(marker) = state.current_marker.clone() {
            if let Some(update) = extract::extract_update(line) {
                let waveform = match update.waveform {
                    Some(name) if !name.is_empty() && name != "auto" => name,
                    _ => UNKNOWN_WAVEFORM.to_string(),
                };
                state.heights.insert(
                    marker,
                    UpdateObservation {
                        height: update.height,
                        waveform,
                    },
                );
            }
        }
    }

    if line.contains("update end marker=") && line.contains("end time=") {
        if let Some(marker) = extract::extract_end_marker(line) {
            if let Some(time) = extract::extract_end_timestamp(line) {
                state.end_times.insert(
                    marker,
                    EndObservation {
                        time,
                        line: line.trim().to_string(),
                    },
                );
            }
        }
    }

    state
}

/// Analyze one segment. `None` when the segment lacks a start event,
/// update observations, or end-time observations; there are no partial
/// results.
pub fn analyze_segment(segment: &Segment, mode: Mode) -> Option<IterationResult> {
    let state = segment
        .lines()
        .fold(ScanState::default(), |acc, line| scan_line(acc, line, mode));

    let (start, start_line) = state.start.clone()?;
    if state.heights.is_empty() || state.end_times.is_empty() {
        return None;
    }

    // Markers whose waveform stayed unknown are out of contention unless
    // nothing else is left.
    let valid: Vec<(&String, &UpdateObservation)> = state
        .heights
        .iter()
        .filter(|(_, obs)| !obs.waveform.eq_ignore_ascii_case(UNKNOWN_WAVEFORM))
        .collect();
    let pool: Vec<(&String, &UpdateObservation)> = if valid.is_empty() {
        state.heights.iter().collect()
    } else {
        valid
    };

    let max_height = pool.iter().map(|(_, obs)| obs.height).max()?;
    let mut tied: Vec<&String> = pool
        .iter()
        .filter(|(_, obs)| obs.height == max_height)
        .map(|(marker, _)| *marker)
        .collect();
    // Numeric ascending, non-numeric ids count as zero; the stable sort
    // keeps observation order among equal values.
    tied.sort_by_key(|marker| marker.parse::<u64>().unwrap_or(0));

    let chosen = match tied.last() {
        Some(marker) => (*marker).clone(),
        None => pool.first().map(|(marker, _)| (*marker).clone())?,
    };
    let chosen_obs = state.heights.get(&chosen)?;

    // A chosen marker without its own completion borrows the largest
    // observed end time, whichever marker it belongs to.
    let stop = match state.end_times.get(&chosen) {
        Some(end) => end.time,
        None => state.end_times.values().max_by_key(|end| end.time)?.time,
    };

    let duration_ms = (i64::from(stop) - i64::from(start)).unsigned_abs() as u32;

    Some(IterationResult {
        iteration: segment.label.clone(),
        start,
        stop,
        marker: chosen.clone(),
        duration_ms,
        height: chosen_obs.height,
        waveform: chosen_obs.waveform.clone(),
        start_line,
        all_heights: state
            .heights
            .iter()
            .map(|(marker, obs)| HeightEntry {
                marker: marker.clone(),
                height: obs.height,
                waveform: obs.waveform.clone(),
            })
            .collect(),
        end_times: state
            .end_times
            .iter()
            .map(|(marker, end)| EndTimeEntry {
                marker: marker.clone(),
                time: end.time,
                line: end.line.clone(),
            })
            .collect(),
        mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(body: &str) -> Segment {
        Segment {
            label: "01".to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn update_lines_before_any_marker_are_ignored() {
        let seg = segment(
            "button 1 up 123456.789\n\
             Sending update. height=900 waveform:0x2 (REAGL)\n\
             EPDC][5]\n\
             Sending update. height=400 waveform:0x2 (DU)\n\
             update end marker=5 end time=111222\n",
        );
        let result = analyze_segment(&seg, Mode::Default).unwrap();
        assert_eq!(result.marker, "5");
        assert_eq!(result.height, 400);
        assert_eq!(result.all_heights.len(), 1);
    }

    #[test]
    fn marker_persists_across_lines() {
        let seg = segment(
            "button 1 up 123456.789\n\
             EPDC][5]\n\
             some unrelated line\n\
             Sending update. height=640 waveform:0x2 (GC16)\n\
             update end marker=5 end time=500000\n",
        );
        let result = analyze_segment(&seg, Mode::Default).unwrap();
        assert_eq!(result.marker, "5");
        assert_eq!(result.waveform, "GC16");
    }

    #[test]
    fn auto_waveform_becomes_unknown() {
        let seg = segment(
            "button 1 up 123456.789\n\
             EPDC][5]\n\
             Sending update. height=640 waveform:0x0 (auto)\n\
             update end marker=5 end time=500000\n",
        );
        let result = analyze_segment(&seg, Mode::Default).unwrap();
        assert_eq!(result.waveform, UNKNOWN_WAVEFORM);
    }

    #[test]
    fn start_stamp_is_sticky() {
        let seg = segment(
            "button 1 up 111111.111\n\
             button 1 up 222222.222\n\
             EPDC][5]\n\
             Sending update. height=640 waveform:0x2 (DU)\n\
             update end marker=5 end time=500000\n",
        );
        let result = analyze_segment(&seg, Mode::Default).unwrap();
        assert_eq!(result.start, 111111);
        assert_eq!(result.start_line, "button 1 up 111111.111");
    }
}
