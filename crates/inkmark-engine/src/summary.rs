use serde::{Deserialize, Serialize};

use inkmark_types::IterationResult;

/// Aggregate view of one analysis run, for report headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub iterations: usize,
    pub durations: Option<DurationStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationStats {
    pub avg_ms: f64,
    pub min_ms: u32,
    pub max_ms: u32,
}

pub fn summarize(results: &[IterationResult]) -> RunSummary {
    if results.is_empty() {
        return RunSummary {
            iterations: 0,
            durations: None,
        };
    }

    let mut min_ms = u32::MAX;
    let mut max_ms = 0u32;
    let mut total_ms = 0u64;

    for result in results {
        min_ms = min_ms.min(result.duration_ms);
        max_ms = max_ms.max(result.duration_ms);
        total_ms += u64::from(result.duration_ms);
    }

    RunSummary {
        iterations: results.len(),
        durations: Some(DurationStats {
            avg_ms: total_ms as f64 / results.len() as f64,
            min_ms,
            max_ms,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkmark_types::Mode;

    fn result(duration_ms: u32) -> IterationResult {
        IterationResult {
            iteration: "01".to_string(),
            start: 0,
            stop: duration_ms,
            marker: "1".to_string(),
            duration_ms,
            height: 100,
            waveform: "DU".to_string(),
            start_line: String::new(),
            all_heights: Vec::new(),
            end_times: Vec::new(),
            mode: Mode::Default,
        }
    }

    #[test]
    fn empty_run_has_no_duration_stats() {
        let summary = summarize(&[]);
        assert_eq!(summary.iterations, 0);
        assert!(summary.durations.is_none());
    }

    #[test]
    fn stats_cover_min_max_and_average() {
        let summary = summarize(&[result(100), result(300), result(200)]);
        assert_eq!(summary.iterations, 3);
        let stats = summary.durations.unwrap();
        assert_eq!(stats.min_ms, 100);
        assert_eq!(stats.max_ms, 300);
        assert_eq!(stats.avg_ms, 200.0);
    }
}
