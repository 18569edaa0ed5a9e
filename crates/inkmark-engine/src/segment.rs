//! Splits a raw capture into labeled iterations.

use std::sync::LazyLock;

use regex::Regex;

/// Iteration boundary token, as stamped into captures by the harness
/// Example: "ITERATION_03"
static ITERATION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ITERATION_(\d+)").unwrap());

/// Label applied when a capture carries no iteration tokens at all.
const FALLBACK_LABEL: &str = "01";

/// One labeled slice of a capture. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Digits captured from the boundary token, verbatim
    pub label: String,
    /// Raw text up to the next boundary token or end of input
    pub body: String,
}

impl Segment {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.body.lines()
    }
}

/// Split `text` on `ITERATION_<digits>` tokens (case-sensitive). Text
/// before the first token is discarded; a capture without any token
/// becomes a single segment labeled "01".
pub fn split_iterations(text: &str) -> Vec<Segment> {
    let mut bounds = Vec::new();
    for caps in ITERATION_TOKEN.captures_iter(text) {
        if let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) {
            bounds.push((whole.start(), whole.end(), digits.as_str().to_string()));
        }
    }

    if bounds.is_empty() {
        return vec![Segment {
            label: FALLBACK_LABEL.to_string(),
            body: text.to_string(),
        }];
    }

    bounds
        .iter()
        .enumerate()
        .map(|(idx, (_, body_start, label))| {
            let body_end = bounds
                .get(idx + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(text.len());
            Segment {
                label: label.clone(),
                body: text[*body_start..body_end].to_string(),
            }
        })
        .collect()
}
