//! Line-level extractors for EPDC kernel log events.
//!
//! The start-timestamp extractor is dispatched by [`Mode`]; marker,
//! update, and end-time extraction apply to every mode. All extractors
//! are pure: a pattern miss is `None`, never an error.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use inkmark_types::Mode;

/// Regex for the page-turn release trigger
/// Example: "button 1 up 123456.789"
static BUTTON_UP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"button 1 up (\d+\.\d+)").unwrap());

/// Regex for the swipe-case press trigger
/// Example: "Sending button 1 down 123456.789"
static BUTTON_DOWN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Sending button 1 down (\d+\.\d+)").unwrap());

/// Regex for the power-button trigger as the firmware actually spells it
/// Example: "def:pbpress:time=123456.789:Power button pressed"
static POWER_PRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def:pbpress:time=(\d+\.\d+):Power button pressed").unwrap());

/// Looser power-button spellings seen across firmware builds, tried in
/// order after the canonical pattern. Captures a plain digit run rather
/// than a fractional stamp.
static POWER_FALLBACKS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)Power button pressed.*time[=:](\d+)",
        r"(?i)pbpress.*time[=:](\d+)",
        r"(?i)button.*power.*time[=:](\d+)",
        r"(?i)Power.*button.*time[=:](\d+)",
        r"(?i)Power.*pressed.*time[=:](\d+)",
        r"(?i)(?:power|pb).*(\d{6,})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Marker id in EPDC driver lines
/// Example: "EPDC][5] submit"
static MARKER_EPDC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"EPDC\]\[(\d+)\]").unwrap());

/// Marker id in framebuffer driver lines
/// Example: "mxc_epdc_fb: [5] update"
static MARKER_FB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"mxc_epdc_fb: \[(\d+)\]").unwrap());

/// Update height, bare form
static HEIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"height=(\d+)").unwrap());

/// Update height, width-prefixed form
static WIDTH_HEIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"width=\d+, height=(\d+)").unwrap());

/// Waveform name spellings, tried in order; the name sits in parentheses
/// after the raw mode value.
/// Example: "Sending update. height=800 waveform:0x2 (REAGL)"
static WAVEFORM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"new waveform = (?:0x)?[\da-f]+ \(([\w_() ]+)\)",
        r"waveform:(?:0x)?[\da-f]+ \(([\w_() ]+)\)",
        r"waveform=(?:0x)?[\da-f]+ \(([\w_() ]+)\)",
        r"Sending update\. waveform:(?:0x)?[\da-f]+ \(([\w_() ]+)\)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Marker id on the completion line
/// Example: "update end marker=5 end time=111222"
static END_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"update end marker=(\d+)").unwrap());

/// Completion stamp on the completion line
static END_TIME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"end time=(\d+)").unwrap());

/// Height and (possibly absent) waveform name read from one update line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub height: u32,
    /// Trimmed waveform name as matched; `None` when no spelling matched.
    /// Normalization to the "unknown" sentinel happens at the analyzer.
    pub waveform: Option<String>,
}

/// Derive the six-digit start stamp for `mode` from one line.
pub fn extract_start_timestamp(line: &str, mode: Mode) -> Option<u32> {
    match mode {
        Mode::Default => BUTTON_UP
            .captures(line)
            .and_then(|caps| split_timestamp(&caps[1])),
        Mode::Swipe => BUTTON_DOWN
            .captures(line)
            .and_then(|caps| split_timestamp(&caps[1])),
        Mode::Suspend => extract_suspend_timestamp(line),
    }
}

fn extract_suspend_timestamp(line: &str) -> Option<u32> {
    if let Some(caps) = POWER_PRESS.captures(line) {
        return split_timestamp(&caps[1]);
    }

    for pattern in POWER_FALLBACKS.iter() {
        if let Some(caps) = pattern.captures(line) {
            return six_digit_window(&caps[1]);
        }
    }

    let lower = line.to_lowercase();
    if lower.contains("power button") || lower.contains("pbpress") {
        debug!(
            "power button line without a recognizable timestamp: {}",
            line.trim()
        );
    }

    None
}

/// Fold a fractional stamp "A.B" into six digits: the last three digits
/// of A followed by the first three digits of B.
fn split_timestamp(raw: &str) -> Option<u32> {
    let (secs, frac) = raw.split_once('.')?;
    let tail = &secs[secs.len().saturating_sub(3)..];
    let head = &frac[..frac.len().min(3)];
    format!("{tail}{head}").parse().ok()
}

/// Clamp a bare digit run to six digits: longer captures keep the
/// trailing window, exactly six pass through, shorter captures zero-pad
/// on the left (which parses to the same value).
fn six_digit_window(digits: &str) -> Option<u32> {
    let window = if digits.len() > 6 {
        &digits[digits.len() - 6..]
    } else {
        digits
    };
    window.parse().ok()
}

/// Marker id from a driver line, if present. EPDC spelling wins over the
/// framebuffer spelling.
pub fn extract_marker(line: &str) -> Option<String> {
    MARKER_EPDC
        .captures(line)
        .or_else(|| MARKER_FB.captures(line))
        .map(|caps| caps[1].to_string())
}

/// Height and waveform from an update line. No height means no event,
/// even when a waveform name matched.
pub fn extract_update(line: &str) -> Option<UpdateEvent> {
    let caps = HEIGHT
        .captures(line)
        .or_else(|| WIDTH_HEIGHT.captures(line))?;
    let height = caps[1].parse().ok()?;

    let waveform = WAVEFORM_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(line))
        .map(|caps| caps[1].trim().to_string());

    Some(UpdateEvent { height, waveform })
}

/// Marker id from a completion line.
pub fn extract_end_marker(line: &str) -> Option<String> {
    END_MARKER.captures(line).map(|caps| caps[1].to_string())
}

/// Completion stamp from a completion line, truncated to the last six
/// digits of the capture. Truncation only: short captures are used as-is,
/// unlike the suspend fallback's padding.
pub fn extract_end_timestamp(line: &str) -> Option<u32> {
    let caps = END_TIME.captures(line)?;
    let digits = &caps[1];
    let window = if digits.len() > 6 {
        &digits[digits.len() - 6..]
    } else {
        digits
    };
    window.parse().ok()
}
