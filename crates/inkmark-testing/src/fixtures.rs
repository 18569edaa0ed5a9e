//! Known-answer capture generation and placement.
//!
//! Each builder returns a capture whose expected analysis is stated in
//! its doc comment, so integration tests can assert concrete numbers
//! without re-deriving them inline.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

/// Single default-mode iteration.
///
/// Expected: iteration "01", start 456789, marker "5", stop 111222,
/// duration 345567 ms, height 800, waveform "REAGL".
pub fn default_capture() -> String {
    "\
ITERATION_01
[12345.678] button 1 up 123456.789
[12345.679] EPDC][5] submit
[12345.680] Sending update. height=800 waveform:0x1 (REAGL)
[12345.681] update end marker=5 end time=111222
"
    .to_string()
}

/// Two default-mode iterations.
///
/// Expected: "01" start 456789, marker "123", stop 789456, duration
/// 332667 ms, height 800, "REAGL"; "02" start 457890, marker "124",
/// stop 890567, duration 432677 ms, height 600, "DU".
pub fn batch_capture() -> String {
    "\
ITERATION_01
[12345.678] button 1 up 123456.789
[12345.679] EPDC][123] submit
[12345.680] Sending update. height=800 waveform:0x12345 (REAGL)
[12345.681] update end marker=123 end time=789456
[12345.682] unrelated line

ITERATION_02
[12346.678] button 1 up 123457.890
[12346.679] EPDC][124] submit
[12346.680] Sending update. height=600 waveform:0x12346 (DU)
[12346.681] update end marker=124 end time=890567
[12346.682] unrelated line
"
    .to_string()
}

/// Single suspend-mode iteration using the canonical power-button line.
///
/// Expected: iteration "01", start 654321, marker "9", stop 700000,
/// duration 45679 ms, height 1024, waveform "GL16".
pub fn suspend_capture() -> String {
    "\
ITERATION_01
[100.001] def:pbpress:time=987654.321:Power button pressed
[100.002] EPDC][9] submit
[100.003] Sending update. height=1024 waveform:0x3 (GL16)
[100.004] update end marker=9 end time=700000
"
    .to_string()
}

/// An iteration that never produces a start event; analysis must yield
/// nothing for it.
pub fn incomplete_capture() -> String {
    "\
ITERATION_01
[12345.679] EPDC][5] submit
[12345.680] Sending update. height=800 waveform:0x1 (REAGL)
[12345.681] update end marker=5 end time=111222
"
    .to_string()
}

/// Write a capture under `dir` and return its path.
pub fn write_capture(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}
