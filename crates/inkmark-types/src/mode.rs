use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Start-event family applied when scanning a capture.
///
/// Exactly one mode governs an analysis run; it only affects which line
/// yields the start timestamp. Marker, update, and end-time extraction
/// are mode-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Page turn measured from the button release event
    Default,
    /// Swipe cases measured from the button press event
    Swipe,
    /// Suspend/resume measured from the power button press
    Suspend,
}

impl Mode {
    /// Canonical lowercase name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Default => "default",
            Mode::Swipe => "swipe",
            Mode::Suspend => "suspend",
        }
    }

    /// Human-readable label used in report headers.
    pub fn describe(&self) -> &'static str {
        match self {
            Mode::Default => "Default (Button Up)",
            Mode::Swipe => "Swipe Cases (Button Down)",
            Mode::Suspend => "Suspend Scenarios (Power Button)",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Mode::Default),
            "swipe" => Ok(Mode::Swipe),
            "suspend" => Ok(Mode::Suspend),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}
