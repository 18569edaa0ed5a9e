use std::fmt;

/// Result type for inkmark-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A mode name that is not one of default/swipe/suspend
    UnknownMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownMode(name) => {
                write!(f, "unknown mode '{}' (expected default, swipe, or suspend)", name)
            }
        }
    }
}

impl std::error::Error for Error {}
