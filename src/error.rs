//! Error types for configuration loading and graphics bring-up.

use std::fmt;

/// Problems with a tuning document.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    /// The document is not valid JSON for `Tuning`.
    Parse(String),
    /// A field holds a value the simulation cannot run with.
    Invalid {
        /// Offending field name.
        field: &'static str,
        /// Human readable constraint.
        reason: &'static str,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Parse(msg) => write!(f, "tuning parse error: {msg}"),
            TuningError::Invalid { field, reason } => {
                write!(f, "invalid tuning field `{field}`: {reason}")
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        TuningError::Parse(err.to_string())
    }
}

/// Fatal failures before the first round starts.
#[derive(Debug)]
pub enum StartupError {
    /// No browser window/document available.
    NoWindow,
    /// The `#canvas` element is missing or is not a canvas.
    NoCanvas,
    /// The rendering surface could not be created.
    Surface(String),
    /// No suitable GPU adapter.
    Adapter(String),
    /// Device request failed.
    Device(String),
    /// Tuning could not be read or validated.
    Tuning(TuningError),
    /// Tuning file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::NoWindow => write!(f, "no window available"),
            StartupError::NoCanvas => write!(f, "no #canvas element"),
            StartupError::Surface(msg) => write!(f, "failed to create surface: {msg}"),
            StartupError::Adapter(msg) => write!(f, "failed to get adapter: {msg}"),
            StartupError::Device(msg) => write!(f, "failed to create device: {msg}"),
            StartupError::Tuning(err) => write!(f, "{err}"),
            StartupError::Io(err) => write!(f, "failed to read tuning file: {err}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::Tuning(err) => Some(err),
            StartupError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TuningError> for StartupError {
    fn from(err: TuningError) -> Self {
        StartupError::Tuning(err)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(err: std::io::Error) -> Self {
        StartupError::Io(err)
    }
}
