//! Startup configuration errors.

use thiserror::Error;

/// Why the configuration could not be loaded. Any of these stops the process before it serves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}
