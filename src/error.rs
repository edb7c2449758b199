// src/error.rs
//! Unified error handling for EMG synthesis
//!
//! All fallible operations in this crate return [`SynthResult`]. Input
//! validation failures are reported before any buffer allocation or
//! random draw takes place; once validation passes, synthesis itself is
//! pure arithmetic and cannot fail.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for EMG synthesis operations
pub type SynthResult<T> = Result<T, SynthError>;

/// Error type for all EMG synthesis operations
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Malformed input: empty spike matrix, non-binary entries, ragged
    /// rows, non-positive sampling rate, or negative delay
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the rejected input
        reason: String,
    },

    /// Injected random source was exhausted or misconfigured. Only
    /// reachable with streaming generators; the built-in uniform
    /// sources cannot fail.
    #[error("random source failure: {reason}")]
    RandomSource {
        /// Description of the random source failure
        reason: String,
    },

    /// Recording artifact could not be read or written
    #[error("artifact I/O error for {}: {reason}", .path.display())]
    ArtifactIo {
        /// Path of the artifact involved
        path: PathBuf,
        /// Underlying I/O failure description
        reason: String,
    },

    /// Recording artifact exists but does not parse
    #[error("malformed artifact {}: {reason}", .path.display())]
    ArtifactFormat {
        /// Path of the artifact involved
        path: PathBuf,
        /// Parse failure description
        reason: String,
    },

    /// Configuration text could not be parsed
    #[error("configuration parse error: {reason}")]
    ConfigParse {
        /// Parse failure description
        reason: String,
    },
}

impl SynthError {
    /// Invalid-input error from any displayable reason
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SynthError::InvalidInput { reason: reason.into() }
    }

    /// True for errors raised by input validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SynthError::InvalidInput { .. })
    }
}
