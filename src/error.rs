//! Error types shared by the scoring and acoustic pipelines.

use thiserror::Error;

/// Failures of a single scoring call. Both indicate a caller contract violation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("unknown instrument: {0}")]
    NotFound(String),

    #[error("invalid response for {instrument}: {reason}")]
    InvalidResponse { instrument: String, reason: String },
}

/// Malformed range token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("empty range token")]
    Empty,

    #[error("range token {0:?} has a non-integer bound")]
    NotAnInteger(String),

    #[error("range token {token:?} has lower bound {min} above upper bound {max}")]
    Inverted { token: String, min: u32, max: u32 },
}

/// Instrument tables that fail validation while the registry is built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{instrument}: malformed range {token:?}: {source}")]
    MalformedRange {
        instrument: String,
        token: String,
        #[source]
        source: RangeError,
    },

    #[error("{0}: instrument has no items")]
    NoItems(String),

    #[error("{instrument}: {options} options but {weights} weights")]
    WeightsMismatch {
        instrument: String,
        options: usize,
        weights: usize,
    },

    #[error("duplicate instrument id: {0}")]
    DuplicateId(String),

    #[error("{instrument}: invalid layout: {reason}")]
    InvalidLayout { instrument: String, reason: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcousticError {
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(u32),
}
