//! Error types for the file and configuration boundary.
//!
//! Scoring and tagging never fail; malformed verse data degrades to "no
//! rhyme". Only reading and writing documents can go wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RhymeError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A `line_N` key is missing from a transcription
    #[error("Transcription is missing line_{0}")]
    MissingLine(usize),

    #[error("Invalid input path: {0}")]
    InvalidPath(String),
}

/// Result type alias for rhyme detection I/O
pub type Result<T> = std::result::Result<T, RhymeError>;
