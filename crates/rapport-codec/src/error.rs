//! Error types for the codec

use rapport_domain::Dimension;
use thiserror::Error;

/// Errors that can occur while parsing or compressing keys
///
/// Parsing and compression are the only fallible operations; encoding and
/// annotation are total by construction. These failures are deterministic,
/// so callers should never retry them.
#[derive(Error, Debug)]
pub enum CodecError {
    /// A required delimiter group was absent (strict mode)
    #[error("Malformed key: missing {group} group")]
    MissingGroup {
        /// The first dimension, in canonical order, whose group was not found
        group: Dimension,
    },

    /// The SuperKey envelope was malformed (strict mode)
    #[error("Malformed SuperKey envelope: {reason}")]
    Envelope {
        /// What was wrong with the envelope
        reason: String,
    },

    /// Too few keys to build a SuperKey from
    #[error("Insufficient history: {got} keys, need at least {min}")]
    InsufficientHistory {
        /// Number of keys supplied
        got: usize,
        /// Minimum required
        min: usize,
    },

    /// History store failure surfaced while compressing
    #[error("History error: {0}")]
    History(String),
}
