//! Error types for lexicon loading

use thiserror::Error;

/// Errors that can occur while loading a lexicon
///
/// Interpretation itself never fails; these errors surface only when a
/// custom lexicon file cannot be read or parsed at construction time.
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The lexicon file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The lexicon TOML could not be parsed
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The lexicon could not be serialized back to TOML
    #[error("TOML serialization error: {0}")]
    Serialize(String),
}
