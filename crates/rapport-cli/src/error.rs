//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Codec error
    #[error("Codec error: {0}")]
    Codec(#[from] rapport_codec::CodecError),

    /// Lexicon error
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] rapport_interpreter::LexiconError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No current key in the session
    #[error("No current key in this session. Run 'encode' first or pass a key explicitly.")]
    NoCurrentKey,
}
