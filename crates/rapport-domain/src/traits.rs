//! Trait definitions for external interactions
//!
//! These traits define the boundary between the codec and whatever stores
//! relationship history. Implementations live in other crates (or in test
//! doubles); the codec itself never persists anything.

/// Trait for an ordered history of key strings for one relationship
///
/// Keys are ordered oldest first. The compressor consumes any
/// implementation; serializing updates per relationship so the history stays
/// monotonic is the implementor's concern.
pub trait KeyHistory {
    /// Error type for history operations
    type Error;

    /// All keys for this relationship, oldest first
    fn keys(&self) -> Result<Vec<String>, Self::Error>;

    /// Append the newest key
    fn record(&mut self, key: String) -> Result<(), Self::Error>;
}
