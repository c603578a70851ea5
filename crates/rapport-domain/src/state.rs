//! Relationship state - the full nine-dimension record

use crate::dimension::Dimension;
use crate::value::DimensionValue;

/// Compression metadata recorded when a state came out of history compression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionInfo {
    /// The ratio literal embedded in the SuperKey envelope
    pub ratio: u32,
}

/// A complete relationship state
///
/// Holds exactly one value per dimension, in canonical order. States are
/// immutable values: every update builds a new state, which keeps concurrent
/// readers safe and makes histories append-only by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipState {
    values: [DimensionValue; 9],
    compression: Option<CompressionInfo>,
}

impl RelationshipState {
    /// Create a state with every dimension at its documented default
    pub fn new() -> Self {
        Self {
            values: Dimension::ALL.map(DimensionValue::default_for),
            compression: None,
        }
    }

    /// Get the value of one dimension
    pub fn value(&self, dimension: Dimension) -> &DimensionValue {
        &self.values[dimension.index()]
    }

    /// Replace the value of one dimension
    pub fn with_value(mut self, dimension: Dimension, value: DimensionValue) -> Self {
        self.values[dimension.index()] = value;
        self
    }

    /// Mark this state as the product of history compression
    pub fn with_compression(mut self, info: CompressionInfo) -> Self {
        self.compression = Some(info);
        self
    }

    /// Compression metadata, if this state came out of a SuperKey
    pub fn compression(&self) -> Option<CompressionInfo> {
        self.compression
    }

    /// Whether this state originated from history compression
    pub fn is_super_key(&self) -> bool {
        self.compression.is_some()
    }

    /// Iterate dimensions and values in canonical order
    pub fn entries(&self) -> impl Iterator<Item = (Dimension, &DimensionValue)> {
        Dimension::ALL.into_iter().zip(self.values.iter())
    }
}

impl Default for RelationshipState {
    fn default() -> Self {
        Self::new()
    }
}
