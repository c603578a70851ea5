//! Delta signals - per-dimension change hints from external context analysis

use crate::dimension::Dimension;
use crate::trend::Trend;

/// Direction of change reported for one dimension
///
/// Supplied entirely by an external collaborator; the codec only maps it to
/// a trend annotation and never infers it from content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    /// The dimension strengthened
    Increase,

    /// The dimension weakened
    Decrease,

    /// No movement observed
    NoChange,

    /// Back-and-forth movement observed
    Oscillating,

    /// No signal available
    Unknown,
}

impl Default for Delta {
    fn default() -> Self {
        Delta::Unknown
    }
}

impl Delta {
    /// Get the delta name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Delta::Increase => "increase",
            Delta::Decrease => "decrease",
            Delta::NoChange => "no-change",
            Delta::Oscillating => "oscillating",
            Delta::Unknown => "unknown",
        }
    }

    /// Parse a delta from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "increase" => Some(Delta::Increase),
            "decrease" => Some(Delta::Decrease),
            "no-change" => Some(Delta::NoChange),
            "oscillating" => Some(Delta::Oscillating),
            "unknown" => Some(Delta::Unknown),
            _ => None,
        }
    }

    /// The trend annotation this delta maps to
    pub fn trend(&self) -> Trend {
        match self {
            Delta::Increase => Trend::Up,
            Delta::Decrease => Trend::Down,
            Delta::NoChange => Trend::Stable,
            Delta::Oscillating => Trend::Cyclic,
            Delta::Unknown => Trend::None,
        }
    }
}

impl std::str::FromStr for Delta {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid delta: {}", s))
    }
}

/// The change signal for one dimension: a delta plus an optional replacement
/// glyph sequence
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DimensionDelta {
    delta: Delta,
    replacement: Option<String>,
}

impl DimensionDelta {
    /// Create a signal with the given delta and no replacement
    pub fn new(delta: Delta) -> Self {
        Self {
            delta,
            replacement: None,
        }
    }

    /// Attach a replacement glyph sequence
    ///
    /// # Errors
    /// Returns an error if the replacement is empty; omit the replacement to
    /// keep the previous glyphs.
    pub fn with_replacement(mut self, glyphs: String) -> Result<Self, String> {
        if glyphs.is_empty() {
            return Err("Replacement value cannot be empty".to_string());
        }

        self.replacement = Some(glyphs);
        Ok(self)
    }

    /// Get the delta
    pub fn delta(&self) -> Delta {
        self.delta
    }

    /// Get the replacement glyph sequence, if any
    pub fn replacement(&self) -> Option<&str> {
        self.replacement.as_deref()
    }
}

/// A full per-dimension change signal for one update step
///
/// Dimensions without an explicit entry stay at `Delta::Unknown`, which the
/// annotator treats as "clear the trend, keep the glyphs".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaSignal {
    deltas: [DimensionDelta; 9],
}

impl DeltaSignal {
    /// Create a signal with every dimension at `Delta::Unknown`
    pub fn new() -> Self {
        Self {
            deltas: std::array::from_fn(|_| DimensionDelta::default()),
        }
    }

    /// Set the delta for one dimension
    pub fn with_delta(mut self, dimension: Dimension, delta: Delta) -> Self {
        self.deltas[dimension.index()].delta = delta;
        self
    }

    /// Set a replacement glyph sequence for one dimension
    ///
    /// # Errors
    /// Returns an error if the replacement is empty.
    pub fn with_replacement(mut self, dimension: Dimension, glyphs: String) -> Result<Self, String> {
        if glyphs.is_empty() {
            return Err(format!(
                "Replacement value for {} cannot be empty",
                dimension.as_str()
            ));
        }

        self.deltas[dimension.index()].replacement = Some(glyphs);
        Ok(self)
    }

    /// Get the signal for one dimension
    pub fn get(&self, dimension: Dimension) -> &DimensionDelta {
        &self.deltas[dimension.index()]
    }
}

impl Default for DeltaSignal {
    fn default() -> Self {
        Self::new()
    }
}
