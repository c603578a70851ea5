//! History compression into SuperKeys

use std::collections::HashMap;

use rapport_domain::traits::KeyHistory;
use rapport_domain::{CompressionInfo, Dimension, DimensionValue, RelationshipState, Trend};
use tracing::{debug, info};

use crate::config::CodecConfig;
use crate::encoder;
use crate::error::CodecError;
use crate::parser::Parser;

/// Minimum number of historical keys a SuperKey may be built from
///
/// A hard invariant, deliberately separate from the configurable ratio
/// literal the envelope carries.
pub const MIN_HISTORY: usize = 5;

/// Compresses an ordered key history into one SuperKey
///
/// Per dimension, the SuperKey carries the most frequent glyph sequence
/// across the history (ties go to the earliest occurrence) plus an aggregate
/// trend derived from the per-key trend annotations.
pub struct Compressor {
    parser: Parser,
    ratio: u32,
}

impl Compressor {
    /// Create a compressor with the given configuration
    ///
    /// The parse mode applies to the history keys; the ratio is the literal
    /// embedded in the produced envelope.
    pub fn new(config: CodecConfig) -> Self {
        Self {
            ratio: config.ratio,
            parser: Parser::new(config),
        }
    }

    /// Compress an oldest-first sequence of keys into a SuperKey string
    ///
    /// # Errors
    /// Fails with [`CodecError::InsufficientHistory`] when fewer than
    /// [`MIN_HISTORY`] keys are supplied, and propagates parse errors from
    /// malformed history keys.
    pub fn compress<S: AsRef<str>>(&self, keys: &[S]) -> Result<String, CodecError> {
        Ok(encoder::encode(&self.compress_state(keys)?))
    }

    /// Compress a key sequence and return the structured record
    pub fn compress_state<S: AsRef<str>>(
        &self,
        keys: &[S],
    ) -> Result<RelationshipState, CodecError> {
        if keys.len() < MIN_HISTORY {
            return Err(CodecError::InsufficientHistory {
                got: keys.len(),
                min: MIN_HISTORY,
            });
        }

        let states = keys
            .iter()
            .map(|key| self.parser.parse(key.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let mut state = RelationshipState::new();
        for dim in Dimension::ALL {
            let dominant = dominant_glyphs(&states, dim);
            let trend = aggregate_trend(&states, dim);
            debug!(
                "Compressed {}: {:?} with {} trend",
                dim.as_str(),
                dominant,
                trend.as_str()
            );
            state = state.with_value(dim, DimensionValue::from_parts(dim, dominant, trend));
        }

        info!(
            "Compressed {} keys into a SuperKey with ratio {}",
            keys.len(),
            self.ratio
        );
        Ok(state.with_compression(CompressionInfo { ratio: self.ratio }))
    }

    /// Compress every key a history store holds for one relationship
    ///
    /// # Errors
    /// Store failures surface as [`CodecError::History`]; otherwise the
    /// errors match [`Compressor::compress`].
    pub fn compress_history<H: KeyHistory>(&self, history: &H) -> Result<String, CodecError>
    where
        H::Error: std::fmt::Display,
    {
        let keys = history
            .keys()
            .map_err(|e| CodecError::History(e.to_string()))?;
        self.compress(&keys)
    }
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new(CodecConfig::default())
    }
}

/// Most frequent glyph sequence for one dimension; ties go to the earliest
/// chronological occurrence
fn dominant_glyphs(states: &[RelationshipState], dimension: Dimension) -> &str {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for state in states {
        *counts.entry(state.value(dimension).glyphs()).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for state in states {
        let glyphs = state.value(dimension).glyphs();
        let count = counts[glyphs];
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((glyphs, count)),
        }
    }

    best.map(|(glyphs, _)| glyphs).unwrap_or_default()
}

/// Aggregate trend for one dimension across the whole history
///
/// Counts per-key trend annotations by category; an unchanged first-vs-last
/// value contributes one extra stable vote (a changed one carries no
/// direction of its own). A category wins only by strictly exceeding every
/// other; anything else is mixed and emits no glyph.
fn aggregate_trend(states: &[RelationshipState], dimension: Dimension) -> Trend {
    let mut up = 0usize;
    let mut down = 0usize;
    let mut stable = 0usize;
    let mut cyclic = 0usize;

    for state in states {
        match state.value(dimension).trend() {
            Trend::Up => up += 1,
            Trend::Down => down += 1,
            Trend::Stable => stable += 1,
            Trend::Cyclic => cyclic += 1,
            Trend::None => {}
        }
    }

    if let (Some(first), Some(last)) = (states.first(), states.last()) {
        if first.value(dimension).glyphs() == last.value(dimension).glyphs() {
            stable += 1;
        }
    }

    if up > down && up > stable && up > cyclic {
        Trend::Up
    } else if down > up && down > stable && down > cyclic {
        Trend::Down
    } else if stable > up && stable > down && stable > cyclic {
        Trend::Stable
    } else if cyclic > up && cyclic > down && cyclic > stable {
        Trend::Cyclic
    } else {
        // Mixed: no annotation is emitted for the dimension.
        Trend::None
    }
}
