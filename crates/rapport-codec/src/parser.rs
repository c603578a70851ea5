//! Key string parsing

use rapport_domain::{CompressionInfo, Dimension, DimensionValue, RelationshipState, Trend};
use tracing::{debug, warn};

use crate::config::{CodecConfig, ParseMode};
use crate::error::CodecError;
use crate::grammar;
use crate::tokenizer::{self, Groups};

/// Parses key strings into relationship states
///
/// One parser serves both historical behaviors: strict mode fails loudly on
/// the first missing required group, lenient mode substitutes documented
/// defaults and never fails. The mode comes from [`CodecConfig`] at
/// construction.
pub struct Parser {
    config: CodecConfig,
}

impl Parser {
    /// Create a parser with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Create a parser with the strict preset
    pub fn strict() -> Self {
        Self::new(CodecConfig::strict())
    }

    /// Create a parser with the lenient preset
    pub fn lenient() -> Self {
        Self::new(CodecConfig::lenient())
    }

    /// Parse a key string (regular or SuperKey) into a relationship state
    ///
    /// The SuperKey envelope is detected and stripped first; the inner string
    /// then goes through the regular grammar. Groups are assigned to
    /// dimensions purely by position.
    ///
    /// # Errors
    /// In strict mode, fails with [`CodecError::MissingGroup`] naming the
    /// first required group that was absent, or [`CodecError::Envelope`] when
    /// a SuperKey envelope is malformed. Lenient mode never fails.
    pub fn parse(&self, key: &str) -> Result<RelationshipState, CodecError> {
        let (inner, compression) = self.strip_envelope(key)?;

        let groups = tokenizer::scan(inner);
        debug!(
            "Captured {} bracket, {} angle, {} brace, {} pipe groups",
            groups.brackets.len(),
            groups.angles.len(),
            groups.braces.len(),
            groups.pipes.len()
        );

        let mut state = RelationshipState::new();
        for dim in Dimension::ALL {
            if let Some(raw) = self.group_for(&groups, dim)? {
                if raw.is_empty() {
                    warn!("Empty {} group; substituting default", dim.as_str());
                }
                let (content, trend) = Trend::split_trailing(raw);
                state = state.with_value(dim, DimensionValue::from_parts(dim, content, trend));
            }
        }

        match compression {
            Some(info) => Ok(state.with_compression(info)),
            None => Ok(state),
        }
    }

    /// Detect and strip the SuperKey envelope
    fn strip_envelope<'a>(
        &self,
        key: &'a str,
    ) -> Result<(&'a str, Option<CompressionInfo>), CodecError> {
        let trimmed = key.trim();
        let after = match trimmed.strip_prefix(grammar::ENVELOPE_PREFIX) {
            Some(after) => after,
            None => return Ok((trimmed, None)),
        };

        let digits_end = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        let (digits, rest) = after.split_at(digits_end);

        let ratio = match digits.parse::<u32>() {
            Ok(ratio) => ratio,
            Err(_) => match self.config.mode {
                ParseMode::Strict => {
                    let reason = if digits.is_empty() {
                        "missing ratio digits".to_string()
                    } else {
                        format!("unreadable ratio {:?}", digits)
                    };
                    return Err(CodecError::Envelope { reason });
                }
                ParseMode::Lenient => {
                    warn!(
                        "SuperKey envelope has no readable ratio; assuming {}",
                        grammar::DEFAULT_RATIO
                    );
                    grammar::DEFAULT_RATIO
                }
            },
        };

        let inner = match rest.strip_suffix(grammar::ENVELOPE_SUFFIX) {
            Some(inner) => inner,
            None => match self.config.mode {
                ParseMode::Strict => {
                    return Err(CodecError::Envelope {
                        reason: format!("missing {} terminator", grammar::ENVELOPE_SUFFIX),
                    });
                }
                ParseMode::Lenient => {
                    warn!("SuperKey envelope is unterminated; parsing the remainder");
                    rest
                }
            },
        };

        Ok((inner, Some(CompressionInfo { ratio })))
    }

    /// Positional group assignment, never content-based
    fn group_for<'g>(
        &self,
        groups: &'g Groups,
        dimension: Dimension,
    ) -> Result<Option<&'g str>, CodecError> {
        let found = match dimension {
            Dimension::Topic => groups.brackets.first(),
            Dimension::Approach => groups.angles.first(),
            Dimension::Goal => groups.brackets.get(1),
            Dimension::Tone => groups.braces.first(),
            Dimension::Context => groups.brackets.get(2),
            Dimension::Trust => groups.pipes.first(),
            Dimension::Style => groups.pipes.get(1),
            Dimension::Humor => groups.pipes.get(2),
            Dimension::Collab => groups.pipes.get(3),
        };

        match found {
            Some(raw) => Ok(Some(raw.as_str())),
            None => {
                // The angle group sits outside the strict minimum; every
                // other dimension's group is required in strict mode.
                if self.config.mode == ParseMode::Strict && dimension != Dimension::Approach {
                    return Err(CodecError::MissingGroup { group: dimension });
                }
                warn!("Missing {} group; substituting default", dimension.as_str());
                Ok(None)
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::encoder::encode;
    use proptest::prelude::*;

    // No trend glyphs in the vocabulary, so trailing-glyph splitting stays
    // unambiguous and round trips are exact.
    const VOCAB: &[&str] = &[
        "💻", "🌐", "🎨", "📚", "🎯", "😊", "🤔", "🌈", "🧩", "🔒", "📊", "😂", "🤝", "🚀", "🎮",
    ];

    fn glyph_sequence() -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::sample::select(VOCAB), 1..5)
            .prop_map(|parts| parts.concat())
    }

    fn any_trend() -> impl Strategy<Value = Trend> {
        proptest::sample::select(
            &[Trend::Up, Trend::Down, Trend::Stable, Trend::Cyclic, Trend::None][..],
        )
    }

    fn arb_state() -> impl Strategy<Value = RelationshipState> {
        proptest::collection::vec((glyph_sequence(), any_trend()), 9).prop_map(|pairs| {
            let mut state = RelationshipState::new();
            for (dim, (glyphs, trend)) in Dimension::ALL.into_iter().zip(pairs) {
                let value = DimensionValue::new(glyphs, trend).expect("vocab is non-empty");
                state = state.with_value(dim, value);
            }
            state
        })
    }

    proptest! {
        /// Property: encoding then strict parsing returns the same state
        #[test]
        fn test_encode_parse_round_trip(state in arb_state()) {
            let key = encode(&state);
            match Parser::strict().parse(&key) {
                Ok(parsed) => prop_assert_eq!(parsed, state),
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }

        /// Property: the envelope round-trips compression metadata
        #[test]
        fn test_super_key_round_trip(state in arb_state(), ratio in 1u32..120) {
            let compressed = state.with_compression(CompressionInfo { ratio });
            let key = encode(&compressed);
            match Parser::strict().parse(&key) {
                Ok(parsed) => prop_assert_eq!(parsed, compressed),
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }

        /// Property: lenient parsing is total over arbitrary input
        #[test]
        fn test_lenient_never_fails(input in ".*") {
            prop_assert!(Parser::lenient().parse(&input).is_ok());
        }
    }
}
