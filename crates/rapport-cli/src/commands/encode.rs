//! Encode command implementation.

use crate::cli::EncodeArgs;
use crate::error::Result;
use crate::output::Formatter;
use rapport_codec::encode;
use rapport_domain::{Dimension, DimensionValue, RelationshipState, Trend};

/// Execute the encode command. Returns the produced key.
pub fn execute_encode(args: EncodeArgs, formatter: &Formatter) -> Result<String> {
    let state = build_state(&args);
    let key = encode(&state);

    println!("{}", formatter.format_state(&state, &key)?);

    Ok(key)
}

/// Build a state from the supplied dimension values.
///
/// A trailing trend glyph on a value becomes the trend annotation; an empty
/// value falls back to the dimension default, keeping encoding total.
fn build_state(args: &EncodeArgs) -> RelationshipState {
    let values = [
        (Dimension::Topic, &args.topic),
        (Dimension::Approach, &args.approach),
        (Dimension::Goal, &args.goal),
        (Dimension::Tone, &args.tone),
        (Dimension::Context, &args.context),
        (Dimension::Trust, &args.trust),
        (Dimension::Style, &args.style),
        (Dimension::Humor, &args.humor),
        (Dimension::Collab, &args.collab),
    ];

    let mut state = RelationshipState::new();
    for (dim, raw) in values {
        if let Some(raw) = raw {
            let (content, trend) = Trend::split_trailing(raw);
            state = state.with_value(dim, DimensionValue::from_parts(dim, content, trend));
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_state_fills_defaults() {
        let args = EncodeArgs {
            topic: Some("🎮🕹️".to_string()),
            ..EncodeArgs::default()
        };

        let state = build_state(&args);
        assert_eq!(state.value(Dimension::Topic).glyphs(), "🎮🕹️");
        assert_eq!(
            state.value(Dimension::Trust).glyphs(),
            Dimension::Trust.default_glyphs()
        );
    }

    #[test]
    fn test_trailing_trend_glyph_becomes_annotation() {
        let args = EncodeArgs {
            trust: Some("🔒🔒🔒📈".to_string()),
            ..EncodeArgs::default()
        };

        let state = build_state(&args);
        assert_eq!(state.value(Dimension::Trust).glyphs(), "🔒🔒🔒");
        assert_eq!(state.value(Dimension::Trust).trend(), Trend::Up);
    }

    #[test]
    fn test_empty_value_takes_default() {
        let args = EncodeArgs {
            tone: Some(String::new()),
            ..EncodeArgs::default()
        };

        let state = build_state(&args);
        assert_eq!(
            state.value(Dimension::Tone).glyphs(),
            Dimension::Tone.default_glyphs()
        );
    }

    #[test]
    fn test_no_args_encode_to_default_key() {
        let state = build_state(&EncodeArgs::default());
        assert_eq!(state, RelationshipState::new());
    }
}
