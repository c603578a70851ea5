//! Trend annotation - the update step of the key lifecycle

use rapport_domain::{DeltaSignal, Dimension, DimensionValue, RelationshipState};

/// Apply one change signal to a previous state, producing the updated state
///
/// Pure and total. Per dimension: glyphs are kept unless the signal carries
/// a replacement, and the trend annotation is rewritten from the delta, so
/// an unknown delta clears a stale trend rather than letting it linger. The
/// result is always a fresh regular record; compression provenance does not
/// carry forward through an update.
pub fn update(previous: &RelationshipState, signal: &DeltaSignal) -> RelationshipState {
    let mut next = RelationshipState::new();

    for dim in Dimension::ALL {
        let entry = signal.get(dim);
        let glyphs = match entry.replacement() {
            Some(replacement) => replacement,
            None => previous.value(dim).glyphs(),
        };
        let value = DimensionValue::from_parts(dim, glyphs, entry.delta().trend());
        next = next.with_value(dim, value);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::parser::Parser;
    use rapport_domain::{CompressionInfo, Delta, Trend};

    #[test]
    fn test_deltas_set_trends() {
        let previous = RelationshipState::new();
        let signal = DeltaSignal::new()
            .with_delta(Dimension::Trust, Delta::Increase)
            .with_delta(Dimension::Tone, Delta::Decrease)
            .with_delta(Dimension::Topic, Delta::NoChange)
            .with_delta(Dimension::Humor, Delta::Oscillating);

        let next = update(&previous, &signal);

        assert_eq!(next.value(Dimension::Trust).trend(), Trend::Up);
        assert_eq!(next.value(Dimension::Tone).trend(), Trend::Down);
        assert_eq!(next.value(Dimension::Topic).trend(), Trend::Stable);
        assert_eq!(next.value(Dimension::Humor).trend(), Trend::Cyclic);
        assert_eq!(next.value(Dimension::Goal).trend(), Trend::None);
    }

    #[test]
    fn test_unknown_delta_clears_stale_trend() {
        let previous = update(
            &RelationshipState::new(),
            &DeltaSignal::new().with_delta(Dimension::Trust, Delta::Increase),
        );
        assert_eq!(previous.value(Dimension::Trust).trend(), Trend::Up);

        let next = update(&previous, &DeltaSignal::new());
        assert_eq!(next.value(Dimension::Trust).trend(), Trend::None);
        assert_eq!(next.value(Dimension::Trust).glyphs(), "🔒🔒");
    }

    #[test]
    fn test_replacement_swaps_glyphs() {
        let signal = DeltaSignal::new()
            .with_delta(Dimension::Topic, Delta::Increase)
            .with_replacement(Dimension::Topic, "🎮🕹️".to_string())
            .unwrap();

        let next = update(&RelationshipState::new(), &signal);

        assert_eq!(next.value(Dimension::Topic).glyphs(), "🎮🕹️");
        assert_eq!(next.value(Dimension::Topic).trend(), Trend::Up);
    }

    #[test]
    fn test_update_does_not_mutate_previous() {
        let previous = RelationshipState::new();
        let signal = DeltaSignal::new().with_delta(Dimension::Collab, Delta::Increase);

        let next = update(&previous, &signal);

        assert_eq!(previous.value(Dimension::Collab).trend(), Trend::None);
        assert_eq!(next.value(Dimension::Collab).trend(), Trend::Up);
    }

    #[test]
    fn test_update_of_super_key_yields_regular_record() {
        let compressed = RelationshipState::new().with_compression(CompressionInfo { ratio: 7 });
        let next = update(&compressed, &DeltaSignal::new());
        assert!(!next.is_super_key());
    }

    #[test]
    fn test_updated_state_round_trips() {
        let parser = Parser::strict();
        let state = parser.parse(&encode(&RelationshipState::new())).unwrap();

        let signal = DeltaSignal::new()
            .with_delta(Dimension::Trust, Delta::Increase)
            .with_replacement(Dimension::Context, "💼📊".to_string())
            .unwrap();
        let next = update(&state, &signal);

        let reparsed = parser.parse(&encode(&next)).unwrap();
        assert_eq!(reparsed, next);
    }
}
