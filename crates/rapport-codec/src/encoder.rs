//! Canonical key emission

use rapport_domain::{Dimension, RelationshipState};

use crate::grammar;

/// Serialize a relationship state into its canonical key string
///
/// Total and deterministic: every dimension always holds a value (defaults
/// are substituted at construction time), so emission cannot fail. A state
/// carrying compression metadata re-emits its SuperKey envelope, so
/// compressed records round-trip through [`crate::Parser`].
pub fn encode(state: &RelationshipState) -> String {
    let mut out = String::new();

    out.push(grammar::BRACKET_OPEN);
    out.push_str(&state.value(Dimension::Topic).render());
    out.push(grammar::BRACKET_CLOSE);

    out.push(grammar::ANGLE_OPEN);
    out.push_str(&state.value(Dimension::Approach).render());
    out.push(grammar::ANGLE_CLOSE);

    out.push(grammar::BRACKET_OPEN);
    out.push_str(&state.value(Dimension::Goal).render());
    out.push(grammar::BRACKET_CLOSE);

    out.push(grammar::BRACE_OPEN);
    out.push_str(&state.value(Dimension::Tone).render());
    out.push(grammar::BRACE_CLOSE);

    out.push_str(grammar::CONTEXT_MARKER);

    out.push(grammar::BRACKET_OPEN);
    out.push_str(&state.value(Dimension::Context).render());
    out.push(grammar::BRACKET_CLOSE);

    for dim in [
        Dimension::Trust,
        Dimension::Style,
        Dimension::Humor,
        Dimension::Collab,
    ] {
        out.push(grammar::PIPE);
        out.push_str(&state.value(dim).render());
    }
    out.push(grammar::PIPE);

    match state.compression() {
        Some(info) => format!(
            "{}{}{}{}",
            grammar::ENVELOPE_PREFIX,
            info.ratio,
            out,
            grammar::ENVELOPE_SUFFIX
        ),
        None => out,
    }
}
