//! Wire format constants
//!
//! The notation itself is the wire format; these constants are the single
//! place the delimiter characters and envelope pieces are spelled out.

/// Opens the topic, goal, and context groups.
pub const BRACKET_OPEN: char = '[';

/// Closes a bracket group.
pub const BRACKET_CLOSE: char = ']';

/// Opens the approach group.
pub const ANGLE_OPEN: char = '⟨';

/// Closes the approach group.
pub const ANGLE_CLOSE: char = '⟩';

/// Opens the tone group.
pub const BRACE_OPEN: char = '{';

/// Closes the tone group.
pub const BRACE_CLOSE: char = '}';

/// Separates the trust, style, humor, and collab groups; a trailing pipe
/// terminates the key.
pub const PIPE: char = '|';

/// Literal marker emitted between the tone and context groups. Carries no
/// content and is skipped by the scanner.
pub const CONTEXT_MARKER: &str = "➡️~";

/// Start of the SuperKey envelope, up to the ratio digits.
pub const ENVELOPE_PREFIX: &str = "[[×";

/// Terminator of the SuperKey envelope.
pub const ENVELOPE_SUFFIX: &str = "]]";

/// Canonical compression ratio carried in the envelope when the caller does
/// not configure one.
pub const DEFAULT_RATIO: u32 = 7;
