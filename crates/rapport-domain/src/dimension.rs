//! Dimension module - the nine named facets of a relationship state

/// The lock glyph counted by the trust interpretation rule.
pub const TRUST_LOCK: char = '🔒';

/// One facet of a relationship state
///
/// Dimensions appear in every key in a fixed canonical order. Bracket and
/// pipe groups in the wire format are assigned to dimensions purely by
/// position, so the order here is load-bearing and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// What the relationship tends to be about
    Topic,

    /// How the other party engages
    Approach,

    /// Where the exchange seems to be heading
    Goal,

    /// Emotional register of the conversation
    Tone,

    /// Situational backdrop of recent interactions
    Context,

    /// Accumulated trust, expressed as lock glyphs
    Trust,

    /// Communication style
    Style,

    /// Humor register
    Humor,

    /// Collaboration signals
    Collab,
}

impl Dimension {
    /// All nine dimensions in canonical order
    pub const ALL: [Dimension; 9] = [
        Dimension::Topic,
        Dimension::Approach,
        Dimension::Goal,
        Dimension::Tone,
        Dimension::Context,
        Dimension::Trust,
        Dimension::Style,
        Dimension::Humor,
        Dimension::Collab,
    ];

    /// Get the dimension name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Topic => "topic",
            Dimension::Approach => "approach",
            Dimension::Goal => "goal",
            Dimension::Tone => "tone",
            Dimension::Context => "context",
            Dimension::Trust => "trust",
            Dimension::Style => "style",
            Dimension::Humor => "humor",
            Dimension::Collab => "collab",
        }
    }

    /// Parse a dimension from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "topic" => Some(Dimension::Topic),
            "approach" => Some(Dimension::Approach),
            "goal" => Some(Dimension::Goal),
            "tone" => Some(Dimension::Tone),
            "context" => Some(Dimension::Context),
            "trust" => Some(Dimension::Trust),
            "style" => Some(Dimension::Style),
            "humor" => Some(Dimension::Humor),
            "collab" => Some(Dimension::Collab),
            _ => None,
        }
    }

    /// Position of this dimension in the canonical order
    pub fn index(&self) -> usize {
        match self {
            Dimension::Topic => 0,
            Dimension::Approach => 1,
            Dimension::Goal => 2,
            Dimension::Tone => 3,
            Dimension::Context => 4,
            Dimension::Trust => 5,
            Dimension::Style => 6,
            Dimension::Humor => 7,
            Dimension::Collab => 8,
        }
    }

    /// The documented default glyph sequence for this dimension
    ///
    /// Used by the encoder when a dimension is unspecified and by the
    /// interpreter as the generic fallback content.
    pub fn default_glyphs(&self) -> &'static str {
        match self {
            Dimension::Topic => "💻🌐",
            Dimension::Approach => "🔍🤝",
            Dimension::Goal => "🎯🔄",
            Dimension::Tone => "😊🤔",
            Dimension::Context => "🌈🧩",
            Dimension::Trust => "🔒🔒",
            Dimension::Style => "📊",
            Dimension::Humor => "😂",
            Dimension::Collab => "🤝",
        }
    }
}

impl std::str::FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid dimension: {}", s))
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_index() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }

    #[test]
    fn test_name_round_trip() {
        for dim in Dimension::ALL {
            assert_eq!(Dimension::parse(dim.as_str()), Some(dim));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Dimension::parse("Topic"), Some(Dimension::Topic));
        assert_eq!(Dimension::parse("COLLAB"), Some(Dimension::Collab));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Dimension::parse("mood"), None);
        assert!("mood".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_defaults_are_nonempty() {
        for dim in Dimension::ALL {
            assert!(!dim.default_glyphs().is_empty());
        }
    }
}
