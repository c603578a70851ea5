//! Trend module - directional annotations attached to dimension values

/// Direction of change for one dimension
///
/// A trend renders as a single trailing glyph after the dimension's glyph
/// sequence; `None` renders as no glyph at all. The glyph set is disjoint
/// from every default dimension value and from the wire format's structural
/// markers, so counting trend glyphs over a raw key string is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trend {
    /// Improving / increasing
    Up,

    /// Declining / decreasing
    Down,

    /// Holding steady
    Stable,

    /// Oscillating back and forth
    Cyclic,

    /// No annotation
    None,
}

impl Default for Trend {
    fn default() -> Self {
        Trend::None
    }
}

impl Trend {
    /// The four trends that carry a glyph, in classification order
    pub const DIRECTIONAL: [Trend; 4] = [Trend::Up, Trend::Down, Trend::Stable, Trend::Cyclic];

    /// The trailing glyph for this trend, if it has one
    pub fn glyph(&self) -> Option<char> {
        match self {
            Trend::Up => Some('📈'),
            Trend::Down => Some('📉'),
            Trend::Stable => Some('➖'),
            Trend::Cyclic => Some('🔁'),
            Trend::None => None,
        }
    }

    /// Recognize a trend glyph
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '📈' => Some(Trend::Up),
            '📉' => Some(Trend::Down),
            '➖' => Some(Trend::Stable),
            '🔁' => Some(Trend::Cyclic),
            _ => None,
        }
    }

    /// Get the trend name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
            Trend::Cyclic => "cyclic",
            Trend::None => "none",
        }
    }

    /// Parse a trend from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Trend::Up),
            "down" => Some(Trend::Down),
            "stable" => Some(Trend::Stable),
            "cyclic" => Some(Trend::Cyclic),
            "none" => Some(Trend::None),
            _ => None,
        }
    }

    /// Split one trailing trend glyph off a raw glyph sequence
    ///
    /// Returns the remaining content and the recognized trend (`None` when
    /// the sequence does not end in a trend glyph).
    pub fn split_trailing(raw: &str) -> (&str, Trend) {
        if let Some(last) = raw.chars().last() {
            if let Some(trend) = Trend::from_glyph(last) {
                return (&raw[..raw.len() - last.len_utf8()], trend);
            }
        }
        (raw, Trend::None)
    }

    /// Strip every trailing trend glyph from a raw glyph sequence
    pub fn strip_all(raw: &str) -> &str {
        let mut rest = raw;
        loop {
            let (stripped, trend) = Trend::split_trailing(rest);
            if trend == Trend::None {
                return rest;
            }
            rest = stripped;
        }
    }

    /// Count occurrences of this trend's glyph in a raw string
    pub fn count_in(&self, raw: &str) -> usize {
        match self.glyph() {
            Some(g) => raw.chars().filter(|c| *c == g).count(),
            None => 0,
        }
    }
}

impl std::str::FromStr for Trend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid trend: {}", s))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const PLAIN: &[&str] = &["💻", "🌐", "🎯", "😊", "🔒", "🧩"];

    proptest! {
        /// Property: strip_all removes exactly the appended trend suffix
        #[test]
        fn test_strip_all_recovers_content(
            parts in proptest::collection::vec(proptest::sample::select(PLAIN), 1..5),
            suffix in proptest::collection::vec(proptest::sample::select(&Trend::DIRECTIONAL[..]), 0..4),
        ) {
            let content = parts.concat();
            let mut raw = content.clone();
            for trend in &suffix {
                if let Some(g) = trend.glyph() {
                    raw.push(g);
                }
            }

            prop_assert_eq!(Trend::strip_all(&raw), content.as_str());
        }
    }
}
