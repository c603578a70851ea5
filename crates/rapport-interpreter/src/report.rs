//! Interpretation result types

use serde::{Deserialize, Serialize};

/// Overall movement of a relationship, read off a whole key string
///
/// Classified from raw trend-glyph counts over the entire key, independent
/// of dimension structure, with a fixed priority ladder; any tie falls
/// through to `Mixed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTrend {
    /// Up glyphs outnumber both down and stable glyphs
    Improving,

    /// Down glyphs outnumber both up and stable glyphs
    Declining,

    /// Stable glyphs outnumber both up and down glyphs
    Stable,

    /// Cyclic glyphs outnumber up, down, and stable glyphs
    Fluctuating,

    /// No category strictly dominates
    Mixed,
}

impl OverallTrend {
    /// Get the trend name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallTrend::Improving => "improving",
            OverallTrend::Declining => "declining",
            OverallTrend::Stable => "stable",
            OverallTrend::Fluctuating => "fluctuating",
            OverallTrend::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for OverallTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human-readable interpretation of one key
#[derive(Debug, Clone, Serialize)]
pub struct InterpretationReport {
    /// What the relationship tends to be about
    pub topic: String,

    /// How the other party engages
    pub approach: String,

    /// Where the exchange seems to be heading
    pub goal: String,

    /// Emotional register of the conversation
    pub tone: String,

    /// Situational backdrop of recent interactions
    pub context: String,

    /// Trust description from the lock-count rule
    pub trust: String,

    /// Communication style
    pub style: String,

    /// Humor register
    pub humor: String,

    /// Collaboration signals
    pub collab: String,

    /// Whether the key carried a SuperKey envelope
    pub is_super_key: bool,

    /// Compression ratio from the envelope, when present
    pub compression_ratio: Option<u32>,

    /// Overall movement read off the raw key string
    pub overall_trend: OverallTrend,
}

impl InterpretationReport {
    /// Dimension names and phrases in canonical order, for display
    pub fn phrases(&self) -> [(&'static str, &str); 9] {
        [
            ("topic", self.topic.as_str()),
            ("approach", self.approach.as_str()),
            ("goal", self.goal.as_str()),
            ("tone", self.tone.as_str()),
            ("context", self.context.as_str()),
            ("trust", self.trust.as_str()),
            ("style", self.style.as_str()),
            ("humor", self.humor.as_str()),
            ("collab", self.collab.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_names() {
        assert_eq!(OverallTrend::Improving.as_str(), "improving");
        assert_eq!(OverallTrend::Declining.as_str(), "declining");
        assert_eq!(OverallTrend::Stable.as_str(), "stable");
        assert_eq!(OverallTrend::Fluctuating.as_str(), "fluctuating");
        assert_eq!(OverallTrend::Mixed.as_str(), "mixed");
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        let json = serde_json::to_string(&OverallTrend::Improving).unwrap();
        assert_eq!(json, "\"improving\"");
    }

    #[test]
    fn test_phrases_follow_canonical_order() {
        let report = InterpretationReport {
            topic: "t".to_string(),
            approach: "a".to_string(),
            goal: "g".to_string(),
            tone: "o".to_string(),
            context: "c".to_string(),
            trust: "r".to_string(),
            style: "s".to_string(),
            humor: "h".to_string(),
            collab: "l".to_string(),
            is_super_key: false,
            compression_ratio: None,
            overall_trend: OverallTrend::Mixed,
        };

        let names: Vec<&str> = report.phrases().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "topic", "approach", "goal", "tone", "context", "trust", "style", "humor",
                "collab"
            ]
        );
    }
}
