//! Key interpretation
//!
//! Turns key strings back into human-readable phrases. Interpretation is
//! total: the key is parsed leniently, unrecognized glyph sequences fall to
//! each table's fallback phrase, and garbage input reads as a fully
//! defaulted relationship.

use rapport_codec::Parser;
use rapport_domain::{Dimension, DimensionValue, Trend, TRUST_LOCK};
use tracing::debug;

use crate::lexicon::{Lexicon, PhraseTable, RuleList};
use crate::report::{InterpretationReport, OverallTrend};

/// Classify a key's overall movement from raw trend-glyph counts
///
/// Counts every occurrence of each trend glyph over the whole string, then
/// applies a fixed priority ladder. Ties fall through to `Mixed`, as does a
/// key with no trend glyphs at all.
pub fn overall_trend(key: &str) -> OverallTrend {
    let up = Trend::Up.count_in(key);
    let down = Trend::Down.count_in(key);
    let stable = Trend::Stable.count_in(key);
    let cyclic = Trend::Cyclic.count_in(key);

    if up > down && up > stable {
        OverallTrend::Improving
    } else if down > up && down > stable {
        OverallTrend::Declining
    } else if stable > up && stable > down {
        OverallTrend::Stable
    } else if cyclic > up && cyclic > down && cyclic > stable {
        OverallTrend::Fluctuating
    } else {
        OverallTrend::Mixed
    }
}

/// Renders key strings as interpretation reports
///
/// Holds a [`Lexicon`] injected at construction; the lexicon is the only
/// state, so one interpreter can serve concurrent callers freely.
pub struct Interpreter {
    lexicon: Lexicon,
    parser: Parser,
}

impl Interpreter {
    /// Create an interpreter over the given lexicon
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            parser: Parser::lenient(),
        }
    }

    /// Create an interpreter over the built-in lexicon
    pub fn default_lexicon() -> Self {
        Self::new(Lexicon::default())
    }

    /// Interpret a key string (regular or SuperKey)
    ///
    /// Never fails. Missing or malformed groups read as their documented
    /// defaults, and unknown glyph sequences take fallback phrases.
    pub fn interpret(&self, key: &str) -> InterpretationReport {
        // Lenient parsing is total; the Ok arm always applies.
        let state = self.parser.parse(key).unwrap_or_default();
        debug!(super_key = state.is_super_key(), "Interpreting key");

        InterpretationReport {
            topic: self.lookup(&self.lexicon.topic, state.value(Dimension::Topic)),
            approach: self.lookup(&self.lexicon.approach, state.value(Dimension::Approach)),
            goal: self.lookup(&self.lexicon.goal, state.value(Dimension::Goal)),
            tone: self.lookup(&self.lexicon.tone, state.value(Dimension::Tone)),
            context: self.lookup(&self.lexicon.context, state.value(Dimension::Context)),
            trust: self.trust_phrase(state.value(Dimension::Trust)),
            style: self.rule_match(&self.lexicon.style, state.value(Dimension::Style)),
            humor: self.rule_match(&self.lexicon.humor, state.value(Dimension::Humor)),
            collab: self.rule_match(&self.lexicon.collab, state.value(Dimension::Collab)),
            is_super_key: state.is_super_key(),
            compression_ratio: state.compression().map(|c| c.ratio),
            overall_trend: overall_trend(key),
        }
    }

    /// Exact table lookup after stripping every trailing trend glyph
    fn lookup(&self, table: &PhraseTable, value: &DimensionValue) -> String {
        let raw = value.render();
        table.phrase(Trend::strip_all(&raw)).to_string()
    }

    /// Trust reads from lock count, not sequence identity
    fn trust_phrase(&self, value: &DimensionValue) -> String {
        let locks = value.render().chars().filter(|c| *c == TRUST_LOCK).count();
        self.lexicon.trust.phrase(locks).to_string()
    }

    /// First-match substring rules over the untrimmed value
    fn rule_match(&self, rules: &RuleList, value: &DimensionValue) -> String {
        rules.phrase(&value.render()).to_string()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::default_lexicon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapport_codec::encode;
    use rapport_domain::RelationshipState;

    const DEFAULT_KEY: &str = "[💻🌐]⟨🔍🤝⟩[🎯🔄]{😊🤔}➡️~[🌈🧩]|🔒🔒|📊|😂|🤝|";

    #[test]
    fn test_default_key_reads_as_documented_defaults() {
        let report = Interpreter::default_lexicon().interpret(DEFAULT_KEY);

        assert_eq!(report.topic, "Technology and the web");
        assert_eq!(report.approach, "Curious and collaborative");
        assert_eq!(report.goal, "Keeping a steady exchange going");
        assert_eq!(report.tone, "Friendly and curious");
        assert_eq!(report.context, "Varied conversations across many settings");
        assert_eq!(report.trust, "Medium trust developing");
        assert_eq!(report.style, "Structured, data-minded replies");
        assert_eq!(report.humor, "Quick to share a laugh");
        assert_eq!(report.collab, "Open to working together");
        assert!(!report.is_super_key);
        assert_eq!(report.compression_ratio, None);
        assert_eq!(report.overall_trend, OverallTrend::Mixed);
    }

    #[test]
    fn test_unknown_glyphs_fall_back() {
        let key = "[🦖🦕]⟨🦖🦕⟩[🦖🦕]{🦖🦕}➡️~[🦖🦕]|🦖|🦖|🦖|🦖|";
        let report = Interpreter::default_lexicon().interpret(key);

        assert_eq!(report.topic, "Technology and the web");
        assert_eq!(report.trust, "Trust not yet established");
        assert_eq!(report.style, "Communication style still taking shape");
        assert_eq!(report.humor, "Humor register not yet established");
        assert_eq!(report.collab, "No collaboration signals yet");
    }

    #[test]
    fn test_trend_glyphs_do_not_break_table_lookup() {
        let key = "[💻🌐📈]⟨🔍🤝⟩[🎯🔄📉]{😊🤔➖}➡️~[🌈🧩]|🔒🔒|📊|😂|🤝|";
        let report = Interpreter::default_lexicon().interpret(key);

        assert_eq!(report.topic, "Technology and the web");
        assert_eq!(report.goal, "Keeping a steady exchange going");
        assert_eq!(report.tone, "Friendly and curious");
    }

    #[test]
    fn test_trust_counts_locks() {
        let interpreter = Interpreter::default_lexicon();
        let key = |trust: &str| {
            format!("[💻🌐]⟨🔍🤝⟩[🎯🔄]{{😊🤔}}➡️~[🌈🧩]|{}|📊|😂|🤝|", trust)
        };

        assert_eq!(
            interpreter.interpret(&key("🤷")).trust,
            "Trust not yet established"
        );
        assert_eq!(
            interpreter.interpret(&key("🔒")).trust,
            "Initial trust forming"
        );
        assert_eq!(
            interpreter.interpret(&key("🔒🔒")).trust,
            "Medium trust developing"
        );
        assert_eq!(
            interpreter.interpret(&key("🔒🔒🔒")).trust,
            "High trust established"
        );
        assert_eq!(
            interpreter.interpret(&key("🔒🔒🔒🔒🔒")).trust,
            "High trust established"
        );
    }

    #[test]
    fn test_style_rules_prefer_specific_patterns() {
        let interpreter = Interpreter::default_lexicon();
        let key = |style: &str| {
            format!("[💻🌐]⟨🔍🤝⟩[🎯🔄]{{😊🤔}}➡️~[🌈🧩]|🔒🔒|{}|😂|🤝|", style)
        };

        assert_eq!(
            interpreter.interpret(&key("📊📈")).style,
            "Structured replies, growing more detailed"
        );
        assert_eq!(
            interpreter.interpret(&key("📊📉")).style,
            "Structured replies, getting briefer"
        );
        assert_eq!(
            interpreter.interpret(&key("📊")).style,
            "Structured, data-minded replies"
        );
    }

    #[test]
    fn test_super_key_metadata_surfaces() {
        let key = format!("[[×7{}]]", DEFAULT_KEY);
        let report = Interpreter::default_lexicon().interpret(&key);

        assert!(report.is_super_key);
        assert_eq!(report.compression_ratio, Some(7));
    }

    #[test]
    fn test_garbage_input_reads_as_defaults() {
        let report = Interpreter::default_lexicon().interpret("not a key at all");

        assert_eq!(report.topic, "Technology and the web");
        assert_eq!(report.trust, "Medium trust developing");
        assert!(!report.is_super_key);
    }

    #[test]
    fn test_interpret_matches_encoded_default_state() {
        let key = encode(&RelationshipState::new());
        let report = Interpreter::default_lexicon().interpret(&key);
        assert_eq!(report.topic, "Technology and the web");
        assert_eq!(report.trust, "Medium trust developing");
    }

    #[test]
    fn test_overall_trend_priority_ladder() {
        assert_eq!(overall_trend("📈📈📉"), OverallTrend::Improving);
        assert_eq!(overall_trend("📉📉📈➖"), OverallTrend::Declining);
        assert_eq!(overall_trend("➖➖📈"), OverallTrend::Stable);
        assert_eq!(overall_trend("🔁🔁"), OverallTrend::Fluctuating);
        assert_eq!(overall_trend("📈📉"), OverallTrend::Mixed);
    }

    #[test]
    fn test_overall_trend_tie_is_mixed() {
        assert_eq!(overall_trend("📈📈📉📉"), OverallTrend::Mixed);
    }

    #[test]
    fn test_overall_trend_without_glyphs_is_mixed() {
        assert_eq!(overall_trend(DEFAULT_KEY), OverallTrend::Mixed);
        assert_eq!(overall_trend(""), OverallTrend::Mixed);
    }

    #[test]
    fn test_cyclic_loses_to_any_dominant_direction() {
        // Cyclic only wins when it beats all three directional counts.
        assert_eq!(overall_trend("🔁🔁📈📈📈"), OverallTrend::Improving);
        assert_eq!(overall_trend("🔁🔁🔁📈📈"), OverallTrend::Fluctuating);
    }

    #[test]
    fn test_report_overall_trend_reads_whole_key() {
        let key = "[💻🌐📈]⟨🔍🤝⟩[🎯🔄📈]{😊🤔📉}➡️~[🌈🧩]|🔒🔒|📊|😂|🤝|";
        let report = Interpreter::default_lexicon().interpret(key);
        assert_eq!(report.overall_trend, OverallTrend::Improving);
    }
}
