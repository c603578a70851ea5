//! Phrase tables driving interpretation
//!
//! A lexicon is immutable configuration data, injected into the interpreter
//! at construction. The built-in tables are the documented defaults; a
//! deployment can override any phrasing through a TOML file without touching
//! code.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LexiconError;

/// Exact-match phrase table for one of the content dimensions
///
/// Keys are glyph sequences with trend glyphs already stripped; values are
/// the phrases to emit. Sequences the table does not know take the fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseTable {
    /// Glyph sequence to phrase
    pub entries: HashMap<String, String>,

    /// Phrase for sequences the table does not know
    pub fallback: String,
}

impl PhraseTable {
    /// Look up a cleaned glyph sequence
    pub fn phrase(&self, glyphs: &str) -> &str {
        self.entries
            .get(glyphs)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

/// One substring rule for the style, humor, and collab dimensions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstringRule {
    /// Glyph-and-trend combination to look for
    pub pattern: String,

    /// Phrase emitted when the pattern occurs in the raw value
    pub phrase: String,
}

/// Ordered first-match rule list for one dimension
///
/// Rules are checked against the raw (untrimmed) dimension value in order,
/// so more specific glyph+trend combinations must come before their bare
/// glyph prefixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleList {
    /// Rules in priority order
    pub rules: Vec<SubstringRule>,

    /// Phrase when no rule matches
    pub fallback: String,
}

impl RuleList {
    /// Match a raw dimension value against the rules in order
    pub fn phrase(&self, raw: &str) -> &str {
        for rule in &self.rules {
            if raw.contains(&rule.pattern) {
                return &rule.phrase;
            }
        }
        &self.fallback
    }
}

/// Phrases for the trust lock-count thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustPhrases {
    /// No lock glyphs
    pub none: String,

    /// Exactly one lock glyph
    pub forming: String,

    /// Exactly two lock glyphs
    pub developing: String,

    /// Three or more lock glyphs
    pub established: String,
}

impl TrustPhrases {
    /// The phrase for a given lock count
    pub fn phrase(&self, locks: usize) -> &str {
        match locks {
            0 => &self.none,
            1 => &self.forming,
            2 => &self.developing,
            _ => &self.established,
        }
    }
}

/// The full phrase configuration for the interpreter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Exact-match table for the topic dimension
    pub topic: PhraseTable,

    /// Exact-match table for the approach dimension
    pub approach: PhraseTable,

    /// Exact-match table for the goal dimension
    pub goal: PhraseTable,

    /// Exact-match table for the tone dimension
    pub tone: PhraseTable,

    /// Exact-match table for the context dimension
    pub context: PhraseTable,

    /// Lock-count phrases for the trust dimension
    pub trust: TrustPhrases,

    /// Substring rules for the style dimension
    pub style: RuleList,

    /// Substring rules for the humor dimension
    pub humor: RuleList,

    /// Substring rules for the collab dimension
    pub collab: RuleList,
}

impl Lexicon {
    /// Load a lexicon from a TOML file
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse a lexicon from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, LexiconError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize the lexicon to a TOML string
    pub fn to_toml(&self) -> Result<String, LexiconError> {
        toml::to_string_pretty(self).map_err(|e| LexiconError::Serialize(e.to_string()))
    }
}

fn table(entries: &[(&str, &str)], fallback: &str) -> PhraseTable {
    PhraseTable {
        entries: entries
            .iter()
            .map(|(glyphs, phrase)| (glyphs.to_string(), phrase.to_string()))
            .collect(),
        fallback: fallback.to_string(),
    }
}

fn rules(rules: &[(&str, &str)], fallback: &str) -> RuleList {
    RuleList {
        rules: rules
            .iter()
            .map(|(pattern, phrase)| SubstringRule {
                pattern: pattern.to_string(),
                phrase: phrase.to_string(),
            })
            .collect(),
        fallback: fallback.to_string(),
    }
}

impl Default for Lexicon {
    /// The built-in phrase tables
    ///
    /// Every dimension's documented default glyph value resolves here, and
    /// each table's fallback is that default value's phrase, so unfamiliar
    /// keys degrade to the same wording a freshly defaulted key produces.
    fn default() -> Self {
        Self {
            topic: table(
                &[
                    ("💻🌐", "Technology and the web"),
                    ("🎨🖌️", "Art and creative projects"),
                    ("📚✍️", "Books and writing"),
                    ("🔬🧪", "Science and research"),
                    ("🎵🎧", "Music and listening"),
                ],
                "Technology and the web",
            ),
            approach: table(
                &[
                    ("🔍🤝", "Curious and collaborative"),
                    ("💬🗣️", "Direct and talkative"),
                    ("🤔🧐", "Thoughtful and analytical"),
                    ("⚡🎯", "Fast-moving and focused"),
                    ("🌱🕊️", "Gentle and encouraging"),
                ],
                "Curious and collaborative",
            ),
            goal: table(
                &[
                    ("🎯🔄", "Keeping a steady exchange going"),
                    ("🧠📚", "Learning from each other"),
                    ("📣🌍", "Reaching a wider audience"),
                    ("🤝🔗", "Building a lasting connection"),
                    ("🛠️💡", "Collaborating on concrete projects"),
                ],
                "Keeping a steady exchange going",
            ),
            tone: table(
                &[
                    ("😊🤔", "Friendly and curious"),
                    ("🎉😄", "Enthusiastic and playful"),
                    ("❤️🤗", "Warm and supportive"),
                    ("⚖️🧐", "Measured and serious"),
                    ("🧊📏", "Reserved and precise"),
                ],
                "Friendly and curious",
            ),
            context: table(
                &[
                    ("🌈🧩", "Varied conversations across many settings"),
                    ("💼📊", "Professional and work-related threads"),
                    ("🏡☕", "Casual everyday chat"),
                    ("🎪🎭", "Lively public threads"),
                    ("🌙💭", "Late-night reflections"),
                ],
                "Varied conversations across many settings",
            ),
            trust: TrustPhrases {
                none: "Trust not yet established".to_string(),
                forming: "Initial trust forming".to_string(),
                developing: "Medium trust developing".to_string(),
                established: "High trust established".to_string(),
            },
            style: rules(
                &[
                    ("📊📈", "Structured replies, growing more detailed"),
                    ("📊📉", "Structured replies, getting briefer"),
                    ("📊", "Structured, data-minded replies"),
                    ("🎨", "Expressive, colorful phrasing"),
                    ("✂️", "Short and to the point"),
                ],
                "Communication style still taking shape",
            ),
            humor: rules(
                &[
                    ("😂🔁", "Running jokes that keep resurfacing"),
                    ("😂📈", "Humor landing better and better"),
                    ("😂", "Quick to share a laugh"),
                    ("🙃", "Dry, ironic humor"),
                    ("🤣", "Broad, big-laugh comedy"),
                ],
                "Humor register not yet established",
            ),
            collab: rules(
                &[
                    ("🤝📈", "Collaboration deepening"),
                    ("🤝📉", "Collaboration cooling off"),
                    ("🤝", "Open to working together"),
                    ("🚀", "Actively building something together"),
                    ("💡", "Trading ideas and suggestions"),
                ],
                "No collaboration signals yet",
            ),
        }
    }
}
