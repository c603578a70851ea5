//! Rapport Interpreter
//!
//! Renders key strings as human-readable reports: one phrase per dimension,
//! SuperKey metadata, and an overall trend classification.
//!
//! # Key Features
//!
//! - **Total interpretation**: keys are parsed leniently and unknown glyph
//!   sequences degrade to fallback phrases, so `interpret` never fails
//! - **Injected phrasing**: every phrase comes from a [`Lexicon`] supplied at
//!   construction, with built-in defaults and TOML overrides
//! - **Mixed lookup strategies**: exact tables for content dimensions, a
//!   lock-count rule for trust, ordered substring rules for style, humor,
//!   and collab
//!
//! # Example Usage
//!
//! ```
//! use rapport_interpreter::Interpreter;
//!
//! let interpreter = Interpreter::default_lexicon();
//! let report = interpreter.interpret("[💻🌐]⟨🔍🤝⟩[🎯🔄]{😊🤔}➡️~[🌈🧩]|🔒🔒|📊|😂|🤝|");
//!
//! assert_eq!(report.topic, "Technology and the web");
//! assert_eq!(report.trust, "Medium trust developing");
//! ```

#![warn(missing_docs)]

mod error;
mod interpreter;
mod lexicon;
mod report;

pub use error::LexiconError;
pub use interpreter::{overall_trend, Interpreter};
pub use lexicon::{Lexicon, PhraseTable, RuleList, SubstringRule, TrustPhrases};
pub use report::{InterpretationReport, OverallTrend};
