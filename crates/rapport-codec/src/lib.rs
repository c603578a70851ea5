//! Rapport Codec
//!
//! Reads and writes the symbolic key format that summarizes a relationship
//! state: nine glyph-sequence dimensions in fixed delimiter groups, optional
//! trailing trend glyphs, and a SuperKey envelope for compressed histories.
//!
//! # Overview
//!
//! ```text
//! external context → encode → key string → parse → update → encode (cycle)
//! accumulated keys → Compressor → SuperKey string
//! ```
//!
//! # Key Features
//!
//! - **Positional grammar**: bracket and pipe groups are assigned to
//!   dimensions purely by position in one forward scan, never by content
//! - **One interface, two behaviors**: strict parsing fails on the first
//!   missing required group; lenient parsing substitutes documented defaults
//! - **Loud analytical paths**: parse and compress surface errors directly;
//!   encoding never fails
//! - **History compression**: dominant glyphs plus an aggregate trend per
//!   dimension, wrapped in an envelope carrying the configured ratio
//!
//! # Example Usage
//!
//! ```
//! use rapport_codec::{encode, update, CodecConfig, Parser};
//! use rapport_domain::{Delta, DeltaSignal, Dimension, RelationshipState};
//!
//! # fn example() -> Result<(), rapport_codec::CodecError> {
//! let parser = Parser::new(CodecConfig::default());
//!
//! let key = encode(&RelationshipState::new());
//! let state = parser.parse(&key)?;
//!
//! let signal = DeltaSignal::new().with_delta(Dimension::Trust, Delta::Increase);
//! let next = update(&state, &signal);
//!
//! assert!(parser.parse(&encode(&next)).is_ok());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod annotator;
mod compressor;
mod config;
mod encoder;
mod error;
mod grammar;
mod parser;
mod tokenizer;

pub use annotator::update;
pub use compressor::{Compressor, MIN_HISTORY};
pub use config::{CodecConfig, ParseMode};
pub use encoder::encode;
pub use error::CodecError;
pub use grammar::DEFAULT_RATIO;
pub use parser::Parser;
