//! Rapport Domain Layer
//!
//! This crate contains the core domain model for Rapport: the vocabulary and
//! value objects describing a relationship state. It has ZERO external
//! dependencies and defines the fundamental concepts that the codec and
//! interpreter layers operate on.
//!
//! ## Key Concepts
//!
//! - **Dimension**: one of the nine named facets of a relationship
//!   (topic, approach, goal, tone, context, trust, style, humor, collab)
//! - **DimensionValue**: an opaque glyph sequence plus a trend annotation
//! - **RelationshipState**: the full nine-dimension record, possibly flagged
//!   as the product of history compression
//! - **DeltaSignal**: the per-dimension change signal supplied by external
//!   context analysis, consumed by the trend annotator
//! - **KeyHistory**: the trait boundary to whatever stores past keys
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Pure values only; wire syntax lives in `rapport-codec`
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dimension;
pub mod signal;
pub mod state;
pub mod traits;
pub mod trend;
pub mod value;

// Re-exports for convenience
pub use dimension::{Dimension, TRUST_LOCK};
pub use signal::{Delta, DeltaSignal, DimensionDelta};
pub use state::{CompressionInfo, RelationshipState};
pub use trend::Trend;
pub use value::DimensionValue;
