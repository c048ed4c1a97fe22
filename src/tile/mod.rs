//! Tile feature model.
//!
//! Contains the closed feature vocabulary and the immutable notation value
//! type that the codec produces and consumes.

pub mod feature;
pub mod notation;

pub use feature::{FeatureKind, ALL_FEATURE_KINDS, EMPTY_MARKER, FEATURE_KIND_COUNT};
pub use notation::{FeatureToken, TileNotation};
