//! Languedoc tile notation library.
//!
//! Parses the compact notation used to describe the terrain features
//! printed on Carcassonne-style tiles into validated, immutable feature
//! lists, and renders them back to canonical form. Game rules (placement,
//! scoring, turn handling) are the consuming engine's concern; this crate
//! owns the feature vocabulary, the codec, an advisory validation layer
//! for authoring tools, and the deck-definition tables they load from.

pub mod codec;
pub mod deck;
pub mod tile;
pub mod validate;
