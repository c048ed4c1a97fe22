//! Tile notation value types.
//!
//! A [`TileNotation`] is the parsed form of one tile's feature list: an
//! ordered, non-empty sequence of [`FeatureToken`]s. Position is purely
//! sequential ("first listed feature"), not spatial; binding a position to
//! a physical tile edge is the consuming engine's layout convention and is
//! deliberately not encoded here.

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{self, NotationError};
use crate::tile::feature::FeatureKind;

/// One parsed element of a notation string: a feature kind at a zero-based
/// position in the tile's feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureToken {
    pub kind: FeatureKind,
    pub index: usize,
}

/// An immutable, ordered, non-empty feature list for one tile.
///
/// Constructed only by a successful [`codec::parse`] or by
/// [`TileNotation::from_kinds`]; there is no mutating API, so a value is
/// valid for its whole lifetime and safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileNotation {
    tokens: Vec<FeatureToken>,
}

impl TileNotation {
    /// Builds a notation from an ordered list of feature kinds, for callers
    /// authoring tile definitions programmatically.
    ///
    /// Fails with [`NotationError::EmptyNotation`] when the list is empty;
    /// a tile always declares at least one feature.
    pub fn from_kinds<I>(kinds: I) -> Result<Self, NotationError>
    where
        I: IntoIterator<Item = FeatureKind>,
    {
        let tokens: Vec<FeatureToken> = kinds
            .into_iter()
            .enumerate()
            .map(|(index, kind)| FeatureToken { kind, index })
            .collect();

        if tokens.is_empty() {
            return Err(NotationError::EmptyNotation);
        }

        Ok(TileNotation { tokens })
    }

    /// Wraps tokens produced by the codec. Callers must guarantee the list
    /// is non-empty and indices are sequential from zero.
    pub(crate) fn from_tokens(tokens: Vec<FeatureToken>) -> Self {
        debug_assert!(!tokens.is_empty());
        debug_assert!(tokens.iter().enumerate().all(|(i, t)| t.index == i));
        TileNotation { tokens }
    }

    /// Returns the tokens in declaration order.
    pub fn tokens(&self) -> &[FeatureToken] {
        &self.tokens
    }

    /// Iterates over the feature kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = FeatureKind> + '_ {
        self.tokens.iter().map(|t| t.kind)
    }

    /// Returns the number of features on the tile (always at least 1).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Always false: the empty list is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the token at a position, if any.
    pub fn get(&self, index: usize) -> Option<FeatureToken> {
        self.tokens.get(index).copied()
    }
}

impl fmt::Display for TileNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&codec::render(self))
    }
}

/// Serializes as the canonical notation string, so tile definitions carry
/// no second persistence format beyond the notation itself.
impl Serialize for TileNotation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&codec::render(self))
    }
}

impl<'de> Deserialize<'de> for TileNotation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        codec::parse(&raw).map_err(DeError::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_kinds_preserves_order_and_indices() {
        let tile = TileNotation::from_kinds([
            FeatureKind::House,
            FeatureKind::Field,
            FeatureKind::City,
        ])
        .unwrap();

        assert_eq!(tile.len(), 3);
        assert_eq!(
            tile.kinds().collect::<Vec<_>>(),
            vec![FeatureKind::House, FeatureKind::Field, FeatureKind::City]
        );
        for (i, token) in tile.tokens().iter().enumerate() {
            assert_eq!(token.index, i);
        }
    }

    #[test]
    fn from_kinds_rejects_empty_list() {
        let err = TileNotation::from_kinds(Vec::new()).unwrap_err();
        assert_eq!(err, NotationError::EmptyNotation);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let tile = TileNotation::from_kinds([FeatureKind::Monastery]).unwrap();
        assert_eq!(
            tile.get(0),
            Some(FeatureToken { kind: FeatureKind::Monastery, index: 0 })
        );
        assert_eq!(tile.get(1), None);
    }

    #[test]
    fn display_is_canonical_notation() {
        let tile = TileNotation::from_kinds([
            FeatureKind::Garden,
            FeatureKind::Shield,
            FeatureKind::Empty,
        ])
        .unwrap();
        assert_eq!(tile.to_string(), "(G;W;–)");
    }

    #[test]
    fn serde_roundtrips_through_canonical_string() {
        let tile = TileNotation::from_kinds([
            FeatureKind::City,
            FeatureKind::Road,
            FeatureKind::Field,
            FeatureKind::Monastery,
        ])
        .unwrap();

        let json = serde_json::to_string(&tile).unwrap();
        assert_eq!(json, "\"(C;R;F;M)\"");

        let back: TileNotation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tile);
    }

    #[test]
    fn serde_rejects_malformed_string() {
        let result: Result<TileNotation, _> = serde_json::from_str("\"C;R;F\"");
        assert!(result.is_err());
    }
}
