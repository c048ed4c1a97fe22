//! Tile-definition tables and deck loading.
//!
//! A deck is declared as a table of named tile definitions, each pairing a
//! notation with a copy count, in the same shape tile-distribution tables
//! are authored in. Loading parses every row and, per caller policy, either
//! aborts on the first malformed entry or logs and skips it. Shuffling,
//! placement, and scoring belong to the consuming engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::codec::{self, NotationError};
use crate::tile::feature::FeatureKind;
use crate::tile::notation::{FeatureToken, TileNotation};

/// One row of a tile-distribution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDefinition {
    pub name: String,
    pub notation: TileNotation,
    pub count: u32,
}

/// What to do with a malformed definition row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Fail the whole load on the first malformed row.
    Abort,
    /// Log and drop malformed rows, keep the rest.
    Skip,
}

/// A definition row that failed to parse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("tile definition '{name}' (row {row}): {source}")]
pub struct DeckError {
    pub name: String,
    pub row: usize,
    #[source]
    pub source: NotationError,
}

/// The outcome of a deck load: the good rows, plus the rows skipped along
/// the way (always empty under [`LoadPolicy::Abort`]).
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub deck: DeckDefinition,
    pub skipped: Vec<DeckError>,
}

/// A validated, ordered tile-definition table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDefinition {
    definitions: Vec<TileDefinition>,
}

impl DeckDefinition {
    /// Returns the definitions in table order.
    pub fn definitions(&self) -> &[TileDefinition] {
        &self.definitions
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&TileDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Total number of physical tiles the table describes (count-weighted).
    pub fn total_tiles(&self) -> u32 {
        self.definitions.iter().map(|d| d.count).sum()
    }

    /// Yields each definition's notation `count` times, in table order.
    pub fn expanded(&self) -> impl Iterator<Item = &TileNotation> + '_ {
        self.definitions
            .iter()
            .flat_map(|d| std::iter::repeat(&d.notation).take(d.count as usize))
    }

    /// Reads a deck from a JSON tile table. Notations deserialize through
    /// the codec, so a malformed row fails the whole read.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The standard base-game tile table: 24 kinds, 72 tiles.
    ///
    /// Features are listed in the authoring convention of the source table
    /// (north, east, south, west, center), with the shield marker appended
    /// where a tile carries a coat of arms and the empty marker where the
    /// tile has no center feature. The codec itself assigns no edge meaning
    /// to positions.
    pub fn base_game() -> Self {
        let definitions = BASE_GAME_TABLE
            .iter()
            .map(|&(name, kinds, count)| TileDefinition {
                name: name.to_string(),
                notation: notation_from_table(kinds),
                count,
            })
            .collect();
        DeckDefinition { definitions }
    }
}

/// Notation for the conventional opening tile: the road-through-city tile D
/// with the starting-tile marker appended.
pub const STARTING_TILE_NOTATION: &str = "(C;R;F;R;R;S)";

/// Parses a table of `(name, notation, count)` rows into a deck.
///
/// Under [`LoadPolicy::Abort`] the first malformed row fails the load;
/// under [`LoadPolicy::Skip`] malformed rows are logged, collected in the
/// report, and dropped.
pub fn load_deck<'a, I>(entries: I, policy: LoadPolicy) -> Result<LoadReport, DeckError>
where
    I: IntoIterator<Item = (&'a str, &'a str, u32)>,
{
    let mut definitions = Vec::new();
    let mut skipped = Vec::new();

    for (row, (name, raw, count)) in entries.into_iter().enumerate() {
        match codec::parse(raw) {
            Ok(notation) => definitions.push(TileDefinition {
                name: name.to_string(),
                notation,
                count,
            }),
            Err(source) => {
                let err = DeckError { name: name.to_string(), row, source };
                match policy {
                    LoadPolicy::Abort => return Err(err),
                    LoadPolicy::Skip => {
                        warn!(row, name, error = %err.source, "skipping malformed tile definition");
                        skipped.push(err);
                    }
                }
            }
        }
    }

    Ok(LoadReport { deck: DeckDefinition { definitions }, skipped })
}

/// Builds a notation directly from a static table row. Table rows are
/// non-empty by construction, so no parse step is needed.
fn notation_from_table(kinds: &[FeatureKind]) -> TileNotation {
    TileNotation::from_tokens(
        kinds
            .iter()
            .enumerate()
            .map(|(index, &kind)| FeatureToken { kind, index })
            .collect(),
    )
}

/// The base-game distribution: (tile name, features, copies).
static BASE_GAME_TABLE: [(&str, &[FeatureKind], u32); 24] = [
    ("A", &[FeatureKind::Field, FeatureKind::Field, FeatureKind::Road, FeatureKind::Field, FeatureKind::Monastery], 2),
    ("B", &[FeatureKind::Field, FeatureKind::Field, FeatureKind::Field, FeatureKind::Field, FeatureKind::Monastery], 4),
    ("C", &[FeatureKind::City, FeatureKind::City, FeatureKind::City, FeatureKind::City, FeatureKind::City, FeatureKind::Shield], 1),
    ("D", &[FeatureKind::City, FeatureKind::Road, FeatureKind::Field, FeatureKind::Road, FeatureKind::Road], 4),
    ("E", &[FeatureKind::City, FeatureKind::Field, FeatureKind::Field, FeatureKind::Field, FeatureKind::City], 5),
    ("F", &[FeatureKind::Field, FeatureKind::City, FeatureKind::Field, FeatureKind::City, FeatureKind::City, FeatureKind::Shield], 2),
    ("G", &[FeatureKind::Field, FeatureKind::City, FeatureKind::Field, FeatureKind::City, FeatureKind::City], 1),
    ("H", &[FeatureKind::City, FeatureKind::Field, FeatureKind::City, FeatureKind::Field, FeatureKind::Field], 3),
    ("I", &[FeatureKind::City, FeatureKind::Field, FeatureKind::Field, FeatureKind::City, FeatureKind::Field], 2),
    ("J", &[FeatureKind::City, FeatureKind::Road, FeatureKind::Road, FeatureKind::Field, FeatureKind::Road], 3),
    ("K", &[FeatureKind::City, FeatureKind::Field, FeatureKind::Road, FeatureKind::Road, FeatureKind::Road], 3),
    ("L", &[FeatureKind::City, FeatureKind::Road, FeatureKind::Road, FeatureKind::Road, FeatureKind::Empty], 3),
    ("M", &[FeatureKind::City, FeatureKind::City, FeatureKind::Field, FeatureKind::Field, FeatureKind::City, FeatureKind::Shield], 2),
    ("N", &[FeatureKind::City, FeatureKind::City, FeatureKind::Field, FeatureKind::Field, FeatureKind::City], 3),
    ("O", &[FeatureKind::City, FeatureKind::Road, FeatureKind::Road, FeatureKind::City, FeatureKind::City, FeatureKind::Shield], 2),
    ("P", &[FeatureKind::City, FeatureKind::Road, FeatureKind::Road, FeatureKind::City, FeatureKind::City], 3),
    ("Q", &[FeatureKind::City, FeatureKind::City, FeatureKind::Field, FeatureKind::City, FeatureKind::City, FeatureKind::Shield], 1),
    ("R", &[FeatureKind::City, FeatureKind::City, FeatureKind::Field, FeatureKind::City, FeatureKind::City], 3),
    ("S", &[FeatureKind::City, FeatureKind::City, FeatureKind::Road, FeatureKind::City, FeatureKind::City, FeatureKind::Shield], 2),
    ("T", &[FeatureKind::City, FeatureKind::City, FeatureKind::Road, FeatureKind::City, FeatureKind::City], 1),
    ("U", &[FeatureKind::Road, FeatureKind::Field, FeatureKind::Road, FeatureKind::Field, FeatureKind::Road], 8),
    ("V", &[FeatureKind::Field, FeatureKind::Field, FeatureKind::Road, FeatureKind::Road, FeatureKind::Road], 9),
    ("W", &[FeatureKind::Field, FeatureKind::Road, FeatureKind::Road, FeatureKind::Road, FeatureKind::Empty], 4),
    ("X", &[FeatureKind::Road, FeatureKind::Road, FeatureKind::Road, FeatureKind::Road, FeatureKind::Empty], 1),
];
