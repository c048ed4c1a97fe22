//! Feature vocabulary for tile notation.
//!
//! Every terrain or structure category a tile segment can represent is a
//! variant of [`FeatureKind`], paired with exactly one canonical notation
//! letter. The mapping is a bijection: no two kinds share a letter and every
//! kind has one. The vocabulary is fixed at compile time and never mutated.

/// The number of feature kinds in the vocabulary.
pub const FEATURE_KIND_COUNT: usize = 12;

/// The canonical empty marker (U+2013). The ASCII hyphen and the em dash
/// are accepted as input aliases; output always uses this character.
pub const EMPTY_MARKER: char = '–';

/// One terrain or structure category a tile segment can represent.
///
/// Variants are in canonical table order. The `#[repr(u8)]` attribute
/// enables use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FeatureKind {
    City = 0,
    Road = 1,
    Field = 2,
    Monastery = 3,
    Shield = 4,
    House = 5,
    Garden = 6,
    Cloister = 7,
    Pennant = 8,
    StartingTile = 9,
    GenericWild = 10,
    Empty = 11,
}

/// All feature kinds in index order.
pub const ALL_FEATURE_KINDS: [FeatureKind; FEATURE_KIND_COUNT] = [
    FeatureKind::City,
    FeatureKind::Road,
    FeatureKind::Field,
    FeatureKind::Monastery,
    FeatureKind::Shield,
    FeatureKind::House,
    FeatureKind::Garden,
    FeatureKind::Cloister,
    FeatureKind::Pennant,
    FeatureKind::StartingTile,
    FeatureKind::GenericWild,
    FeatureKind::Empty,
];

impl FeatureKind {
    /// Returns the canonical notation letter for this kind.
    pub const fn letter(self) -> char {
        match self {
            FeatureKind::City => 'C',
            FeatureKind::Road => 'R',
            FeatureKind::Field => 'F',
            FeatureKind::Monastery => 'M',
            FeatureKind::Shield => 'W',
            FeatureKind::House => 'H',
            FeatureKind::Garden => 'G',
            FeatureKind::Cloister => 'D',
            FeatureKind::Pennant => 'P',
            FeatureKind::StartingTile => 'S',
            FeatureKind::GenericWild => 'X',
            FeatureKind::Empty => EMPTY_MARKER,
        }
    }

    /// Returns the lowercase display name of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            FeatureKind::City => "city",
            FeatureKind::Road => "road",
            FeatureKind::Field => "field",
            FeatureKind::Monastery => "monastery",
            FeatureKind::Shield => "shield",
            FeatureKind::House => "house",
            FeatureKind::Garden => "garden",
            FeatureKind::Cloister => "cloister",
            FeatureKind::Pennant => "pennant",
            FeatureKind::StartingTile => "starting tile",
            FeatureKind::GenericWild => "wildcard",
            FeatureKind::Empty => "empty",
        }
    }

    /// Parses a feature kind from its notation letter.
    ///
    /// Case-sensitive: only the canonical uppercase letters and the empty
    /// marker (plus its dash aliases) are recognized.
    pub fn from_letter(c: char) -> Option<FeatureKind> {
        match c {
            'C' => Some(FeatureKind::City),
            'R' => Some(FeatureKind::Road),
            'F' => Some(FeatureKind::Field),
            'M' => Some(FeatureKind::Monastery),
            'W' => Some(FeatureKind::Shield),
            'H' => Some(FeatureKind::House),
            'G' => Some(FeatureKind::Garden),
            'D' => Some(FeatureKind::Cloister),
            'P' => Some(FeatureKind::Pennant),
            'S' => Some(FeatureKind::StartingTile),
            'X' => Some(FeatureKind::GenericWild),
            '–' | '—' | '-' => Some(FeatureKind::Empty),
            _ => None,
        }
    }
}
