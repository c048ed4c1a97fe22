//! Advisory validation for tile authoring.
//!
//! The codec accepts any well-formed notation; whether a feature
//! combination is plausible for an actual tile set is a game-rules
//! question the codec stays out of. Authoring tools supply the constraints
//! they care about as a [`RuleSet`] and get back the violations, if any.
//! With no rules supplied, every tile passes.

use std::fmt;

use crate::tile::feature::FeatureKind;
use crate::tile::notation::TileNotation;

/// One constraint an authoring tool can impose on a tile's feature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The kind may appear at most `max` times per tile.
    MaxCount { kind: FeatureKind, max: usize },

    /// When present, the kind must be the tile's only feature.
    Standalone(FeatureKind),

    /// The two kinds may not appear on the same tile.
    MutuallyExclusive(FeatureKind, FeatureKind),
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rule::MaxCount { kind, max } => {
                write!(f, "at most {} {} feature(s) per tile", max, kind.name())
            }
            Rule::Standalone(kind) => {
                write!(f, "{} must be the only feature on its tile", kind.name())
            }
            Rule::MutuallyExclusive(a, b) => {
                write!(f, "{} and {} may not share a tile", a.name(), b.name())
            }
        }
    }
}

/// An ordered list of rules to check tiles against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// An empty rule set: validates everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, builder-style.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the rules in check order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleSet { rules: iter.into_iter().collect() }
    }
}

/// A rule that fired, with the token positions that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub rule: Rule,
    pub positions: Vec<usize>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (positions {:?})", self.rule, self.positions)
    }
}

/// Checks a tile against a rule set.
///
/// Advisory only: returns the violated rules (empty = valid), never an
/// error. Rules are checked in order, one violation entry per fired rule.
pub fn validate(tile: &TileNotation, rules: &RuleSet) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in rules.rules() {
        match *rule {
            Rule::MaxCount { kind, max } => {
                let positions = positions_of(tile, kind);
                if positions.len() > max {
                    violations.push(Violation { rule: *rule, positions });
                }
            }

            Rule::Standalone(kind) => {
                let positions = positions_of(tile, kind);
                if !positions.is_empty() && tile.len() > 1 {
                    violations.push(Violation { rule: *rule, positions });
                }
            }

            Rule::MutuallyExclusive(a, b) => {
                let mut positions = positions_of(tile, a);
                let other = positions_of(tile, b);
                if !positions.is_empty() && !other.is_empty() {
                    positions.extend(other);
                    positions.sort_unstable();
                    violations.push(Violation { rule: *rule, positions });
                }
            }
        }
    }

    violations
}

/// Positions of every token of the given kind, in declaration order.
fn positions_of(tile: &TileNotation, kind: FeatureKind) -> Vec<usize> {
    tile.tokens()
        .iter()
        .filter(|t| t.kind == kind)
        .map(|t| t.index)
        .collect()
}
