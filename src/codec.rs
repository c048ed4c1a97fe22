//! Tile notation encoding and decoding.
//!
//! The notation is a parenthesized, semicolon-delimited list of feature
//! letters describing the terrain printed on one tile, e.g. `(H;F;C)` for a
//! house, a field, and a city segment. Grammar:
//!
//! ```text
//! tile         := "(" feature-list ")"
//! feature-list := segment (";" segment)*
//! segment      := letter
//! ```
//!
//! Whitespace around segments is ignored on input and absent from canonical
//! output. Parsing is all-or-nothing: a malformed notation yields an error,
//! never a partial feature list.

use rayon::prelude::*;
use thiserror::Error;

use crate::tile::feature::FeatureKind;
use crate::tile::notation::{FeatureToken, TileNotation};

/// Errors that can occur during notation parsing.
///
/// All are per-input failures: the caller (typically a deck loader) decides
/// whether to skip the offending definition or abort.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown feature letter '{segment}' at segment {index}")]
    UnknownLetter { segment: String, index: usize },

    #[error("notation must be wrapped in balanced parentheses: '{0}'")]
    UnbalancedParentheses(String),

    #[error("empty segment at position {index}")]
    EmptySegment { index: usize },

    #[error("notation declares no features")]
    EmptyNotation,
}

/// Parses a raw notation string into a [`TileNotation`].
///
/// Segment order is preserved: position 0 is the first listed feature.
pub fn parse(raw: &str) -> Result<TileNotation, NotationError> {
    let trimmed = raw.trim();
    let interior = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| NotationError::UnbalancedParentheses(trimmed.to_string()))?;

    if interior.trim().is_empty() {
        return Err(NotationError::EmptyNotation);
    }

    let mut tokens = Vec::new();
    for (index, segment) in interior.split(';').enumerate() {
        let segment = segment.trim();
        if segment.is_empty() {
            // Consecutive semicolons or a dangling one: an authoring mistake,
            // distinct from the explicit empty-feature marker.
            return Err(NotationError::EmptySegment { index });
        }

        let kind = single_letter(segment)
            .and_then(FeatureKind::from_letter)
            .ok_or_else(|| NotationError::UnknownLetter {
                segment: segment.to_string(),
                index,
            })?;

        tokens.push(FeatureToken { kind, index });
    }

    Ok(TileNotation::from_tokens(tokens))
}

/// Returns the segment's only character. Multi-character segments yield
/// `None`; no multi-character feature codes are defined.
fn single_letter(segment: &str) -> Option<char> {
    let mut chars = segment.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Some(first)
}

/// Renders a [`TileNotation`] into its canonical string form.
///
/// Total: the notation is already validated by construction. Canonical
/// output has no interior whitespace and uses the canonical empty marker,
/// so `parse(render(t)) == t` for every `t`.
pub fn render(tile: &TileNotation) -> String {
    let mut out = String::with_capacity(2 + tile.len() * 2);
    out.push('(');
    for (i, token) in tile.tokens().iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push(token.kind.letter());
    }
    out.push(')');
    out
}

/// Parses a batch of notations in parallel, preserving input order.
///
/// Each notation is independent, so a whole deck's worth parses in one
/// call; a malformed entry yields its own error slot without affecting the
/// rest.
pub fn parse_all<S>(raws: &[S]) -> Vec<Result<TileNotation, NotationError>>
where
    S: AsRef<str> + Sync,
{
    raws.par_iter().map(|raw| parse(raw.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_declaration_order() {
        let tile = parse("(H;F;C)").expect("failed to parse");
        assert_eq!(
            tile.kinds().collect::<Vec<_>>(),
            vec![FeatureKind::House, FeatureKind::Field, FeatureKind::City]
        );
    }

    #[test]
    fn parse_garden_shield_empty() {
        let tile = parse("(G;W;–)").expect("failed to parse");
        assert_eq!(
            tile.kinds().collect::<Vec<_>>(),
            vec![FeatureKind::Garden, FeatureKind::Shield, FeatureKind::Empty]
        );
        assert_eq!(render(&tile), "(G;W;–)");
    }

    #[test]
    fn parse_render_exact_match() {
        let raw = "(C;R;F;M)";
        let tile = parse(raw).expect("failed to parse");
        assert_eq!(
            tile.kinds().collect::<Vec<_>>(),
            vec![
                FeatureKind::City,
                FeatureKind::Road,
                FeatureKind::Field,
                FeatureKind::Monastery,
            ]
        );
        assert_eq!(render(&tile), raw);
    }

    #[test]
    fn roundtrip_every_single_kind() {
        for kind in crate::tile::feature::ALL_FEATURE_KINDS {
            let tile = TileNotation::from_kinds([kind]).unwrap();
            let reparsed = parse(&render(&tile)).expect("failed to reparse");
            assert_eq!(reparsed, tile);
        }
    }

    #[test]
    fn roundtrip_constructed_sequences() {
        let cases: &[&[FeatureKind]] = &[
            &[FeatureKind::City],
            &[FeatureKind::Field, FeatureKind::Field, FeatureKind::Road],
            &[
                FeatureKind::City,
                FeatureKind::City,
                FeatureKind::Road,
                FeatureKind::City,
                FeatureKind::City,
                FeatureKind::Shield,
            ],
            &[FeatureKind::Empty, FeatureKind::Monastery],
            &[FeatureKind::StartingTile, FeatureKind::GenericWild],
        ];

        for kinds in cases {
            let tile = TileNotation::from_kinds(kinds.iter().copied()).unwrap();
            let reparsed = parse(&render(&tile)).expect("failed to reparse");
            assert_eq!(reparsed, tile, "roundtrip mismatch for {:?}", kinds);
        }
    }

    #[test]
    fn whitespace_around_segments_normalized() {
        let tile = parse("( H ; F ;  C )").expect("failed to parse");
        assert_eq!(render(&tile), "(H;F;C)");
    }

    #[test]
    fn dash_aliases_canonicalized_on_render() {
        for raw in ["(-)", "(—)", "(–)"] {
            let tile = parse(raw).expect("failed to parse");
            assert_eq!(tile.kinds().collect::<Vec<_>>(), vec![FeatureKind::Empty]);
            assert_eq!(render(&tile), "(–)");
        }
    }

    #[test]
    fn empty_marker_mixes_with_real_features() {
        let tile = parse("(C;–;R)").expect("failed to parse");
        assert_eq!(
            tile.kinds().collect::<Vec<_>>(),
            vec![FeatureKind::City, FeatureKind::Empty, FeatureKind::Road]
        );
    }

    #[test]
    fn error_missing_parentheses() {
        let err = parse("H;F;C").unwrap_err();
        assert_eq!(err, NotationError::UnbalancedParentheses("H;F;C".to_string()));
    }

    #[test]
    fn error_unclosed_parenthesis() {
        let err = parse("(H;F;C").unwrap_err();
        assert!(matches!(err, NotationError::UnbalancedParentheses(_)));
    }

    #[test]
    fn error_unopened_parenthesis() {
        let err = parse("H;F;C)").unwrap_err();
        assert!(matches!(err, NotationError::UnbalancedParentheses(_)));
    }

    #[test]
    fn error_empty_input() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, NotationError::UnbalancedParentheses(_)));
    }

    #[test]
    fn error_empty_segment_between_semicolons() {
        let err = parse("(H;;C)").unwrap_err();
        assert_eq!(err, NotationError::EmptySegment { index: 1 });
    }

    #[test]
    fn error_trailing_semicolon() {
        let err = parse("(H;)").unwrap_err();
        assert_eq!(err, NotationError::EmptySegment { index: 1 });
    }

    #[test]
    fn error_whitespace_only_segment() {
        let err = parse("(H; ;C)").unwrap_err();
        assert_eq!(err, NotationError::EmptySegment { index: 1 });
    }

    #[test]
    fn error_zero_segments() {
        let err = parse("()").unwrap_err();
        assert_eq!(err, NotationError::EmptyNotation);

        let err = parse("(  )").unwrap_err();
        assert_eq!(err, NotationError::EmptyNotation);
    }

    #[test]
    fn error_unknown_letter_reports_segment_and_position() {
        let err = parse("(H;Z;C)").unwrap_err();
        assert_eq!(
            err,
            NotationError::UnknownLetter { segment: "Z".to_string(), index: 1 }
        );
    }

    #[test]
    fn error_lowercase_letter_rejected() {
        let err = parse("(c)").unwrap_err();
        assert!(matches!(err, NotationError::UnknownLetter { .. }));
    }

    #[test]
    fn error_multi_character_segment() {
        let err = parse("(CC;R)").unwrap_err();
        assert_eq!(
            err,
            NotationError::UnknownLetter { segment: "CC".to_string(), index: 0 }
        );
    }

    #[test]
    fn rejection_outside_vocabulary_is_complete() {
        // Every uppercase letter outside the vocabulary must be rejected.
        for c in ('A'..='Z').filter(|c| FeatureKind::from_letter(*c).is_none()) {
            let raw = format!("({})", c);
            let err = parse(&raw).unwrap_err();
            assert!(
                matches!(err, NotationError::UnknownLetter { .. }),
                "letter '{}' should be rejected",
                c
            );
        }
    }

    #[test]
    fn parse_all_preserves_order_and_errors() {
        let raws = ["(C;R)", "(H;;C)", "(M)", "nope"];
        let results = parse_all(&raws);

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1],
            Err(NotationError::EmptySegment { index: 1 })
        );
        assert_eq!(
            results[2].as_ref().unwrap().kinds().collect::<Vec<_>>(),
            vec![FeatureKind::Monastery]
        );
        assert!(matches!(
            results[3],
            Err(NotationError::UnbalancedParentheses(_))
        ));
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = parse("(H;Q;C)").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains('Q'), "message should name the segment: {}", msg);
        assert!(msg.contains('1'), "message should name the position: {}", msg);
    }
}
