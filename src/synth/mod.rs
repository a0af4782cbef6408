//! Expression synthesis.
//!
//! Turns a [`TermSequence`] into a nested boolean matching expression:
//!
//! 1. every term becomes an atomic fragment (`match_w`, `match_wm`, `not`),
//! 2. the disjunction points of the sequence select a [`Shape`],
//! 3. the shape wraps the fragments in `match_all` / `match_any`.
//!
//! Synthesis is pure: the same sequence always yields the same string.

mod fragment;
mod shape;

use tracing::debug;

use crate::error::SynthesisError;
use crate::term::TermSequence;

pub use fragment::{atomize, MATCH_TEMPLATE, MATCH_WORD, NOT};
pub use shape::{classify, Shape, MATCH_ALL, MATCH_ANY};

/// Positions of or-tagged terms after the first, ascending.
#[must_use]
pub fn disjunction_points(seq: &TermSequence) -> Vec<usize> {
    seq.iter()
        .enumerate()
        .skip(1)
        .filter(|(_, term)| term.is_or())
        .map(|(position, _)| position)
        .collect()
}

/// Synthesizes the expression for a sequence.
///
/// The sequence is validated first; an invalid sequence is reported and
/// left untouched.
pub fn synthesize(seq: &TermSequence) -> Result<String, SynthesisError> {
    seq.validate()?;
    let fragments = atomize(seq)?;
    let orpos = disjunction_points(seq);
    let shape = classify(fragments.len(), &orpos)?;
    debug!(terms = fragments.len(), ?orpos, ?shape, "synthesized rule expression");
    Ok(shape.render(&fragments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Operator, Token};

    fn seq_of(terms: &[(Operator, &str)]) -> TermSequence {
        let mut seq = TermSequence::new();
        for (operator, word) in terms {
            seq.push_word(*operator, Token::new(word).unwrap());
        }
        seq
    }

    use Operator::{And, Not, Or};

    #[test]
    fn test_empty_sequence() {
        assert_eq!(synthesize(&TermSequence::new()).unwrap(), "");
    }

    #[test]
    fn test_single_term() {
        assert_eq!(synthesize(&seq_of(&[(And, "cat")])).unwrap(), "match_w(cat)");
        assert_eq!(synthesize(&seq_of(&[(Not, "cat")])).unwrap(), "not(match_w(cat))");
    }

    #[test]
    fn test_leading_or_is_not_a_disjunction_point() {
        let seq = seq_of(&[(Or, "a"), (And, "b")]);
        assert!(disjunction_points(&seq).is_empty());
        assert_eq!(synthesize(&seq).unwrap(), "match_all( match_w(a) match_w(b) )");
    }

    #[test]
    fn test_pure_conjunction() {
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (And, "b")])).unwrap(),
            "match_all( match_w(a) match_w(b) )"
        );
    }

    #[test]
    fn test_pure_disjunction() {
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (Or, "b"), (Or, "c")])).unwrap(),
            "match_any( match_w(a) match_w(b) match_w(c) )"
        );
    }

    #[test]
    fn test_two_term_disjunction() {
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (Or, "b")])).unwrap(),
            "match_any( match_w(a) match_w(b) )"
        );
    }

    #[test]
    fn test_or_at_one_with_trailing_conjunct() {
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (Or, "b"), (And, "c")])).unwrap(),
            "match_all( match_any( match_w(a) match_w(b) ) match_w(c) )"
        );
    }

    #[test]
    fn test_or_later_in_sequence() {
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (And, "b"), (Or, "c"), (And, "d")])).unwrap(),
            "match_all( match_w(a) match_any( match_w(b) match_w(c) ) match_w(d) )"
        );
    }

    #[test]
    fn test_adjacent_ors_form_one_group() {
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (Or, "b"), (Or, "c"), (And, "d")])).unwrap(),
            "match_all( match_any( match_w(a) match_w(b) match_w(c) ) match_w(d) )"
        );
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (And, "b"), (Or, "c"), (Or, "d")])).unwrap(),
            "match_all( match_w(a) match_any( match_w(b) match_w(c) match_w(d) ) )"
        );
    }

    #[test]
    fn test_separated_ors_form_two_groups() {
        assert_eq!(
            synthesize(&seq_of(&[(And, "a"), (Or, "b"), (And, "c"), (Or, "d")])).unwrap(),
            "match_all( match_any( match_w(a) match_w(b) ) match_any( match_w(c) match_w(d) ) )"
        );
        assert_eq!(
            synthesize(&seq_of(&[
                (And, "a"),
                (Or, "b"),
                (And, "c"),
                (And, "d"),
                (Or, "e"),
                (Not, "f"),
            ]))
            .unwrap(),
            "match_all( match_any( match_w(a) match_w(b) ) match_w(c) \
             match_any( match_w(d) match_w(e) ) not(match_w(f)) )"
        );
    }

    #[test]
    fn test_three_disjunctions_rejected() {
        let seq = seq_of(&[(And, "a"), (Or, "b"), (Or, "c"), (Or, "d")]);
        assert_eq!(
            synthesize(&seq),
            Err(SynthesisError::TooManyDisjunctions { count: 3, max: 2 })
        );
        assert_eq!(seq.len(), 4);
    }

    #[test]
    fn test_proximity_fragment() {
        let mut seq = seq_of(&[(And, "tom"), (And, "maud")]);
        let (tom, maud) = (seq.terms()[0].id, seq.terms()[1].id);
        seq.push_closes_precedes(tom, maud);
        assert_eq!(
            synthesize(&seq).unwrap(),
            "match_all( match_w(tom) match_w(maud) match_w(tom_maud) )"
        );
    }

    #[test]
    fn test_deterministic() {
        let seq = seq_of(&[(And, "a"), (And, "b"), (Or, "c"), (Not, "d")]);
        let first = synthesize(&seq).unwrap();
        let second = synthesize(&seq).unwrap();
        assert_eq!(first, second);
    }
}
