//! Term sequence validation.
//!
//! Sequences built through the store or the decoder are well-formed by
//! construction apart from the disjunction limit. Validation still checks
//! every invariant because sequences can also arrive as JSON.

use crate::error::SynthesisError;

use super::{Operator, TermId, TermSequence};

/// Maximum number of or-tagged records the synthesizer supports.
pub const MAX_DISJUNCTIONS: usize = 2;

fn invalid_reference(id: TermId, reference: TermId, reason: &str) -> SynthesisError {
    SynthesisError::InvalidReference {
        id,
        reference,
        reason: reason.to_string(),
    }
}

/// Validates a sequence against the term model invariants.
pub fn validate(seq: &TermSequence) -> Result<(), SynthesisError> {
    for (position, term) in seq.iter().enumerate() {
        if term.id.index() != Some(position) {
            return Err(SynthesisError::MisnumberedTerm {
                position: position + 1,
                id: term.id,
            });
        }

        let Some((first, second)) = term.references() else {
            continue;
        };
        if term.operator != Operator::And {
            return Err(SynthesisError::InvalidOperator { id: term.id });
        }
        if first == second {
            return Err(invalid_reference(term.id, second, "is referenced twice"));
        }
        for reference in [first, second] {
            if reference >= term.id {
                return Err(invalid_reference(term.id, reference, "is not earlier in the sequence"));
            }
            match seq.get(reference) {
                None => return Err(invalid_reference(term.id, reference, "does not exist")),
                Some(target) if !target.is_primary() => {
                    return Err(invalid_reference(
                        term.id,
                        reference,
                        "is not a word or template term",
                    ));
                }
                Some(_) => {}
            }
        }
    }

    let count = seq.or_count();
    if count > MAX_DISJUNCTIONS {
        return Err(SynthesisError::TooManyDisjunctions {
            count,
            max: MAX_DISJUNCTIONS,
        });
    }
    Ok(())
}

impl TermSequence {
    /// Validates this sequence.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::{Term, TermBody, Token};

    fn token(s: &str) -> Token {
        Token::new(s).unwrap()
    }

    fn raw(terms: Vec<Term>) -> TermSequence {
        serde_json::from_value(serde_json::to_value(terms).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(TermSequence::new().validate().is_ok());
    }

    #[test]
    fn test_well_formed_sequence() {
        let mut seq = TermSequence::new();
        let a = seq.push_word(Operator::And, token("tom"));
        let b = seq.push_word(Operator::Or, token("maud"));
        seq.push_closes_precedes(a, b);
        assert!(seq.validate().is_ok());
    }

    #[test]
    fn test_forward_reference_rejected() {
        let mut seq = TermSequence::new();
        let a = seq.push_word(Operator::And, token("a"));
        seq.push_precedes(a, TermId::new(3));
        seq.push_word(Operator::And, token("c"));
        let err = seq.validate().unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::InvalidReference { reference, .. } if reference == TermId::new(3)
        ));
    }

    #[test]
    fn test_self_reference_rejected() {
        let mut seq = TermSequence::new();
        seq.push_word(Operator::And, token("a"));
        seq.push_precedes(TermId::new(1), TermId::new(2));
        assert!(matches!(seq.validate(), Err(SynthesisError::InvalidReference { .. })));
    }

    #[test]
    fn test_duplicate_reference_rejected() {
        let mut seq = TermSequence::new();
        let a = seq.push_word(Operator::And, token("a"));
        seq.push_precedes(a, a);
        assert!(matches!(seq.validate(), Err(SynthesisError::InvalidReference { .. })));
    }

    #[test]
    fn test_reference_to_proximity_rejected() {
        let mut seq = TermSequence::new();
        let a = seq.push_word(Operator::And, token("a"));
        let b = seq.push_word(Operator::And, token("b"));
        let p = seq.push_precedes(a, b);
        seq.push_closes_precedes(a, p);
        let err = seq.validate().unwrap_err();
        assert!(format!("{err}").contains("not a word or template"));
    }

    #[test]
    fn test_zero_reference_rejected() {
        let mut seq = TermSequence::new();
        let a = seq.push_word(Operator::And, token("a"));
        seq.push_precedes(TermId::new(0), a);
        assert!(matches!(seq.validate(), Err(SynthesisError::InvalidReference { .. })));
    }

    #[test]
    fn test_three_disjunctions_rejected() {
        let mut seq = TermSequence::new();
        seq.push_word(Operator::Or, token("a"));
        seq.push_word(Operator::Or, token("b"));
        seq.push_word(Operator::Or, token("c"));
        assert_eq!(
            seq.validate(),
            Err(SynthesisError::TooManyDisjunctions { count: 3, max: 2 })
        );
    }

    #[test]
    fn test_misnumbered_rejected() {
        let seq = raw(vec![Term {
            id: TermId::new(2),
            operator: Operator::And,
            body: TermBody::Word { token: token("a") },
        }]);
        assert!(matches!(seq.validate(), Err(SynthesisError::MisnumberedTerm { position: 1, .. })));
    }

    #[test]
    fn test_disjunctive_proximity_rejected() {
        let seq = raw(vec![
            Term {
                id: TermId::new(1),
                operator: Operator::And,
                body: TermBody::Word { token: token("a") },
            },
            Term {
                id: TermId::new(2),
                operator: Operator::And,
                body: TermBody::Word { token: token("b") },
            },
            Term {
                id: TermId::new(3),
                operator: Operator::Not,
                body: TermBody::Precedes {
                    first: TermId::new(1),
                    second: TermId::new(2),
                },
            },
        ]);
        assert_eq!(
            seq.validate(),
            Err(SynthesisError::InvalidOperator { id: TermId::new(3) })
        );
    }
}
