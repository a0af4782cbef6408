//! Atomic fragments: one output expression per term record.

use crate::error::SynthesisError;
use crate::term::{Operator, Term, TermBody, TermId, TermSequence, Token};

/// Exact word matcher.
pub const MATCH_WORD: &str = "match_w";
/// Word prefix matcher.
pub const MATCH_TEMPLATE: &str = "match_wm";
/// Negation.
pub const NOT: &str = "not";

fn resolve<'a>(seq: &'a TermSequence, id: TermId, reference: TermId) -> Result<&'a Token, SynthesisError> {
    seq.get(reference)
        .and_then(Term::token)
        .ok_or_else(|| SynthesisError::InvalidReference {
            id,
            reference,
            reason: "is not a word or template term".to_string(),
        })
}

/// Renders a single term as a fragment.
pub fn fragment(seq: &TermSequence, term: &Term) -> Result<String, SynthesisError> {
    let matcher = match &term.body {
        TermBody::Word { token } => format!("{MATCH_WORD}({token})"),
        TermBody::Template { token } => format!("{MATCH_TEMPLATE}({token})"),
        TermBody::Precedes { first, second } => {
            let first = resolve(seq, term.id, *first)?;
            let second = resolve(seq, term.id, *second)?;
            format!("{MATCH_WORD}({first} {second})")
        }
        TermBody::ClosesPrecedes { first, second } => {
            let first = resolve(seq, term.id, *first)?;
            let second = resolve(seq, term.id, *second)?;
            format!("{MATCH_WORD}({first}_{second})")
        }
    };

    Ok(match term.operator {
        Operator::Not => format!("{NOT}({matcher})"),
        Operator::And | Operator::Or => matcher,
    })
}

/// Renders every term of a sequence, in order.
pub fn atomize(seq: &TermSequence) -> Result<Vec<String>, SynthesisError> {
    seq.iter().map(|term| fragment(seq, term)).collect()
}
