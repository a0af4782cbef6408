//! Term Model: the intermediate representation shared by both front ends.
//!
//! A rule under construction is an ordered [`TermSequence`] of [`Term`]
//! records. Insertion order is significant: it decides how the synthesizer
//! nests the output, so nothing in this crate ever reorders a sequence.

mod record;
mod sequence;
mod serialization;
mod token;
mod validation;

pub use record::{Operator, Term, TermBody, TermId, TermKind};
pub use sequence::TermSequence;
pub use serialization::{from_json, to_json_pretty};
pub use token::Token;
pub use validation::{validate, MAX_DISJUNCTIONS};
