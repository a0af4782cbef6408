//! # matchrule - Grading-rule synthesis for short-answer matching
//!
//! matchrule builds the boolean matching expressions used to grade short
//! free-text answers. A rule is assembled from atomic terms (exact words,
//! word prefixes, and ordering relations between them) and synthesized into
//! a nested expression such as
//! `match_all( match_any( match_w(a) match_w(b) ) match_wm(c*) )`.
//!
//! ## Core Concepts
//!
//! - **Term**: one atomic matching condition with an `and`/`or`/`not` operator
//! - **TermSequence**: the ordered terms of one rule; order decides nesting
//! - **TermStore**: builds a sequence one author decision at a time
//! - **Decoder**: reads rules suggested by a rule-induction service
//! - **synthesize**: turns any sequence into the expression string
//!
//! ## Usage
//!
//! ```rust,ignore
//! use matchrule::{decode, synthesize, TermId, TermStore};
//!
//! let mut store = TermStore::new();
//! store.add_word_and("tom")?;
//! store.add_word_and("maud")?;
//! let preview = store.add_closes_precedes(TermId::new(1), TermId::new(2))?;
//!
//! let seq = decode("correct_response(A) :- term(A,cell), template(A,membran).")?;
//! assert_eq!(synthesize(&seq)?, "match_all( match_w(cell) match_wm(membran*) )");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod decoder;
pub mod error;
pub mod store;
pub mod suggestion;
pub mod synth;
pub mod term;

// Re-export primary types at crate root for convenience
pub use config::{Config, DecoderConfig, StoreConfig};
pub use decoder::{decode, Decoder};
pub use error::{
    ConfigError, DecodeError, RejectedOperation, RuleError, RuleResult, SynthesisError,
};
pub use store::{SessionId, TermStore};
pub use suggestion::{suggest, suggest_one, Suggestion};
pub use synth::synthesize;
pub use term::{validate, Operator, Term, TermBody, TermId, TermKind, TermSequence, Token};
