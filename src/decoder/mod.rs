//! Clause decoder.
//!
//! Translates one rule from the rule-induction service into a
//! [`TermSequence`]. A rule looks like
//!
//! ```text
//! correct_response(A) :- term(A,tom), template(A,maud); closely_precedes(A,B,C).
//! ```
//!
//! Decoding runs in three stages: [`lexer`] splits the text, [`parser`]
//! checks the shape and builds a [`RuleAst`], and [`Decoder::decode`] maps
//! each sub-clause to a term. Either the whole rule decodes or the call
//! fails; no partial sequence is ever returned.

pub mod lexer;
pub mod parser;

use tracing::debug;

use crate::config::DecoderConfig;
use crate::error::{DecodeError, RejectedOperation};
use crate::term::{Operator, TermId, TermKind, TermSequence, Token};

pub use parser::{RuleAst, SubClause};

/// Letters that may name an earlier sub-clause; `B` is the first.
const FIRST_REFERENCE: char = 'B';
const LAST_REFERENCE: char = 'I';

fn kind_for(command: &str) -> Option<TermKind> {
    match command {
        "term" => Some(TermKind::Word),
        "template" => Some(TermKind::Template),
        "precedes" => Some(TermKind::Precedes),
        "closely_precedes" => Some(TermKind::ClosesPrecedes),
        _ => None,
    }
}

fn compact(s: &str) -> String {
    let s: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    s.trim_end_matches('.').to_string()
}

fn malformed(clause: &SubClause, reason: impl Into<String>) -> DecodeError {
    DecodeError::MalformedArguments {
        clause: clause.text.clone(),
        reason: reason.into(),
    }
}

fn bad_reference(clause: &SubClause, letter: &str, reason: &str) -> DecodeError {
    DecodeError::BadReference {
        clause: clause.text.clone(),
        letter: letter.to_string(),
        reason: reason.to_string(),
    }
}

/// Decoder for clause-notation rules.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    config: DecoderConfig,
}

impl Decoder {
    /// Creates a decoder for the given notation.
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Notation this decoder accepts.
    #[must_use]
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Returns true if the rule is the "no rule suggested" sentinel.
    #[must_use]
    pub fn is_empty_rule(&self, rule: &str) -> bool {
        compact(rule) == compact(&self.config.empty_rule)
    }

    /// Lexes and parses a rule without interpreting it.
    pub fn parse(&self, rule: &str) -> Result<RuleAst, DecodeError> {
        let lexemes = lexer::tokenize(rule, &self.config.neck)?;
        let ast = parser::parse(rule, &lexemes)?;
        if ast.head != self.config.head || ast.head_var != self.config.response_var {
            return Err(DecodeError::MissingPrefix {
                expected: format!(
                    "{}({}) {}",
                    self.config.head, self.config.response_var, self.config.neck
                ),
            });
        }
        Ok(ast)
    }

    /// Decodes a rule into a term sequence.
    ///
    /// The empty-rule sentinel decodes to an empty sequence.
    pub fn decode(&self, rule: &str) -> Result<TermSequence, DecodeError> {
        if self.is_empty_rule(rule) {
            return Ok(TermSequence::new());
        }
        let ast = self.parse(rule)?;

        let mut seq = TermSequence::new();
        for (index, clause) in ast.clauses.iter().enumerate() {
            self.push_clause(&mut seq, index, clause)?;
        }
        debug!(rule, terms = seq.len(), "decoded clause rule");
        Ok(seq)
    }

    fn push_clause(
        &self,
        seq: &mut TermSequence,
        index: usize,
        clause: &SubClause,
    ) -> Result<TermId, DecodeError> {
        let kind = kind_for(&clause.command).ok_or_else(|| DecodeError::UnknownCommand {
            clause: clause.text.clone(),
            command: clause.command.clone(),
        })?;

        let payload = match clause.args.split_first() {
            Some((var, rest)) if *var == self.config.response_var => rest,
            _ => {
                return Err(malformed(
                    clause,
                    format!("first argument must be {}", self.config.response_var),
                ));
            }
        };

        // The first sub-clause has nothing to be an alternative to.
        let disjunct = clause.disjunct && index > 0;
        let operator = match (clause.negated, disjunct) {
            (true, true) => {
                return Err(DecodeError::UnsupportedOperator {
                    clause: clause.text.clone(),
                    reason: "a negated term cannot be a disjunct".to_string(),
                });
            }
            (true, false) => Operator::Not,
            (false, true) => Operator::Or,
            (false, false) => Operator::And,
        };

        if kind.is_primary() {
            let [raw] = payload else {
                return Err(malformed(
                    clause,
                    format!("expected one token, found {}", payload.len()),
                ));
            };
            let invalid = |e: RejectedOperation| malformed(clause, e.to_string());
            return Ok(if kind == TermKind::Template {
                seq.push_template(operator, Token::template(raw).map_err(invalid)?)
            } else {
                seq.push_word(operator, Token::new(raw).map_err(invalid)?)
            });
        }

        if operator != Operator::And {
            return Err(DecodeError::UnsupportedOperator {
                clause: clause.text.clone(),
                reason: format!("{kind} relations cannot carry '{operator}'"),
            });
        }
        let [first, second] = payload else {
            return Err(malformed(
                clause,
                format!("expected two references, found {}", payload.len()),
            ));
        };
        let first_id = resolve_letter(seq, index, clause, first)?;
        let second_id = resolve_letter(seq, index, clause, second)?;
        if first_id == second_id {
            return Err(bad_reference(clause, second, "is used twice"));
        }

        Ok(match kind {
            TermKind::Precedes => seq.push_precedes(first_id, second_id),
            _ => seq.push_closes_precedes(first_id, second_id),
        })
    }
}

/// Resolves a reference letter to the id of an earlier primary term.
fn resolve_letter(
    seq: &TermSequence,
    index: usize,
    clause: &SubClause,
    letter: &str,
) -> Result<TermId, DecodeError> {
    let mut chars = letter.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(bad_reference(clause, letter, "is not a single letter"));
    };
    if !(FIRST_REFERENCE..=LAST_REFERENCE).contains(&c) {
        return Err(bad_reference(clause, letter, "is outside B..I"));
    }

    let target = (c as usize) - (FIRST_REFERENCE as usize);
    if target >= index {
        return Err(bad_reference(clause, letter, "does not name an earlier sub-clause"));
    }
    #[allow(clippy::cast_possible_truncation)]
    let id = TermId::new(target as u32 + 1);
    match seq.get(id) {
        Some(term) if term.is_primary() => Ok(id),
        Some(_) => Err(bad_reference(
            clause,
            letter,
            "does not name a term or template sub-clause",
        )),
        None => Err(bad_reference(clause, letter, "does not name an earlier sub-clause")),
    }
}

/// Decodes a rule with the default notation.
pub fn decode(rule: &str) -> Result<TermSequence, DecodeError> {
    Decoder::default().decode(rule)
}
