//! Parser for clause notation.
//!
//! Grammar, over lexemes:
//!
//! ```text
//! rule    := WORD '(' WORD ')' NECK body '.'? EOF
//! body    := clause (( ',' | ';' ) clause)*
//! clause  := 'not'? WORD '(' WORD (',' WORD)* ')'
//! ```
//!
//! The parser only checks shape. Command names, argument meaning and
//! references are interpreted by the decoder.

use crate::error::DecodeError;

use super::lexer::{Lexeme, LexemeKind};

/// One parsed sub-clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubClause {
    /// Source text of the sub-clause, for error messages.
    pub text: String,
    /// Written with a leading `not`.
    pub negated: bool,
    /// Terminated by `;` rather than `,`.
    pub disjunct: bool,
    /// Command name, e.g. `term`.
    pub command: String,
    /// Every argument, including the leading response variable.
    pub args: Vec<String>,
}

/// A parsed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleAst {
    /// Head predicate name.
    pub head: String,
    /// Head argument (the response variable).
    pub head_var: String,
    /// Sub-clauses in source order.
    pub clauses: Vec<SubClause>,
}

const NOT_KEYWORD: &str = "not";

struct Parser<'a> {
    source: &'a str,
    lexemes: &'a [Lexeme],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Lexeme> {
        self.lexemes.get(self.pos)
    }

    fn peek_kind(&self, ahead: usize) -> Option<&'a LexemeKind> {
        self.lexemes.get(self.pos + ahead).map(|l| &l.kind)
    }

    fn error(&self, expected: &str) -> DecodeError {
        match self.peek() {
            Some(lexeme) => DecodeError::Syntax {
                offset: lexeme.offset,
                expected: expected.to_string(),
                found: lexeme.kind.describe(),
            },
            None => DecodeError::Syntax {
                offset: self.source.len(),
                expected: expected.to_string(),
                found: "end of input".to_string(),
            },
        }
    }

    fn expect(&mut self, kind: &LexemeKind, expected: &str) -> Result<&'a Lexeme, DecodeError> {
        match self.peek() {
            Some(lexeme) if lexeme.kind == *kind => {
                self.pos += 1;
                Ok(lexeme)
            }
            _ => Err(self.error(expected)),
        }
    }

    fn word(&mut self, expected: &str) -> Result<String, DecodeError> {
        if let Some(LexemeKind::Word(w)) = self.peek_kind(0) {
            self.pos += 1;
            return Ok(w.clone());
        }
        Err(self.error(expected))
    }

    fn clause(&mut self) -> Result<SubClause, DecodeError> {
        let negated = matches!(
            (self.peek_kind(0), self.peek_kind(1)),
            (Some(LexemeKind::Word(w)), Some(LexemeKind::Word(_))) if w == NOT_KEYWORD
        );
        let start = self.peek().map_or(self.source.len(), |l| l.offset);
        if negated {
            self.pos += 1;
        }

        let command = self.word("command name")?;
        self.expect(&LexemeKind::LParen, "'('")?;
        let mut args = vec![self.word("argument")?];
        while self.peek_kind(0) == Some(&LexemeKind::Comma) {
            self.pos += 1;
            args.push(self.word("argument")?);
        }
        let close = self.expect(&LexemeKind::RParen, "')'")?;

        Ok(SubClause {
            text: self.source[start..close.end].to_string(),
            negated,
            disjunct: false,
            command,
            args,
        })
    }

    fn rule(&mut self) -> Result<RuleAst, DecodeError> {
        let head = self.word("rule head")?;
        self.expect(&LexemeKind::LParen, "'('")?;
        let head_var = self.word("response variable")?;
        self.expect(&LexemeKind::RParen, "')'")?;
        self.expect(&LexemeKind::Neck, "':-'")?;

        if matches!(self.peek_kind(0), None | Some(LexemeKind::Period)) {
            return Err(DecodeError::EmptyBody);
        }

        let mut clauses = Vec::new();
        loop {
            let mut clause = self.clause()?;
            let more = match self.peek_kind(0) {
                Some(LexemeKind::Comma) => true,
                Some(LexemeKind::Semicolon) => {
                    clause.disjunct = true;
                    true
                }
                _ => false,
            };
            clauses.push(clause);
            if !more {
                break;
            }
            self.pos += 1;
        }

        if self.peek_kind(0) == Some(&LexemeKind::Period) {
            self.pos += 1;
        }
        if self.peek().is_some() {
            return Err(self.error("',', ';', '.' or end of rule"));
        }

        Ok(RuleAst {
            head,
            head_var,
            clauses,
        })
    }
}

/// Parses lexemes into a rule.
pub fn parse(source: &str, lexemes: &[Lexeme]) -> Result<RuleAst, DecodeError> {
    Parser {
        source,
        lexemes,
        pos: 0,
    }
    .rule()
}
