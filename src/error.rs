//! Error types for matchrule.
//!
//! Every failure is strongly typed using thiserror, one enum per failure
//! family, so callers can render a specific message for each case.

use thiserror::Error;

use crate::term::TermId;

/// Errors raised while decoding a clause-notation rule.
///
/// Every variant names the offending sub-clause text or byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Rule does not start with the expected head '{expected}'")]
    MissingPrefix {
        expected: String,
    },

    #[error("Rule has no sub-clauses")]
    EmptyBody,

    #[error("Unexpected character '{found}' at offset {offset}")]
    UnexpectedChar {
        found: char,
        offset: usize,
    },

    #[error("Syntax error at offset {offset}: expected {expected}, found {found}")]
    Syntax {
        offset: usize,
        expected: String,
        found: String,
    },

    #[error("Unknown command '{command}' in '{clause}'")]
    UnknownCommand {
        clause: String,
        command: String,
    },

    #[error("Malformed arguments in '{clause}': {reason}")]
    MalformedArguments {
        clause: String,
        reason: String,
    },

    #[error("Reference '{letter}' in '{clause}' {reason}")]
    BadReference {
        clause: String,
        letter: String,
        reason: String,
    },

    #[error("Unsupported operator in '{clause}': {reason}")]
    UnsupportedOperator {
        clause: String,
        reason: String,
    },
}

/// Errors raised while validating or synthesizing a term sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    #[error("Term {id} references term {reference}, which {reason}")]
    InvalidReference {
        id: TermId,
        reference: TermId,
        reason: String,
    },

    #[error("Too many disjunctions: {count} terms are or-tagged, at most {max} are supported")]
    TooManyDisjunctions {
        count: usize,
        max: usize,
    },

    #[error("Term at position {position} carries id {id}")]
    MisnumberedTerm {
        position: usize,
        id: TermId,
    },

    #[error("Proximity term {id} must be conjunctive")]
    InvalidOperator {
        id: TermId,
    },

    #[error("Disjunction point {position} is not an ascending position in 1..{len}")]
    DisjunctionPosition {
        position: usize,
        len: usize,
    },
}

/// Reasons the incremental term store refuses an operation.
///
/// A rejected operation never changes the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectedOperation {
    #[error("Token cannot be empty")]
    EmptyToken,

    #[error("Token '{token}' must be a single word")]
    WhitespaceInToken {
        token: String,
    },

    #[error("A rule may hold at most {max} word or template terms")]
    TermCapReached {
        max: usize,
    },

    #[error("Term {id} cannot be related to itself")]
    SelfReference {
        id: TermId,
    },

    #[error("Term {id} does not exist")]
    UnknownTerm {
        id: TermId,
    },

    #[error("Term {id} is not a word or template term")]
    NotPrimary {
        id: TermId,
    },

    #[error("There is no term to undo")]
    NothingToUndo,
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    Parse {
        message: String,
    },

    #[error("Invalid config field '{field}': {reason}")]
    InvalidField {
        field: String,
        reason: String,
    },
}

/// Top-level error type for matchrule.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Synthesis error: {0}")]
    Synthesis(#[from] SynthesisError),

    #[error("Rejected: {0}")]
    Rejected(#[from] RejectedOperation),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl RuleError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a decode error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns true if this is a synthesis error.
    #[must_use]
    pub const fn is_synthesis(&self) -> bool {
        matches!(self, Self::Synthesis(_))
    }

    /// Returns true if a store operation was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Returns true if this is a config error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for matchrule operations.
pub type RuleResult<T> = Result<T, RuleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_clause() {
        let err = DecodeError::UnknownCommand {
            clause: "synonym(A,cat)".to_string(),
            command: "synonym".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("synonym(A,cat)"));
        assert!(msg.contains("Unknown command"));
    }

    #[test]
    fn test_syntax_error_reports_offset() {
        let err = DecodeError::Syntax {
            offset: 17,
            expected: "')'".to_string(),
            found: "end of input".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("17"));
        assert!(msg.contains("end of input"));
    }

    #[test]
    fn test_too_many_disjunctions() {
        let err = SynthesisError::TooManyDisjunctions { count: 3, max: 2 };
        let msg = format!("{err}");
        assert!(msg.contains('3'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_invalid_reference_names_both_terms() {
        let err = SynthesisError::InvalidReference {
            id: TermId::new(3),
            reference: TermId::new(4),
            reason: "is not earlier in the sequence".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("Term 3"));
        assert!(msg.contains("term 4"));
    }

    #[test]
    fn test_rejected_operation_token() {
        let err = RejectedOperation::WhitespaceInToken {
            token: "two words".to_string(),
        };
        assert!(format!("{err}").contains("two words"));
    }

    #[test]
    fn test_rule_error_from_decode() {
        let err: RuleError = DecodeError::EmptyBody.into();
        assert!(err.is_decode());
        assert!(!err.is_rejected());
    }

    #[test]
    fn test_rule_error_from_synthesis() {
        let err: RuleError = SynthesisError::TooManyDisjunctions { count: 3, max: 2 }.into();
        assert!(err.is_synthesis());
    }

    #[test]
    fn test_rule_error_from_rejected() {
        let err: RuleError = RejectedOperation::TermCapReached { max: 5 }.into();
        assert!(err.is_rejected());
        assert!(format!("{err}").contains('5'));
    }

    #[test]
    fn test_rule_error_internal() {
        let err = RuleError::internal("unexpected state");
        assert!(err.is_internal());
        assert!(format!("{err}").contains("unexpected state"));
    }
}
