//! Term records.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Token;

/// Position of a term in its sequence, starting at 1.
///
/// Assigned at insertion and never changed, so proximity terms can refer
/// to earlier terms by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(u32);

impl TermId {
    /// Creates a term id from its 1-based position.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw 1-based id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the 0-based index this id occupies, if it is a valid id.
    #[must_use]
    pub fn index(self) -> Option<usize> {
        usize::try_from(self.0).ok()?.checked_sub(1)
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Boolean role of a term within the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// The term must match.
    #[default]
    And,
    /// The term is an alternative to the term before it.
    Or,
    /// The term must not match.
    Not,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "and"),
            Self::Or => write!(f, "or"),
            Self::Not => write!(f, "not"),
        }
    }
}

/// The matching relation a term expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermKind {
    /// Exact match of one word.
    Word,
    /// Prefix match of one word.
    Template,
    /// Two earlier terms appear in order within a sentence.
    Precedes,
    /// Two earlier terms appear in order within two words of each other.
    ClosesPrecedes,
}

impl TermKind {
    /// Returns true for word and template kinds.
    #[must_use]
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Word | Self::Template)
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word => write!(f, "word"),
            Self::Template => write!(f, "template"),
            Self::Precedes => write!(f, "precedes"),
            Self::ClosesPrecedes => write!(f, "closely_precedes"),
        }
    }
}

/// Kind-specific payload of a term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TermBody {
    /// Exact word.
    Word {
        /// Word to match.
        token: Token,
    },
    /// Word prefix; the token always ends in `*`.
    Template {
        /// Starred prefix to match.
        token: Token,
    },
    /// Ordered pair within a sentence.
    Precedes {
        /// Term whose word comes first.
        first: TermId,
        /// Term whose word comes second.
        second: TermId,
    },
    /// Ordered pair within two words.
    ClosesPrecedes {
        /// Term whose word comes first.
        first: TermId,
        /// Term whose word comes second.
        second: TermId,
    },
}

impl TermBody {
    /// Returns the kind of this payload.
    #[must_use]
    pub const fn kind(&self) -> TermKind {
        match self {
            Self::Word { .. } => TermKind::Word,
            Self::Template { .. } => TermKind::Template,
            Self::Precedes { .. } => TermKind::Precedes,
            Self::ClosesPrecedes { .. } => TermKind::ClosesPrecedes,
        }
    }
}

/// One atomic matching condition with its operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// 1-based position in the sequence.
    pub id: TermId,
    /// Boolean role of the term.
    #[serde(default)]
    pub operator: Operator,
    /// Kind and payload.
    #[serde(flatten)]
    pub body: TermBody,
}

impl Term {
    /// Returns the kind of this term.
    #[must_use]
    pub const fn kind(&self) -> TermKind {
        self.body.kind()
    }

    /// Returns true for word and template terms.
    #[must_use]
    pub const fn is_primary(&self) -> bool {
        self.kind().is_primary()
    }

    /// Returns the token of a word or template term.
    #[must_use]
    pub const fn token(&self) -> Option<&Token> {
        match &self.body {
            TermBody::Word { token } | TermBody::Template { token } => Some(token),
            TermBody::Precedes { .. } | TermBody::ClosesPrecedes { .. } => None,
        }
    }

    /// Returns the referenced ids of a proximity term.
    #[must_use]
    pub const fn references(&self) -> Option<(TermId, TermId)> {
        match &self.body {
            TermBody::Precedes { first, second } | TermBody::ClosesPrecedes { first, second } => {
                Some((*first, *second))
            }
            TermBody::Word { .. } | TermBody::Template { .. } => None,
        }
    }

    /// Returns true if this term is a disjunction point.
    #[must_use]
    pub fn is_or(&self) -> bool {
        self.operator == Operator::Or
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            TermBody::Word { token } | TermBody::Template { token } => {
                write!(f, "#{} {} {}({})", self.id, self.operator, self.kind(), token)
            }
            TermBody::Precedes { first, second } | TermBody::ClosesPrecedes { first, second } => {
                write!(f, "#{} {}(#{first}, #{second})", self.id, self.kind())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: u32, operator: Operator, token: &str) -> Term {
        Term {
            id: TermId::new(id),
            operator,
            body: TermBody::Word {
                token: Token::new(token).unwrap(),
            },
        }
    }

    #[test]
    fn test_term_id_index() {
        assert_eq!(TermId::new(1).index(), Some(0));
        assert_eq!(TermId::new(4).index(), Some(3));
        assert_eq!(TermId::new(0).index(), None);
    }

    #[test]
    fn test_operator_default_is_and() {
        assert_eq!(Operator::default(), Operator::And);
    }

    #[test]
    fn test_primary_kinds() {
        assert!(TermKind::Word.is_primary());
        assert!(TermKind::Template.is_primary());
        assert!(!TermKind::Precedes.is_primary());
        assert!(!TermKind::ClosesPrecedes.is_primary());
    }

    #[test]
    fn test_term_accessors() {
        let term = word(1, Operator::Or, "cat");
        assert!(term.is_primary());
        assert!(term.is_or());
        assert_eq!(term.token().map(Token::as_str), Some("cat"));
        assert_eq!(term.references(), None);

        let proximity = Term {
            id: TermId::new(3),
            operator: Operator::And,
            body: TermBody::ClosesPrecedes {
                first: TermId::new(1),
                second: TermId::new(2),
            },
        };
        assert_eq!(proximity.kind(), TermKind::ClosesPrecedes);
        assert_eq!(proximity.references(), Some((TermId::new(1), TermId::new(2))));
        assert!(proximity.token().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(word(2, Operator::Not, "dog").to_string(), "#2 not word(dog)");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(word(1, Operator::And, "cat")).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["operator"], "and");
        assert_eq!(json["kind"], "word");
        assert_eq!(json["token"], "cat");
    }

    #[test]
    fn test_deserialize_defaults_operator() {
        let term: Term =
            serde_json::from_str(r#"{"id":2,"kind":"precedes","first":1,"second":1}"#).unwrap();
        assert_eq!(term.operator, Operator::And);
        assert_eq!(term.kind(), TermKind::Precedes);
    }
}
