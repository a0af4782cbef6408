//! Ordered term sequences.

use serde::{Deserialize, Serialize};

use super::{Operator, Term, TermBody, TermId, Token};

/// An ordered sequence of term records.
///
/// Appending assigns the next 1-based id. The sequence performs no semantic
/// checks on push; storage may hold shapes the synthesizer refuses, and
/// [`TermSequence::validate`] reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermSequence {
    terms: Vec<Term>,
}

impl TermSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the sequence holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterates records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: TermId) -> Option<&Term> {
        self.terms.get(id.index()?)
    }

    /// Id the next appended record will receive.
    #[must_use]
    pub fn next_id(&self) -> TermId {
        TermId::new(u32::try_from(self.terms.len() + 1).unwrap_or(u32::MAX))
    }

    /// Number of word and template records.
    #[must_use]
    pub fn primary_count(&self) -> usize {
        self.terms.iter().filter(|t| t.is_primary()).count()
    }

    /// Number of or-tagged records, including a leading one.
    #[must_use]
    pub fn or_count(&self) -> usize {
        self.terms.iter().filter(|t| t.is_or()).count()
    }

    /// Appends a record and returns its id.
    pub fn push(&mut self, operator: Operator, body: TermBody) -> TermId {
        let id = self.next_id();
        self.terms.push(Term { id, operator, body });
        id
    }

    /// Appends a word term.
    pub fn push_word(&mut self, operator: Operator, token: Token) -> TermId {
        self.push(operator, TermBody::Word { token })
    }

    /// Appends a template term. The token should already carry its `*`.
    pub fn push_template(&mut self, operator: Operator, token: Token) -> TermId {
        self.push(operator, TermBody::Template { token })
    }

    /// Appends a same-sentence ordering term.
    pub fn push_precedes(&mut self, first: TermId, second: TermId) -> TermId {
        self.push(Operator::And, TermBody::Precedes { first, second })
    }

    /// Appends a close-proximity ordering term.
    pub fn push_closes_precedes(&mut self, first: TermId, second: TermId) -> TermId {
        self.push(Operator::And, TermBody::ClosesPrecedes { first, second })
    }

    /// Removes and returns the most recent record.
    ///
    /// No remaining record can reference it, since references only point
    /// backwards.
    pub fn pop(&mut self) -> Option<Term> {
        self.terms.pop()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.terms.clear();
    }
}

impl<'a> IntoIterator for &'a TermSequence {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}
