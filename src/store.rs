//! Incremental term store.
//!
//! A [`TermStore`] holds the rule an author is building one decision at a
//! time. Each authoring session owns its own store; nothing is shared
//! between sessions, so no locking is involved.
//!
//! Every successful operation returns the refreshed expression preview.
//! A rejected operation leaves the store exactly as it was. An operation
//! that is accepted but produces an unsynthesizable sequence (such as a
//! third disjunction) keeps the new term and returns the synthesis error,
//! so the author can undo it and carry on.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::error::{RejectedOperation, RuleResult};
use crate::synth::synthesize;
use crate::term::{Operator, Term, TermId, TermKind, TermSequence, Token};

/// Identifier of an authoring session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable, session-scoped term sequence.
#[derive(Debug, Clone, Default)]
pub struct TermStore {
    session: SessionId,
    config: StoreConfig,
    terms: TermSequence,
}

impl TermStore {
    /// Creates an empty store with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with the given limits.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Session that owns this store.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session
    }

    /// Current sequence.
    #[must_use]
    pub fn sequence(&self) -> &TermSequence {
        &self.terms
    }

    /// Current records in insertion order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        self.terms.terms()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of word and template records.
    #[must_use]
    pub fn primary_count(&self) -> usize {
        self.terms.primary_count()
    }

    /// Synthesizes the current sequence.
    pub fn preview(&self) -> RuleResult<String> {
        Ok(synthesize(&self.terms)?)
    }

    /// Adds a word that must appear.
    pub fn add_word_and(&mut self, token: &str) -> RuleResult<String> {
        self.add_primary(Operator::And, TermKind::Word, token)
    }

    /// Adds a word as an alternative to the previous term.
    pub fn add_word_or(&mut self, token: &str) -> RuleResult<String> {
        self.add_primary(Operator::Or, TermKind::Word, token)
    }

    /// Adds a word that must not appear.
    pub fn add_word_not(&mut self, token: &str) -> RuleResult<String> {
        self.add_primary(Operator::Not, TermKind::Word, token)
    }

    /// Adds a word prefix that must appear.
    pub fn add_template_and(&mut self, token: &str) -> RuleResult<String> {
        self.add_primary(Operator::And, TermKind::Template, token)
    }

    /// Adds a word prefix that must not appear.
    pub fn add_template_not(&mut self, token: &str) -> RuleResult<String> {
        self.add_primary(Operator::Not, TermKind::Template, token)
    }

    /// Requires the words of two terms to appear in order within a sentence.
    pub fn add_precedes(&mut self, first: TermId, second: TermId) -> RuleResult<String> {
        self.check_pair(first, second)?;
        self.terms.push_precedes(first, second);
        debug!(session = %self.session, %first, %second, "added precedes term");
        self.preview()
    }

    /// Requires the words of two terms to appear in order within two words.
    pub fn add_closes_precedes(&mut self, first: TermId, second: TermId) -> RuleResult<String> {
        self.check_pair(first, second)?;
        self.terms.push_closes_precedes(first, second);
        debug!(session = %self.session, %first, %second, "added closely precedes term");
        self.preview()
    }

    /// Removes the most recent term and returns the refreshed preview.
    pub fn undo(&mut self) -> RuleResult<String> {
        let Some(term) = self.terms.pop() else {
            return Err(RejectedOperation::NothingToUndo.into());
        };
        debug!(session = %self.session, %term, "removed term");
        self.preview()
    }

    /// Discards every term.
    pub fn clear(&mut self) {
        debug!(session = %self.session, discarded = self.terms.len(), "cleared term store");
        self.terms.clear();
    }

    /// Synthesizes the finished rule and starts a fresh sequence.
    ///
    /// On failure the sequence is kept so the author can fix it.
    pub fn accept(&mut self) -> RuleResult<String> {
        let expression = synthesize(&self.terms)?;
        debug!(session = %self.session, terms = self.terms.len(), "accepted rule");
        self.terms.clear();
        Ok(expression)
    }

    fn add_primary(&mut self, operator: Operator, kind: TermKind, raw: &str) -> RuleResult<String> {
        let token = match kind {
            TermKind::Template => Token::template(raw),
            _ => Token::new(raw),
        }
        .map_err(|e| self.reject(e))?;
        let max = self.config.max_primary_terms;
        if self.terms.primary_count() >= max {
            return Err(self.reject(RejectedOperation::TermCapReached { max }).into());
        }
        let id = match kind {
            TermKind::Template => self.terms.push_template(operator, token),
            _ => self.terms.push_word(operator, token),
        };
        debug!(session = %self.session, %id, %operator, "added term");
        self.preview()
    }

    fn check_pair(&self, first: TermId, second: TermId) -> Result<(), RejectedOperation> {
        if first == second {
            return Err(self.reject(RejectedOperation::SelfReference { id: first }));
        }
        for id in [first, second] {
            match self.terms.get(id) {
                None => return Err(self.reject(RejectedOperation::UnknownTerm { id })),
                Some(term) if !term.is_primary() => {
                    return Err(self.reject(RejectedOperation::NotPrimary { id }));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    fn reject(&self, reason: RejectedOperation) -> RejectedOperation {
        warn!(session = %self.session, %reason, "rejected term store operation");
        reason
    }
}
