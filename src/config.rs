//! Configuration for the clause decoder and the incremental term store.
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! is enough to configure the crate.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, RuleResult};

/// Notation accepted by the clause decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Head predicate every rule starts with.
    pub head: String,
    /// Separator between the head and the sub-clauses.
    pub neck: String,
    /// Rule text meaning "no rule suggested", compared ignoring whitespace.
    pub empty_rule: String,
    /// Variable naming the response in every sub-clause.
    pub response_var: String,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            head: "correct_response".to_string(),
            neck: ":-".to_string(),
            empty_rule: "correct_response(A) :- false.".to_string(),
            response_var: "A".to_string(),
        }
    }
}

/// Limits enforced by the incremental term store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Maximum number of word and template terms in one rule.
    pub max_primary_terms: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_primary_terms: 5,
        }
    }
}

/// Complete crate configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Clause decoder notation.
    pub decoder: DecoderConfig,
    /// Term store limits.
    pub store: StoreConfig,
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidField {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

impl Config {
    /// Parses and validates a JSON configuration document.
    pub fn from_json(s: &str) -> RuleResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> RuleResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.decoder.head.trim().is_empty() {
            return Err(invalid("decoder.head", "must not be empty"));
        }
        if self.decoder.neck.trim().is_empty() {
            return Err(invalid("decoder.neck", "must not be empty"));
        }
        let var = self.decoder.response_var.trim();
        if var.is_empty() || !var.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("decoder.response_var", "must be a single identifier"));
        }
        if self.store.max_primary_terms == 0 {
            return Err(invalid("store.max_primary_terms", "must be at least 1"));
        }
        Ok(())
    }
}
