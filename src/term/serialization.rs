//! Term sequence serialization helpers.
//!
//! Serde already provides JSON serialization. These helpers keep the
//! formatting stable and validate sequences read from outside the crate.

use crate::error::{RuleError, RuleResult};

use super::TermSequence;

/// Serialize a sequence to pretty JSON.
pub fn to_json_pretty(seq: &TermSequence) -> RuleResult<String> {
    serde_json::to_string_pretty(seq)
        .map_err(|e| RuleError::internal(format!("serialize terms: {e}")))
}

/// Deserialize and validate a sequence from JSON.
pub fn from_json(s: &str) -> RuleResult<TermSequence> {
    let seq = serde_json::from_str::<TermSequence>(s)
        .map_err(|e| RuleError::internal(format!("deserialize terms: {e}")))?;
    seq.validate()?;
    Ok(seq)
}
