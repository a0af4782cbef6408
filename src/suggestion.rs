//! Batches of suggested rules from the rule-induction service.
//!
//! Each rule in a batch is decoded and synthesized on its own. A rule that
//! fails is reported in its slot and the rest of the batch carries on.

use tracing::{debug, warn};

use crate::decoder::Decoder;
use crate::error::RuleResult;
use crate::synth::synthesize;

/// Outcome for one suggested rule.
#[derive(Debug)]
pub struct Suggestion {
    /// Rule text as received.
    pub rule: String,
    /// Synthesized expression, `None` for the empty-rule sentinel.
    pub outcome: RuleResult<Option<String>>,
}

impl Suggestion {
    /// Returns the synthesized expression, if the rule produced one.
    #[must_use]
    pub fn expression(&self) -> Option<&str> {
        match &self.outcome {
            Ok(Some(expression)) => Some(expression.as_str()),
            _ => None,
        }
    }

    /// Returns true if decoding or synthesis failed.
    #[must_use]
    pub fn is_err(&self) -> bool {
        self.outcome.is_err()
    }
}

/// Decodes and synthesizes one rule.
///
/// Returns `Ok(None)` for the empty-rule sentinel.
pub fn suggest_one(decoder: &Decoder, rule: &str) -> RuleResult<Option<String>> {
    if decoder.is_empty_rule(rule) {
        return Ok(None);
    }
    let seq = decoder.decode(rule)?;
    Ok(Some(synthesize(&seq)?))
}

/// Decodes and synthesizes every rule of a batch, in order.
pub fn suggest<I, S>(decoder: &Decoder, rules: I) -> Vec<Suggestion>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let suggestions: Vec<Suggestion> = rules
        .into_iter()
        .map(|rule| {
            let rule = rule.into();
            let outcome = suggest_one(decoder, &rule);
            if let Err(e) = &outcome {
                warn!(rule = %rule, error = %e, "skipping suggested rule");
            }
            Suggestion { rule, outcome }
        })
        .collect();
    debug!(
        total = suggestions.len(),
        failed = suggestions.iter().filter(|s| s.is_err()).count(),
        "processed rule suggestions"
    );
    suggestions
}
