//! Single-word tokens carried by word and template terms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RejectedOperation;

/// Suffix that marks a template (prefix-match) token.
pub const TEMPLATE_MARKER: char = '*';

/// A validated single-word token.
///
/// Tokens are non-empty and contain no whitespace. A literal underscore is
/// stored escaped as `\_`, since a bare underscore joins the two words of a
/// close-proximity match in the output grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Creates a word token.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, RejectedOperation> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(RejectedOperation::EmptyToken);
        }
        if raw.chars().any(char::is_whitespace) {
            return Err(RejectedOperation::WhitespaceInToken {
                token: raw.to_string(),
            });
        }
        Ok(Self(escape_underscores(raw)))
    }

    /// Creates a template token, appending `*` when it is missing.
    pub fn template(raw: impl AsRef<str>) -> Result<Self, RejectedOperation> {
        let mut token = Self::new(raw)?;
        if !token.is_template() {
            token.0.push(TEMPLATE_MARKER);
        }
        Ok(token)
    }

    /// Returns the escaped token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the token ends in the template marker.
    #[must_use]
    pub fn is_template(&self) -> bool {
        self.0.ends_with(TEMPLATE_MARKER)
    }
}

/// Escapes every underscore that is not already escaped.
fn escape_underscores(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_backslash = false;
    for c in raw.chars() {
        if c == '_' && !prev_backslash {
            out.push('\\');
        }
        out.push(c);
        prev_backslash = c == '\\';
    }
    out
}

impl TryFrom<String> for Token {
    type Error = RejectedOperation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_token() {
        let token = Token::new("cat").unwrap();
        assert_eq!(token.as_str(), "cat");
        assert!(!token.is_template());
    }

    #[test]
    fn test_empty_token_rejected() {
        assert_eq!(Token::new(""), Err(RejectedOperation::EmptyToken));
    }

    #[test]
    fn test_whitespace_rejected() {
        let err = Token::new("black cat").unwrap_err();
        assert!(matches!(err, RejectedOperation::WhitespaceInToken { .. }));
        assert!(Token::new("tab\there").is_err());
    }

    #[test]
    fn test_underscore_escaped_once() {
        assert_eq!(Token::new("snake_case").unwrap().as_str(), r"snake\_case");
        assert_eq!(Token::new(r"snake\_case").unwrap().as_str(), r"snake\_case");
    }

    #[test]
    fn test_template_marker_appended() {
        assert_eq!(Token::template("photosynth").unwrap().as_str(), "photosynth*");
        assert_eq!(Token::template("photosynth*").unwrap().as_str(), "photosynth*");
    }

    #[test]
    fn test_deserialize_validates() {
        let token: Token = serde_json::from_str("\"a_b\"").unwrap();
        assert_eq!(token.as_str(), r"a\_b");
        assert!(serde_json::from_str::<Token>("\"two words\"").is_err());
    }
}
