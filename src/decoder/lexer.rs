//! Tokenizer for clause notation.

use crate::error::DecodeError;

/// Lexeme categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexemeKind {
    /// A bare or quoted word: command names, variables, tokens, `not`.
    Word(String),
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// A standalone `.` ending the rule.
    Period,
    /// The head/body separator, `:-` by default.
    Neck,
}

impl LexemeKind {
    /// Short description for syntax errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Word(w) => format!("'{w}'"),
            Self::LParen => "'('".to_string(),
            Self::RParen => "')'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Semicolon => "';'".to_string(),
            Self::Period => "'.'".to_string(),
            Self::Neck => "neck".to_string(),
        }
    }
}

/// A lexeme with its byte offset in the rule text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// Category and payload.
    pub kind: LexemeKind,
    /// Byte offset of the first character.
    pub offset: usize,
    /// Byte offset just past the last character.
    pub end: usize,
}

fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',' | ';')
}

/// Splits a rule into lexemes.
///
/// Words run until whitespace, a delimiter, or the neck. A `.` is a period
/// only when it starts a lexeme, so `3.5` stays one word. A word starting
/// with `'` is quoted up to the next `'`, with `''` standing for a literal
/// quote.
pub fn tokenize(input: &str, neck: &str) -> Result<Vec<Lexeme>, DecodeError> {
    let mut out = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(offset, c)) = chars.peek() {
        let single = match c {
            _ if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '(' => Some(LexemeKind::LParen),
            ')' => Some(LexemeKind::RParen),
            ',' => Some(LexemeKind::Comma),
            ';' => Some(LexemeKind::Semicolon),
            '.' => Some(LexemeKind::Period),
            _ if c.is_control() => {
                return Err(DecodeError::UnexpectedChar { found: c, offset });
            }
            _ => None,
        };
        if let Some(kind) = single {
            chars.next();
            out.push(Lexeme {
                kind,
                offset,
                end: offset + c.len_utf8(),
            });
            continue;
        }

        if !neck.is_empty() && input[offset..].starts_with(neck) {
            for _ in neck.chars() {
                chars.next();
            }
            out.push(Lexeme {
                kind: LexemeKind::Neck,
                offset,
                end: offset + neck.len(),
            });
            continue;
        }

        if c == '\'' {
            chars.next();
            let mut word = String::new();
            let mut closed = None;
            while let Some((i, ch)) = chars.next() {
                if ch == '\'' {
                    if chars.peek().map(|&(_, n)| n) == Some('\'') {
                        chars.next();
                        word.push('\'');
                        continue;
                    }
                    closed = Some(i + 1);
                    break;
                }
                word.push(ch);
            }
            let Some(end) = closed else {
                return Err(DecodeError::Syntax {
                    offset,
                    expected: "closing quote".to_string(),
                    found: "end of input".to_string(),
                });
            };
            out.push(Lexeme {
                kind: LexemeKind::Word(word),
                offset,
                end,
            });
            continue;
        }

        let mut end = offset;
        while let Some(&(i, ch)) = chars.peek() {
            if is_delimiter(ch) || (!neck.is_empty() && input[i..].starts_with(neck)) {
                break;
            }
            if ch.is_control() {
                return Err(DecodeError::UnexpectedChar { found: ch, offset: i });
            }
            end = i + ch.len_utf8();
            chars.next();
        }
        out.push(Lexeme {
            kind: LexemeKind::Word(input[offset..end].to_string()),
            offset,
            end,
        });
    }

    Ok(out)
}
