use std::fmt;

use crate::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Pow,
    Dot,
    LParen,
    RParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number {value}"),
            Self::Ident(name) => write!(f, "name {name:?}"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::Pow => f.write_str("'**'"),
            Self::Dot => f.write_str("'.'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,

    /// Byte offset of the token's first character.
    pub(crate) offset: usize,
}

/// Splits `source` into tokens, skipping whitespace.
pub(crate) fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let bytes = source.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let start = i;
        let kind = match bytes[i] {
            b if b.is_ascii_whitespace() => {
                i += 1;
                continue;
            }
            b'+' => {
                i += 1;
                TokenKind::Plus
            }
            b'-' => {
                i += 1;
                TokenKind::Minus
            }
            b'*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                TokenKind::Pow
            }
            b'*' => {
                i += 1;
                TokenKind::Star
            }
            b'^' => {
                i += 1;
                TokenKind::Pow
            }
            b'/' => {
                i += 1;
                TokenKind::Slash
            }
            b'(' => {
                i += 1;
                TokenKind::LParen
            }
            b')' => {
                i += 1;
                TokenKind::RParen
            }
            b'.' if !is_digit_at(bytes, i + 1) => {
                i += 1;
                TokenKind::Dot
            }
            b'0'..=b'9' | b'.' => {
                i = scan_number(bytes, i);
                let text = &source[start..i];
                let value = text.parse().map_err(|_| ParseError::InvalidNumber {
                    offset: start,
                    text: text.to_owned(),
                })?;
                TokenKind::Number(value)
            }
            b if b.is_ascii_alphabetic() || b == b'_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                TokenKind::Ident(source[start..i].to_owned())
            }
            _ => {
                let found = source[start..].chars().next().unwrap_or_default();
                return Err(ParseError::UnexpectedChar {
                    offset: start,
                    found,
                });
            }
        };
        tokens.push(Token {
            kind,
            offset: start,
        });
    }

    Ok(tokens)
}

fn is_digit_at(bytes: &[u8], i: usize) -> bool {
    bytes.get(i).is_some_and(u8::is_ascii_digit)
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while is_digit_at(bytes, i) {
        i += 1;
    }
    i
}

/// Returns the end of the number starting at `i`: digits, an optional
/// fraction, and an optional exponent.
fn scan_number(bytes: &[u8], i: usize) -> usize {
    let mut end = skip_digits(bytes, i);
    if bytes.get(end) == Some(&b'.') {
        end = skip_digits(bytes, end + 1);
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        if is_digit_at(bytes, exp) {
            end = skip_digits(bytes, exp);
        }
    }
    end
}
