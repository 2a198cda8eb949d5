//! STEP lexer: tokenizes an ISO 10303-21 exchange file.

use crate::{Error, Result};

/// A token from the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

/// Source span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Names
    Keyword,        // IFCWALL, FILE_SCHEMA, ISO-10303-21, DATA
    InstanceName,   // #123 (text holds the digits)

    // Literals
    Integer, Real, StringLiteral,
    Enumeration,    // .NOTDEFINED. (text holds the name)
    Binary,         // "0A1F"

    // Unset / derived parameter
    Dollar, Star,

    // Punctuation
    LParen, RParen, Comma, Semicolon, Eq,

    Eof,
}

/// Tokenize a STEP exchange file.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(pos, ch)) = chars.peek() {
        match ch {
            // Skip whitespace
            c if c.is_whitespace() => { chars.next(); }

            // Skip comments /* ... */
            '/' if matches!(chars.clone().nth(1), Some((_, '*'))) => {
                let comment_start = pos;
                chars.next(); // skip '/'
                chars.next(); // skip '*'
                loop {
                    match chars.next() {
                        Some((_, '*')) => {
                            if matches!(chars.peek(), Some(&(_, '/'))) {
                                chars.next(); // skip '/'
                                break;
                            }
                        }
                        Some(_) => {}
                        None => {
                            return Err(Error::SyntaxError {
                                position: comment_start,
                                message: "Unterminated comment".into(),
                            });
                        }
                    }
                }
            }

            // String literals: 'it''s', a doubled quote is an escaped quote
            '\'' => {
                chars.next(); // consume opening quote
                let start = pos;
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some((end, '\'')) => {
                            if matches!(chars.peek(), Some(&(_, '\''))) {
                                chars.next();
                                s.push('\'');
                            } else {
                                tokens.push(Token {
                                    kind: TokenKind::StringLiteral,
                                    span: Span { start, end: end + 1 },
                                    text: s,
                                });
                                break;
                            }
                        }
                        Some((_, c)) => s.push(c),
                        None => return Err(Error::SyntaxError {
                            position: start,
                            message: "Unterminated string literal".into(),
                        }),
                    }
                }
            }

            // Binary literals: "0A1F"
            '"' => {
                chars.next();
                let start = pos;
                let mut s = String::new();
                loop {
                    match chars.next() {
                        Some((end, '"')) => {
                            tokens.push(Token {
                                kind: TokenKind::Binary,
                                span: Span { start, end: end + 1 },
                                text: s,
                            });
                            break;
                        }
                        Some((_, c)) => s.push(c),
                        None => return Err(Error::SyntaxError {
                            position: start,
                            message: "Unterminated binary literal".into(),
                        }),
                    }
                }
            }

            // Instance names: #123
            '#' => {
                chars.next();
                let start = pos;
                let mut digits = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() {
                        digits.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if digits.is_empty() {
                    return Err(Error::SyntaxError {
                        position: start,
                        message: "Expected digits after '#'".into(),
                    });
                }
                tokens.push(Token {
                    kind: TokenKind::InstanceName,
                    span: Span { start, end: start + digits.len() + 1 },
                    text: digits,
                });
            }

            // Enumerations: .NOTDEFINED. / .T. / .F.
            '.' => {
                chars.next();
                let start = pos;
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '.')) => break,
                        Some((_, c)) if c.is_alphanumeric() || c == '_' => name.push(c),
                        _ => return Err(Error::SyntaxError {
                            position: start,
                            message: "Malformed enumeration".into(),
                        }),
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Enumeration,
                    span: Span { start, end: start + name.len() + 2 },
                    text: name,
                });
            }

            // Numbers: 42, -1, +3.5, 1.E-05, 0.
            c if c.is_ascii_digit() || c == '-' || c == '+' => {
                let start = pos;
                let mut num = String::new();
                let mut is_real = false;
                num.push(c);
                chars.next();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_digit() {
                        num.push(c);
                        chars.next();
                    } else if c == '.' && !is_real {
                        is_real = true;
                        num.push(c);
                        chars.next();
                    } else if (c == 'E' || c == 'e') && is_real {
                        num.push(c);
                        chars.next();
                        if let Some(&(_, sign)) = chars.peek() {
                            if sign == '-' || sign == '+' {
                                num.push(sign);
                                chars.next();
                            }
                        }
                    } else {
                        break;
                    }
                }
                if !num.bytes().any(|b| b.is_ascii_digit()) {
                    return Err(Error::SyntaxError {
                        position: start,
                        message: format!("Unexpected character '{c}'"),
                    });
                }
                tokens.push(Token {
                    kind: if is_real { TokenKind::Real } else { TokenKind::Integer },
                    span: Span { start, end: start + num.len() },
                    text: num,
                });
            }

            // Keywords (entity names, section names, ISO-10303-21)
            c if c.is_ascii_alphabetic() || c == '_' || c == '!' => {
                let start = pos;
                let mut ident = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '!' {
                        ident.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Keyword,
                    span: Span { start, end: start + ident.len() },
                    text: ident,
                });
            }

            // Punctuation
            _ => {
                let kind = match ch {
                    '(' => TokenKind::LParen,
                    ')' => TokenKind::RParen,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    '=' => TokenKind::Eq,
                    '$' => TokenKind::Dollar,
                    '*' => TokenKind::Star,
                    other => {
                        return Err(Error::SyntaxError {
                            position: pos,
                            message: format!("Unexpected character '{other}'"),
                        });
                    }
                };
                chars.next();
                tokens.push(Token {
                    kind,
                    span: Span { start: pos, end: pos + 1 },
                    text: ch.to_string(),
                });
            }
        }
    }

    tokens.push(Token {
        kind: TokenKind::Eof,
        span: Span { start: input.len(), end: input.len() },
        text: String::new(),
    });

    Ok(tokens)
}
