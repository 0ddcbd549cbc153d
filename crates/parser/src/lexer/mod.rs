//! Lexer for Brio source text.
//!
//! A single forward pass with one byte of lookahead. Operators use maximal
//! munch, identifiers are interned into the shared [`NameTable`], and decoded
//! string literals are collected into a per-tokenization pool that tokens
//! reference by index.

mod cursor;
pub mod token;

pub use token::{Payload, Token, TokenKind};

use crate::error::{SourceLocation, SyntaxError};
use crate::names::NameTable;
use cursor::SourceCursor;

/// Everything a tokenization run produces.
///
/// On success `tokens` ends with an `(eof)` token and `error` is `None`. On
/// failure `error` holds the first scan error, the `(eof)` token is not
/// appended, and parsing must not proceed.
#[derive(Debug)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub str_literals: Vec<String>,
    pub error: Option<SyntaxError>,
}

/// Tokenize `source`, interning identifiers into `names`.
pub fn tokenize(source: &str, names: &mut NameTable) -> TokenizeResult {
    Lexer {
        cursor: SourceCursor::new(source),
        names,
        tokens: Vec::new(),
        str_literals: Vec::new(),
    }
    .run()
}

struct Lexer<'src, 'names> {
    cursor: SourceCursor<'src>,
    names: &'names mut NameTable,
    tokens: Vec<Token>,
    str_literals: Vec<String>,
}

impl Lexer<'_, '_> {
    fn run(mut self) -> TokenizeResult {
        self.cursor.skip_whitespace();
        loop {
            let start = self.cursor.pos();
            let loc = self.cursor.location();
            let Some(byte) = self.cursor.bump() else { break };

            if let Err(error) = self.scan_token(byte, start, loc) {
                return TokenizeResult {
                    tokens: self.tokens,
                    str_literals: self.str_literals,
                    error: Some(error),
                };
            }

            self.cursor.skip_whitespace();
        }

        self.tokens
            .push(Token::new(TokenKind::Eof, self.cursor.location()));
        TokenizeResult {
            tokens: self.tokens,
            str_literals: self.str_literals,
            error: None,
        }
    }

    /// Dispatch on the first byte of a token. `start` is the byte offset of
    /// `byte`, `loc` its location; both were captured before the byte was
    /// consumed.
    fn scan_token(
        &mut self,
        byte: u8,
        start: usize,
        loc: SourceLocation,
    ) -> Result<(), SyntaxError> {
        let kind = match byte {
            b'+' => self.either(b'=', TokenKind::PlusEqual, TokenKind::Plus),
            b'-' => self.either(b'=', TokenKind::MinusEqual, TokenKind::Minus),
            b'*' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::StarEqual
                } else if self.cursor.match_byte(b'*') {
                    self.either(b'=', TokenKind::DoubleStarEqual, TokenKind::DoubleStar)
                } else {
                    TokenKind::Star
                }
            }
            b'/' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::SlashEqual
                } else if self.cursor.match_byte(b'/') {
                    self.either(b'=', TokenKind::DoubleSlashEqual, TokenKind::DoubleSlash)
                } else {
                    TokenKind::Slash
                }
            }
            b'%' => self.either(b'=', TokenKind::PercentEqual, TokenKind::Percent),
            b'^' => self.either(b'=', TokenKind::CaretEqual, TokenKind::Caret),
            b'=' => self.either(b'=', TokenKind::EqualEqual, TokenKind::Equal),
            b'!' => self.either(b'=', TokenKind::NotEqual, TokenKind::Bang),
            b'<' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::LessEqual
                } else if self.cursor.match_byte(b'<') {
                    self.either(b'=', TokenKind::LeftShiftEqual, TokenKind::LeftShift)
                } else {
                    TokenKind::Less
                }
            }
            b'>' => {
                if self.cursor.match_byte(b'=') {
                    TokenKind::GreaterEqual
                } else if self.cursor.match_byte(b'>') {
                    self.either(b'=', TokenKind::RightShiftEqual, TokenKind::RightShift)
                } else {
                    TokenKind::Greater
                }
            }
            b'&' => {
                if self.cursor.match_byte(b'&') {
                    TokenKind::AndAnd
                } else if self.cursor.match_byte(b'=') {
                    TokenKind::AmpersandEqual
                } else {
                    TokenKind::Ampersand
                }
            }
            b'|' => {
                if self.cursor.match_byte(b'|') {
                    TokenKind::OrOr
                } else if self.cursor.match_byte(b'=') {
                    TokenKind::PipeEqual
                } else {
                    TokenKind::Pipe
                }
            }
            b'~' => TokenKind::Tilde,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'.' => TokenKind::Dot,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'[' => TokenKind::LeftBracket,
            b']' => TokenKind::RightBracket,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b':' => {
                if !self.cursor.match_byte(b':') {
                    return Err(SyntaxError::new("Expected '::'", loc));
                }
                TokenKind::ColonColon
            }
            b'"' => {
                let literal = self.scan_string(loc)?;
                self.str_literals.push(literal);
                self.tokens
                    .push(Token::string(loc, self.str_literals.len() - 1));
                return Ok(());
            }
            _ if byte.is_ascii_digit() => return self.scan_integer(byte, loc),
            _ if byte.is_ascii_alphabetic() || byte == b'_' => {
                self.scan_word(start, loc);
                return Ok(());
            }
            _ => return Err(SyntaxError::new("Unexpected character", loc)),
        };

        self.tokens.push(Token::new(kind, loc));
        Ok(())
    }

    /// One-byte maximal munch: `long` if the next byte is `extension`,
    /// otherwise `short`.
    fn either(&mut self, extension: u8, long: TokenKind, short: TokenKind) -> TokenKind {
        if self.cursor.match_byte(extension) {
            long
        } else {
            short
        }
    }

    /// The opening quote is already consumed; `loc` is its location.
    ///
    /// Escapes `\n \t \r \b \f \" \' \\` decode; `\0 \x \u` are reserved and,
    /// like any other unknown escape, pass the escaped byte through.
    fn scan_string(&mut self, loc: SourceLocation) -> Result<String, SyntaxError> {
        let mut buf = Vec::new();
        let mut escaped = false;
        while let Some(byte) = self.cursor.bump() {
            if escaped {
                buf.push(match byte {
                    b'n' => b'\n',
                    b't' => b'\t',
                    b'r' => b'\r',
                    b'b' => 0x08,
                    b'f' => 0x0c,
                    b'"' => b'"',
                    b'\'' => b'\'',
                    b'\\' => b'\\',
                    other => other,
                });
                escaped = false;
            } else {
                match byte {
                    b'"' => return Ok(String::from_utf8_lossy(&buf).into_owned()),
                    b'\\' => escaped = true,
                    other => buf.push(other),
                }
            }
        }

        Err(SyntaxError::new("unterminated string literal", loc))
    }

    /// Decimal integer literal; the first digit is already consumed.
    /// Hex, octal, binary, and floats are not implemented.
    fn scan_integer(&mut self, first: u8, loc: SourceLocation) -> Result<(), SyntaxError> {
        let mut value = u64::from(first - b'0');
        while let Some(digit) = self.cursor.peek().filter(u8::is_ascii_digit) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit - b'0')))
                .ok_or_else(|| SyntaxError::new("Integer literal overflow", loc))?;
            self.cursor.bump();
        }

        self.tokens.push(Token::integer(loc, value));
        Ok(())
    }

    /// Keyword or identifier; the first byte is already consumed and sits at
    /// offset `start`.
    fn scan_word(&mut self, start: usize, loc: SourceLocation) {
        while let Some(byte) = self.cursor.peek() {
            if !byte.is_ascii_alphanumeric() && byte != b'_' {
                break;
            }
            self.cursor.bump();
        }

        let text = self.cursor.slice_from(start);
        match TokenKind::from_keyword(text) {
            Some(keyword) => self.tokens.push(Token::new(keyword, loc)),
            None => {
                let id = self.names.intern(text);
                self.tokens.push(Token::identifier(loc, id));
            }
        }
    }
}
