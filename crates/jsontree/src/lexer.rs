//! Byte scanner: converts a raw input buffer into a flat token sequence.
//!
//! The scanner is a cursor over an immutable byte slice. Each call to
//! [`Lexer::next_token`] skips leading whitespace, scans exactly one token,
//! and leaves the cursor at the first byte after it. It never looks behind
//! the cursor and owns at most one token payload at a time.
//!
//! Escape sequences inside strings pass through uninterpreted; a backslash
//! only prevents the byte after it from closing the string.

use alloc::{string::String, vec::Vec};

use crate::{error::LexError, token::Token};

/// A cursor over an input buffer, yielding one token per call.
#[derive(Debug)]
pub struct Lexer<'buf> {
    buf: &'buf [u8],
    pos: usize,
}

impl<'buf> Lexer<'buf> {
    #[must_use]
    pub fn new(buf: &'buf [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Byte offset of the cursor, for diagnostics.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.pos += 1;
        }
    }

    /// Scans the next token, advancing the cursor past it.
    ///
    /// Yields [`Token::EndOfInput`] once the buffer is exhausted, and keeps
    /// yielding it on further calls. Every other outcome, success or error,
    /// consumes at least one byte, so repeated calls always terminate.
    ///
    /// # Errors
    ///
    /// Returns a [`LexError`] carrying the byte offset of the offending
    /// input: an unterminated string, a number with a second decimal point,
    /// a letter run that is not exactly `true`/`false`/`null`, a string body
    /// that is not valid UTF-8, or any byte no token can start with.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let Some(byte) = self.peek() else {
            return Ok(Token::EndOfInput);
        };
        match byte {
            b'{' => {
                self.pos += 1;
                Ok(Token::OpenObject)
            }
            b'}' => {
                self.pos += 1;
                Ok(Token::CloseObject)
            }
            b'[' => {
                self.pos += 1;
                Ok(Token::OpenArray)
            }
            b']' => {
                self.pos += 1;
                Ok(Token::CloseArray)
            }
            b':' => {
                self.pos += 1;
                Ok(Token::Colon)
            }
            b',' => {
                self.pos += 1;
                Ok(Token::Comma)
            }
            b'"' => self.scan_string(),
            b'0'..=b'9' | b'-' => self.scan_number(),
            b'a'..=b'z' | b'A'..=b'Z' => self.scan_literal(),
            byte => Err(LexError::UnexpectedCharacter {
                byte,
                offset: self.pos,
            }),
        }
    }

    /// Copies bytes verbatim until the next unescaped `"`.
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        self.pos += 1;
        let body = self.pos;
        loop {
            match self.peek() {
                None => return Err(LexError::UnterminatedString(start)),
                Some(b'"') => {
                    let bytes = &self.buf[body..self.pos];
                    self.pos += 1;
                    let text = core::str::from_utf8(bytes)
                        .map_err(|e| LexError::InvalidUtf8(body + e.valid_up_to()))?;
                    return Ok(Token::String(String::from(text)));
                }
                Some(b'\\') => {
                    // The escaped byte is captured raw; skipping it here is
                    // what keeps an escaped quote from closing the string.
                    self.pos += 1;
                    if self.peek().is_none() {
                        return Err(LexError::UnterminatedString(start));
                    }
                    self.pos += 1;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Consumes an optional leading `-`, then digits and at most one `.`.
    ///
    /// Anything else ends the lexeme. Exponents therefore never lex (the
    /// `e` scans as a literal run), while oddities like `007`, `1.` or a
    /// bare `-` are passed through for numeric conversion to judge.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let mut seen_point = false;
        loop {
            match self.peek() {
                Some(b'0'..=b'9') => self.pos += 1,
                Some(b'.') => {
                    if seen_point {
                        return Err(LexError::MalformedNumber(self.pos));
                    }
                    seen_point = true;
                    self.pos += 1;
                }
                _ => break,
            }
        }
        // Digits, `-` and `.` only, so the lexeme is always valid UTF-8.
        let lexeme = String::from_utf8_lossy(&self.buf[start..self.pos]).into_owned();
        Ok(Token::Number(lexeme))
    }

    /// A letter run must match `true`, `false` or `null` exactly.
    ///
    /// The whole run is compared, not a prefix, so `nullx` and `True` are
    /// unrecognized rather than partially matched.
    fn scan_literal(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        while let Some(b'a'..=b'z' | b'A'..=b'Z') = self.peek() {
            self.pos += 1;
        }
        match &self.buf[start..self.pos] {
            b"true" => Ok(Token::True),
            b"false" => Ok(Token::False),
            b"null" => Ok(Token::Null),
            run => Err(LexError::UnrecognizedLiteral {
                literal: String::from_utf8_lossy(run).into_owned(),
                offset: start,
            }),
        }
    }
}

/// Runs a [`Lexer`] over the whole buffer, collecting the token sequence.
///
/// The returned sequence always ends with [`Token::EndOfInput`], so a
/// consumer's single-token lookahead never runs off the end.
///
/// # Errors
///
/// Returns the first [`LexError`] the scanner hits; no tokens are returned
/// alongside it.
pub fn tokenize(buf: &[u8]) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(buf);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let done = token == Token::EndOfInput;
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
