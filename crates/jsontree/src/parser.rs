//! Recursive-descent parser: consumes the token sequence into a value tree.
//!
//! Dispatch is a single exhaustive match on the current token; arrays and
//! objects recurse through [`Parser::parse_value`] for their children. Every
//! step consumes at least one token, so parsing always terminates, and every
//! failure aborts the parse immediately with the offending token's index.

use alloc::vec::Vec;

use crate::{
    error::{Error, ParseError},
    lexer,
    token::Token,
    value::{Object, Value},
};

/// Parses one complete JSON document from a byte buffer.
///
/// The buffer is lexed in full, then exactly one root value is parsed from
/// the token sequence and end of input is required after it.
///
/// # Errors
///
/// Returns [`Error::Lex`] if scanning fails, and [`Error::Parse`] for a
/// malformed token sequence: an empty document, a truncated structure, a
/// misplaced token, a number lexeme `f64` conversion rejects, or trailing
/// tokens after the root value. No partial tree is returned.
pub fn parse(buf: &[u8]) -> Result<Value, Error> {
    let tokens = lexer::tokenize(buf)?;
    let mut parser = Parser::new(&tokens);
    let root = parser.parse_value()?;
    parser.expect_end()?;
    Ok(root)
}

/// Convenience wrapper over [`parse`] for string input.
///
/// # Errors
///
/// Same as [`parse`].
pub fn parse_str(text: &str) -> Result<Value, Error> {
    parse(text.as_bytes())
}

const END: Token = Token::EndOfInput;

/// Cursor over a finished token sequence.
///
/// The sequence comes from [`lexer::tokenize`] and ends with
/// [`Token::EndOfInput`]; the cursor never advances past it, so lookahead
/// is total.
#[derive(Debug)]
struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Parser<'t> {
    fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> &'t Token {
        self.tokens.get(self.pos).unwrap_or(&END)
    }

    /// Returns the current token and advances past it, saturating at
    /// end of input.
    fn bump(&mut self) -> &'t Token {
        let token = self.peek();
        if !matches!(token, Token::EndOfInput) {
            self.pos += 1;
        }
        token
    }

    /// Parses one value starting at the cursor, consuming its tokens.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let index = self.pos;
        match self.bump() {
            Token::String(payload) => Ok(Value::String(payload.clone())),
            Token::Number(lexeme) => {
                // The scanner is lenient; the conversion is the arbiter. The
                // whole lexeme must be consumed or the number is rejected.
                let number = lexeme.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                    lexeme: lexeme.clone(),
                    index,
                })?;
                Ok(Value::Number(number))
            }
            Token::True => Ok(Value::Boolean(true)),
            Token::False => Ok(Value::Boolean(false)),
            Token::Null => Ok(Value::Null),
            Token::OpenObject => self.parse_object(),
            Token::OpenArray => self.parse_array(),
            Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput(index)),
            other => Err(ParseError::UnexpectedToken {
                got: other.describe(),
                index,
            }),
        }
    }

    /// `[` already consumed: an immediate `]` is the empty array, otherwise
    /// values separated by commas until `]`.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();
        if matches!(self.peek(), Token::CloseArray) {
            self.pos += 1;
            return Ok(Value::Array(items));
        }
        loop {
            items.push(self.parse_value()?);
            let index = self.pos;
            match self.bump() {
                Token::CloseArray => return Ok(Value::Array(items)),
                Token::Comma => {}
                Token::EndOfInput => return Err(ParseError::UnexpectedEndOfInput(index)),
                other => {
                    return Err(ParseError::ExpectingCommaOrCloseArray {
                        got: other.describe(),
                        index,
                    });
                }
            }
        }
    }

    /// `{` already consumed: an immediate `}` is the empty object, otherwise
    /// `"key" : value` pairs separated by commas until `}`.
    ///
    /// Pairs are appended in input order; a duplicate key is just another
    /// pair.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        let mut pairs = Object::new();
        if matches!(self.peek(), Token::CloseObject) {
            self.pos += 1;
            return Ok(Value::Object(pairs));
        }
        loop {
            let index = self.pos;
            let key = match self.bump() {
                Token::String(key) => key.clone(),
                Token::EndOfInput => return Err(ParseError::UnexpectedEndOfInput(index)),
                other => {
                    return Err(ParseError::ExpectingKey {
                        got: other.describe(),
                        index,
                    });
                }
            };
            let index = self.pos;
            match self.bump() {
                Token::Colon => {}
                Token::EndOfInput => return Err(ParseError::UnexpectedEndOfInput(index)),
                other => {
                    return Err(ParseError::ExpectingColon {
                        got: other.describe(),
                        index,
                    });
                }
            }
            pairs.push((key, self.parse_value()?));
            let index = self.pos;
            match self.bump() {
                Token::CloseObject => return Ok(Value::Object(pairs)),
                Token::Comma => {}
                Token::EndOfInput => return Err(ParseError::UnexpectedEndOfInput(index)),
                other => {
                    return Err(ParseError::ExpectingCommaOrCloseObject {
                        got: other.describe(),
                        index,
                    });
                }
            }
        }
    }

    /// Requires the root value to be followed by end of input.
    fn expect_end(&mut self) -> Result<(), ParseError> {
        let index = self.pos;
        match self.bump() {
            Token::EndOfInput => Ok(()),
            other => Err(ParseError::TrailingToken {
                got: other.describe(),
                index,
            }),
        }
    }
}
