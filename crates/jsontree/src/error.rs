use alloc::string::String;

use thiserror::Error;

/// An error raised while scanning raw bytes into tokens.
///
/// Every variant carries the byte offset at which scanning failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string starting at byte {0}")]
    UnterminatedString(usize),
    #[error("malformed number at byte {0}")]
    MalformedNumber(usize),
    #[error("unrecognized literal {literal:?} at byte {offset}")]
    UnrecognizedLiteral { literal: String, offset: usize },
    #[error("unexpected character '{}' at byte {}", .byte.escape_ascii(), .offset)]
    UnexpectedCharacter { byte: u8, offset: usize },
    #[error("invalid UTF-8 in string at byte {0}")]
    InvalidUtf8(usize),
}

/// An error raised while parsing the token sequence into a value tree.
///
/// Every variant carries the index of the offending token. Parsing aborts
/// immediately on the first error; there is no resynchronization point in
/// JSON, so no recovery is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expecting a value, got {got} at token {index}")]
    UnexpectedToken { got: &'static str, index: usize },
    #[error("expecting a comma or ], got {got} at token {index}")]
    ExpectingCommaOrCloseArray { got: &'static str, index: usize },
    #[error("expecting a comma or }}, got {got} at token {index}")]
    ExpectingCommaOrCloseObject { got: &'static str, index: usize },
    #[error("expecting string as key, got {got} at token {index}")]
    ExpectingKey { got: &'static str, index: usize },
    #[error("expecting colon after key, got {got} at token {index}")]
    ExpectingColon { got: &'static str, index: usize },
    #[error("unexpected end of input at token {0}")]
    UnexpectedEndOfInput(usize),
    #[error("unable to parse number {lexeme:?} at token {index}")]
    InvalidNumber { lexeme: String, index: usize },
    #[error("trailing {got} after top-level value at token {index}")]
    TrailingToken { got: &'static str, index: usize },
}

/// Umbrella error for the whole pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
