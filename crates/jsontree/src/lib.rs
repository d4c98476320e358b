//! A two-stage, tree-building JSON parser.
//!
//! The pipeline is: byte buffer → [`Lexer`] → token sequence → [`parse`] →
//! [`Value`] tree → renderer. The lexer is a cursor over an immutable byte
//! slice that yields one [`Token`] per call; the parser is a recursive-descent
//! consumer of the finished token sequence; the renderers walk the tree and
//! write it back out as JSON text, either compact ([`Value`]'s `Display`) or
//! indented ([`Value::to_pretty`]).
//!
//! Two deliberate limitations: string escape sequences are carried through
//! uninterpreted (a lexed string payload is the raw lexeme, and rendering
//! emits it back without re-escaping), and all numbers are `f64`.
//!
//! Every failure is a value-level [`Error`] carrying a classification and the
//! byte offset or token index at which it occurred; no partial tree is ever
//! returned.
//!
//! ```
//! use jsontree::{Value, parse_str};
//!
//! let root = parse_str(r#"{"name":"watch","tags":[1,2]}"#).unwrap();
//! assert_eq!(root.get("name"), Some(&Value::String("watch".into())));
//! ```

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod lexer;
mod parser;
mod render;
mod token;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Error, LexError, ParseError};
pub use lexer::{Lexer, tokenize};
pub use parser::{parse, parse_str};
pub use render::write_pretty;
pub use token::Token;
pub use value::{Array, Object, Value};
