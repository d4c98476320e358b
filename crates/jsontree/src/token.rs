use alloc::string::String;

/// A minimal lexical unit of JSON text.
///
/// Only the `String` and `Number` kinds carry a payload: the raw lexeme,
/// copied out of the input buffer with escape sequences left uninterpreted.
/// Each payload is uniquely owned by its token; nothing aliases the input
/// buffer once a token has been produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    String(String),
    Number(String),
    True,
    False,
    Null,
    Colon,
    Comma,
    OpenObject,
    CloseObject,
    OpenArray,
    CloseArray,
    EndOfInput,
}

impl Token {
    /// Short noun for this token kind, used in parse diagnostics.
    #[must_use]
    pub fn describe(&self) -> &'static str {
        match self {
            Token::String(_) => "string",
            Token::Number(_) => "number",
            Token::True => "`true`",
            Token::False => "`false`",
            Token::Null => "`null`",
            Token::Colon => "`:`",
            Token::Comma => "`,`",
            Token::OpenObject => "`{`",
            Token::CloseObject => "`}`",
            Token::OpenArray => "`[`",
            Token::CloseArray => "`]`",
            Token::EndOfInput => "end of input",
        }
    }
}
