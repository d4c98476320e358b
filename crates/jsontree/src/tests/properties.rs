use alloc::string::{String, ToString};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use crate::{Value, lexer::tokenize, parse_str, token::Token};

/// A generated document whose string payloads are escape-free, so both
/// renderers re-parse to an equal tree.
#[derive(Clone, Debug)]
struct Doc(Value);

const STRING_CHARS: &[char] = &[
    'a', 'b', 'c', 'x', 'y', 'z', 'A', 'Z', '0', '9', ' ', '_', '-', '.',
];

fn plain_string(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % 8;
    (0..len).map(|_| *g.choose(STRING_CHARS).unwrap()).collect()
}

fn finite_number(g: &mut Gen) -> f64 {
    loop {
        let n = f64::arbitrary(g);
        if n.is_finite() {
            return n;
        }
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    let kinds = if depth == 0 { 4 } else { 6 };
    match usize::arbitrary(g) % kinds {
        0 => Value::Null,
        1 => Value::Boolean(bool::arbitrary(g)),
        2 => Value::Number(finite_number(g)),
        3 => Value::String(plain_string(g)),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| arbitrary_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            Value::Object(
                (0..len)
                    .map(|_| (plain_string(g), arbitrary_value(g, depth - 1)))
                    .collect(),
            )
        }
    }
}

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        Doc(arbitrary_value(g, 3))
    }
}

#[quickcheck]
fn pretty_rendering_round_trips(doc: Doc) -> bool {
    parse_str(&doc.0.to_pretty()).unwrap() == doc.0
}

#[quickcheck]
fn compact_rendering_round_trips(doc: Doc) -> bool {
    parse_str(&doc.0.to_string()).unwrap() == doc.0
}

#[quickcheck]
fn rendering_is_stable_across_a_reparse(doc: Doc) -> bool {
    let text = doc.0.to_pretty();
    parse_str(&text).unwrap().to_pretty() == text
}

#[quickcheck]
fn open_and_close_tokens_balance(doc: Doc) -> bool {
    let tokens = tokenize(doc.0.to_pretty().as_bytes()).unwrap();
    let opens = tokens
        .iter()
        .filter(|t| matches!(t, Token::OpenObject | Token::OpenArray))
        .count();
    let closes = tokens
        .iter()
        .filter(|t| matches!(t, Token::CloseObject | Token::CloseArray))
        .count();
    opens == closes
}
