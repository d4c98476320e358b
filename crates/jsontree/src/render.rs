//! Indented rendering of a value tree back to JSON text.
//!
//! The walk mirrors the tree exactly: no reordering, no deduplication, no
//! re-escaping of string payloads. The only failure mode is the sink
//! rejecting output, surfaced as `fmt::Error`.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::value::Value;

/// Writes `value` as indented JSON text, one tab per nesting level.
///
/// Objects and arrays open on the current line and put each child on its own
/// indented line; scalars render as in the compact `Display` form. Rendering
/// the same tree twice yields identical text.
///
/// # Errors
///
/// Propagates `fmt::Error` from the sink.
pub fn write_pretty<W: Write>(value: &Value, w: &mut W) -> fmt::Result {
    write_level(value, w, 0)
}

fn indent<W: Write>(w: &mut W, level: usize) -> fmt::Result {
    for _ in 0..level {
        w.write_char('\t')?;
    }
    Ok(())
}

fn write_level<W: Write>(value: &Value, w: &mut W, level: usize) -> fmt::Result {
    match value {
        Value::Null => w.write_str("null"),
        Value::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write!(w, "{n}"),
        Value::String(s) => write!(w, "\"{s}\""),
        Value::Array(items) => {
            w.write_str("[\n")?;
            for (i, item) in items.iter().enumerate() {
                indent(w, level + 1)?;
                write_level(item, w, level + 1)?;
                if i + 1 < items.len() {
                    w.write_char(',')?;
                }
                w.write_char('\n')?;
            }
            indent(w, level)?;
            w.write_char(']')
        }
        Value::Object(pairs) => {
            w.write_str("{\n")?;
            for (i, (key, item)) in pairs.iter().enumerate() {
                indent(w, level + 1)?;
                write!(w, "\"{key}\": ")?;
                write_level(item, w, level + 1)?;
                if i + 1 < pairs.len() {
                    w.write_char(',')?;
                }
                w.write_char('\n')?;
            }
            indent(w, level)?;
            w.write_char('}')
        }
    }
}

impl Value {
    /// Renders the tree as indented JSON text via [`write_pretty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::parse_str;
    ///
    /// let root = parse_str(r#"[1,true]"#).unwrap();
    /// assert_eq!(root.to_pretty(), "[\n\t1,\n\ttrue\n]");
    /// ```
    #[must_use]
    pub fn to_pretty(&self) -> String {
        let mut out = String::new();
        write_pretty(self, &mut out).expect("writing to a String cannot fail");
        out
    }
}
