//! Parser for the whitespace-free game-state dialect.
//!
//! The game client serializes its state without any whitespace, with bare
//! object keys and mostly-unquoted literals; quotes appear only around
//! strings that need them and the only escapes are `\"` and `\\`. The parser
//! is a recursive descent over an explicit [`Cursor`], single pass, left to
//! right: nested container parses consume exactly their bracketed span and
//! return control at the position just past the closing bracket.
//!
//! Two deliberate narrowings of the client grammar: a value slot holds
//! either a container or a literal, never a container with trailing literal
//! characters, and any text after the top-level value is an error. Neither
//! form occurs in well-formed client output.

use serde_json::{Map, Value};
use thiserror::Error;

use super::cursor::Cursor;

/// Errors produced while parsing the game-state text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("empty input")]
    EmptyInput,

    #[error("unexpected end of input at byte {0}")]
    UnexpectedEnd(usize),

    #[error("expected ':' after object key at byte {0}")]
    MissingColon(usize),

    #[error("unexpected characters after closing bracket at byte {0}")]
    TrailingAfterContainer(usize),

    #[error("unexpected trailing characters after document at byte {0}")]
    TrailingInput(usize),
}

/// Parses a complete document, requiring the entire input to be consumed.
pub fn parse_document(text: &str) -> Result<Value, SyntaxError> {
    let mut cur = Cursor::new(text);
    let value = parse_value(&mut cur)?;
    if !cur.is_eof() {
        return Err(SyntaxError::TrailingInput(cur.pos()));
    }
    Ok(value)
}

/// Parses a single value: an array, an object, or a top-level literal.
fn parse_value(cur: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    match cur.peek() {
        Some(b'[') => parse_array(cur),
        Some(b'{') => parse_object(cur),
        Some(_) => Ok(classify_literal(cur.take_until(&[]))),
        None => Err(SyntaxError::EmptyInput),
    }
}

fn parse_array(cur: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    cur.bump(); // consume '['
    let mut items = Vec::new();

    loop {
        match cur.peek() {
            None => return Err(SyntaxError::UnexpectedEnd(cur.pos())),

            Some(b']') => {
                cur.bump();
                return Ok(Value::Array(items));
            }

            Some(b'[') | Some(b'{') => {
                items.push(parse_value(cur)?);
                match cur.peek() {
                    Some(b',') => {
                        cur.bump();
                    }
                    Some(b']') | None => {}
                    Some(_) => return Err(SyntaxError::TrailingAfterContainer(cur.pos())),
                }
            }

            Some(_) => {
                // A literal run. An empty run (immediately at a comma, as in
                // `[a,,b]` or a trailing comma) contributes no element.
                let raw = cur.take_until(&[b',', b']']);
                if !raw.is_empty() {
                    items.push(classify_literal(raw));
                }
                if cur.peek() == Some(b',') {
                    cur.bump();
                }
            }
        }
    }
}

fn parse_object(cur: &mut Cursor<'_>) -> Result<Value, SyntaxError> {
    cur.bump(); // consume '{'
    let mut map = Map::new();

    loop {
        match cur.peek() {
            None => return Err(SyntaxError::UnexpectedEnd(cur.pos())),

            Some(b'}') => {
                cur.bump();
                return Ok(Value::Object(map));
            }

            Some(b',') => {
                // Entry separator, including a trailing comma before '}'.
                cur.bump();
            }

            Some(_) => {
                let raw_key = cur.take_until(&[b':', b',', b'}']);
                if cur.peek() != Some(b':') {
                    return Err(SyntaxError::MissingColon(cur.pos()));
                }
                cur.bump(); // consume ':'
                let key = decode_key(raw_key);

                let value = match cur.peek() {
                    Some(b'[') | Some(b'{') => {
                        let v = parse_value(cur)?;
                        match cur.peek() {
                            Some(b',') | Some(b'}') | None => {}
                            Some(_) => {
                                return Err(SyntaxError::TrailingAfterContainer(cur.pos()))
                            }
                        }
                        v
                    }
                    // An empty run here is a bare empty string value.
                    _ => classify_literal(cur.take_until(&[b',', b'}'])),
                };

                map.insert(key, value);
            }
        }
    }
}

/// Classifies a raw literal run into a typed value.
///
/// Order matters and mirrors the client: booleans first, then numbers, then
/// quoted strings, then the raw run itself. Non-finite float parses (`inf`,
/// `nan`) are not representable in the document model and stay strings.
fn classify_literal(raw: &str) -> Value {
    match raw {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        _ => {}
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Value::from(n);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            if let Some(n) = serde_json::Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }

    Value::String(unquote(raw))
}

/// Object keys get only the quote-stripping rule, never numeric coercion.
fn decode_key(raw: &str) -> String {
    unquote(raw)
}

/// Strips a matching pair of surrounding double quotes and resolves the two
/// escapes of the dialect, `\"` then `\\`, in that order.
fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        raw[1..raw.len() - 1].replace("\\\"", "\"").replace("\\\\", "\\")
    } else {
        raw.to_string()
    }
}
