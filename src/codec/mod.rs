//! Payload codec.
//!
//! Game state travels as a transport-safe string: compact JSON-like text,
//! gzip-compressed, then base64-encoded. This module implements both
//! directions. `decode` accepts the loose, whitespace-free dialect the game
//! client actually emits; `encode` always produces strict compact JSON inside
//! the same envelope, so `decode(encode(v)) == v` holds value-for-value even
//! though the textual form is normalized.

pub mod cursor;
pub mod decode;
pub mod envelope;

use serde_json::Value;

pub use decode::SyntaxError;

/// Errors that can occur while reconstructing a document from a payload.
///
/// The variant identifies the pipeline stage that failed, so a corrupt
/// payload is never mistaken for an empty document.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid base64 envelope: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("corrupt compressed stream: {0}")]
    Compression(#[from] std::io::Error),

    #[error("malformed game-state text: {0}")]
    Grammar(#[from] SyntaxError),
}

/// Decodes a transport payload into a document tree.
///
/// Pipeline: base64 decode, gzip decompress to UTF-8 text, then parse the
/// whitespace-free game dialect. Each stage failure maps to the matching
/// [`DecodeError`] variant.
pub fn decode(payload: &str) -> Result<Value, DecodeError> {
    let text = envelope::unwrap_payload(payload)?;
    let value = decode::parse_document(&text)?;
    Ok(value)
}

/// Encodes a document tree into a transport payload.
///
/// Emits strict compact JSON (key order preserved), gzip-compresses it, and
/// base64-encodes the result. The output is always decodable by [`decode`].
pub fn encode(value: &Value) -> String {
    // String-keyed Value trees always serialize.
    let text = serde_json::to_string(value).expect("Value serialization cannot fail");
    envelope::wrap_payload(&text)
}
