//! The binary transport envelope: gzip inside base64.
//!
//! Payloads at rest and on the wire are base64 text wrapping a gzip stream
//! of the serialized document. Unwrapping reports which layer failed so the
//! caller can distinguish a mangled envelope from a corrupt stream.

use std::io::Read;
use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use super::DecodeError;

/// Recovers the serialized document text from a transport payload.
///
/// Invalid UTF-8 in the decompressed stream surfaces as an I/O error from
/// the decompressing reader and is reported at the compression stage.
pub(crate) fn unwrap_payload(payload: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(payload.trim())?;
    let mut text = String::new();
    GzDecoder::new(bytes.as_slice()).read_to_string(&mut text)?;
    Ok(text)
}

/// Wraps serialized document text into a transport payload.
pub(crate) fn wrap_payload(text: &str) -> String {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    // Writing into an in-memory Vec cannot fail.
    encoder
        .write_all(text.as_bytes())
        .expect("in-memory gzip write cannot fail");
    let bytes = encoder.finish().expect("in-memory gzip finish cannot fail");
    STANDARD.encode(bytes)
}
