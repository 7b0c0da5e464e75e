//! Parameter codec for URLs.
//!
//! Two transforms live here:
//! - [`encode`] / [`decode`]: UTF-8 -> Base64 -> form percent-encoding. The
//!   result never contains a raw `/` or `=`, so it can be used as a single
//!   path segment carrying a `key=value` pair.
//! - [`url_encode`] / [`url_decode`]: plain form percent-encoding for scalar
//!   query values.
//!
//! Absent values pass through the `*_opt` variants unchanged.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use url::form_urlencoded;

use crate::error::CodecError;

/// Encodes `value` into a token safe for a path segment or query value.
pub fn encode(value: &str) -> String {
    let b64 = STANDARD.encode(value.as_bytes());
    url_encode(&b64)
}

/// Inverts [`encode`].
pub fn decode(token: &str) -> Result<String, CodecError> {
    let b64 = percent_decode(token)?;
    if !b64.is_ascii() {
        return Err(CodecError::Base64(token.to_string()));
    }
    let bytes = STANDARD
        .decode(b64.as_bytes())
        .map_err(|_| CodecError::Base64(token.to_string()))?;
    String::from_utf8(bytes).map_err(|_| CodecError::Utf8)
}

/// Form-style percent-encoding: ASCII alphanumerics and `.-*_` are kept,
/// space becomes `+`, every other UTF-8 byte becomes `%XX`.
pub fn url_encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Inverts [`url_encode`]. `+` decodes to a space.
pub fn url_decode(value: &str) -> Result<String, CodecError> {
    percent_decode(value)
}

pub fn encode_opt(value: Option<&str>) -> Option<String> {
    value.map(encode)
}

pub fn decode_opt(token: Option<&str>) -> Result<Option<String>, CodecError> {
    token.map(decode).transpose()
}

pub fn url_encode_opt(value: Option<&str>) -> Option<String> {
    value.map(url_encode)
}

pub fn url_decode_opt(value: Option<&str>) -> Result<Option<String>, CodecError> {
    value.map(url_decode).transpose()
}

/// Strict form-style percent-decoding. A `%` must be followed by two hex digits.
fn percent_decode(input: &str) -> Result<String, CodecError> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'+' => out.push(b' '),
            b'%' => {
                let high = bytes.next().and_then(hex_digit);
                let low = bytes.next().and_then(hex_digit);
                match (high, low) {
                    (Some(h), Some(l)) => out.push(h << 4 | l),
                    _ => return Err(CodecError::Percent(input.to_string())),
                }
            }
            _ => out.push(b),
        }
    }
    String::from_utf8(out).map_err(|_| CodecError::Utf8)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
