//! Shared chat message model and JSON codec.
//!
//! This crate owns the wire representation used on both the receive and
//! submit channels: a UTF-8 JSON object with two string fields, `handle`
//! and `text`. Decoding is liberal about extra fields but strict about the
//! two required ones.

use serde::{Deserialize, Serialize};

/// Error returned by [`decode_message`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload is not valid JSON or does not match the message shape.
    #[error("failed to decode chat message: {0}")]
    Decode(#[from] serde_json::Error),
    /// The payload is valid JSON but not an object.
    #[error("chat message payload is not a JSON object")]
    NotAnObject,
}

/// A single chat message on the wire.
///
/// The same shape is used in both directions. Both fields are untrusted
/// content: renderers must escape before display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name of the sender.
    pub handle: String,
    /// Message body.
    pub text: String,
}

/// Encode a message into its canonical JSON form, `handle` field first.
#[must_use]
pub fn encode_message(message: &ChatMessage) -> String {
    // Serializing two plain string fields cannot fail.
    serde_json::to_string(message).unwrap_or_default()
}

/// Decode a JSON payload into a message.
///
/// Only JSON objects are accepted. Unknown extra fields are ignored;
/// missing or non-string `handle`/`text` fields are rejected.
///
/// # Errors
///
/// Returns [`CodecError::NotAnObject`] for JSON that is not an object and
/// [`CodecError::Decode`] for non-JSON payloads or objects that do not
/// carry both required string fields.
pub fn decode_message(raw: &str) -> Result<ChatMessage, CodecError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(CodecError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
