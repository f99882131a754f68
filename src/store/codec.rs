//! Value Codecs
//!
//! Converts between the JSON values exchanged over HTTP and the opaque bytes
//! handed to the store.

use std::sync::Arc;

use serde_json::Value;

use crate::config::CodecKind;
use crate::error::{Result, StoreError};

// == Codec Trait ==
/// Pluggable (de)serialization for stored values.
pub trait ValueCodec: Send + Sync + 'static {
    /// Encodes a value into the bytes written to the store.
    fn encode(&self, value: &Value) -> Result<Vec<u8>>;

    /// Decodes bytes read from the store.
    fn decode(&self, bytes: &[u8]) -> Result<Value>;

    /// Codec name for logging.
    fn name(&self) -> &'static str;
}

/// Builds the codec selected in configuration.
pub fn codec_for(kind: CodecKind) -> Arc<dyn ValueCodec> {
    match kind {
        CodecKind::Text => Arc::new(TextCodec),
        CodecKind::Json => Arc::new(JsonCodec),
    }
}

// == Text Codec ==
/// Stores strings as raw UTF-8, so values stay readable from other clients.
///
/// Non-string values are stored as their JSON text and read back as strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl ValueCodec for TextCodec {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        match value {
            Value::String(s) => Ok(s.as_bytes().to_vec()),
            other => serde_json::to_vec(other).map_err(|e| StoreError::Codec(e.to_string())),
        }
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        String::from_utf8(bytes.to_vec())
            .map(Value::String)
            .map_err(|e| StoreError::Codec(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

// == JSON Codec ==
/// Stores every value as a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl ValueCodec for JsonCodec {
    fn encode(&self, value: &Value) -> Result<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| StoreError::Codec(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Value> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Codec(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
