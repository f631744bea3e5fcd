//! Decoding raw inputs from their JSON wire form.

use crate::error::{MapperError, MapperErrorExt};
use serde::de::DeserializeOwned;

/// Decodes any raw input type ([`bitsd_domain::RawRecord`], `Vec<RawRecord>`,
/// [`crate::RawEnvelope`], [`crate::RawSnapshot`]) from a JSON string.
///
/// # Errors
/// [`MapperError::Json`] when the text is not JSON or has the wrong shape.
pub fn decode<T: DeserializeOwned>(json: &str) -> Result<T, MapperError> {
    serde_json::from_str(json).context(std::any::type_name::<T>())
}

/// Like [`decode`], from an already parsed JSON value.
///
/// # Errors
/// [`MapperError::Json`] when the value has the wrong shape.
pub fn decode_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, MapperError> {
    serde_json::from_value(value).context(std::any::type_name::<T>())
}
