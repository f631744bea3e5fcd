//! Typed accessors over raw record fields.

use crate::error::MapperError;
use bitsd_domain::{Number, RawRecord, RawValue, Status, Timestamp};

pub(crate) const VALUE: &str = "value";
pub(crate) const TIMESTAMP: &str = "timestamp";
pub(crate) const MODIFIED_BY: &str = "modifiedby";
pub(crate) const USER: &str = "user";
pub(crate) const SENSOR: &str = "sensor";

/// Present and non-null.
pub(crate) fn require<'r>(
    record: &'r RawRecord,
    field: &'static str,
) -> Result<&'r RawValue, MapperError> {
    match record.get(field) {
        None => Err(MapperError::malformed(field, "missing field")),
        Some(RawValue::Null) => Err(MapperError::malformed(field, "field is null")),
        Some(value) => Ok(value),
    }
}

pub(crate) fn text<'r>(record: &'r RawRecord, field: &'static str) -> Result<&'r str, MapperError> {
    let value = require(record, field)?;
    value.as_text().ok_or_else(|| wrong_kind(field, "text", value))
}

pub(crate) fn number(record: &RawRecord, field: &'static str) -> Result<Number, MapperError> {
    let value = require(record, field)?;
    value.as_number().ok_or_else(|| wrong_kind(field, "number", value))
}

/// Epoch milliseconds. Fractional values truncate toward zero; non-finite or
/// out-of-range floats are rejected.
pub(crate) fn timestamp(record: &RawRecord, field: &'static str) -> Result<Timestamp, MapperError> {
    let millis = match number(record, field)? {
        Number::Int(i) => i,
        Number::Float(f) if !f.is_finite() => {
            return Err(MapperError::malformed(field, "timestamp is not a finite number"));
        },
        Number::Float(f) => Number::Float(f.trunc())
            .as_i64()
            .ok_or_else(|| MapperError::malformed(field, "timestamp out of range"))?,
    };
    Ok(Timestamp::create(millis))
}

/// Resolves a status code by canonical name (`"open"`) or numeric code (`1`).
pub(crate) fn status(record: &RawRecord, field: &'static str) -> Result<Status, MapperError> {
    let resolved = match require(record, field)? {
        RawValue::Text(name) => Status::from_name(name),
        RawValue::Number(code) => code.as_i64().and_then(Status::from_code),
        RawValue::Bool(_) | RawValue::Null => None,
    };
    resolved.ok_or_else(|| MapperError::malformed(field, "unknown status code"))
}

fn wrong_kind(field: &'static str, expected: &str, found: &RawValue) -> MapperError {
    MapperError::malformed(field, format!("expected {expected}, found {}", found.kind()))
}
