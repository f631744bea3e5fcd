//! Typed events built from a single raw record.

use crate::error::MapperError;
use crate::fields::{self, MODIFIED_BY, SENSOR, TIMESTAMP, USER, VALUE};
use bitsd_domain::config::ContentPolicy;
use bitsd_domain::{Number, RawRecord, RawValue, Sensor, Status, Timestamp, User};
use serde::Serialize;
use tracing::{trace, warn};

fn rejected(kind: &'static str) -> impl Fn(&MapperError) {
    move |err| warn!(kind, %err, "rejected raw record")
}

/// The space was opened or closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEvent {
    status: Status,
    from: User,
    when: Timestamp,
}

impl StatusEvent {
    /// Reads `value` (status code), `modifiedby` and `timestamp`.
    ///
    /// # Errors
    /// [`MapperError::MalformedRecord`] when a field is missing or mistyped, or
    /// when `value` is not a known [`Status`] code.
    pub fn create(record: &RawRecord) -> Result<Self, MapperError> {
        let event = Self::build(record).inspect_err(rejected("status"))?;
        trace!(status = %event.status, from = %event.from, when = %event.when, "mapped status record");
        Ok(event)
    }

    fn build(record: &RawRecord) -> Result<Self, MapperError> {
        Ok(Self {
            status: fields::status(record, VALUE)?,
            from: User::create(fields::text(record, MODIFIED_BY)?),
            when: fields::timestamp(record, TIMESTAMP)?,
        })
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn from(&self) -> &User {
        &self.from
    }

    #[must_use]
    pub const fn when(&self) -> Timestamp {
        self.when
    }
}

/// A temperature sample from one sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureEvent {
    temperature: Number,
    when: Timestamp,
    sensor: Sensor,
}

impl TemperatureEvent {
    /// Reads `value` (temperature), `timestamp` and `sensor`.
    ///
    /// The temperature is stored as received, integer or float: no unit
    /// conversion, NaN and infinities pass through.
    ///
    /// # Errors
    /// [`MapperError::MalformedRecord`] when a field is missing or not numeric.
    pub fn create(record: &RawRecord) -> Result<Self, MapperError> {
        let event = Self::build(record).inspect_err(rejected("temperature"))?;
        trace!(
            temperature = %event.temperature,
            sensor = %event.sensor.id(),
            when = %event.when,
            "mapped temperature record"
        );
        Ok(event)
    }

    fn build(record: &RawRecord) -> Result<Self, MapperError> {
        Ok(Self {
            temperature: fields::number(record, VALUE)?,
            when: fields::timestamp(record, TIMESTAMP)?,
            sensor: Sensor::create(fields::number(record, SENSOR)?),
        })
    }

    #[must_use]
    pub const fn temperature(&self) -> Number {
        self.temperature
    }

    /// The temperature widened to `f64`; integers beyond 2^53 lose precision.
    #[must_use]
    pub const fn temperature_f64(&self) -> f64 {
        self.temperature.as_f64()
    }

    #[must_use]
    pub const fn when(&self) -> Timestamp {
        self.when
    }

    #[must_use]
    pub const fn sensor(&self) -> Sensor {
        self.sensor
    }
}

/// A chat-style message left by a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageEvent {
    content: RawValue,
    from: User,
    when: Timestamp,
}

impl MessageEvent {
    /// Reads `value` (content), `user` and `timestamp`, keeping the content as received.
    ///
    /// # Errors
    /// [`MapperError::MalformedRecord`] when a field is missing, null or mistyped.
    pub fn create(record: &RawRecord) -> Result<Self, MapperError> {
        Self::create_with(record, ContentPolicy::Preserve)
    }

    /// Like [`MessageEvent::create`], with an explicit policy for non-text content.
    ///
    /// # Errors
    /// As [`MessageEvent::create`]; additionally, [`ContentPolicy::RequireText`]
    /// rejects content that is not text.
    pub fn create_with(record: &RawRecord, policy: ContentPolicy) -> Result<Self, MapperError> {
        let event = Self::build(record, policy).inspect_err(rejected("message"))?;
        trace!(from = %event.from, when = %event.when, %policy, "mapped message record");
        Ok(event)
    }

    fn build(record: &RawRecord, policy: ContentPolicy) -> Result<Self, MapperError> {
        let content = fields::require(record, VALUE)?;
        let content = match policy {
            ContentPolicy::Preserve => content.clone(),
            ContentPolicy::RequireText => RawValue::from(fields::text(record, VALUE)?),
            ContentPolicy::CoerceToText => RawValue::Text(content.to_string()),
        };

        Ok(Self {
            content,
            from: User::create(fields::text(record, USER)?),
            when: fields::timestamp(record, TIMESTAMP)?,
        })
    }

    #[must_use]
    pub const fn content(&self) -> &RawValue {
        &self.content
    }

    /// Content as text, when it arrived as (or was coerced to) text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }

    #[must_use]
    pub const fn from(&self) -> &User {
        &self.from
    }

    #[must_use]
    pub const fn when(&self) -> Timestamp {
        self.when
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_record(value: impl Into<RawValue>) -> RawRecord {
        RawRecord::new().with(VALUE, value).with(MODIFIED_BY, "BITS").with(TIMESTAMP, 1000)
    }

    #[test]
    fn status_record_maps_all_fields() {
        let event = StatusEvent::create(&status_record("open")).unwrap();
        assert_eq!(event.status(), Status::Open);
        assert_eq!(event.from().name(), "BITS");
        assert_eq!(event.when().epoch_millis(), 1000);
    }

    #[test]
    fn status_user_must_be_text() {
        let record = status_record("open").with(MODIFIED_BY, 42);
        let err = StatusEvent::create(&record).unwrap_err();
        assert_eq!(err.field(), Some(MODIFIED_BY));
    }

    #[test]
    fn coerced_content_is_rendered_as_text() {
        let record = RawRecord::new().with(VALUE, 21.5).with(USER, "bob").with(TIMESTAMP, 5);
        let event = MessageEvent::create_with(&record, ContentPolicy::CoerceToText).unwrap();
        assert_eq!(event.text(), Some("21.5"));
    }

    #[test]
    fn require_text_rejects_numbers() {
        let record = RawRecord::new().with(VALUE, 3).with(USER, "bob").with(TIMESTAMP, 5);
        let err = MessageEvent::create_with(&record, ContentPolicy::RequireText).unwrap_err();
        assert_eq!(err.field(), Some(VALUE));
        assert_eq!(err.reason(), Some("expected text, found integer"));
    }

    #[test]
    fn null_content_is_rejected_under_every_policy() {
        let record = RawRecord::new().with(VALUE, RawValue::Null).with(USER, "bob").with(TIMESTAMP, 5);
        for policy in [ContentPolicy::Preserve, ContentPolicy::RequireText, ContentPolicy::CoerceToText] {
            assert!(MessageEvent::create_with(&record, policy).is_err(), "{policy}");
        }
    }
}
