//! Wrapped broadcast messages.
//!
//! The status server pushes every new sample wrapped in a single-key object
//! naming its kind, e.g. `{"tempint": {"value": 21.5, "sensor": 1, ...}}`.

use crate::error::{MapperError, MapperErrorExt};
use crate::events::{MessageEvent, StatusEvent, TemperatureEvent};
use bitsd_domain::RawRecord;
use bitsd_domain::config::ContentPolicy;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const STATUS_KEY: &str = "status";
pub const TEMPERATURE_KEY: &str = "tempint";
pub const MESSAGE_KEY: &str = "msg";

const ENVELOPE_FIELD: &str = "<envelope>";

/// A wrapped record as received on the wire. Repeated keys are rejected while
/// decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawEnvelope {
    entries: BTreeMap<String, RawRecord>,
}

impl RawEnvelope {
    pub fn wrap(kind: impl Into<String>, record: RawRecord) -> Self {
        Self { entries: BTreeMap::from([(kind.into(), record)]) }
    }
}

struct RawEnvelopeVisitor;

impl<'de> Visitor<'de> for RawEnvelopeVisitor {
    type Value = RawEnvelope;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object wrapping one record under its kind")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawEnvelope, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((kind, record)) = map.next_entry::<String, RawRecord>()? {
            if let Some(kind) = entries.insert(kind.clone(), record).map(|_| kind) {
                return Err(de::Error::custom(format!("duplicate record kind `{kind}`")));
            }
        }
        Ok(RawEnvelope { entries })
    }
}

impl<'de> Deserialize<'de> for RawEnvelope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RawEnvelopeVisitor)
    }
}

/// Any typed event, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "event", rename_all = "lowercase")]
pub enum Event {
    Status(StatusEvent),
    Temperature(TemperatureEvent),
    Message(MessageEvent),
}

impl Event {
    /// Unwraps an envelope and maps its record with the matching factory.
    ///
    /// # Errors
    /// [`MapperError::MalformedRecord`] when the envelope does not hold exactly
    /// one known key, or when the wrapped record is malformed.
    pub fn create(envelope: &RawEnvelope) -> Result<Self, MapperError> {
        Self::create_with(envelope, ContentPolicy::default())
    }

    /// Like [`Event::create`], forwarding `policy` to message records.
    ///
    /// # Errors
    /// As [`Event::create`].
    pub fn create_with(envelope: &RawEnvelope, policy: ContentPolicy) -> Result<Self, MapperError> {
        let mut entries = envelope.entries.iter();
        let (Some((kind, record)), None) = (entries.next(), entries.next()) else {
            return Err(MapperError::malformed(
                ENVELOPE_FIELD,
                format!("expected exactly one wrapped record, found {}", envelope.entries.len()),
            ));
        };

        match kind.as_str() {
            STATUS_KEY => StatusEvent::create(record).map(Self::Status).context(STATUS_KEY),
            TEMPERATURE_KEY => {
                TemperatureEvent::create(record).map(Self::Temperature).context(TEMPERATURE_KEY)
            },
            MESSAGE_KEY => {
                MessageEvent::create_with(record, policy).map(Self::Message).context(MESSAGE_KEY)
            },
            other => Err(MapperError::malformed(
                ENVELOPE_FIELD,
                format!("unknown record kind `{other}`"),
            )),
        }
    }

    /// Wire key this event is wrapped under.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Status(_) => STATUS_KEY,
            Self::Temperature(_) => TEMPERATURE_KEY,
            Self::Message(_) => MESSAGE_KEY,
        }
    }
}
