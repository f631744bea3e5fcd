//! The "latest data" document served to freshly connected clients.

use crate::batch::ArrayTemperatureEvent;
use crate::error::{MapperError, MapperErrorExt};
use crate::events::{MessageEvent, StatusEvent, TemperatureEvent};
use bitsd_domain::config::ContentPolicy;
use bitsd_domain::{Number, RawRecord, RawValue};
use serde::{Deserialize, Serialize};
use tracing::debug;

const STATUS: &str = "status";
const TEMPERATURE: &str = "tempint";
const HISTORY: &str = "tempinthist";
const VERSION: &str = "version";
const MESSAGE: &str = "msg";

/// Wire shape of the document. Every member is optional here so that absence
/// is reported as a malformed field rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    #[serde(default)]
    pub status: Option<RawRecord>,
    #[serde(default)]
    pub tempint: Option<RawRecord>,
    #[serde(default)]
    pub tempinthist: Option<Vec<RawRecord>>,
    #[serde(default)]
    pub version: Option<RawValue>,
    #[serde(default)]
    pub msg: Option<RawRecord>,
}

/// Current status, temperature and recent history in one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    status: StatusEvent,
    temperature: TemperatureEvent,
    history: Vec<TemperatureEvent>,
    version: u32,
    message: Option<MessageEvent>,
}

impl Snapshot {
    /// Maps every member of the document. The history goes through
    /// [`ArrayTemperatureEvent`] and is therefore reversed.
    ///
    /// # Errors
    /// [`MapperError::MalformedRecord`] for a missing member, a bad `version`,
    /// or any malformed nested record (the member name is kept as context).
    pub fn create(raw: &RawSnapshot) -> Result<Self, MapperError> {
        Self::create_with(raw, ContentPolicy::default())
    }

    /// Like [`Snapshot::create`], forwarding `policy` to the message record.
    ///
    /// # Errors
    /// As [`Snapshot::create`].
    pub fn create_with(raw: &RawSnapshot, policy: ContentPolicy) -> Result<Self, MapperError> {
        let status = StatusEvent::create(member(raw.status.as_ref(), STATUS)?).context(STATUS)?;
        let temperature =
            TemperatureEvent::create(member(raw.tempint.as_ref(), TEMPERATURE)?).context(TEMPERATURE)?;
        let history = ArrayTemperatureEvent::create(member(raw.tempinthist.as_deref(), HISTORY)?)
            .map_err(|err| err.within(HISTORY))?;
        let version = version(raw.version.as_ref())?;
        let message = raw
            .msg
            .as_ref()
            .map(|record| MessageEvent::create_with(record, policy).context(MESSAGE))
            .transpose()?;

        debug!(version, history = history.len(), has_message = message.is_some(), "mapped snapshot");
        Ok(Self { status, temperature, history, version, message })
    }

    #[must_use]
    pub const fn status(&self) -> &StatusEvent {
        &self.status
    }

    #[must_use]
    pub const fn temperature(&self) -> &TemperatureEvent {
        &self.temperature
    }

    /// Historical samples, in batch order.
    #[must_use]
    pub fn history(&self) -> &[TemperatureEvent] {
        &self.history
    }

    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    #[must_use]
    pub const fn message(&self) -> Option<&MessageEvent> {
        self.message.as_ref()
    }
}

fn member<'a, T: ?Sized>(
    value: Option<&'a T>,
    field: &'static str,
) -> Result<&'a T, MapperError> {
    value.ok_or_else(|| MapperError::malformed(field, "missing field"))
}

fn version(value: Option<&RawValue>) -> Result<u32, MapperError> {
    let value = member(value, VERSION)?;
    value
        .as_number()
        .and_then(Number::as_i64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| {
            MapperError::malformed(VERSION, format!("expected a non-negative integer, found `{value}`"))
        })
}
