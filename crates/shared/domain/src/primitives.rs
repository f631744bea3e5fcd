//! Leaf value objects wrapped around a single raw scalar.

use crate::raw::Number;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt;

/// The author of a status change or a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct User {
    name: String,
}

impl User {
    /// Wraps a user name. The name is not validated.
    pub fn create(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// An instant expressed as milliseconds since the Unix epoch.
///
/// The raw value is kept verbatim so it always round-trips; conversion to a
/// calendar date happens on demand and may fail for values chrono cannot represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Timestamp {
    epoch_millis: i64,
}

impl Timestamp {
    #[must_use]
    pub const fn create(epoch_millis: i64) -> Self {
        Self { epoch_millis }
    }

    #[must_use]
    pub const fn epoch_millis(self) -> i64 {
        self.epoch_millis
    }

    /// Calendar instant in UTC, `None` when out of chrono's range.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.epoch_millis)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self::create(value.timestamp_millis())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.epoch_millis),
        }
    }
}

/// A temperature probe, identified by its raw numeric id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sensor {
    id: Number,
}

impl Sensor {
    /// Stores the identifier as-is; negative or fractional ids are accepted.
    pub fn create(id: impl Into<Number>) -> Self {
        Self { id: id.into() }
    }

    #[must_use]
    pub const fn id(self) -> Number {
        self.id
    }
}
