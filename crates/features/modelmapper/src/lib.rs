//! # Model Mapper
//!
//! Turns the untyped records published by the BITS status/sensor backend into
//! typed, immutable events.
//!
//! ## Factories
//!
//! * [`StatusEvent::create`]: `value` (status code), `modifiedby`, `timestamp`.
//! * [`TemperatureEvent::create`]: `value` (temperature), `timestamp`, `sensor`.
//! * [`MessageEvent::create`]: `value` (content), `user`, `timestamp`.
//! * [`ArrayTemperatureEvent::create`]: a batch of temperature records; the
//!   output order is the reverse of the input order.
//! * [`Event::create`]: a single-key wrapped record (`status`, `tempint`, `msg`).
//! * [`Snapshot::create`]: the latest-data document.
//!
//! Every factory is a pure synchronous function. Failures are reported as
//! [`MapperError::MalformedRecord`] naming the offending field; batches fail
//! as a whole.
//!
//! # Example
//!
//! ```rust
//! use bitsd_domain::{RawRecord, Status};
//! use bitsd_modelmapper::{MapperError, StatusEvent};
//!
//! # fn main() -> Result<(), MapperError> {
//! let record = RawRecord::new()
//!     .with("value", "open")
//!     .with("modifiedby", "BITS")
//!     .with("timestamp", 1_380_000_000_000_i64);
//!
//! let event = StatusEvent::create(&record)?;
//! assert_eq!(event.status(), Status::Open);
//! assert_eq!(event.from().name(), "BITS");
//! # Ok(())
//! # }
//! ```

mod batch;
mod envelope;
mod error;
mod events;
mod fields;
pub mod json;
mod snapshot;

pub use crate::batch::ArrayTemperatureEvent;
pub use crate::envelope::{Event, MESSAGE_KEY, RawEnvelope, STATUS_KEY, TEMPERATURE_KEY};
pub use crate::error::{MapperError, MapperErrorExt};
pub use crate::events::{MessageEvent, StatusEvent, TemperatureEvent};
pub use crate::snapshot::{RawSnapshot, Snapshot};
pub use bitsd_domain::config::ContentPolicy;
