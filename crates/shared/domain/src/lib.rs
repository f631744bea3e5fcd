//! # Domain Models
//!
//! Pure data types shared by the bitsd crates: the untyped record model received
//! from the sensor/status backend, the primitive value objects the mapper builds
//! from it, and configuration structures.
//! Keep it lean: no I/O or logging, just data and simple helpers.

pub mod config;
pub mod primitives;
pub mod raw;
pub mod status;

pub use primitives::{Sensor, Timestamp, User};
pub use raw::{Number, RawRecord, RawValue};
pub use status::Status;
