//! Facade crate for the bitsd model mapper.
//! Re-exports the domain model and the mapping factories under one name.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use bitsd_domain as domain;
pub use bitsd_modelmapper as mapper;

/// The types most callers need.
pub mod prelude {
    pub use bitsd_domain::config::{ContentPolicy, MapperConfig};
    pub use bitsd_domain::{Number, RawRecord, RawValue, Sensor, Status, Timestamp, User};
    pub use bitsd_modelmapper::{
        ArrayTemperatureEvent, Event, MapperError, MapperErrorExt, MessageEvent, RawEnvelope,
        RawSnapshot, Snapshot, StatusEvent, TemperatureEvent,
    };
}
