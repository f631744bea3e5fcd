use crate::error::{MapperError, MapperErrorExt};
use crate::events::TemperatureEvent;
use bitsd_domain::RawRecord;
use std::collections::VecDeque;
use tracing::debug;

/// Maps a sequence of raw temperature records.
#[derive(Debug, Clone, Copy)]
pub struct ArrayTemperatureEvent;

impl ArrayTemperatureEvent {
    /// Converts every record in input order, prepending each event to the
    /// result: the output is the input reversed (`[a, b, c]` gives `[c, b, a]`).
    ///
    /// # Errors
    /// Fails on the first malformed record, with its index as context. No
    /// partial result is returned.
    pub fn create(records: &[RawRecord]) -> Result<Vec<TemperatureEvent>, MapperError> {
        let mut events = VecDeque::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            events.push_front(
                TemperatureEvent::create(record).context(format!("temperature record {index}"))?,
            );
        }

        debug!(count = events.len(), "mapped temperature batch");
        Ok(events.into())
    }
}
