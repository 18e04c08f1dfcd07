use crate::domain::event::{Event, EventRecord};
use crate::error::{Result, VendingError};
use std::io::Read;

/// Reads machine events from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<Event>`. It handles whitespace trimming and flexible record
/// lengths automatically, so a bare `return,` row is fine.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g. File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and converts events, one row at
    /// a time, so the machine sees exactly one event in flight.
    pub fn events(self) -> impl Iterator<Item = Result<Event>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(VendingError::from)
                .and_then(|record: EventRecord| record.try_into())
        })
    }
}
