use crate::domain::payment::PaymentOutcome;
use crate::error::Result;
use std::io::Write;

/// Writes payment outcomes as CSV, one row per request.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes every outcome and flushes the sink.
    pub fn write_outcomes<'a, I>(&mut self, outcomes: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a PaymentOutcome>,
    {
        for outcome in outcomes {
            self.writer.serialize(outcome)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
