use crate::domain::payment::PaymentRequest;
use crate::error::Result;
use std::io::Read;

/// Reads a batch of payment requests from a JSON array.
pub struct PaymentRequestReader<R: Read> {
    source: R,
}

impl<R: Read> PaymentRequestReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn requests(self) -> Result<Vec<PaymentRequest>> {
        Ok(serde_json::from_reader(self.source)?)
    }
}
