use crate::domain::settings::GatewaySettings;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads gateway settings from a CSV source.
///
/// Expects a header row naming the `GatewaySettings` fields. Whitespace is
/// trimmed, trailing columns may be omitted and empty cells count as unset.
pub struct GatewaySettingsReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> GatewaySettingsReader<R> {
    /// Creates a new `GatewaySettingsReader` from any `Read` source.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes settings rows.
    pub fn settings(self) -> impl Iterator<Item = Result<GatewaySettings>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateway::GatewayKind;

    #[test]
    fn test_reader_valid_stream() {
        let data = "gateway, endpoint_url, return_url, notify_url, submit_method, merchant_key\n\
                    abc, http://abc.com/pay, , , POST, m-abc\n\
                    etc, http://etc.com/pay";
        let reader = GatewaySettingsReader::new(data.as_bytes());
        let results: Vec<Result<GatewaySettings>> = reader.settings().collect();

        assert_eq!(results.len(), 2);
        let abc = results[0].as_ref().unwrap();
        assert_eq!(abc.gateway, GatewayKind::Abc);
        assert_eq!(abc.submit_method.as_deref(), Some("POST"));
        assert_eq!(abc.merchant_key.as_deref(), Some("m-abc"));
        assert_eq!(abc.return_url, None);

        let etc = results[1].as_ref().unwrap();
        assert_eq!(etc.gateway, GatewayKind::Etc);
        assert_eq!(etc.endpoint_url.as_deref(), Some("http://etc.com/pay"));
        assert_eq!(etc.merchant_key, None);
    }

    #[test]
    fn test_reader_unknown_gateway() {
        let data = "gateway, endpoint_url\nstripe, http://stripe.com";
        let reader = GatewaySettingsReader::new(data.as_bytes());
        let results: Vec<Result<GatewaySettings>> = reader.settings().collect();

        assert!(matches!(results[0], Err(PaymentError::CsvError(_))));
    }
}
