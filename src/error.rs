use thiserror::Error;

/// Reasons a fraud check rejects a payment before it is paid.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudError {
    #[error("id required")]
    MissingTransactionId,
    #[error("amt required")]
    InvalidAmount,
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Fraud check failed: {0}")]
    Fraud(#[from] FraudError),
    #[error("Invalid attribute `{name}`: {reason}")]
    InvalidAttribute { name: String, reason: String },
    #[error("Unknown gateway: {0}")]
    UnknownGateway(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PaymentError {
    pub(crate) fn invalid_attribute(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaymentError>;
