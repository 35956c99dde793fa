use super::attributes::AttributeBag;
use super::gateway::{Gateway, GatewayKind};
use crate::error::PaymentError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single payment to route through a named gateway.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct PaymentRequest {
    pub gateway: GatewayKind,
    #[serde(default)]
    pub attributes: AttributeBag,
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Succeeded,
    Failed,
}

/// What happened to one request of a batch.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentOutcome {
    /// Position of the request in its batch.
    pub index: usize,
    pub gateway: GatewayKind,
    pub transaction_id: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub status: PaymentStatus,
    pub error: Option<String>,
}

impl PaymentOutcome {
    pub fn succeeded(index: usize, gateway: &Gateway) -> Self {
        Self::from_gateway(index, gateway, PaymentStatus::Succeeded, None)
    }

    pub fn failed(index: usize, gateway: &Gateway, error: &PaymentError) -> Self {
        Self::from_gateway(
            index,
            gateway,
            PaymentStatus::Failed,
            Some(error.to_string()),
        )
    }

    /// A request whose gateway could not even be built.
    pub fn rejected(index: usize, gateway: GatewayKind, error: &PaymentError) -> Self {
        Self {
            index,
            gateway,
            transaction_id: None,
            amount: None,
            currency: None,
            status: PaymentStatus::Failed,
            error: Some(error.to_string()),
        }
    }

    fn from_gateway(
        index: usize,
        gateway: &Gateway,
        status: PaymentStatus,
        error: Option<String>,
    ) -> Self {
        let attributes = gateway.attributes();
        Self {
            index,
            gateway: gateway.kind(),
            transaction_id: attributes.transaction_id.clone(),
            amount: Some(attributes.amount),
            currency: attributes.currency.clone(),
            status,
            error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Succeeded
    }
}

/// Outcomes of a batch, in request order.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct BatchReport {
    pub outcomes: Vec<PaymentOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}
