use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Construction-time key/value input for a gateway variant.
pub type AttributeBag = BTreeMap<String, Value>;

/// Transaction data shared by every gateway variant.
///
/// Known attribute names populate the typed fields; anything else is kept
/// verbatim in `extra` so gateway-specific settings survive construction.
#[derive(Clone, PartialEq, Default)]
pub struct TransactionAttributes {
    pub transaction_id: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub endpoint_url: Option<String>,
    pub return_url: Option<String>,
    pub notify_url: Option<String>,
    pub submit_method: Option<String>,
    pub merchant_key: Option<String>,
    pub private_key: Option<String>,
    pub public_key: Option<String>,
    pub extra: BTreeMap<String, Value>,
}

impl TransactionAttributes {
    /// Builds the attributes from a bag, accepting both snake_case names and
    /// the camelCase aliases used by gateway settings exports.
    pub fn from_bag(bag: AttributeBag) -> Result<Self> {
        let mut attributes = Self::default();

        for (name, value) in bag {
            if value.is_null() {
                continue;
            }
            match canonical_name(&name) {
                "transaction_id" => attributes.transaction_id = Some(text(&name, value)?),
                "amount" => attributes.amount = decimal(&name, &value)?,
                "currency" => attributes.currency = Some(text(&name, value)?),
                "endpoint_url" => attributes.endpoint_url = Some(text(&name, value)?),
                "return_url" => attributes.return_url = Some(text(&name, value)?),
                "notify_url" => attributes.notify_url = Some(text(&name, value)?),
                "submit_method" => attributes.submit_method = Some(text(&name, value)?),
                "merchant_key" => attributes.merchant_key = Some(text(&name, value)?),
                "private_key" => attributes.private_key = Some(text(&name, value)?),
                "public_key" => attributes.public_key = Some(text(&name, value)?),
                _ => {
                    attributes.extra.insert(name, value);
                }
            }
        }

        Ok(attributes)
    }

    /// Returns a field from the auxiliary map of unrecognised attributes.
    pub fn extra(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// True when the transaction reference is missing or blank.
    pub fn has_transaction_id(&self) -> bool {
        self.transaction_id
            .as_deref()
            .is_some_and(|id| !id.trim().is_empty())
    }
}

/// Maps a known attribute alias to its canonical snake_case name.
/// Unknown names are returned unchanged.
pub fn canonical_name(name: &str) -> &str {
    match name {
        "transactionId" | "transId" => "transaction_id",
        "amt" => "amount",
        "currencyType" => "currency",
        "endpointUrl" | "endPointUrl" => "endpoint_url",
        "returnUrl" | "returnEndPointUrl" => "return_url",
        "notifyUrl" | "notifyEndPointUrl" => "notify_url",
        "submitMethod" => "submit_method",
        "merchantKey" => "merchant_key",
        "privateKey" => "private_key",
        "publicKey" => "public_key",
        other => other,
    }
}

/// Lays `overrides` on top of `base`, matching aliases to their canonical
/// names so that an override always wins over the value it shadows.
pub fn overlay(base: AttributeBag, overrides: AttributeBag) -> AttributeBag {
    let mut merged: AttributeBag = base
        .into_iter()
        .map(|(name, value)| (canonical_name(&name).to_string(), value))
        .collect();
    merged.extend(
        overrides
            .into_iter()
            .map(|(name, value)| (canonical_name(&name).to_string(), value)),
    );
    merged
}

fn text(name: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(PaymentError::invalid_attribute(
            name,
            format!("expected text, found {other}"),
        )),
    }
}

fn decimal(name: &str, value: &Value) -> Result<Decimal> {
    let raw = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            return Err(PaymentError::invalid_attribute(
                name,
                format!("expected a number, found {other}"),
            ));
        }
    };

    Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|e| PaymentError::invalid_attribute(name, e.to_string()))
}

// Credentials stay out of the dispatch log.
impl fmt::Debug for TransactionAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(secret: &Option<String>) -> Option<&'static str> {
            secret.as_ref().map(|_| "<redacted>")
        }

        f.debug_struct("TransactionAttributes")
            .field("transaction_id", &self.transaction_id)
            .field("amount", &self.amount)
            .field("currency", &self.currency)
            .field("endpoint_url", &self.endpoint_url)
            .field("return_url", &self.return_url)
            .field("notify_url", &self.notify_url)
            .field("submit_method", &self.submit_method)
            .field("merchant_key", &redact(&self.merchant_key))
            .field("private_key", &redact(&self.private_key))
            .field("public_key", &self.public_key)
            .field("extra", &self.extra)
            .finish()
    }
}
