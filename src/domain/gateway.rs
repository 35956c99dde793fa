use super::attributes::{AttributeBag, TransactionAttributes};
use super::capability::{
    Capability, DeclaredCapabilities, FraudCheck, PaymentProcess, StandardPayment, StepObserver,
    ThreeDSecureCheck,
};
use crate::error::{FraudError, PaymentError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifies a gateway implementation in settings and payment requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayKind {
    Abc,
    Xyz,
    Etc,
}

impl GatewayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GatewayKind::Abc => "abc",
            GatewayKind::Xyz => "xyz",
            GatewayKind::Etc => "etc",
        }
    }
}

impl fmt::Display for GatewayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GatewayKind {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abc" | "abcpay" => Ok(GatewayKind::Abc),
            "xyz" | "xyzpay" => Ok(GatewayKind::Xyz),
            "etc" | "etcpay" => Ok(GatewayKind::Etc),
            _ => Err(PaymentError::UnknownGateway(s.to_string())),
        }
    }
}

impl Serialize for GatewayKind {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GatewayKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Plain gateway: pays without any checks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AbcPay {
    pub attributes: TransactionAttributes,
}

impl AbcPay {
    pub fn new(attributes: TransactionAttributes) -> Self {
        Self { attributes }
    }

    pub fn from_attributes(bag: AttributeBag) -> Result<Self> {
        TransactionAttributes::from_bag(bag).map(Self::new)
    }
}

impl StandardPayment for AbcPay {
    fn pay(&self) -> Result<&Self> {
        tracing::trace!(gateway = "abc", "pay");
        Ok(self)
    }
}

impl DeclaredCapabilities for AbcPay {
    const CAPABILITIES: &'static [Capability] = &[Capability::Pay];
}

impl PaymentProcess for AbcPay {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn process_observed(&self, observer: &mut dyn StepObserver) -> Result<&Self> {
        observer.on_step(Capability::Pay);
        self.pay()
    }
}

/// Gateway that runs a 3-D Secure check before paying.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XyzPay {
    pub attributes: TransactionAttributes,
}

impl XyzPay {
    pub fn new(attributes: TransactionAttributes) -> Self {
        Self { attributes }
    }

    pub fn from_attributes(bag: AttributeBag) -> Result<Self> {
        TransactionAttributes::from_bag(bag).map(Self::new)
    }
}

impl StandardPayment for XyzPay {
    fn pay(&self) -> Result<&Self> {
        tracing::trace!(gateway = "xyz", "pay");
        Ok(self)
    }
}

impl ThreeDSecureCheck for XyzPay {
    // Placeholder: there is no 3-D Secure provider behind this gateway.
    fn three_ds_check(&self) -> Result<&Self> {
        tracing::trace!(gateway = "xyz", "3ds check");
        Ok(self)
    }
}

impl DeclaredCapabilities for XyzPay {
    const CAPABILITIES: &'static [Capability] = &[Capability::Pay, Capability::ThreeDSCheck];
}

impl PaymentProcess for XyzPay {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn process_observed(&self, observer: &mut dyn StepObserver) -> Result<&Self> {
        observer.on_step(Capability::ThreeDSCheck);
        self.three_ds_check()?;
        observer.on_step(Capability::Pay);
        self.pay()?;
        Ok(self)
    }
}

/// Gateway that screens the transaction for fraud before paying.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EtcPay {
    pub attributes: TransactionAttributes,
}

impl EtcPay {
    pub fn new(attributes: TransactionAttributes) -> Self {
        Self { attributes }
    }

    pub fn from_attributes(bag: AttributeBag) -> Result<Self> {
        TransactionAttributes::from_bag(bag).map(Self::new)
    }
}

impl FraudCheck for EtcPay {
    fn fraud_check(&self) -> Result<&Self> {
        if !self.attributes.has_transaction_id() {
            tracing::debug!(gateway = "etc", "fraud check rejected: missing transaction id");
            return Err(FraudError::MissingTransactionId.into());
        }
        if self.attributes.amount <= Decimal::ZERO {
            tracing::debug!(
                gateway = "etc",
                amount = %self.attributes.amount,
                "fraud check rejected: non-positive amount"
            );
            return Err(FraudError::InvalidAmount.into());
        }
        Ok(self)
    }
}

impl StandardPayment for EtcPay {
    fn pay(&self) -> Result<&Self> {
        tracing::trace!(gateway = "etc", "pay");
        Ok(self)
    }
}

impl DeclaredCapabilities for EtcPay {
    const CAPABILITIES: &'static [Capability] = &[Capability::Pay, Capability::FraudCheck];
}

impl PaymentProcess for EtcPay {
    fn capabilities(&self) -> &'static [Capability] {
        Self::CAPABILITIES
    }

    fn process_observed(&self, observer: &mut dyn StepObserver) -> Result<&Self> {
        observer.on_step(Capability::FraudCheck);
        self.fraud_check()?;
        observer.on_step(Capability::Pay);
        self.pay()?;
        Ok(self)
    }
}

/// Any supported gateway, selected at runtime by [`GatewayKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Gateway {
    Abc(AbcPay),
    Xyz(XyzPay),
    Etc(EtcPay),
}

impl Gateway {
    /// Builds the variant registered under `kind` from an attribute bag.
    pub fn build(kind: GatewayKind, bag: AttributeBag) -> Result<Self> {
        Ok(match kind {
            GatewayKind::Abc => Gateway::Abc(AbcPay::from_attributes(bag)?),
            GatewayKind::Xyz => Gateway::Xyz(XyzPay::from_attributes(bag)?),
            GatewayKind::Etc => Gateway::Etc(EtcPay::from_attributes(bag)?),
        })
    }

    pub fn kind(&self) -> GatewayKind {
        match self {
            Gateway::Abc(_) => GatewayKind::Abc,
            Gateway::Xyz(_) => GatewayKind::Xyz,
            Gateway::Etc(_) => GatewayKind::Etc,
        }
    }

    pub fn attributes(&self) -> &TransactionAttributes {
        match self {
            Gateway::Abc(g) => &g.attributes,
            Gateway::Xyz(g) => &g.attributes,
            Gateway::Etc(g) => &g.attributes,
        }
    }
}

impl PaymentProcess for Gateway {
    fn capabilities(&self) -> &'static [Capability] {
        match self {
            Gateway::Abc(_) => AbcPay::CAPABILITIES,
            Gateway::Xyz(_) => XyzPay::CAPABILITIES,
            Gateway::Etc(_) => EtcPay::CAPABILITIES,
        }
    }

    fn process_observed(&self, observer: &mut dyn StepObserver) -> Result<&Self> {
        let outcome = match self {
            Gateway::Abc(g) => g.process_observed(observer).map(|_| ()),
            Gateway::Xyz(g) => g.process_observed(observer).map(|_| ()),
            Gateway::Etc(g) => g.process_observed(observer).map(|_| ()),
        };
        outcome.map(|_| self)
    }
}
