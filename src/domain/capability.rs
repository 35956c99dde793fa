//! Capability contracts a gateway variant can opt into.
//!
//! Each variant implements exactly the subset of traits it supports and
//! composes them in [`PaymentProcess::process_observed`].

use crate::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Pay,
    FraudCheck,
    ThreeDSCheck,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Pay => f.write_str("pay"),
            Capability::FraudCheck => f.write_str("fraud-check"),
            Capability::ThreeDSCheck => f.write_str("3ds-check"),
        }
    }
}

pub trait StandardPayment {
    fn pay(&self) -> Result<&Self>;
}

pub trait FraudCheck {
    fn fraud_check(&self) -> Result<&Self>;
}

pub trait ThreeDSecureCheck {
    fn three_ds_check(&self) -> Result<&Self>;
}

/// Receives each capability step right before it runs.
pub trait StepObserver {
    fn on_step(&mut self, step: Capability);
}

/// Discards every step.
impl StepObserver for () {
    fn on_step(&mut self, _step: Capability) {}
}

/// Records steps in call order.
impl StepObserver for Vec<Capability> {
    fn on_step(&mut self, step: Capability) {
        self.push(step);
    }
}

/// The fixed capability subset of a concrete variant.
pub trait DeclaredCapabilities {
    const CAPABILITIES: &'static [Capability];
}

/// The ordered processing routine every dispatchable variant exposes.
pub trait PaymentProcess {
    /// Capabilities of this instance.
    fn capabilities(&self) -> &'static [Capability];

    /// Runs the variant's steps in order, reporting each one to `observer`
    /// before invoking it. Returns `self` on success; a failing step stops
    /// the routine and later steps are never reported or run.
    fn process_observed(&self, observer: &mut dyn StepObserver) -> Result<&Self>;

    fn process(&self) -> Result<&Self> {
        self.process_observed(&mut ())
    }

    fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}
