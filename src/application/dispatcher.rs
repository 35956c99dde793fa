use crate::domain::capability::PaymentProcess;
use crate::error::Result;
use std::fmt::Debug;

/// Hands a gateway to its own processing routine.
///
/// Stateless: every call is independent and errors from the gateway come
/// back to the caller untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dispatcher;

impl Dispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Logs the gateway, then runs its `process` routine.
    pub fn take_payment<'a, P>(&self, gateway: &'a P) -> Result<&'a P>
    where
        P: PaymentProcess + Debug,
    {
        tracing::debug!(?gateway, "dispatching payment");
        gateway.process()
    }
}
