use super::dispatcher::Dispatcher;
use crate::domain::attributes::{self, AttributeBag};
use crate::domain::gateway::Gateway;
use crate::domain::payment::{BatchReport, PaymentOutcome, PaymentRequest};
use crate::domain::ports::GatewaySettingsStoreBox;
use crate::error::Result;

/// Closing message emitted when a batch scope ends.
pub const CLOSING_MESSAGE: &str = "Thank you :)";

/// What the batch does after a payment fails.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Record the failure and keep dispatching the remaining requests.
    #[default]
    ContinueOnFailure,
    /// Record the failure and dispatch nothing else.
    StopOnFailure,
}

/// Emits [`CLOSING_MESSAGE`] when dropped, however the batch ends.
struct BatchScope {
    requests: usize,
}

impl BatchScope {
    fn open(requests: usize) -> Self {
        tracing::info!(requests, "checkout batch started");
        Self { requests }
    }
}

impl Drop for BatchScope {
    fn drop(&mut self) {
        tracing::info!(requests = self.requests, "{}", CLOSING_MESSAGE);
    }
}

/// Drives a batch of payment requests through the dispatcher.
///
/// For each request the gateway's stored settings are merged with the
/// request's own attributes (the request wins), the gateway is built and then
/// handed to [`Dispatcher::take_payment`]. Payment failures never abort the
/// batch with an error; they are reported as failed outcomes.
pub struct Checkout {
    settings: GatewaySettingsStoreBox,
    dispatcher: Dispatcher,
    policy: BatchPolicy,
}

impl Checkout {
    pub fn new(settings: GatewaySettingsStoreBox) -> Self {
        Self {
            settings,
            dispatcher: Dispatcher::new(),
            policy: BatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs the batch in request order.
    ///
    /// Only a settings store failure returns `Err`; the closing message is
    /// emitted in every case.
    pub async fn run(&self, requests: Vec<PaymentRequest>) -> Result<BatchReport> {
        let _scope = BatchScope::open(requests.len());
        let mut report = BatchReport::default();

        for (index, request) in requests.into_iter().enumerate() {
            let outcome = self.checkout(index, request).await?;
            let failed = !outcome.is_success();
            report.outcomes.push(outcome);

            if failed && self.policy == BatchPolicy::StopOnFailure {
                tracing::warn!(index, "stopping batch after failed payment");
                break;
            }
        }

        tracing::info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "checkout batch finished"
        );
        Ok(report)
    }

    async fn checkout(&self, index: usize, request: PaymentRequest) -> Result<PaymentOutcome> {
        let defaults = match self.settings.get(request.gateway).await? {
            Some(settings) => settings.attributes(),
            None => AttributeBag::new(),
        };
        let bag = attributes::overlay(defaults, request.attributes);

        let gateway = match Gateway::build(request.gateway, bag) {
            Ok(gateway) => gateway,
            Err(e) => {
                tracing::warn!(index, gateway = %request.gateway, error = %e, "could not build gateway");
                return Ok(PaymentOutcome::rejected(index, request.gateway, &e));
            }
        };

        match self.dispatcher.take_payment(&gateway) {
            Ok(paid) => {
                tracing::info!(index, gateway = %paid.kind(), "payment succeeded");
                Ok(PaymentOutcome::succeeded(index, paid))
            }
            Err(e) => {
                tracing::warn!(index, gateway = %gateway.kind(), error = %e, "payment failed");
                Ok(PaymentOutcome::failed(index, &gateway, &e))
            }
        }
    }
}
