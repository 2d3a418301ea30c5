//! Hosted checkout gateway.
//!
//! The checkout itself runs in a front end (browser widget, terminal prompt).
//! This adapter hands each request to that front end over a channel and
//! waits for the single event it reports back.
//!
//! # Outcomes
//!
//! | Situation                                   | Outcome            |
//! |---------------------------------------------|--------------------|
//! | No usable key id                            | `InitiationFailed` |
//! | No front end listening                      | `InitiationFailed` |
//! | Previous checkout still waiting for pickup  | `InitiationFailed` |
//! | Front end reports `Paid`                    | `Success`          |
//! | Front end reports `Dismissed`, drops reply  | `Cancelled`        |
//!
//! The checkout window's `timeout` is enforced by the front end, which
//! reports `Dismissed` when it expires. The gateway waits for as long as
//! the front end needs, so a slow `Paid` is never lost.

use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, oneshot};

use crate::domain::wizard::{PaymentOutcome, PaymentRequest};
use crate::ports::PaymentGateway;

const FRONT_END_UNAVAILABLE_MESSAGE: &str =
    "Payment gateway failed to load. Please refresh the page.";
const CHECKOUT_BUSY_MESSAGE: &str =
    "A payment window is already open. Please complete or close it first.";

/// Settings for the hosted checkout.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Publishable key id. `None` means payments are not configured.
    pub key_id: Option<String>,
    /// Retries the checkout widget allows before giving up.
    pub retry_max: u32,
    /// How long the front end keeps the checkout window open.
    pub timeout: Duration,
}

/// A checkout the front end should present.
#[derive(Debug)]
pub struct CheckoutRequest {
    pub key_id: String,
    pub retry_max: u32,
    pub timeout: Duration,
    pub payment: PaymentRequest,
    reply: oneshot::Sender<CheckoutEvent>,
}

impl CheckoutRequest {
    /// Reports the result of this checkout back to the waiting gateway.
    ///
    /// If nobody is waiting any more, a `Paid` result is logged at error
    /// level with its payment id so it can be reconciled by hand.
    pub fn respond(self, event: CheckoutEvent) {
        match self.reply.send(event) {
            Ok(()) => {}
            Err(CheckoutEvent::Paid { payment_id }) => tracing::error!(
                payment_id = %payment_id,
                amount_minor = self.payment.amount_minor,
                description = %self.payment.description,
                "Payment received after the registration stopped waiting, reconcile manually"
            ),
            Err(CheckoutEvent::Dismissed) => {
                tracing::debug!("Checkout dismissed after the registration stopped waiting")
            }
        }
    }
}

/// What the front end observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    Paid { payment_id: String },
    Dismissed,
}

/// Receiving half handed to the front end.
pub type CheckoutRequests = mpsc::Receiver<CheckoutRequest>;

#[derive(Debug, Clone)]
pub struct CheckoutGateway {
    config: CheckoutConfig,
    requests: mpsc::Sender<CheckoutRequest>,
}

impl CheckoutGateway {
    /// Creates the gateway and the request stream the front end must serve.
    pub fn new(config: CheckoutConfig) -> (Self, CheckoutRequests) {
        let (requests, receiver) = mpsc::channel(1);
        (Self { config, requests }, receiver)
    }
}

#[async_trait]
impl PaymentGateway for CheckoutGateway {
    async fn initiate(&self, request: PaymentRequest) -> PaymentOutcome {
        let Some(key_id) = self.config.key_id.clone() else {
            tracing::warn!("Payment initiation refused: no key id configured");
            return PaymentOutcome::initiation_failed(
                "Payment system is not configured. Please contact support.",
            );
        };

        let (reply, event) = oneshot::channel();
        let checkout = CheckoutRequest {
            key_id,
            retry_max: self.config.retry_max,
            timeout: self.config.timeout,
            payment: request,
            reply,
        };

        match self.requests.try_send(checkout) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                tracing::warn!("Payment initiation refused: previous checkout not yet picked up");
                return PaymentOutcome::initiation_failed(CHECKOUT_BUSY_MESSAGE);
            }
            Err(TrySendError::Closed(_)) => {
                tracing::warn!("Payment initiation refused: checkout front end unavailable");
                return PaymentOutcome::initiation_failed(FRONT_END_UNAVAILABLE_MESSAGE);
            }
        }

        match event.await {
            Ok(CheckoutEvent::Paid { payment_id }) => PaymentOutcome::Success { payment_id },
            Ok(CheckoutEvent::Dismissed) => PaymentOutcome::Cancelled,
            Err(_) => {
                tracing::debug!("Checkout closed without reporting a result");
                PaymentOutcome::Cancelled
            }
        }
    }

    fn is_configured(&self) -> bool {
        self.config.key_id.is_some()
    }
}
