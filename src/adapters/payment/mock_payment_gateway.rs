//! Mock payment gateway for testing.
//!
//! Returns scripted outcomes in order and records every request:
//! - Queue outcomes with `push_outcome`
//! - Fall back to a generated `pay_mock_<n>` success when the queue is empty
//! - Inspect requests with `requests` / `call_count`

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::wizard::{PaymentOutcome, PaymentRequest};
use crate::ports::PaymentGateway;

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let gateway = MockPaymentGateway::new();
/// gateway.push_outcome(PaymentOutcome::Cancelled);
/// gateway.push_outcome(PaymentOutcome::success("pay_123"));
///
/// assert_eq!(gateway.initiate(request.clone()).await, PaymentOutcome::Cancelled);
/// assert_eq!(gateway.call_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    outcomes: VecDeque<PaymentOutcome>,
    requests: Vec<PaymentRequest>,
    unconfigured: bool,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that reports itself unconfigured and fails every initiation.
    pub fn unconfigured() -> Self {
        let mock = Self::new();
        mock.state().unconfigured = true;
        mock
    }

    /// Queue the outcome for the next unscripted call.
    pub fn push_outcome(&self, outcome: PaymentOutcome) {
        self.state().outcomes.push_back(outcome);
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<PaymentRequest> {
        self.state().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().requests.len()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn initiate(&self, request: PaymentRequest) -> PaymentOutcome {
        let mut state = self.state();
        state.requests.push(request);
        if state.unconfigured {
            return PaymentOutcome::initiation_failed("Payment system is not configured");
        }
        let call = state.requests.len();
        state
            .outcomes
            .pop_front()
            .unwrap_or_else(|| PaymentOutcome::success(format!("pay_mock_{}", call)))
    }

    fn is_configured(&self) -> bool {
        !self.state().unconfigured
    }
}
