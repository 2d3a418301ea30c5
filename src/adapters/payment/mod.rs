//! Payment gateway adapters.
//!
//! - **CheckoutGateway** - hosted checkout served by a front end over a channel
//! - **MockPaymentGateway** - scripted outcomes for tests and demos

mod checkout_gateway;
mod mock_payment_gateway;

pub use checkout_gateway::{
    CheckoutConfig, CheckoutEvent, CheckoutGateway, CheckoutRequest, CheckoutRequests,
};
pub use mock_payment_gateway::MockPaymentGateway;
