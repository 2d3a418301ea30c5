//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `PaymentGateway` - checkout with a tagged outcome
//! - `RegistrationStore` - authoritative persistence and stats
//! - `RegistrationRelay` - best-effort forwarding to a spreadsheet
//! - `ReceiptRenderer` - receipt documents for paid entries

mod payment_gateway;
mod receipt_renderer;
mod registration_relay;
mod registration_store;

pub use payment_gateway::PaymentGateway;
pub use receipt_renderer::{ReceiptError, ReceiptRenderer};
pub use registration_relay::{RegistrationRelay, RelayOutcome};
pub use registration_store::{RegistrationStore, StoreError};
