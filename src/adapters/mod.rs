//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - YAML catalog loading
//! - `payment` - hosted checkout and mock gateways
//! - `receipt` - Markdown receipt documents
//! - `relay` - spreadsheet web-app relay
//! - `storage` - file and in-memory registration stores

pub mod catalog;
pub mod payment;
pub mod receipt;
pub mod relay;
pub mod storage;

pub use catalog::YamlCatalogLoader;
pub use payment::{CheckoutConfig, CheckoutGateway, MockPaymentGateway};
pub use receipt::{MarkdownReceiptRenderer, ReceiptLayout};
pub use relay::{SheetsRelay, SheetsRelayConfig};
pub use storage::{FileRegistrationStore, InMemoryRegistrationStore};
