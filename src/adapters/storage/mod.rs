//! Storage Adapters
//!
//! Implementations of the RegistrationStore port.
//!
//! ## Available Adapters
//!
//! - **FileRegistrationStore** - One JSON file per namespace on disk
//! - **InMemoryRegistrationStore** - Records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileRegistrationStore, InMemoryRegistrationStore};
//!
//! // Production: file-based storage
//! let store = FileRegistrationStore::new("./data", "bcoe_sports_registrations");
//!
//! // Testing: in-memory storage
//! let store = InMemoryRegistrationStore::new();
//! ```

mod file_registration_store;
mod in_memory_registration_store;

pub use file_registration_store::FileRegistrationStore;
pub use in_memory_registration_store::InMemoryRegistrationStore;
