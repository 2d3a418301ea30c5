//! Registration records and their assembly from a finished wizard session.

mod assembler;
mod receipt;
mod record;
mod stats;

pub use assembler::{assemble, assemble_with, preview};
pub use receipt::Receipt;
pub use record::{RegistrationDraft, RegistrationRecord, NOT_APPLICABLE};
pub use stats::RegistrationStats;

#[cfg(test)]
pub(crate) use record::test_support;
