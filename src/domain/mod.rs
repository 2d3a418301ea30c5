//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `catalog` - Offerings (sports) and the queryable catalog
//! - `wizard` - The step wizard: state, transitions and per-step validators
//! - `registration` - Registration records, the assembler, receipts and statistics

pub mod catalog;
pub mod foundation;
pub mod registration;
pub mod wizard;
