//! Sports Registration - Step-based registration wizard for college sports events.
//!
//! This crate implements the four step registration flow (sport selection,
//! player details, payment, review) together with the collaborators that
//! persist, relay and receipt a finished registration.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
