//! Client-side utilities for submitting Token Mill transactions.
//!
//! Includes the transaction submitter, action descriptors, PDA derivations, the endpoint
//! capability and pretty-printing of submission errors.

pub mod actions;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod logs;
pub mod pda;
pub mod pretty;
pub mod signing;
pub mod submitter;

pub use logs::LogColor;
