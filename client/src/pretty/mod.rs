//! Helpers for printing submission failures in a readable, colorized format.

pub mod submit_error;

pub use submit_error::PrettySubmitError;
