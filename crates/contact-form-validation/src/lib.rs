//! Contact-Form-Validation
//!
//! Pure validation predicates shared by the live (per-edit) and submit-time
//! validation paths of the contact form. No framework coupling: every
//! function maps a borrowed string to a bool.

pub mod email;
pub mod string;

// Re-export all validators
pub use email::*;
pub use string::*;
