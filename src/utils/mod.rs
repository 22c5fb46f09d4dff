//! Shared helpers.

pub mod numeric;
pub mod validation;
