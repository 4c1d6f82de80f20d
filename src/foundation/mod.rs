//! Shared primitives: frame/time types, the crate error, and small numeric helpers.

pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
