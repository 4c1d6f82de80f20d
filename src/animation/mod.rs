//! Time remapping and per-frame motion parameters.

/// Quadratic easing and back-and-forth cycles.
pub mod ease;
/// Motion parameters derived from normalized clip progress.
pub mod motion;
