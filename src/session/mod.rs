//! Synthesis orchestration: settings, frame production and session results.

/// Synthesis settings.
pub mod config;
/// Lazy video frame iterator.
pub mod frames;
/// Session media history.
pub mod history;
pub(crate) mod pipeline;
/// The [`synthesizer::Synthesizer`] entry point.
pub mod synthesizer;
