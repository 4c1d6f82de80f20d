//! Prompt analysis: free text in, a fully populated [`attributes::PromptAttributes`] out.
//!
//! Each attribute category owns an ordered keyword table. The first entry with a matching keyword
//! wins, so table order is part of the observable behavior.

/// The analyzer entry point and matching rules.
pub mod analyzer;
/// Attribute value types.
pub mod attributes;
pub(crate) mod tables;
