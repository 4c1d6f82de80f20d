//! Full-frame post-processing passes applied after the scene is drawn.

/// Distance-based lens blur.
pub mod dof;
/// Time-of-day/weather color grading.
pub mod grade;
/// Film grain.
pub mod noise;
