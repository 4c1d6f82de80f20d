//! Color math and the material/lighting model used to shade every drawn primitive.

/// RGB color value and lighten/darken helpers.
pub mod color;
/// Radial light falloff per material and lighting condition.
pub mod light;
