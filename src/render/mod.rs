//! Scene composition and CPU rasterization.
//!
//! A frame is built in two steps: [`scene::compose_scene`] turns prompt attributes and motion into
//! a plain-data [`scene::Scene`], and [`scene::draw_scene`] rasterizes it with `vello_cpu` into a
//! [`surface::RenderSurface`].

/// Sky, ground, sun and moon.
pub mod background;
/// Posed human figure.
pub mod figure;
pub(crate) mod painter;
/// Named limb poses.
pub mod pose;
/// Frame composition and drawing.
pub mod scene;
/// Abstract shape sets and ornaments.
pub mod shapes;
/// Owned RGBA8 pixel buffer.
pub mod surface;
