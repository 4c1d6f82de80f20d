//! mediasynth turns short natural-language prompts into procedural images and video clips.
//!
//! The pipeline is deterministic in structure and entirely local:
//!
//! - [`analyze_prompt`] reads keywords into [`PromptAttributes`]
//! - the renderer composes a scene (sky and ground, then a posed figure or lit abstract shapes)
//!   and rasterizes it on the CPU with `vello_cpu`
//! - post-processing adds depth of field, color grading and film grain
//! - a [`Synthesizer`] encodes stills as PNG and streams clips into a [`FrameSink`], such as the
//!   `ffmpeg`-backed [`FfmpegSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub(crate) mod foundation;

/// Prompt analysis.
pub mod analyze;
/// Easing and per-frame motion.
pub mod animation;
/// Post-processing filters.
pub mod effects;
/// PNG and video encoding.
pub mod encode;
/// Scene composition and rasterization.
pub mod render;
/// Orchestration, configuration and session history.
pub mod session;
/// Color and lighting.
pub mod shading;

pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, Point, Rect, Vec2};
pub use crate::foundation::error::{SynthError, SynthResult};

pub use crate::analyze::analyzer::analyze_prompt;
pub use crate::analyze::attributes::PromptAttributes;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, VideoCodec, VideoOutput};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::render::surface::RenderSurface;
pub use crate::session::config::SynthConfig;
pub use crate::session::frames::{VideoFrame, VideoFrames};
pub use crate::session::history::{GeneratedMedia, MediaHistory, MediaKind};
pub use crate::session::synthesizer::{SynthesizedImage, Synthesizer, VideoStats};
pub use crate::shading::color::Rgb;
