//! Output encoding.
//!
//! Video frames flow through a [`sink::FrameSink`] in strictly increasing frame order; stills are
//! encoded straight to PNG.

/// `ffmpeg`-based video sink (WebM/VP9 or MP4/H.264 via the system `ffmpeg`).
pub mod ffmpeg;
/// PNG encoding and data URIs.
pub mod image;
/// Frame sink trait and the in-memory sink.
pub mod sink;
