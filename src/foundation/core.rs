use crate::foundation::error::{SynthError, SynthResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Absolute 0-based frame index within a synthesized clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> SynthResult<Self> {
        if den == 0 {
            return Err(SynthError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(SynthError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to a frame count, rounding to the nearest whole frame.
    pub fn secs_to_frames(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Largest edge the rasterizer accepts.
    pub const MAX_EDGE: u32 = u16::MAX as u32;

    /// Largest pixel count a single surface may hold (8192x8192).
    pub const MAX_PIXELS: u64 = 1 << 26;

    /// Number of pixels on the canvas.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Canvas size as floating-point `(w, h)`.
    pub fn size_f64(self) -> (f64, f64) {
        (f64::from(self.width), f64::from(self.height))
    }

    /// Canvas centre point.
    pub fn center(self) -> Point {
        let (w, h) = self.size_f64();
        Point::new(w * 0.5, h * 0.5)
    }

    /// The shorter edge, used to scale figures and shapes.
    pub fn min_edge(self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Validate that a surface of this size can be acquired.
    pub fn validate(self) -> SynthResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SynthError::surface("canvas width/height must be non-zero"));
        }
        if self.width > Self::MAX_EDGE || self.height > Self::MAX_EDGE {
            return Err(SynthError::surface(format!(
                "canvas {}x{} exceeds the {} pixel edge limit",
                self.width,
                self.height,
                Self::MAX_EDGE
            )));
        }
        if self.pixel_count() > Self::MAX_PIXELS {
            return Err(SynthError::surface(format!(
                "canvas {}x{} exceeds the {} pixel surface budget",
                self.width,
                self.height,
                Self::MAX_PIXELS
            )));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
