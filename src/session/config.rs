use crate::effects::noise::DEFAULT_NOISE_INTENSITY;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SynthError, SynthResult};
use std::path::Path;

/// Upper bound on clip length.
pub const MAX_DURATION_SECS: f64 = 600.0;

/// Film grain settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseConfig {
    /// Grain amplitude as a fraction of 255, in `[0, 1]`. Zero disables grain.
    pub intensity: f64,
    /// Fixed grain seed. When absent every call draws fresh grain.
    pub seed: Option<u64>,
    /// Apply grain to every Nth video frame (1 means every frame, 0 never).
    pub video_interval: u32,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_NOISE_INTENSITY,
            seed: None,
            video_interval: 3,
        }
    }
}

/// Depth-of-field lens settings, relative to the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DepthOfFieldConfig {
    /// Sharp radius as a fraction of the shorter canvas edge.
    pub focal_radius_frac: f64,
    /// Pixels of distance per extra pixel of blur radius.
    pub falloff: f64,
    /// Largest blur radius in pixels.
    pub max_radius: u32,
}

impl Default for DepthOfFieldConfig {
    fn default() -> Self {
        Self {
            focal_radius_frac: 0.22,
            falloff: 12.0,
            max_radius: 6,
        }
    }
}

/// Synthesis settings. Every field has a default, so `{}` is a valid config file.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
    /// Output size.
    pub canvas: Canvas,
    /// Video frame rate.
    pub fps: Fps,
    /// Video length in seconds.
    pub duration_secs: f64,
    /// Action cycles per clip for human motion.
    pub cycles: f64,
    /// Film grain.
    pub noise: NoiseConfig,
    /// Lens blur for prompts that ask for it.
    pub depth_of_field: DepthOfFieldConfig,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            fps: Fps::default(),
            duration_secs: 3.0,
            cycles: 3.0,
            noise: NoiseConfig::default(),
            depth_of_field: DepthOfFieldConfig::default(),
        }
    }
}

impl SynthConfig {
    /// Read a JSON config file.
    pub fn from_path(path: &Path) -> SynthResult<Self> {
        use anyhow::Context as _;
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Parse a JSON config.
    pub fn from_json(text: &str) -> SynthResult<Self> {
        serde_json::from_str(text).map_err(|e| SynthError::serde(format!("config: {e}")))
    }

    /// Check ranges. Everything the pipeline relies on is checked here once.
    pub fn validate(&self) -> SynthResult<()> {
        let c = self.canvas;
        if c.width == 0
            || c.height == 0
            || c.width > Canvas::MAX_EDGE
            || c.height > Canvas::MAX_EDGE
        {
            return Err(SynthError::validation(format!(
                "canvas must be between 1x1 and {max}x{max}, got {}x{}",
                c.width,
                c.height,
                max = Canvas::MAX_EDGE
            )));
        }
        // In-range edges can still need more memory than one surface may take.
        c.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if !self.duration_secs.is_finite()
            || self.duration_secs <= 0.0
            || self.duration_secs > MAX_DURATION_SECS
        {
            return Err(SynthError::validation(format!(
                "duration_secs must be in (0, {MAX_DURATION_SECS}], got {}",
                self.duration_secs
            )));
        }
        if !self.cycles.is_finite() || self.cycles < 0.0 {
            return Err(SynthError::validation(format!(
                "cycles must be >= 0, got {}",
                self.cycles
            )));
        }
        if !self.noise.intensity.is_finite() || !(0.0..=1.0).contains(&self.noise.intensity) {
            return Err(SynthError::validation(format!(
                "noise.intensity must be in [0, 1], got {}",
                self.noise.intensity
            )));
        }
        let dof = &self.depth_of_field;
        if !dof.focal_radius_frac.is_finite() || dof.focal_radius_frac < 0.0 {
            return Err(SynthError::validation(format!(
                "depth_of_field.focal_radius_frac must be >= 0, got {}",
                dof.focal_radius_frac
            )));
        }
        if !dof.falloff.is_finite() || dof.falloff <= 0.0 {
            return Err(SynthError::validation(format!(
                "depth_of_field.falloff must be > 0, got {}",
                dof.falloff
            )));
        }
        Ok(())
    }

    /// Number of frames in a clip.
    pub fn frame_count(&self) -> u64 {
        self.fps.secs_to_frames(self.duration_secs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
