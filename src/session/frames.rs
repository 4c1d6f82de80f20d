use crate::analyze::attributes::PromptAttributes;
use crate::animation::motion::Motion;
use crate::effects::noise::NoiseParams;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::SynthResult;
use crate::render::surface::RenderSurface;
use crate::session::config::SynthConfig;
use crate::session::pipeline::{frame_seed, render_frame};
use std::f64::consts::TAU;

/// One rendered video frame.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoFrame {
    /// Position in the clip.
    pub index: FrameIndex,
    /// Presentation time in seconds.
    pub time_secs: f64,
    /// Pixels.
    pub surface: RenderSurface,
}

/// Lazy iterator over the frames of a clip, in strictly increasing time order.
///
/// Frames are rendered on demand; [`VideoFrames::restart`] rewinds to the first frame and replays
/// the same pixels.
#[derive(Clone, Debug)]
pub struct VideoFrames {
    attrs: PromptAttributes,
    config: SynthConfig,
    layout_seed: u64,
    grain_seed: u64,
    next: u64,
    total: u64,
}

impl VideoFrames {
    pub(crate) fn new(
        attrs: PromptAttributes,
        config: SynthConfig,
        layout_seed: u64,
        grain_seed: u64,
    ) -> Self {
        let total = config.frame_count();
        Self {
            attrs,
            config,
            layout_seed,
            grain_seed,
            next: 0,
            total,
        }
    }

    /// Total frames in the clip, regardless of how many were consumed.
    pub fn len_frames(&self) -> u64 {
        self.total
    }

    /// Attributes the clip was built from.
    pub fn attributes(&self) -> &PromptAttributes {
        &self.attrs
    }

    /// Rewind to the first frame.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    /// Render frame `index` without moving the cursor.
    pub fn render(&self, index: u64) -> SynthResult<VideoFrame> {
        let progress = if self.total == 0 {
            0.0
        } else {
            index as f64 / self.total as f64
        };
        let motion = Motion::at(progress, self.config.cycles);
        let noise = &self.config.noise;
        let grain = (noise.video_interval > 0 && index % u64::from(noise.video_interval) == 0)
            .then(|| NoiseParams {
                intensity: noise.intensity,
                seed: frame_seed(self.grain_seed, index),
                phase: progress * TAU,
            });
        let (_, surface) =
            render_frame(&self.attrs, &self.config, self.layout_seed, &motion, grain)?;
        Ok(VideoFrame {
            index: FrameIndex(index),
            time_secs: self.config.fps.frames_to_secs(index),
            surface,
        })
    }
}

impl Iterator for VideoFrames {
    type Item = SynthResult<VideoFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let index = self.next;
        self.next += 1;
        Some(self.render(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.total.saturating_sub(self.next)).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for VideoFrames {}

#[cfg(test)]
#[path = "../../tests/unit/session/frames.rs"]
mod tests;
