use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{SynthError, SynthResult};
use crate::render::surface::RenderSurface;

/// Configuration handed to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frame rate.
    pub fps: Fps,
}

/// Consumer of rendered video frames.
///
/// `push_frame` is called in strictly increasing `FrameIndex` order between one `begin` and one
/// `end`.
pub trait FrameSink {
    /// Called once before any frame.
    fn begin(&mut self, cfg: SinkConfig) -> SynthResult<()>;
    /// Accept the next frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &RenderSurface) -> SynthResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> SynthResult<()>;
}

/// Sink that keeps every frame in memory. Meant for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, RenderSurface)>,
    finished: bool,
}

impl InMemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured by `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in push order.
    pub fn frames(&self) -> &[(FrameIndex, RenderSurface)] {
        &self.frames
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> SynthResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.finished = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RenderSurface) -> SynthResult<()> {
        if self.cfg.is_none() {
            return Err(SynthError::encode("in-memory sink not started"));
        }
        if let Some((last, _)) = self.frames.last()
            && idx.0 <= last.0
        {
            return Err(SynthError::encode("in-memory sink received out-of-order frame index"));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> SynthResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
