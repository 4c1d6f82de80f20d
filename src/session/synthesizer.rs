use crate::analyze::analyzer::analyze_prompt;
use crate::analyze::attributes::PromptAttributes;
use crate::animation::motion::Motion;
use crate::effects::noise::NoiseParams;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, VideoCodec, VideoOutput};
use crate::encode::image::{PNG_MIME, data_uri, encode_png};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{SynthError, SynthResult};
use crate::foundation::math::hash_str;
use crate::render::scene::Scene;
use crate::session::config::SynthConfig;
use crate::session::frames::VideoFrames;
use crate::session::history::{GeneratedMedia, MediaHistory, MediaKind};
use crate::session::pipeline::{GrainSeeds, render_frame};

/// A rendered still.
#[derive(Clone, Debug)]
pub struct SynthesizedImage {
    /// What the analyzer read from the prompt.
    pub attributes: PromptAttributes,
    /// The composed scene, before rasterization.
    pub scene: Scene,
    /// PNG bytes.
    pub png: Vec<u8>,
}

impl SynthesizedImage {
    /// `data:image/png;base64,...` URI of the PNG.
    pub fn data_uri(&self) -> String {
        data_uri(PNG_MIME, &self.png)
    }
}

/// Summary of a finished clip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VideoStats {
    /// Frames pushed to the sink.
    pub frames: u64,
    /// Frame width.
    pub width: u32,
    /// Frame height.
    pub height: u32,
    /// Frame rate.
    pub fps: Fps,
    /// Clip length in seconds.
    pub duration_secs: f64,
}

/// Entry point: turns prompts into images and clips.
///
/// Calls are synchronous and run to completion; there is no cancellation.
#[derive(Clone, Debug)]
pub struct Synthesizer {
    config: SynthConfig,
    grain: GrainSeeds,
}

impl Synthesizer {
    /// Validate `config` and build a synthesizer.
    pub fn new(config: SynthConfig) -> SynthResult<Self> {
        config.validate()?;
        Ok(Self {
            grain: GrainSeeds::new(config.noise.seed),
            config,
        })
    }

    /// Settings in use.
    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Read attributes from a prompt.
    pub fn analyze(&self, prompt: &str) -> PromptAttributes {
        let attrs = analyze_prompt(prompt);
        tracing::debug!(?attrs, "analyzed prompt");
        attrs
    }

    /// Render one still and encode it as PNG.
    #[tracing::instrument(skip(self))]
    pub fn synthesize_image(&mut self, prompt: &str) -> SynthResult<SynthesizedImage> {
        let attributes = self.analyze(prompt);
        let grain = NoiseParams {
            intensity: self.config.noise.intensity,
            seed: self.grain.next_seed(),
            phase: 0.0,
        };
        let (scene, surface) = render_frame(
            &attributes,
            &self.config,
            hash_str(prompt),
            &Motion::still(),
            Some(grain),
        )?;
        let png = encode_png(&surface)?;
        tracing::debug!(bytes = png.len(), "encoded png");
        Ok(SynthesizedImage {
            attributes,
            scene,
            png,
        })
    }

    /// [`Synthesizer::synthesize_image`], recording the data URI in `history`.
    pub fn synthesize_image_into(
        &mut self,
        prompt: &str,
        history: &mut MediaHistory,
    ) -> SynthResult<SynthesizedImage> {
        let image = self.synthesize_image(prompt)?;
        history.push(GeneratedMedia::now(image.data_uri(), prompt, MediaKind::Image));
        Ok(image)
    }

    /// Lazy frame iterator for a clip of `fps * duration_secs` frames.
    pub fn frames(&mut self, prompt: &str) -> VideoFrames {
        let attrs = self.analyze(prompt);
        VideoFrames::new(
            attrs,
            self.config.clone(),
            hash_str(prompt),
            self.grain.next_seed(),
        )
    }

    /// Render a clip into `sink`: `begin`, every frame in order, `end`.
    #[tracing::instrument(skip(self, sink))]
    pub fn synthesize_video(
        &mut self,
        prompt: &str,
        sink: &mut dyn FrameSink,
    ) -> SynthResult<VideoStats> {
        let frames = self.frames(prompt);
        let total = frames.len_frames();
        tracing::debug!(frames = total, "rendering clip");

        let canvas = self.config.canvas;
        sink.begin(SinkConfig {
            width: canvas.width,
            height: canvas.height,
            fps: self.config.fps,
        })?;
        let mut pushed = 0u64;
        for frame in frames {
            let frame = frame?;
            sink.push_frame(frame.index, &frame.surface)?;
            pushed += 1;
        }
        sink.end()?;

        Ok(VideoStats {
            frames: pushed,
            width: canvas.width,
            height: canvas.height,
            fps: self.config.fps,
            duration_secs: self.config.fps.frames_to_secs(pushed),
        })
    }

    /// Encode a clip with `ffmpeg` and return the stream bytes.
    pub fn synthesize_video_bytes(
        &mut self,
        prompt: &str,
        codec: VideoCodec,
    ) -> SynthResult<Vec<u8>> {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::memory(codec));
        self.synthesize_video(prompt, &mut sink)?;
        sink.take_output()
            .ok_or_else(|| SynthError::encode("ffmpeg produced no output"))
    }

    /// Encode a clip with `ffmpeg` and record it in `history`: file path for file output, data URI
    /// for in-memory output.
    pub fn synthesize_video_into(
        &mut self,
        prompt: &str,
        opts: FfmpegSinkOpts,
        history: &mut MediaHistory,
    ) -> SynthResult<VideoStats> {
        let codec = opts.codec;
        let output = opts.output.clone();
        let mut sink = FfmpegSink::new(opts);
        let stats = self.synthesize_video(prompt, &mut sink)?;
        let url = match output {
            VideoOutput::File(path) => path.display().to_string(),
            VideoOutput::Memory => {
                let bytes = sink
                    .take_output()
                    .ok_or_else(|| SynthError::encode("ffmpeg produced no output"))?;
                data_uri(codec.mime(), &bytes)
            }
        };
        history.push(GeneratedMedia::now(url, prompt, MediaKind::Video));
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/synthesizer.rs"]
mod tests;
