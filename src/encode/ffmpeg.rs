use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{SynthError, SynthResult};
use crate::render::surface::{RenderSurface, alloc_rgba8};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::str::FromStr;
use std::thread::JoinHandle;

/// Output container and codec.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VideoCodec {
    /// VP9 in WebM.
    #[default]
    Vp9Webm,
    /// H.264 in MP4.
    H264Mp4,
}

impl VideoCodec {
    /// MIME type of the produced stream.
    pub fn mime(self) -> &'static str {
        match self {
            Self::Vp9Webm => "video/webm",
            Self::H264Mp4 => "video/mp4",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Vp9Webm => "webm",
            Self::H264Mp4 => "mp4",
        }
    }

    fn ffmpeg_args(self, to_pipe: bool) -> &'static [&'static str] {
        match (self, to_pipe) {
            (Self::Vp9Webm, _) => &[
                "-c:v",
                "libvpx-vp9",
                "-pix_fmt",
                "yuv420p",
                "-b:v",
                "0",
                "-crf",
                "32",
                "-deadline",
                "realtime",
                "-f",
                "webm",
            ],
            (Self::H264Mp4, false) => &[
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
                "-f",
                "mp4",
            ],
            // A pipe cannot seek back to write the index, so emit fragmented MP4.
            (Self::H264Mp4, true) => &[
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "frag_keyframe+empty_moov",
                "-f",
                "mp4",
            ],
        }
    }
}

impl FromStr for VideoCodec {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "webm" | "vp9" => Ok(Self::Vp9Webm),
            "mp4" | "h264" => Ok(Self::H264Mp4),
            other => Err(SynthError::validation(format!(
                "unknown codec '{other}' (expected webm or mp4)"
            ))),
        }
    }
}

/// Where the encoded stream goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoOutput {
    /// Write to a file, creating parent directories.
    File(PathBuf),
    /// Capture from ffmpeg's stdout; read it with [`FfmpegSink::take_output`].
    Memory,
}

/// Options for [`FfmpegSink`].
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Destination.
    pub output: VideoOutput,
    /// Container and codec.
    pub codec: VideoCodec,
    /// Overwrite an existing output file.
    pub overwrite: bool,
}

impl FfmpegSinkOpts {
    /// Encode to a file at `path`.
    pub fn file(path: impl Into<PathBuf>, codec: VideoCodec) -> Self {
        Self {
            output: VideoOutput::File(path.into()),
            codec,
            overwrite: true,
        }
    }

    /// Encode into memory.
    pub fn memory(codec: VideoCodec) -> Self {
        Self {
            output: VideoOutput::Memory,
            codec,
            overwrite: true,
        }
    }
}

type Drain = JoinHandle<std::io::Result<Vec<u8>>>;

/// Sink that spawns the system `ffmpeg` and streams raw RGBA frames to its stdin.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stdout_drain: Option<Drain>,
    stderr_drain: Option<Drain>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    output: Option<Vec<u8>>,
}

impl FfmpegSink {
    /// Create a sink; `ffmpeg` is not started until `begin`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stdout_drain: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
            output: None,
        }
    }

    /// Encoded bytes captured by a [`VideoOutput::Memory`] sink, available once after `end`.
    pub fn take_output(&mut self) -> Option<Vec<u8>> {
        self.output.take()
    }
}

fn spawn_drain(mut pipe: impl Read + Send + 'static) -> Drain {
    std::thread::spawn(move || {
        let mut bytes = Vec::new();
        pipe.read_to_end(&mut bytes)?;
        Ok(bytes)
    })
}

fn join_drain(handle: Option<Drain>, what: &str) -> SynthResult<Vec<u8>> {
    match handle {
        Some(h) => h
            .join()
            .map_err(|_| SynthError::encode(format!("ffmpeg {what} drain thread panicked")))?
            .map_err(|e| SynthError::encode(format!("ffmpeg {what} read failed: {e}"))),
        None => Ok(Vec::new()),
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> SynthResult<()> {
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(SynthError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(SynthError::validation("ffmpeg sink width/height must be non-zero"));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(SynthError::validation(
                "ffmpeg sink width/height must be even (required for yuv420p output)",
            ));
        }

        if let VideoOutput::File(path) = &self.opts.output {
            ensure_parent_dir(path)?;
            if !self.opts.overwrite && path.exists() {
                return Err(SynthError::validation(format!(
                    "output file '{}' already exists",
                    path.display()
                )));
            }
        }

        if !is_ffmpeg_on_path() {
            return Err(SynthError::encode(
                "ffmpeg is required for video encoding, but was not found on PATH",
            ));
        }

        self.scratch = alloc_rgba8(cfg.width, cfg.height)?;

        let to_pipe = self.opts.output == VideoOutput::Memory;
        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(if to_pipe { Stdio::piped() } else { Stdio::null() })
            .stderr(Stdio::piped());
        cmd.arg(if self.opts.overwrite { "-y" } else { "-n" });
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i",
            "pipe:0",
            "-an",
        ]);
        cmd.args(self.opts.codec.ffmpeg_args(to_pipe));
        match &self.opts.output {
            VideoOutput::File(path) => {
                cmd.arg(path);
            }
            VideoOutput::Memory => {
                cmd.arg("pipe:1");
            }
        }

        let mut child = cmd.spawn().map_err(|e| {
            SynthError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| SynthError::encode("failed to open ffmpeg stdin"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| SynthError::encode("failed to open ffmpeg stderr"))?;
        self.stderr_drain = Some(spawn_drain(stderr));
        self.stdout_drain = match child.stdout.take() {
            Some(stdout) => Some(spawn_drain(stdout)),
            None if to_pipe => return Err(SynthError::encode("failed to open ffmpeg stdout")),
            None => None,
        };

        self.child = Some(child);
        self.stdin = Some(stdin);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.output = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RenderSurface) -> SynthResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| SynthError::encode("ffmpeg sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(SynthError::encode("ffmpeg sink received out-of-order frame index"));
        }
        self.last_idx = Some(idx);

        if frame.width() != cfg.width || frame.height() != cfg.height {
            return Err(SynthError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }

        flatten_premul_to_opaque(&mut self.scratch, frame.data())?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(SynthError::encode("ffmpeg sink is already finalized"));
        };

        use std::io::Write as _;
        stdin
            .write_all(&self.scratch)
            .map_err(|e| {
                SynthError::encode(format!("failed to write frame to ffmpeg stdin: {e}"))
            })?;
        Ok(())
    }

    fn end(&mut self) -> SynthResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| SynthError::encode("ffmpeg sink not started"))?;

        let status = child
            .wait()
            .map_err(|e| SynthError::encode(format!("failed to wait for ffmpeg to finish: {e}")))?;
        let stdout_bytes = join_drain(self.stdout_drain.take(), "stdout")?;
        let stderr_bytes = join_drain(self.stderr_drain.take(), "stderr")?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(SynthError::encode(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        if self.opts.output == VideoOutput::Memory {
            self.output = Some(stdout_bytes);
        }
        self.cfg = None;
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        drop(self.stdin.take());
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// Composite premultiplied RGBA8 over black into opaque RGBA8.
fn flatten_premul_to_opaque(dst: &mut [u8], src_premul: &[u8]) -> SynthResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(SynthError::validation(
            "flatten_premul_to_opaque expects equal-length rgba8 buffers",
        ));
    }
    // Over black, premultiplied color channels are already the composited result.
    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        d[..3].copy_from_slice(&s[..3]);
        d[3] = 255;
    }
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> SynthResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
