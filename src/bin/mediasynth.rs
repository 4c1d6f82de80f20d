use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mediasynth", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the attributes read from a prompt as JSON.
    Analyze(AnalyzeArgs),
    /// Render a still image as PNG.
    Image(ImageArgs),
    /// Render a video clip (requires `ffmpeg` on PATH).
    Video(VideoArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Prompt text.
    #[arg(long)]
    prompt: String,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// JSON settings file; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fixed grain seed, for byte-reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the SHA-256 of the encoded output.
    #[arg(long)]
    digest: bool,
}

#[derive(Args, Debug)]
struct ImageArgs {
    /// Prompt text.
    #[arg(long)]
    prompt: String,

    /// Output PNG path.
    #[arg(long, required_unless_present = "data_uri")]
    out: Option<PathBuf>,

    /// Print the image as a `data:image/png;base64,...` URI on stdout.
    #[arg(long)]
    data_uri: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args, Debug)]
struct VideoArgs {
    /// Prompt text.
    #[arg(long)]
    prompt: String,

    /// Output video path.
    #[arg(long)]
    out: PathBuf,

    /// Container and codec.
    #[arg(long, value_enum, default_value_t = CodecChoice::Webm)]
    codec: CodecChoice,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CodecChoice {
    /// VP9 in WebM.
    Webm,
    /// H.264 in MP4.
    Mp4,
}

impl From<CodecChoice> for mediasynth::VideoCodec {
    fn from(c: CodecChoice) -> Self {
        match c {
            CodecChoice::Webm => Self::Vp9Webm,
            CodecChoice::Mp4 => Self::H264Mp4,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Analyze(args) => cmd_analyze(args),
        Command::Image(args) => cmd_image(args),
        Command::Video(args) => cmd_video(args),
    }
}

fn cmd_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let attrs = mediasynth::analyze_prompt(&args.prompt);
    let json = if args.pretty {
        serde_json::to_string_pretty(&attrs)
    } else {
        serde_json::to_string(&attrs)
    }
    .context("serialize attributes")?;
    println!("{json}");
    Ok(())
}

fn load_config(common: &CommonArgs) -> anyhow::Result<mediasynth::SynthConfig> {
    let mut config = match &common.config {
        Some(path) => mediasynth::SynthConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => mediasynth::SynthConfig::default(),
    };
    if let Some(seed) = common.seed {
        config.noise.seed = Some(seed);
    }
    Ok(config)
}

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    let mut synth = mediasynth::Synthesizer::new(load_config(&args.common)?)?;
    let image = synth.synthesize_image(&args.prompt)?;

    if let Some(out) = &args.out {
        mediasynth::encode::ffmpeg::ensure_parent_dir(out)?;
        std::fs::write(out, &image.png)
            .with_context(|| format!("write png '{}'", out.display()))?;
        eprintln!("wrote {}", out.display());
    }
    if args.data_uri {
        println!("{}", image.data_uri());
    }
    if args.common.digest {
        println!("sha256 {}", sha256_hex(&image.png));
    }
    Ok(())
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    let mut synth = mediasynth::Synthesizer::new(load_config(&args.common)?)?;
    let mut sink = mediasynth::FfmpegSink::new(mediasynth::FfmpegSinkOpts::file(
        args.out.clone(),
        args.codec.into(),
    ));
    let stats = synth.synthesize_video(&args.prompt, &mut sink)?;
    eprintln!(
        "wrote {} ({} frames, {}x{}, {:.2}s)",
        args.out.display(),
        stats.frames,
        stats.width,
        stats.height,
        stats.duration_secs
    );
    if args.common.digest {
        let bytes = std::fs::read(&args.out)
            .with_context(|| format!("read back '{}'", args.out.display()))?;
        println!("sha256 {}", sha256_hex(&bytes));
    }
    Ok(())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{b:02x}"));
    }
    out
}
