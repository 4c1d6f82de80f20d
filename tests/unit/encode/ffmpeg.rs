use super::*;
use crate::foundation::core::{Canvas, Fps};

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::default(),
    }
}

#[test]
fn codec_parses_common_names() {
    assert_eq!("webm".parse::<VideoCodec>().unwrap(), VideoCodec::Vp9Webm);
    assert_eq!("VP9".parse::<VideoCodec>().unwrap(), VideoCodec::Vp9Webm);
    assert_eq!("mp4".parse::<VideoCodec>().unwrap(), VideoCodec::H264Mp4);
    assert!(matches!(
        "gif".parse::<VideoCodec>(),
        Err(SynthError::Validation(_))
    ));
    assert_eq!(VideoCodec::default().mime(), "video/webm");
    assert_eq!(VideoCodec::H264Mp4.extension(), "mp4");
}

#[test]
fn piped_mp4_is_fragmented() {
    let args = VideoCodec::H264Mp4.ffmpeg_args(true);
    assert!(args.contains(&"frag_keyframe+empty_moov"));
    assert!(!VideoCodec::H264Mp4.ffmpeg_args(false).contains(&"frag_keyframe+empty_moov"));
}

#[test]
fn begin_rejects_odd_and_empty_sizes() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::memory(VideoCodec::Vp9Webm));
    assert!(matches!(sink.begin(cfg(11, 10)), Err(SynthError::Validation(_))));
    assert!(matches!(sink.begin(cfg(0, 10)), Err(SynthError::Validation(_))));
}

#[test]
fn push_before_begin_is_an_encode_error() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::memory(VideoCodec::Vp9Webm));
    let frame = RenderSurface::new(Canvas {
        width: 2,
        height: 2,
    })
    .unwrap();
    assert!(matches!(
        sink.push_frame(FrameIndex(0), &frame),
        Err(SynthError::Encode(_))
    ));
    assert!(sink.end().is_err());
}

#[test]
fn flatten_drops_alpha_over_black() {
    let src = vec![128u8, 0, 0, 128, 1, 2, 3, 255];
    let mut dst = vec![0u8; 8];
    flatten_premul_to_opaque(&mut dst, &src).unwrap();
    assert_eq!(dst, vec![128, 0, 0, 255, 1, 2, 3, 255]);
    assert!(flatten_premul_to_opaque(&mut dst[..4], &src).is_err());
}

#[test]
fn encodes_to_memory_when_ffmpeg_is_available() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::memory(VideoCodec::Vp9Webm));
    let frame = RenderSurface::filled(
        Canvas {
            width: 16,
            height: 16,
        },
        [200, 40, 40, 255],
    )
    .unwrap();
    sink.begin(cfg(16, 16)).unwrap();
    for i in 0..4 {
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    sink.end().unwrap();
    let bytes = sink.take_output().unwrap();
    // EBML magic.
    assert_eq!(&bytes[..4], &[0x1a, 0x45, 0xdf, 0xa3]);
    assert!(sink.take_output().is_none());
}
