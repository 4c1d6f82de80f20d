use super::*;
use crate::foundation::core::Canvas;

fn frame() -> RenderSurface {
    RenderSurface::new(Canvas {
        width: 2,
        height: 2,
    })
    .unwrap()
}

fn cfg() -> SinkConfig {
    SinkConfig {
        width: 2,
        height: 2,
        fps: Fps::default(),
    }
}

#[test]
fn collects_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    for i in 0..3 {
        sink.push_frame(FrameIndex(i), &frame()).unwrap();
    }
    sink.end().unwrap();
    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg()));
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2]);
}

#[test]
fn rejects_out_of_order_frames() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(1), &frame()).unwrap();
    let err = sink.push_frame(FrameIndex(1), &frame()).unwrap_err();
    assert!(matches!(err, SynthError::Encode(_)));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &frame()).is_err());
}

#[test]
fn begin_resets_previous_run() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg()).unwrap();
    sink.push_frame(FrameIndex(0), &frame()).unwrap();
    sink.end().unwrap();
    sink.begin(cfg()).unwrap();
    assert!(sink.frames().is_empty());
    assert!(!sink.is_finished());
}
