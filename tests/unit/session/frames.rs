use super::*;
use crate::analyze::analyzer::analyze_prompt;
use crate::foundation::core::{Canvas, Fps};

fn clip(fps: u32, secs: f64) -> VideoFrames {
    let config = SynthConfig {
        canvas: Canvas {
            width: 16,
            height: 16,
        },
        fps: Fps { num: fps, den: 1 },
        duration_secs: secs,
        ..SynthConfig::default()
    };
    VideoFrames::new(analyze_prompt("a blue star spinning"), config, 1, 2)
}

#[test]
fn yields_fps_times_duration_frames() {
    let frames = clip(10, 1.0);
    assert_eq!(frames.len_frames(), 10);
    assert_eq!(frames.len(), 10);
    assert_eq!(frames.count(), 10);
}

#[test]
fn times_strictly_increase() {
    let frames: Vec<VideoFrame> = clip(8, 0.5).map(Result::unwrap).collect();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[0].time_secs, 0.0);
    assert!(frames.windows(2).all(|w| w[1].time_secs > w[0].time_secs));
    assert!(frames.windows(2).all(|w| w[1].index.0 == w[0].index.0 + 1));
}

#[test]
fn restart_replays_the_same_frames() {
    let mut frames = clip(4, 1.0);
    let first = frames.next().unwrap().unwrap();
    let _ = frames.next();
    assert_eq!(frames.len(), 2);
    frames.restart();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames.next().unwrap().unwrap(), first);
}

#[test]
fn frames_animate() {
    let frames = clip(4, 1.0);
    let a = frames.render(0).unwrap();
    let b = frames.render(2).unwrap();
    assert_ne!(a.surface, b.surface);
}
