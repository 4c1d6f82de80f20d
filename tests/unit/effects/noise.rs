use super::*;
use crate::foundation::core::Canvas;

fn surface(rgba: [u8; 4]) -> RenderSurface {
    sized(32, rgba)
}

fn sized(edge: u32, rgba: [u8; 4]) -> RenderSurface {
    RenderSurface::filled(
        Canvas {
            width: edge,
            height: edge,
        },
        rgba,
    )
    .unwrap()
}

#[test]
fn black_frame_stays_in_range_and_changes() {
    let mut s = surface([0, 0, 0, 255]);
    apply_noise(
        &mut s,
        NoiseParams {
            intensity: 1.0,
            seed: 3,
            phase: 0.0,
        },
    )
    .unwrap();
    // u8 cannot leave [0, 255]; the interesting part is that clamping happened instead of wrap.
    assert!(s.data().chunks_exact(4).any(|px| px[0] > 0));
    assert!(s.data().chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn white_frame_does_not_wrap_to_dark() {
    let mut s = surface([255, 255, 255, 255]);
    apply_noise(&mut s, NoiseParams::new(9)).unwrap();
    let min = s.data().iter().copied().min().unwrap();
    assert!(min > 200);
}

#[test]
fn grain_is_roughly_zero_mean() {
    let mut s = sized(256, [128, 128, 128, 255]);
    apply_noise(
        &mut s,
        NoiseParams {
            intensity: 0.05,
            seed: 11,
            phase: 0.0,
        },
    )
    .unwrap();
    let (sum, n) = s
        .data()
        .chunks_exact(4)
        .flat_map(|px| px[..3].to_vec())
        .fold((0.0, 0.0), |(s, n), v| (s + f64::from(v), n + 1.0));
    assert!((sum / n - 128.0).abs() < 2.0);
}

#[test]
fn same_seed_same_output_and_zero_intensity_is_identity() {
    let mut a = surface([90, 60, 30, 255]);
    let mut b = surface([90, 60, 30, 255]);
    apply_noise(&mut a, NoiseParams::new(5)).unwrap();
    apply_noise(&mut b, NoiseParams::new(5)).unwrap();
    assert_eq!(a, b);

    let mut c = surface([90, 60, 30, 255]);
    apply_noise(
        &mut c,
        NoiseParams {
            intensity: 0.0,
            ..NoiseParams::new(5)
        },
    )
    .unwrap();
    assert_eq!(c, surface([90, 60, 30, 255]));
}

#[test]
fn rejects_out_of_range_intensity() {
    let mut s = surface([0, 0, 0, 255]);
    let err = apply_noise(
        &mut s,
        NoiseParams {
            intensity: 1.5,
            ..NoiseParams::new(1)
        },
    )
    .unwrap_err();
    assert!(matches!(err, SynthError::Validation(_)));
}
