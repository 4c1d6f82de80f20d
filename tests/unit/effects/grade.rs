use super::*;
use crate::foundation::core::Canvas;

fn surface(rgba: [u8; 4]) -> RenderSurface {
    RenderSurface::filled(
        Canvas {
            width: 4,
            height: 4,
        },
        rgba,
    )
    .unwrap()
}

#[test]
fn no_time_no_weather_is_identity() {
    let g = grade_for(None, None);
    assert!(g.is_identity());
    let mut s = surface([12, 34, 56, 255]);
    apply_grade(&mut s, &g);
    assert_eq!(s, surface([12, 34, 56, 255]));
}

#[test]
fn morning_warms_and_night_cools() {
    let morning = grade_for(Some(TimeOfDay::Morning), None);
    assert!(morning.shift[0] > 0.0 && morning.shift[1] > 0.0);
    let night = grade_for(Some(TimeOfDay::Night), None);
    assert!(night.shift[2] > 0.0 && night.contrast > 1.0);

    let mut s = surface([128, 128, 128, 255]);
    apply_grade(&mut s, &night);
    let px = s.get(0, 0).unwrap();
    assert!(px[2] > px[0]);
}

#[test]
fn rain_desaturates() {
    let g = grade_for(None, Some(Weather::Rainy));
    assert!(g.saturation < 1.0);

    let mut s = surface([200, 40, 40, 255]);
    apply_grade(
        &mut s,
        &ColorGrade {
            saturation: g.saturation,
            ..ColorGrade::IDENTITY
        },
    );
    let px = s.get(1, 1).unwrap();
    assert!(i32::from(px[0]) - i32::from(px[1]) < 160);
}

#[test]
fn time_and_weather_compose() {
    let g = grade_for(Some(TimeOfDay::Evening), Some(Weather::Foggy));
    assert!((g.saturation - 1.1 * 0.7).abs() < 1e-9);
    assert!((g.brightness - 8.0).abs() < 1e-9);
}

#[test]
fn grading_clamps_and_keeps_alpha() {
    let mut s = surface([250, 250, 250, 77]);
    apply_grade(
        &mut s,
        &ColorGrade {
            brightness: 40.0,
            ..ColorGrade::IDENTITY
        },
    );
    assert_eq!(s.get(0, 0), Some([255, 255, 255, 77]));
}
