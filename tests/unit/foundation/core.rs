use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_seconds_to_frames_rounds() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames(3.0), 90);
    assert_eq!(fps.secs_to_frames(0.0), 0);

    let ntsc = Fps::new(30000, 1001).unwrap();
    let secs = ntsc.frames_to_secs(123);
    assert_eq!(ntsc.secs_to_frames(secs), 123);
}

#[test]
fn canvas_validation_is_a_surface_error() {
    let err = Canvas {
        width: 0,
        height: 10,
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, SynthError::Surface(_)));

    let err = Canvas {
        width: 70_000,
        height: 10,
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, SynthError::Surface(_)));

    assert!(Canvas::default().validate().is_ok());
}

#[test]
fn canvas_center_and_min_edge() {
    let c = Canvas {
        width: 200,
        height: 100,
    };
    assert_eq!(c.center(), Point::new(100.0, 50.0));
    assert_eq!(c.min_edge(), 100.0);
}

#[test]
fn canvas_pixel_budget_is_enforced() {
    let square = Canvas {
        width: 8192,
        height: 8192,
    };
    assert_eq!(square.pixel_count(), Canvas::MAX_PIXELS);
    assert!(square.validate().is_ok());

    let err = Canvas {
        width: Canvas::MAX_EDGE,
        height: Canvas::MAX_EDGE,
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, SynthError::Surface(_)));
}
