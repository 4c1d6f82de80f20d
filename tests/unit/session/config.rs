use super::*;

#[test]
fn empty_object_is_the_default_config() {
    let cfg = SynthConfig::from_json("{}").unwrap();
    assert_eq!(cfg, SynthConfig::default());
    cfg.validate().unwrap();
    assert_eq!(cfg.frame_count(), 90);
    assert_eq!(cfg.noise.intensity, DEFAULT_NOISE_INTENSITY);
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = SynthConfig::from_json(r#"{"canvas":{"width":320,"height":240},"noise":{"seed":7}}"#)
        .unwrap();
    assert_eq!(cfg.canvas.width, 320);
    assert_eq!(cfg.noise.seed, Some(7));
    assert_eq!(cfg.noise.video_interval, 3);
    assert_eq!(cfg.fps, Fps::default());
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SynthConfig::from_json(r#"{"colour":"red"}"#).unwrap_err();
    assert!(matches!(err, SynthError::Serde(_)));
}

#[test]
fn validate_rejects_bad_values() {
    let bad = [
        SynthConfig {
            canvas: Canvas {
                width: 0,
                height: 10,
            },
            ..SynthConfig::default()
        },
        SynthConfig {
            canvas: Canvas {
                width: 70_000,
                height: 10,
            },
            ..SynthConfig::default()
        },
        SynthConfig {
            duration_secs: 0.0,
            ..SynthConfig::default()
        },
        SynthConfig {
            duration_secs: f64::NAN,
            ..SynthConfig::default()
        },
        SynthConfig {
            fps: Fps { num: 30, den: 0 },
            ..SynthConfig::default()
        },
        SynthConfig {
            noise: NoiseConfig {
                intensity: 1.5,
                ..NoiseConfig::default()
            },
            ..SynthConfig::default()
        },
        SynthConfig {
            depth_of_field: DepthOfFieldConfig {
                falloff: 0.0,
                ..DepthOfFieldConfig::default()
            },
            ..SynthConfig::default()
        },
    ];
    for cfg in bad {
        assert!(
            matches!(cfg.validate(), Err(SynthError::Validation(_))),
            "{cfg:?}"
        );
    }
}

#[test]
fn from_path_reads_json() {
    let dir = std::env::temp_dir().join(format!("mediasynth-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cfg.json");
    std::fs::write(&path, r#"{"duration_secs": 1.5}"#).unwrap();
    let cfg = SynthConfig::from_path(&path).unwrap();
    assert_eq!(cfg.frame_count(), 45);
    assert!(SynthConfig::from_path(&dir.join("missing.json")).is_err());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn oversized_canvas_is_a_surface_error() {
    let cfg = SynthConfig {
        canvas: Canvas {
            width: 65_535,
            height: 65_535,
        },
        ..SynthConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(SynthError::Surface(_))));
}
