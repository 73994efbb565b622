use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn default_fps_ticks_every_50ms() {
    let fps = Fps::default();
    assert_eq!(fps, Fps::new(20, 1).unwrap());
    assert!((fps.frame_duration_secs() - 0.05).abs() < 1e-12);
    assert!((fps.frames_to_secs(40) - 2.0).abs() < 1e-12);
}

#[test]
fn canvas_validation_bounds() {
    assert!(
        Canvas {
            width: 360,
            height: 640
        }
        .validate()
        .is_ok()
    );
    assert!(
        Canvas {
            width: 0,
            height: 10
        }
        .validate()
        .is_err()
    );
    assert!(
        Canvas {
            width: 70_000,
            height: 10
        }
        .validate()
        .is_err()
    );
}

#[test]
fn opaque_color_has_full_alpha() {
    assert_eq!(
        Rgba8Premul::opaque(1, 2, 3).to_array(),
        [1, 2, 3, 255]
    );
}
