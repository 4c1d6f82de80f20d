use super::*;

#[test]
fn in_out_quad_clamps_and_keeps_endpoints() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert_eq!(ease_in_out_quad(-3.0), 0.0);
    assert_eq!(ease_in_out_quad(7.0), 1.0);
}

#[test]
fn in_out_quad_is_symmetric_and_slow_at_ends() {
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-12);
    assert!((ease_in_out_quad(0.25) + ease_in_out_quad(0.75) - 1.0).abs() < 1e-12);
    assert!(ease_in_out_quad(0.1) < 0.1);
    assert!(ease_in_out_quad(0.9) > 0.9);
}

#[test]
fn ping_pong_peaks_mid_cycle() {
    assert_eq!(ping_pong(0.0), 0.0);
    assert_eq!(ping_pong(0.5), 1.0);
    assert!((ping_pong(0.25) - 0.5).abs() < 1e-12);
    assert!((ping_pong(1.25) - 0.5).abs() < 1e-12);
    assert!((ping_pong(-0.25) - 0.5).abs() < 1e-12);
}

#[test]
fn eased_swing_rests_at_cycle_ends() {
    assert_eq!(eased_swing(0.0), 0.0);
    assert_eq!(eased_swing(0.5), 1.0);
    assert!((eased_swing(0.25) - 0.5).abs() < 1e-12);
    assert!(eased_swing(0.05) < ping_pong(0.05));
}
