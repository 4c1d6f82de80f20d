/// Quadratic ease-in/out of progress `t`, clamped to `[0, 1]`.
///
/// Accelerates through the first half and decelerates through the second, so limb swings linger
/// at their extremes.
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = 2.0 - 2.0 * t;
        1.0 - u * u * 0.5
    }
}

/// Triangle wave over one cycle: 0 at `phase` 0 and 1, peaking at 1 when `phase` is 0.5.
pub fn ping_pong(phase: f64) -> f64 {
    let p = phase.rem_euclid(1.0);
    1.0 - (2.0 * p - 1.0).abs()
}

/// Eased position within a back-and-forth cycle.
pub fn eased_swing(phase: f64) -> f64 {
    ease_in_out_quad(ping_pong(phase))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
