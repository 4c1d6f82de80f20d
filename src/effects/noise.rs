use crate::foundation::error::{SynthError, SynthResult};
use crate::foundation::math::{Rng64, clamp_u8};
use crate::render::surface::RenderSurface;

/// Default grain strength as a fraction of the full channel range.
pub const DEFAULT_NOISE_INTENSITY: f64 = 0.012;

/// Grain parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// Fraction of 255 used as the perturbation amplitude, in `[0, 1]`.
    pub intensity: f64,
    /// Seed for the per-pixel generator.
    pub seed: u64,
    /// Phase of the low-frequency component; animate it to make grain crawl.
    pub phase: f64,
}

impl NoiseParams {
    /// Default-intensity grain with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            intensity: DEFAULT_NOISE_INTENSITY,
            seed,
            phase: 0.0,
        }
    }
}

/// Add zero-mean random grain plus a slow sinusoidal ripple to every color channel.
///
/// Alpha is untouched. Results are clamped to `[0, 255]`.
pub fn apply_noise(surface: &mut RenderSurface, params: NoiseParams) -> SynthResult<()> {
    if !params.intensity.is_finite() || !(0.0..=1.0).contains(&params.intensity) {
        return Err(SynthError::validation(
            "noise intensity must be within [0, 1]",
        ));
    }
    if params.intensity == 0.0 {
        return Ok(());
    }

    let amp = params.intensity * 255.0;
    let ripple_amp = amp * 0.5;
    let width = surface.width() as usize;
    let mut rng = Rng64::new(params.seed);

    for (i, px) in surface.data_mut().chunks_exact_mut(4).enumerate() {
        let x = (i % width) as f64;
        let y = (i / width) as f64;
        for (c, v) in px.iter_mut().take(3).enumerate() {
            let grain = (rng.next_f64_01() - 0.5) * 2.0 * amp;
            let ripple = ripple_amp * (x * 0.021 + y * 0.017 + params.phase + c as f64 * 2.1).sin();
            *v = clamp_u8(f64::from(*v) + grain + ripple);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/noise.rs"]
mod tests;
