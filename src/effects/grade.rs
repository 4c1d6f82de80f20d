use crate::analyze::attributes::{TimeOfDay, Weather};
use crate::foundation::math::clamp_u8;
use crate::render::surface::RenderSurface;

/// A full-frame color transform.
///
/// Applied per pixel as: saturate around luma, stretch around mid-grey, then add brightness and
/// the per-channel shift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorGrade {
    /// 1.0 keeps saturation; 0.0 is greyscale.
    pub saturation: f64,
    /// 1.0 keeps contrast.
    pub contrast: f64,
    /// Added to every channel.
    pub brightness: f64,
    /// Added to R, G, B respectively.
    pub shift: [f64; 3],
}

impl ColorGrade {
    /// The grade that changes nothing.
    pub const IDENTITY: Self = Self {
        saturation: 1.0,
        contrast: 1.0,
        brightness: 0.0,
        shift: [0.0; 3],
    };

    /// Whether applying this grade is a no-op.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    fn tweak(mut self, saturation: f64, contrast: f64, brightness: f64, shift: [f64; 3]) -> Self {
        self.saturation *= saturation;
        self.contrast *= contrast;
        self.brightness += brightness;
        for (s, d) in self.shift.iter_mut().zip(shift) {
            *s += d;
        }
        self
    }
}

impl Default for ColorGrade {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Compute the grade for a time of day and weather. Both `None` yields the identity.
pub fn grade_for(time_of_day: Option<TimeOfDay>, weather: Option<Weather>) -> ColorGrade {
    let mut g = ColorGrade::IDENTITY;
    g = match time_of_day {
        Some(TimeOfDay::Morning) => g.tweak(1.05, 1.0, 4.0, [8.0, 4.0, -4.0]),
        Some(TimeOfDay::Afternoon) => g.tweak(1.1, 1.05, 0.0, [0.0, 0.0, 0.0]),
        Some(TimeOfDay::Evening) => g.tweak(1.1, 1.05, -4.0, [15.0, 5.0, -12.0]),
        Some(TimeOfDay::Night) => g.tweak(0.8, 1.15, -20.0, [-10.0, -5.0, 15.0]),
        None => g,
    };
    match weather {
        Some(Weather::Sunny) => g.tweak(1.1, 1.0, 5.0, [3.0, 2.0, 0.0]),
        Some(Weather::Cloudy) => g.tweak(0.85, 0.95, -3.0, [0.0, 0.0, 2.0]),
        Some(Weather::Rainy) => g.tweak(0.7, 0.95, -10.0, [-2.0, 0.0, 5.0]),
        Some(Weather::Stormy) => g.tweak(0.6, 1.1, -20.0, [-4.0, -2.0, 6.0]),
        Some(Weather::Snowy) => g.tweak(0.8, 0.95, 10.0, [0.0, 2.0, 8.0]),
        Some(Weather::Foggy) => g.tweak(0.7, 0.8, 12.0, [0.0, 0.0, 0.0]),
        None => g,
    }
}

/// Apply `grade` to every pixel of `surface`. Alpha is untouched.
pub fn apply_grade(surface: &mut RenderSurface, grade: &ColorGrade) {
    if grade.is_identity() {
        return;
    }
    for px in surface.data_mut().chunks_exact_mut(4) {
        let r = f64::from(px[0]);
        let g = f64::from(px[1]);
        let b = f64::from(px[2]);
        let luma = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        for (c, v) in [r, g, b].into_iter().enumerate() {
            let saturated = luma + (v - luma) * grade.saturation;
            let contrasted = (saturated - 128.0) * grade.contrast + 128.0;
            px[c] = clamp_u8(contrasted + grade.brightness + grade.shift[c]);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/grade.rs"]
mod tests;
