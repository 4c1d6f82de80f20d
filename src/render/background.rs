use crate::analyze::attributes::{PromptAttributes, Setting, TimeOfDay, Weather};
use crate::foundation::core::{Canvas, Point, Rect};
use crate::foundation::error::SynthResult;
use crate::foundation::math::{Rng64, lerp};
use crate::render::painter::Painter;
use crate::render::surface::alloc_rgba8;
use crate::shading::color::{Rgb, darken, lighten, mix};
use crate::shading::light::radial_shading;

/// Sun or moon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CelestialKind {
    /// Daytime sun.
    Sun,
    /// Night-time moon.
    Moon,
}

/// A disc in the sky, positioned in canvas fractions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Celestial {
    /// Sun or moon.
    pub kind: CelestialKind,
    /// Centre as `(x, y)` fractions of the canvas.
    pub center: (f64, f64),
    /// Radius as a fraction of the shorter canvas edge.
    pub radius: f64,
    /// Disc color.
    pub color: Rgb,
}

/// Sky and ground gradients. A horizon of 1.0 means no ground.
#[derive(Clone, Debug, PartialEq)]
pub struct Background {
    /// Sky color at the top edge.
    pub sky_top: Rgb,
    /// Sky color at the horizon.
    pub sky_bottom: Rgb,
    /// Ground color at the horizon.
    pub ground_top: Rgb,
    /// Ground color at the bottom edge.
    pub ground_bottom: Rgb,
    /// Horizon height as a fraction of the canvas.
    pub horizon: f64,
    /// Optional sun or moon.
    pub celestial: Option<Celestial>,
    /// Number of stars scattered over the sky.
    pub stars: u32,
}

const ABSTRACT_TOP: Rgb = Rgb::new(18, 22, 36);
const ABSTRACT_BOTTOM: Rgb = Rgb::new(48, 54, 78);

/// Pick the backdrop for a prompt.
///
/// Prompts with no subject, setting, time or weather get a plain studio backdrop (tinted by the
/// primary color when a gradient is requested); everything else gets sky over ground.
pub fn background_for(attrs: &PromptAttributes) -> Background {
    let scenic = attrs.subject.is_some()
        || attrs.setting.is_some()
        || attrs.time_of_day.is_some()
        || attrs.weather.is_some();
    if !scenic {
        let (top, bottom) = if attrs.shapes.gradient {
            (
                darken(attrs.primary_color, 55.0),
                mix(ABSTRACT_BOTTOM, attrs.primary_color, 0.45),
            )
        } else {
            (ABSTRACT_TOP, ABSTRACT_BOTTOM)
        };
        return Background {
            sky_top: top,
            sky_bottom: bottom,
            ground_top: bottom,
            ground_bottom: bottom,
            horizon: 1.0,
            celestial: None,
            stars: 0,
        };
    }

    let (mut sky_top, mut sky_bottom) = match attrs.time_of_day {
        Some(TimeOfDay::Morning) => (Rgb::new(120, 160, 220), Rgb::new(255, 200, 150)),
        Some(TimeOfDay::Afternoon) => (Rgb::new(40, 120, 220), Rgb::new(150, 200, 245)),
        Some(TimeOfDay::Evening) => (Rgb::new(60, 40, 110), Rgb::new(255, 140, 80)),
        Some(TimeOfDay::Night) => (Rgb::new(8, 10, 30), Rgb::new(30, 40, 80)),
        None => (Rgb::new(70, 130, 200), Rgb::new(170, 210, 240)),
    };
    let overcast = match attrs.weather {
        Some(Weather::Cloudy) => Some((Rgb::new(150, 155, 165), 0.4)),
        Some(Weather::Rainy) => Some((Rgb::new(90, 95, 110), 0.55)),
        Some(Weather::Stormy) => Some((Rgb::new(50, 50, 65), 0.65)),
        Some(Weather::Snowy) => Some((Rgb::new(220, 225, 235), 0.45)),
        Some(Weather::Foggy) => Some((Rgb::new(200, 200, 205), 0.6)),
        Some(Weather::Sunny) | None => None,
    };
    if let Some((grey, amount)) = overcast {
        sky_top = mix(sky_top, grey, amount);
        sky_bottom = mix(sky_bottom, grey, amount);
    }

    let (mut ground_top, mut ground_bottom, horizon) = match attrs.setting {
        Some(Setting::Forest) => (Rgb::new(46, 100, 40), Rgb::new(20, 60, 20), 0.62),
        Some(Setting::Beach) => (Rgb::new(240, 220, 160), Rgb::new(210, 180, 120), 0.6),
        Some(Setting::Ocean) => (Rgb::new(30, 90, 160), Rgb::new(10, 40, 90), 0.55),
        Some(Setting::City) => (Rgb::new(110, 110, 115), Rgb::new(60, 60, 65), 0.65),
        Some(Setting::Mountain) => (Rgb::new(120, 110, 100), Rgb::new(80, 70, 60), 0.58),
        Some(Setting::Desert) => (Rgb::new(230, 190, 120), Rgb::new(200, 150, 90), 0.62),
        Some(Setting::Space) => {
            sky_top = Rgb::new(2, 2, 12);
            sky_bottom = Rgb::new(24, 12, 48);
            (sky_bottom, sky_bottom, 1.0)
        }
        Some(Setting::Park) => (Rgb::new(100, 170, 80), Rgb::new(60, 120, 50), 0.64),
        Some(Setting::Indoor) => {
            sky_top = Rgb::new(230, 220, 200);
            sky_bottom = Rgb::new(210, 195, 170);
            (Rgb::new(150, 120, 90), Rgb::new(110, 85, 60), 0.7)
        }
        None => (Rgb::new(110, 160, 90), Rgb::new(70, 120, 60), 0.65),
    };
    if attrs.weather == Some(Weather::Snowy) && attrs.setting != Some(Setting::Indoor) {
        ground_top = mix(ground_top, Rgb::new(240, 245, 250), 0.6);
        ground_bottom = mix(ground_bottom, Rgb::new(220, 228, 240), 0.6);
    }
    if attrs.time_of_day == Some(TimeOfDay::Night) {
        ground_top = darken(ground_top, 30.0);
        ground_bottom = darken(ground_bottom, 30.0);
    }

    let outdoors = attrs.setting != Some(Setting::Indoor);
    let clear = overcast.is_none();
    let celestial = match attrs.time_of_day {
        Some(t) if outdoors && clear => Some(match t {
            TimeOfDay::Morning => Celestial {
                kind: CelestialKind::Sun,
                center: (0.2, horizon * 0.7),
                radius: 0.07,
                color: Rgb::new(255, 214, 140),
            },
            TimeOfDay::Afternoon => Celestial {
                kind: CelestialKind::Sun,
                center: (0.75, 0.15),
                radius: 0.06,
                color: Rgb::new(255, 245, 200),
            },
            TimeOfDay::Evening => Celestial {
                kind: CelestialKind::Sun,
                center: (0.78, horizon * 0.85),
                radius: 0.09,
                color: Rgb::new(255, 150, 70),
            },
            TimeOfDay::Night => Celestial {
                kind: CelestialKind::Moon,
                center: (0.8, 0.18),
                radius: 0.05,
                color: Rgb::new(235, 235, 220),
            },
        }),
        _ => None,
    };
    let stars = match (attrs.time_of_day, attrs.setting) {
        (_, Some(Setting::Space)) => 90,
        (Some(TimeOfDay::Night), _) if outdoors && clear => 40,
        _ => 0,
    };

    Background {
        sky_top,
        sky_bottom,
        ground_top,
        ground_bottom,
        horizon,
        celestial,
        stars,
    }
}

impl Background {
    /// Color of background row `y` on a canvas `height` pixels tall.
    pub fn row_color(&self, y: u32, height: u32) -> Rgb {
        let h = f64::from(height.max(1));
        let v = (f64::from(y) + 0.5) / h;
        if v < self.horizon {
            let t = if self.horizon <= 0.0 { 0.0 } else { v / self.horizon };
            mix(self.sky_top, self.sky_bottom, t)
        } else {
            let span = 1.0 - self.horizon;
            let t = if span <= 0.0 {
                0.0
            } else {
                (v - self.horizon) / span
            };
            mix(self.ground_top, self.ground_bottom, t)
        }
    }
}

/// Paint the backdrop. Star positions come from `seed`.
pub(crate) fn draw_background(
    painter: &mut Painter,
    bg: &Background,
    canvas: Canvas,
    seed: u64,
) -> SynthResult<()> {
    let (w, h) = (canvas.width, canvas.height);
    let mut bytes = alloc_rgba8(w, h)?;
    for y in 0..h {
        let c = bg.row_color(y, h).to_rgba8(255);
        let row = (y as usize) * (w as usize) * 4;
        for px in bytes[row..row + (w as usize) * 4].chunks_exact_mut(4) {
            px.copy_from_slice(&c);
        }
    }
    let (cw, ch) = canvas.size_f64();
    painter.fill_pixels(Rect::new(0.0, 0.0, cw, ch), &bytes, w, h)?;

    let mut rng = Rng64::new(seed ^ 0x5a17_u64.rotate_left(7));
    for _ in 0..bg.stars {
        let x = rng.range_f64(0.0, cw);
        let y = rng.range_f64(0.0, ch * bg.horizon * 0.9);
        let r = rng.range_f64(0.6, 1.8) * canvas.min_edge() / 512.0;
        let a = rng.range_f64(0.4, 1.0);
        painter.fill(
            &kurbo::Circle::new((x, y), r),
            kurbo::Affine::IDENTITY,
            Rgb::new(255, 255, 240),
            a,
        );
    }

    if let Some(c) = bg.celestial {
        let center = Point::new(c.center.0 * cw, c.center.1 * ch);
        let r = c.radius * canvas.min_edge();
        for (scale, alpha) in [(2.4, 0.08), (1.6, 0.16)] {
            painter.fill(
                &kurbo::Circle::new(center, r * scale),
                kurbo::Affine::IDENTITY,
                c.color,
                alpha,
            );
        }
        let shading = radial_shading(center, r, lighten(c.color, 5.0), None, None);
        painter.fill_shaded(
            &kurbo::Circle::new(center, r),
            kurbo::Affine::IDENTITY,
            &shading,
            1.0,
        )?;
        if c.kind == CelestialKind::Moon {
            let offset = Point::new(center.x + r * 0.45, center.y - r * 0.2);
            painter.fill(
                &kurbo::Circle::new(offset, r * 0.85),
                kurbo::Affine::IDENTITY,
                bg.row_color(lerp(0.0, ch, c.center.1) as u32, h),
                1.0,
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
