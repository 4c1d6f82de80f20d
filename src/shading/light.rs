use crate::analyze::attributes::{Lighting, Material};
use crate::foundation::core::{Point, Vec2};
use crate::shading::color::{Rgb, darken, lighten, mix};

/// One color stop of a radial gradient; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Normalized distance from the light focus.
    pub offset: f64,
    /// Color at this distance.
    pub color: Rgb,
}

/// A two-point radial gradient: a bright focus inside a circle of `radius` around `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialShading {
    /// Where the light hits the surface.
    pub focus: Point,
    /// Shape centre.
    pub center: Point,
    /// Shape radius.
    pub radius: f64,
    /// 4 to 6 stops, offsets ascending from 0 to 1.
    pub stops: Vec<GradientStop>,
}

/// Light direction used when nothing says otherwise: upper-left.
const LIGHT_DIR: Vec2 = Vec2::new(-0.35, -0.35);

const WARM: Rgb = Rgb::new(255, 183, 77);
const COOL: Rgb = Rgb::new(144, 164, 220);
const NEON: Rgb = Rgb::new(255, 64, 255);

/// Build the radial fill for a lit shape.
///
/// Pure: the same inputs always yield the same stop sequence.
pub fn radial_shading(
    center: Point,
    radius: f64,
    base: Rgb,
    lighting: Option<Lighting>,
    material: Option<Material>,
) -> RadialShading {
    let dir = match lighting {
        Some(Lighting::Backlit) => -LIGHT_DIR,
        _ => LIGHT_DIR,
    };
    let radius = radius.max(0.0);
    let focus = center + dir * radius;

    // Offsets (percent lighten > 0, darken < 0) per material, before lighting scaling.
    let profile: &[(f64, f64)] = match material {
        Some(Material::Skin) => &[(0.0, 12.0), (0.5, 0.0), (0.85, -8.0), (1.0, -15.0)],
        Some(Material::Metal) => &[
            (0.0, 65.0),
            (0.12, 35.0),
            (0.35, 0.0),
            (0.6, -30.0),
            (0.85, -45.0),
            (1.0, 10.0),
        ],
        Some(Material::Glass) => &[
            (0.0, 75.0),
            (0.2, 45.0),
            (0.5, 5.0),
            (0.8, -12.0),
            (1.0, 20.0),
        ],
        Some(Material::Matte) | None => &[(0.0, 30.0), (0.45, 0.0), (0.8, -20.0), (1.0, -35.0)],
    };

    let contrast = contrast_scale(lighting);
    let tint = highlight_tint(lighting);

    let stops = profile
        .iter()
        .enumerate()
        .map(|(i, &(offset, pct))| {
            let pct = pct * contrast;
            let mut color = if pct >= 0.0 {
                lighten(base, pct)
            } else {
                darken(base, -pct)
            };
            if i == 0
                && let Some((tint, amount)) = tint
            {
                color = mix(color, tint, amount);
            }
            GradientStop { offset, color }
        })
        .collect();

    RadialShading {
        focus,
        center,
        radius,
        stops,
    }
}

fn contrast_scale(lighting: Option<Lighting>) -> f64 {
    match lighting {
        Some(Lighting::Dramatic) => 1.4,
        Some(Lighting::Neon) => 1.2,
        Some(Lighting::Bright) => 1.1,
        Some(Lighting::Soft) | Some(Lighting::Overcast) => 0.6,
        Some(Lighting::Moonlight) => 0.8,
        Some(Lighting::Backlit) | Some(Lighting::GoldenHour) | None => 1.0,
    }
}

fn highlight_tint(lighting: Option<Lighting>) -> Option<(Rgb, f64)> {
    match lighting? {
        Lighting::GoldenHour => Some((WARM, 0.3)),
        Lighting::Moonlight => Some((COOL, 0.3)),
        Lighting::Neon => Some((NEON, 0.25)),
        _ => None,
    }
}

impl RadialShading {
    /// Sample the gradient at `p`.
    ///
    /// `t` is the distance from the focus normalized by the farthest the shape edge can be from
    /// it, clamped to `[0, 1]`.
    pub fn color_at(&self, p: Point) -> Rgb {
        let reach = self.radius + (self.focus - self.center).hypot();
        let t = if reach <= f64::EPSILON {
            0.0
        } else {
            ((p - self.focus).hypot() / reach).clamp(0.0, 1.0)
        };
        self.color_at_offset(t)
    }

    /// Interpolate the stop list at normalized offset `t`.
    pub fn color_at_offset(&self, t: f64) -> Rgb {
        let Some(first) = self.stops.first() else {
            return Rgb::new(0, 0, 0);
        };
        if t <= first.offset {
            return first.color;
        }
        for w in self.stops.windows(2) {
            let (a, b) = (w[0], w[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                let local = if span <= f64::EPSILON {
                    1.0
                } else {
                    (t - a.offset) / span
                };
                return mix(a.color, b.color, local);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shading/light.rs"]
mod tests;
