use crate::analyze::attributes::{DetailLevel, Lighting, Material, PromptAttributes};
use crate::animation::motion::Motion;
use crate::foundation::core::{Affine, Canvas, Point};
use crate::foundation::error::SynthResult;
use crate::foundation::math::Rng64;
use crate::render::painter::Painter;
use crate::shading::color::{Rgb, darken, lighten};
use crate::shading::light::radial_shading;
use kurbo::{BezPath, Circle, Rect, RoundedRect, Shape as _};
use std::f64::consts::{PI, TAU};

/// Primitive used by the abstract path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Disc.
    Circle,
    /// Softly rounded square.
    Square,
    /// Equilateral triangle.
    Triangle,
    /// Five-pointed star.
    Star,
}

/// One draw instruction, regenerated every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// Primitive.
    pub kind: ShapeKind,
    /// Centre in canvas pixels.
    pub center: Point,
    /// Bounding diameter in pixels, after depth scaling.
    pub size: f64,
    /// `0.0` is nearest, `1.0` farthest.
    pub depth: f64,
    /// Rotation in radians.
    pub rotation: f64,
    /// Fill base color.
    pub color: Rgb,
}

impl Shape {
    /// Opacity from depth: far shapes fade toward the backdrop.
    pub fn alpha(&self) -> f64 {
        1.0 - 0.55 * self.depth
    }
}

/// Background ornaments requested by shape flags.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decoration {
    /// Horizontal sine bands; `phase` scrolls them.
    Waves {
        /// Horizontal phase in radians.
        phase: f64,
    },
    /// Archimedean spiral around the canvas centre.
    Spiral {
        /// Rotation in radians.
        turn: f64,
    },
    /// Regular dot grid.
    Pattern,
}

/// Number of shapes drawn for a detail level.
pub fn shape_count(detail: DetailLevel) -> usize {
    match detail {
        DetailLevel::Low => 3,
        DetailLevel::Medium => 6,
        DetailLevel::High => 10,
    }
}

/// Kinds requested by the prompt, circle when none are.
pub fn shape_kinds(attrs: &PromptAttributes) -> Vec<ShapeKind> {
    let f = &attrs.shapes;
    let kinds: Vec<ShapeKind> = [
        (f.circles, ShapeKind::Circle),
        (f.squares, ShapeKind::Square),
        (f.triangles, ShapeKind::Triangle),
        (f.stars, ShapeKind::Star),
    ]
    .into_iter()
    .filter_map(|(on, kind)| on.then_some(kind))
    .collect();
    if kinds.is_empty() {
        vec![ShapeKind::Circle]
    } else {
        kinds
    }
}

/// Lay out the abstract shape set for one frame, sorted back to front.
///
/// The layout (positions, sizes, depths, colors) depends only on `seed`; `motion` moves it.
pub fn shapes_for_frame(
    attrs: &PromptAttributes,
    canvas: Canvas,
    seed: u64,
    motion: &Motion,
) -> Vec<Shape> {
    let kinds = shape_kinds(attrs);
    let count = shape_count(attrs.detail);
    let (w, h) = canvas.size_f64();
    let center = canvas.center();
    let min_edge = canvas.min_edge();
    let flags = &attrs.shapes;
    let mut rng = Rng64::new(seed);

    let mut shapes: Vec<Shape> = (0..count)
        .map(|i| {
            let home = Point::new(rng.range_f64(0.18, 0.82) * w, rng.range_f64(0.18, 0.82) * h);
            let depth = rng.range_f64(0.0, 1.0);
            let base_size = rng.range_f64(0.16, 0.32) * min_edge;
            let spin = rng.range_f64(0.0, TAU);
            let shade = rng.range_f64(-18.0, 18.0);
            let phase = rng.range_f64(0.0, TAU);
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };

            // Far shapes orbit more slowly.
            let orbit = motion.orbit * 0.25 * (1.0 - 0.5 * depth) * dir;
            let mut pos = Affine::rotate_about(orbit, center) * home;
            if flags.float {
                pos.y += (motion.orbit + phase).sin() * 0.05 * h * (1.0 - 0.5 * depth);
            }

            let mut size = base_size * (1.0 - 0.45 * depth);
            if flags.pulse {
                size *= motion.pulse;
            }
            if flags.zoom {
                size *= motion.zoom;
            }

            let rotation = if flags.rotation {
                spin + motion.rotation * dir
            } else {
                spin
            };

            Shape {
                kind: kinds[i % kinds.len()],
                center: pos,
                size,
                depth,
                rotation,
                color: if shade >= 0.0 {
                    lighten(attrs.primary_color, shade)
                } else {
                    darken(attrs.primary_color, -shade)
                },
            }
        })
        .collect();

    shapes.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    shapes
}

/// Ornaments for the waves, spiral and pattern flags, in draw order.
pub fn decorations_for(attrs: &PromptAttributes, motion: &Motion) -> Vec<Decoration> {
    let mut out = Vec::new();
    if attrs.shapes.pattern {
        out.push(Decoration::Pattern);
    }
    if attrs.shapes.waves {
        out.push(Decoration::Waves {
            phase: motion.orbit,
        });
    }
    if attrs.shapes.spiral {
        out.push(Decoration::Spiral {
            turn: motion.rotation,
        });
    }
    out
}

/// Outline of `shape` in canvas coordinates.
pub fn shape_path(shape: &Shape) -> BezPath {
    let r = shape.size / 2.0;
    let local = match shape.kind {
        ShapeKind::Circle => Circle::new(Point::ZERO, r).to_path(0.1),
        ShapeKind::Square => {
            let half = r * 0.8;
            RoundedRect::from_rect(Rect::new(-half, -half, half, half), r * 0.12).to_path(0.1)
        }
        ShapeKind::Triangle => polygon(3, r, r),
        ShapeKind::Star => polygon(5, r, r * 0.42),
    };
    Affine::translate(shape.center.to_vec2()) * Affine::rotate(shape.rotation) * local
}

/// Regular polygon (or star when `inner < outer`) pointing up.
fn polygon(points: usize, outer: f64, inner: f64) -> BezPath {
    let mut path = BezPath::new();
    let star = inner < outer;
    let steps = if star { points * 2 } else { points };
    for i in 0..steps {
        let radius = if star && i % 2 == 1 { inner } else { outer };
        let a = -PI / 2.0 + TAU * (i as f64) / (steps as f64);
        let p = Point::new(radius * a.cos(), radius * a.sin());
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Draw shapes with the shading engine, in the order given.
pub(crate) fn draw_shapes(
    painter: &mut Painter,
    shapes: &[Shape],
    lighting: Option<Lighting>,
    material: Option<Material>,
) -> SynthResult<()> {
    for shape in shapes {
        let shading =
            radial_shading(shape.center, shape.size / 2.0, shape.color, lighting, material);
        painter.fill_shaded(&shape_path(shape), Affine::IDENTITY, &shading, shape.alpha())?;
    }
    Ok(())
}

pub(crate) fn draw_decorations(
    painter: &mut Painter,
    decorations: &[Decoration],
    canvas: Canvas,
    color: Rgb,
) {
    let (w, h) = canvas.size_f64();
    let s = canvas.min_edge() / 512.0;
    let tint = lighten(color, 35.0);
    for deco in decorations {
        match *deco {
            Decoration::Pattern => {
                let step = 32.0 * s;
                let mut y = step / 2.0;
                while y < h {
                    let mut x = step / 2.0;
                    while x < w {
                        painter.fill(&Circle::new((x, y), 2.5 * s), Affine::IDENTITY, tint, 0.18);
                        x += step;
                    }
                    y += step;
                }
            }
            Decoration::Waves { phase } => {
                for band in 0..3 {
                    let base_y = h * (0.3 + 0.2 * f64::from(band));
                    let amp = 14.0 * s;
                    let mut path = BezPath::new();
                    let segments = 64;
                    for i in 0..=segments {
                        let x = w * f64::from(i) / f64::from(segments);
                        let y = base_y + amp * (x / w * TAU * 2.0 + phase + f64::from(band)).sin();
                        if i == 0 {
                            path.move_to((x, y));
                        } else {
                            path.line_to((x, y));
                        }
                    }
                    painter.stroke(&path, Affine::IDENTITY, 4.0 * s, tint, 0.45);
                }
            }
            Decoration::Spiral { turn } => {
                let c = canvas.center();
                let max_r = canvas.min_edge() * 0.45;
                let mut path = BezPath::new();
                let steps = 240;
                for i in 0..=steps {
                    let t = f64::from(i) / f64::from(steps);
                    let a = turn + t * TAU * 3.0;
                    let p = Point::new(c.x + max_r * t * a.cos(), c.y + max_r * t * a.sin());
                    if i == 0 {
                        path.move_to(p);
                    } else {
                        path.line_to(p);
                    }
                }
                painter.stroke(&path, Affine::IDENTITY, 3.0 * s, tint, 0.5);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/shapes.rs"]
mod tests;
