use crate::analyze::attributes::{Age, Emotion, Gender, Lighting, Material, PromptAttributes};
use crate::foundation::core::{Affine, Canvas, Point, Vec2};
use crate::foundation::error::SynthResult;
use crate::foundation::math::Rng64;
use crate::render::painter::Painter;
use crate::render::pose::Pose;
use crate::shading::color::{Rgb, darken, lighten};
use crate::shading::light::radial_shading;
use kurbo::{BezPath, Circle, Ellipse, Line, RoundedRect};

const SKIN_TONES: [Rgb; 5] = [
    Rgb::new(255, 219, 172),
    Rgb::new(241, 194, 125),
    Rgb::new(224, 172, 105),
    Rgb::new(198, 134, 66),
    Rgb::new(141, 85, 36),
];

const IRIS_COLORS: [Rgb; 4] = [
    Rgb::new(94, 62, 36),
    Rgb::new(60, 110, 170),
    Rgb::new(70, 120, 70),
    Rgb::new(40, 30, 25),
];

/// Colors and materials for one figure. Fixed for a prompt; only the pose animates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureStyle {
    /// Skin base color.
    pub skin: Rgb,
    /// Hair color.
    pub hair: Rgb,
    /// Iris color.
    pub iris: Rgb,
    /// Shirt and trousers.
    pub clothing: Rgb,
    /// Clothing material for the shading engine.
    pub clothing_material: Option<Material>,
    /// Scene lighting.
    pub lighting: Option<Lighting>,
    /// Mouth shape.
    pub emotion: Option<Emotion>,
    /// Shoulder-length hair.
    pub long_hair: bool,
    /// Children are drawn smaller with a larger head.
    pub child: bool,
}

/// Pick the figure's look from the prompt; unprompted choices (skin, eyes) come from `seed`.
pub fn figure_style(attrs: &PromptAttributes, seed: u64) -> FigureStyle {
    let mut rng = Rng64::new(seed);
    let skin = SKIN_TONES[rng.range_u32(0, SKIN_TONES.len() as u32 - 1) as usize];
    let iris = IRIS_COLORS[rng.range_u32(0, IRIS_COLORS.len() as u32 - 1) as usize];
    let hair = match attrs.age {
        Some(Age::Elderly) => Rgb::new(214, 214, 210),
        Some(Age::Child) => Rgb::new(150, 100, 50),
        Some(Age::Teen) => Rgb::new(90, 56, 30),
        Some(Age::Adult) | None => Rgb::new(58, 38, 24),
    };
    let clothing_material = match attrs.material {
        Some(Material::Skin) | None => Some(Material::Matte),
        other => other,
    };
    FigureStyle {
        skin,
        hair,
        iris,
        clothing: attrs.primary_color,
        clothing_material,
        lighting: attrs.lighting,
        emotion: attrs.emotion,
        long_hair: attrs.gender == Some(Gender::Female),
        child: attrs.age == Some(Age::Child),
    }
}

/// Resolved body geometry in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureLayout {
    /// Ground line.
    pub ground_y: f64,
    /// Centre of the hips, where the legs attach.
    pub hip: Point,
    /// Centre of the shoulder line.
    pub shoulder: Point,
    /// Horizontal distance from the centre line to each shoulder joint.
    pub shoulder_offset: f64,
    /// Head centre.
    pub head: Point,
    /// Head radius.
    pub head_radius: f64,
    /// Drawn leg length.
    pub leg_len: f64,
    /// Leg thickness.
    pub leg_width: f64,
    /// Torso height.
    pub torso_len: f64,
    /// Torso width.
    pub torso_width: f64,
    /// Arm length.
    pub arm_len: f64,
    /// Arm thickness.
    pub arm_width: f64,
}

/// Lay the figure out on `canvas`, standing on the ground line near the bottom.
pub fn figure_layout(canvas: Canvas, pose: &Pose, child: bool) -> FigureLayout {
    let (w, h) = canvas.size_f64();
    let s = canvas.min_edge() / 512.0 * if child { 0.72 } else { 1.0 };
    let ground_y = 0.88 * h;
    let full_leg = 120.0 * s;
    let torso_len = 110.0 * s;
    let head_radius = 36.0 * s * if child { 1.2 } else { 1.0 };

    let (hip_y, leg_len) = if pose.seated {
        (ground_y - 0.55 * full_leg, 0.55 * full_leg)
    } else {
        (ground_y - full_leg - pose.bounce * 70.0 * s, full_leg)
    };
    let hip = Point::new(w / 2.0, hip_y);
    let shoulder = Point::new(w / 2.0, hip_y - torso_len + 14.0 * s);
    let head = Point::new(w / 2.0, hip_y - torso_len - 8.0 * s - head_radius);

    FigureLayout {
        ground_y,
        hip,
        shoulder,
        shoulder_offset: 28.0 * s,
        head,
        head_radius,
        leg_len,
        leg_width: 24.0 * s,
        torso_len,
        torso_width: 64.0 * s,
        arm_len: 105.0 * s,
        arm_width: 18.0 * s,
    }
}

impl FigureLayout {
    /// Where a limb hanging from `pivot` at `angle` ends.
    pub fn limb_end(pivot: Point, angle: f64, len: f64) -> Point {
        limb_transform(pivot, angle) * Point::new(0.0, len)
    }

    /// Point the camera should keep sharp: between the eyes.
    pub fn focus(&self) -> Point {
        self.head
    }
}

fn limb_transform(pivot: Point, angle: f64) -> Affine {
    Affine::translate(pivot.to_vec2()) * Affine::rotate(angle)
}

struct Limb {
    pivot: Point,
    angle: f64,
    len: f64,
    width: f64,
    color: Rgb,
    material: Option<Material>,
}

fn draw_limb(painter: &mut Painter, limb: &Limb, lighting: Option<Lighting>) -> SynthResult<()> {
    let half = limb.width / 2.0;
    let shape = RoundedRect::new(-half, 0.0, half, limb.len, half);
    let shading = radial_shading(
        Point::new(0.0, limb.len / 2.0),
        limb.len / 2.0,
        limb.color,
        lighting,
        limb.material,
    );
    painter.fill_shaded(&shape, limb_transform(limb.pivot, limb.angle), &shading, 1.0)
}

fn draw_ball(
    painter: &mut Painter,
    center: Point,
    radius: f64,
    color: Rgb,
    lighting: Option<Lighting>,
    material: Option<Material>,
) -> SynthResult<()> {
    let shading = radial_shading(center, radius, color, lighting, material);
    painter.fill_shaded(&Circle::new(center, radius), Affine::IDENTITY, &shading, 1.0)
}

/// Draw a posed figure: legs, torso, arms, then the head and face on top.
pub(crate) fn draw_figure(
    painter: &mut Painter,
    canvas: Canvas,
    style: &FigureStyle,
    pose: &Pose,
) -> SynthResult<()> {
    let l = figure_layout(canvas, pose, style.child);
    let lighting = style.lighting;
    let trousers = darken(style.clothing, 25.0);
    let shoe = Rgb::new(45, 40, 38);

    // Ground shadow shrinks as the figure leaves the ground.
    let lift = (l.ground_y - l.leg_len - l.hip.y).max(0.0);
    let shadow_w = l.torso_width * (1.1 - (lift / (l.torso_len * 2.0)).min(0.6));
    painter.fill(
        &Ellipse::new((l.hip.x, l.ground_y), (shadow_w, shadow_w * 0.18), 0.0),
        Affine::IDENTITY,
        Rgb::new(0, 0, 0),
        0.25,
    );

    if pose.seated {
        let bench = RoundedRect::new(
            l.hip.x - l.torso_width * 1.4,
            l.hip.y - 4.0,
            l.hip.x + l.torso_width * 1.4,
            l.hip.y + l.leg_width * 0.8,
            4.0,
        );
        painter.fill(&bench, Affine::IDENTITY, Rgb::new(120, 82, 50), 1.0);
    }

    let hip_offset = l.torso_width * 0.28;
    for (dx, angle) in [(-hip_offset, pose.left_leg), (hip_offset, -pose.right_leg)] {
        let pivot = Point::new(l.hip.x + dx, l.hip.y - l.leg_width * 0.3);
        draw_limb(
            painter,
            &Limb {
                pivot,
                angle,
                len: l.leg_len,
                width: l.leg_width,
                color: trousers,
                material: style.clothing_material,
            },
            lighting,
        )?;
        let foot = FigureLayout::limb_end(pivot, angle, l.leg_len);
        let toe = if dx < 0.0 { -1.0 } else { 1.0 };
        painter.fill(
            &Ellipse::new(
                (foot.x + toe * l.leg_width * 0.3, foot.y),
                (l.leg_width * 0.75, l.leg_width * 0.38),
                0.0,
            ),
            Affine::IDENTITY,
            shoe,
            1.0,
        );
    }

    let torso = RoundedRect::new(
        l.hip.x - l.torso_width / 2.0,
        l.hip.y - l.torso_len,
        l.hip.x + l.torso_width / 2.0,
        l.hip.y,
        l.torso_width * 0.3,
    );
    let torso_shading = radial_shading(
        Point::new(l.hip.x, l.hip.y - l.torso_len / 2.0),
        l.torso_len / 2.0,
        style.clothing,
        lighting,
        style.clothing_material,
    );
    painter.fill_shaded(&torso, Affine::IDENTITY, &torso_shading, 1.0)?;

    let neck = RoundedRect::new(
        l.head.x - l.head_radius * 0.3,
        l.head.y + l.head_radius * 0.6,
        l.head.x + l.head_radius * 0.3,
        l.hip.y - l.torso_len + 4.0,
        2.0,
    );
    painter.fill(&neck, Affine::IDENTITY, darken(style.skin, 8.0), 1.0);

    for (dx, angle) in [
        (-l.shoulder_offset, pose.left_arm),
        (l.shoulder_offset, -pose.right_arm),
    ] {
        let pivot = Point::new(l.shoulder.x + dx, l.shoulder.y);
        draw_limb(
            painter,
            &Limb {
                pivot,
                angle,
                len: l.arm_len,
                width: l.arm_width,
                color: style.clothing,
                material: style.clothing_material,
            },
            lighting,
        )?;
        let hand = FigureLayout::limb_end(pivot, angle, l.arm_len);
        draw_ball(
            painter,
            hand,
            l.arm_width * 0.62,
            style.skin,
            lighting,
            Some(Material::Skin),
        )?;
    }

    draw_head(painter, &l, style)
}

fn draw_head(painter: &mut Painter, l: &FigureLayout, style: &FigureStyle) -> SynthResult<()> {
    let r = l.head_radius;
    let c = l.head;

    if style.long_hair {
        let back = RoundedRect::new(
            c.x - r * 1.1,
            c.y - r * 0.6,
            c.x + r * 1.1,
            c.y + r * 1.45,
            r * 0.5,
        );
        painter.fill(&back, Affine::IDENTITY, darken(style.hair, 10.0), 1.0);
    }

    draw_ball(painter, c, r, style.skin, style.lighting, Some(Material::Skin))?;

    // Hair cap over the top of the head, then a few strands.
    let mut cap = BezPath::new();
    cap.move_to((c.x - r * 1.02, c.y - r * 0.05));
    cap.curve_to(
        (c.x - r * 1.05, c.y - r * 1.4),
        (c.x + r * 1.05, c.y - r * 1.4),
        (c.x + r * 1.02, c.y - r * 0.05),
    );
    cap.quad_to((c.x, c.y - r * 0.55), (c.x - r * 1.02, c.y - r * 0.05));
    cap.close_path();
    let hair_shading = radial_shading(
        c - Vec2::new(0.0, r * 0.6),
        r,
        style.hair,
        style.lighting,
        None,
    );
    painter.fill_shaded(&cap, Affine::IDENTITY, &hair_shading, 1.0)?;
    for i in 0..5 {
        let x = c.x - r * 0.6 + f64::from(i) * r * 0.3;
        let mut strand = BezPath::new();
        strand.move_to((x, c.y - r * 0.95));
        strand.quad_to((x + r * 0.15, c.y - r * 0.7), (x + r * 0.05, c.y - r * 0.45));
        painter.stroke(&strand, Affine::IDENTITY, r * 0.06, lighten(style.hair, 12.0), 0.8);
    }

    for side in [-1.0, 1.0] {
        let eye = Point::new(c.x + side * r * 0.36, c.y + r * 0.02);
        painter.fill(
            &Ellipse::new(eye, (r * 0.2, r * 0.14), 0.0),
            Affine::IDENTITY,
            Rgb::new(250, 250, 250),
            1.0,
        );
        painter.fill(&Circle::new(eye, r * 0.11), Affine::IDENTITY, style.iris, 1.0);
        painter.fill(&Circle::new(eye, r * 0.055), Affine::IDENTITY, Rgb::new(10, 10, 12), 1.0);
        painter.fill(
            &Circle::new((eye.x - r * 0.035, eye.y - r * 0.04), r * 0.03),
            Affine::IDENTITY,
            Rgb::new(255, 255, 255),
            0.95,
        );
        let brow = Line::new(
            (eye.x - r * 0.17, eye.y - r * 0.24 + brow_tilt(style.emotion) * side * -r),
            (eye.x + r * 0.17, eye.y - r * 0.24 + brow_tilt(style.emotion) * side * r),
        );
        painter.stroke(&brow, Affine::IDENTITY, r * 0.06, darken(style.hair, 10.0), 1.0);
    }

    let mut nose = BezPath::new();
    nose.move_to((c.x, c.y + r * 0.1));
    nose.line_to((c.x - r * 0.08, c.y + r * 0.32));
    nose.line_to((c.x + r * 0.06, c.y + r * 0.34));
    painter.stroke(&nose, Affine::IDENTITY, r * 0.045, darken(style.skin, 22.0), 1.0);

    let mouth_y = c.y + r * 0.55;
    let lip = Rgb::new(170, 60, 60);
    if style.emotion == Some(Emotion::Surprised) {
        painter.fill(
            &Ellipse::new((c.x, mouth_y), (r * 0.12, r * 0.16), 0.0),
            Affine::IDENTITY,
            darken(lip, 30.0),
            1.0,
        );
    } else {
        painter.stroke(&mouth_path(c, r, style.emotion), Affine::IDENTITY, r * 0.07, lip, 1.0);
    }
    Ok(())
}

/// How far the mouth's midpoint bends down (positive, a smile) or up (negative, a frown),
/// as a fraction of head radius.
pub fn mouth_curve(emotion: Option<Emotion>) -> f64 {
    match emotion {
        Some(Emotion::Happy) | Some(Emotion::Excited) => 0.25,
        Some(Emotion::Sad) => -0.2,
        Some(Emotion::Angry) => -0.12,
        Some(Emotion::Calm) | Some(Emotion::Surprised) | None => 0.1,
    }
}

fn brow_tilt(emotion: Option<Emotion>) -> f64 {
    match emotion {
        Some(Emotion::Angry) => 0.06,
        Some(Emotion::Sad) => -0.05,
        _ => 0.0,
    }
}

fn mouth_path(c: Point, r: f64, emotion: Option<Emotion>) -> BezPath {
    let y = c.y + r * 0.55;
    let bend = mouth_curve(emotion) * r;
    let mut p = BezPath::new();
    p.move_to((c.x - r * 0.3, y - bend * 0.3));
    p.quad_to((c.x, y + bend), (c.x + r * 0.3, y - bend * 0.3));
    p
}

#[cfg(test)]
#[path = "../../tests/unit/render/figure.rs"]
mod tests;
