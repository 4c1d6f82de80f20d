use crate::analyze::attributes::{Lighting, Material, PromptAttributes};
use crate::animation::motion::Motion;
use crate::foundation::core::{Canvas, Point};
use crate::foundation::error::SynthResult;
use crate::render::background::{Background, background_for, draw_background};
use crate::render::figure::{FigureStyle, draw_figure, figure_layout, figure_style};
use crate::render::painter::Painter;
use crate::render::pose::{Pose, PoseKind, pose};
use crate::render::shapes::{
    Decoration, Shape, decorations_for, draw_decorations, draw_shapes, shapes_for_frame,
};
use crate::render::surface::RenderSurface;
use crate::shading::color::Rgb;

/// What stands in front of the backdrop.
#[derive(Clone, Debug, PartialEq)]
pub enum SubjectLayout {
    /// A posed human figure.
    Figure {
        /// Colors and materials.
        style: FigureStyle,
        /// Limb angles for this frame.
        pose: Pose,
    },
    /// Lit geometric shapes with optional ornaments.
    Shapes {
        /// Back-to-front shape list.
        shapes: Vec<Shape>,
        /// Ornaments drawn behind the shapes.
        decorations: Vec<Decoration>,
        /// Ornament color.
        accent: Rgb,
        /// Scene lighting.
        lighting: Option<Lighting>,
        /// Shape material.
        material: Option<Material>,
    },
}

/// Everything needed to draw one frame. Pure data: two scenes that compare equal draw the same
/// pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Output size.
    pub canvas: Canvas,
    /// Backdrop.
    pub background: Background,
    /// Foreground.
    pub subject: SubjectLayout,
    /// Seed for star placement.
    pub seed: u64,
}

/// Build the scene for one frame. Human subjects get a figure; everything else the abstract
/// shape set.
pub fn compose_scene(
    attrs: &PromptAttributes,
    canvas: Canvas,
    seed: u64,
    motion: &Motion,
) -> Scene {
    let subject = if attrs.has_human_subject() {
        SubjectLayout::Figure {
            style: figure_style(attrs, seed),
            pose: pose(PoseKind::for_action(attrs.action), motion),
        }
    } else {
        SubjectLayout::Shapes {
            shapes: shapes_for_frame(attrs, canvas, seed, motion),
            decorations: decorations_for(attrs, motion),
            accent: attrs.primary_color,
            lighting: attrs.lighting,
            material: attrs.material,
        }
    };
    Scene {
        canvas,
        background: background_for(attrs),
        subject,
        seed,
    }
}

impl Scene {
    /// Point to keep sharp under depth of field: the figure's head, else the nearest shape.
    pub fn focus(&self) -> Point {
        match &self.subject {
            SubjectLayout::Figure { style, pose } => {
                figure_layout(self.canvas, pose, style.child).focus()
            }
            SubjectLayout::Shapes { shapes, .. } => shapes
                .last()
                .map_or_else(|| self.canvas.center(), |s| s.center),
        }
    }
}

/// Rasterize a scene: backdrop first, then the subject.
pub fn draw_scene(scene: &Scene) -> SynthResult<RenderSurface> {
    let mut painter = Painter::new(scene.canvas)?;
    draw_background(&mut painter, &scene.background, scene.canvas, scene.seed)?;
    match &scene.subject {
        SubjectLayout::Figure { style, pose } => {
            draw_figure(&mut painter, scene.canvas, style, pose)?;
        }
        SubjectLayout::Shapes {
            shapes,
            decorations,
            accent,
            lighting,
            material,
        } => {
            draw_decorations(&mut painter, decorations, scene.canvas, *accent);
            draw_shapes(&mut painter, shapes, *lighting, *material)?;
        }
    }
    painter.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
