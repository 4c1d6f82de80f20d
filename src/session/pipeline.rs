use crate::analyze::attributes::PromptAttributes;
use crate::animation::motion::Motion;
use crate::effects::dof::{DepthOfField, apply_depth_of_field};
use crate::effects::grade::{apply_grade, grade_for};
use crate::effects::noise::{NoiseParams, apply_noise};
use crate::foundation::error::SynthResult;
use crate::foundation::math::Fnv1a64;
use crate::render::scene::{Scene, compose_scene, draw_scene};
use crate::render::surface::RenderSurface;
use crate::session::config::SynthConfig;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of grain seeds: the configured seed, or a fresh value per call.
#[derive(Clone, Debug)]
pub(crate) struct GrainSeeds {
    fixed: Option<u64>,
    calls: u64,
}

impl GrainSeeds {
    pub(crate) fn new(fixed: Option<u64>) -> Self {
        Self { fixed, calls: 0 }
    }

    pub(crate) fn next_seed(&mut self) -> u64 {
        self.calls = self.calls.wrapping_add(1);
        if let Some(seed) = self.fixed {
            return seed;
        }
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let mut h = Fnv1a64::new_default();
        h.write_u64(nanos);
        h.write_u64(self.calls);
        h.finish()
    }
}

/// Seed for frame `index` of a clip whose grain base seed is `base`.
pub(crate) fn frame_seed(base: u64, index: u64) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(base);
    h.write_u64(index);
    h.finish()
}

/// Compose, draw and post-process one frame.
///
/// Order: scene, depth of field (when the prompt asks for it), grading, grain.
pub(crate) fn render_frame(
    attrs: &PromptAttributes,
    config: &SynthConfig,
    layout_seed: u64,
    motion: &Motion,
    grain: Option<NoiseParams>,
) -> SynthResult<(Scene, RenderSurface)> {
    let scene = compose_scene(attrs, config.canvas, layout_seed, motion);
    let mut surface = draw_scene(&scene)?;

    if attrs.depth_of_field {
        let dof = &config.depth_of_field;
        apply_depth_of_field(
            &mut surface,
            &DepthOfField {
                focus: scene.focus(),
                focal_radius: dof.focal_radius_frac * config.canvas.min_edge(),
                falloff: dof.falloff,
                max_radius: dof.max_radius,
            },
        )?;
    }

    let grade = grade_for(attrs.time_of_day, attrs.weather);
    if !grade.is_identity() {
        apply_grade(&mut surface, &grade);
    }

    if let Some(params) = grain
        && params.intensity > 0.0
    {
        apply_noise(&mut surface, params)?;
    }

    Ok((scene, surface))
}

#[cfg(test)]
#[path = "../../tests/unit/session/pipeline.rs"]
mod tests;
