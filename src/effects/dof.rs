use crate::foundation::core::Point;
use crate::foundation::error::{SynthError, SynthResult};
use crate::render::surface::{RenderSurface, copy_bytes};

/// Lens blur parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepthOfField {
    /// Sharp point, in pixels.
    pub focus: Point,
    /// Pixels closer than this to `focus` stay sharp.
    pub focal_radius: f64,
    /// Distance beyond the focal radius per extra pixel of blur radius.
    pub falloff: f64,
    /// Largest box radius used.
    pub max_radius: u32,
}

/// Box-blur everything outside the focal radius, more strongly the farther out it is.
///
/// Brute force, `O(width * height * radius^2)`. Samples are read from a snapshot so already
/// blurred pixels never feed back.
pub fn apply_depth_of_field(surface: &mut RenderSurface, dof: &DepthOfField) -> SynthResult<()> {
    if !dof.falloff.is_finite() || dof.falloff <= 0.0 {
        return Err(SynthError::validation("depth of field falloff must be > 0"));
    }
    if !dof.focal_radius.is_finite() || dof.focal_radius < 0.0 {
        return Err(SynthError::validation("depth of field focal radius must be >= 0"));
    }
    if dof.max_radius == 0 {
        return Ok(());
    }

    let width = surface.width() as i64;
    let height = surface.height() as i64;
    let src = copy_bytes(surface.data())?;
    let dst = surface.data_mut();

    for y in 0..height {
        for x in 0..width {
            let d = (Point::new(x as f64, y as f64) - dof.focus).hypot();
            if d <= dof.focal_radius {
                continue;
            }
            let radius = blur_radius(d - dof.focal_radius, dof) as i64;
            if radius == 0 {
                continue;
            }

            let x0 = (x - radius).max(0);
            let x1 = (x + radius).min(width - 1);
            let y0 = (y - radius).max(0);
            let y1 = (y + radius).min(height - 1);

            let mut acc = [0u64; 4];
            let mut n = 0u64;
            for sy in y0..=y1 {
                let row = (sy * width) as usize;
                for sx in x0..=x1 {
                    let i = (row + sx as usize) * 4;
                    for c in 0..4 {
                        acc[c] += u64::from(src[i + c]);
                    }
                    n += 1;
                }
            }

            let out = ((y * width + x) as usize) * 4;
            for c in 0..4 {
                dst[out + c] = ((acc[c] + n / 2) / n) as u8;
            }
        }
    }
    Ok(())
}

fn blur_radius(excess: f64, dof: &DepthOfField) -> u32 {
    let r = (excess / dof.falloff).ceil();
    if r <= 0.0 {
        0
    } else {
        (r as u32).min(dof.max_radius)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dof.rs"]
mod tests;
