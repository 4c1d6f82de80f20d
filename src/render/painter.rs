use std::sync::Arc;

use crate::foundation::core::{Affine, Canvas, Rect};
use crate::foundation::error::{SynthError, SynthResult};
use crate::render::surface::{RenderSurface, alloc_rgba8, copy_bytes};
use crate::shading::color::Rgb;
use crate::shading::light::RadialShading;

const TOLERANCE: f64 = 0.1;

/// Thin drawing layer over a `vello_cpu` render context.
///
/// `vello_cpu` renders into a fresh buffer, so one painter draws a complete frame (background
/// first) and [`Painter::finish`] reads it back.
pub(crate) struct Painter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl Painter {
    /// Acquire a drawing context for `canvas`.
    pub(crate) fn new(canvas: Canvas) -> SynthResult<Self> {
        canvas.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| SynthError::surface("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| SynthError::surface("canvas height exceeds u16"))?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.reset();
        Ok(Self { ctx, width, height })
    }

    /// Fill `shape` with a flat color at `alpha` in `[0, 1]`.
    pub(crate) fn fill(
        &mut self,
        shape: &impl kurbo::Shape,
        transform: Affine,
        color: Rgb,
        alpha: f64,
    ) {
        if alpha <= 0.0 {
            return;
        }
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, a));
        self.ctx.fill_path(&shape_to_cpu(shape));
    }

    /// Stroke `shape` with a round-capped line of `width` in flat color.
    pub(crate) fn stroke(
        &mut self,
        shape: &impl kurbo::Shape,
        transform: Affine,
        width: f64,
        color: Rgb,
        alpha: f64,
    ) {
        if alpha <= 0.0 || width <= 0.0 {
            return;
        }
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, a));
        self.ctx.set_stroke(
            vello_cpu::kurbo::Stroke::new(width)
                .with_caps(vello_cpu::kurbo::Cap::Round)
                .with_join(vello_cpu::kurbo::Join::Round),
        );
        self.ctx.stroke_path(&shape_to_cpu(shape));
    }

    /// Fill `shape` with a radial shading, rasterized over the shape's bounding box.
    pub(crate) fn fill_shaded(
        &mut self,
        shape: &impl kurbo::Shape,
        transform: Affine,
        shading: &RadialShading,
        alpha: f64,
    ) -> SynthResult<()> {
        if alpha <= 0.0 {
            return Ok(());
        }
        let bbox = shape.bounding_box();
        let origin = (bbox.x0.floor(), bbox.y0.floor());
        let w = ((bbox.x1 - origin.0).ceil() as u32).max(1);
        let h = ((bbox.y1 - origin.1).ceil() as u32).max(1);
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;

        let mut bytes = alloc_rgba8(w, h)?;
        for y in 0..h {
            for x in 0..w {
                let p = kurbo::Point::new(
                    origin.0 + f64::from(x) + 0.5,
                    origin.1 + f64::from(y) + 0.5,
                );
                let idx = ((y as usize) * (w as usize) + (x as usize)) * 4;
                bytes[idx..idx + 4].copy_from_slice(&shading.color_at(p).to_rgba8_premul(a));
            }
        }
        let paint = image_from_premul_bytes(&bytes, w, h)?;

        self.ctx.set_transform(affine_to_cpu(transform));
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::translate((origin.0, origin.1)));
        self.ctx.set_paint(paint);
        self.ctx.fill_path(&shape_to_cpu(shape));
        Ok(())
    }

    /// Cover `rect` with premultiplied RGBA8 pixels of size `w`x`h` placed at the rect origin.
    pub(crate) fn fill_pixels(
        &mut self,
        rect: Rect,
        bytes_premul: &[u8],
        w: u32,
        h: u32,
    ) -> SynthResult<()> {
        let paint = image_from_premul_bytes(bytes_premul, w, h)?;
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::translate((rect.x0, rect.y0)));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
        Ok(())
    }

    /// Rasterize everything drawn so far into an owned surface.
    pub(crate) fn finish(mut self) -> SynthResult<RenderSurface> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        RenderSurface::from_rgba8(
            u32::from(self.width),
            u32::from(self.height),
            copy_bytes(pixmap.data_as_u8_slice())?,
        )
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn shape_to_cpu(shape: &impl kurbo::Shape) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn image_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> SynthResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SynthError::surface("paint width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SynthError::surface("paint height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(SynthError::surface("paint byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| {
            vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]])
        })
        .collect::<Vec<_>>();
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}
