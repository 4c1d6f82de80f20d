use crate::foundation::core::Canvas;
use crate::foundation::error::{SynthError, SynthResult};

/// An owned, row-major RGBA8 pixel buffer.
///
/// Rendered surfaces are fully opaque, so straight and premultiplied alpha coincide. Filters take
/// `&mut RenderSurface` and never alias it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderSurface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RenderSurface {
    /// Acquire a zeroed (transparent black) surface.
    pub fn new(canvas: Canvas) -> SynthResult<Self> {
        canvas.validate()?;
        let len = byte_len(canvas.width, canvas.height)?;
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data: zeroed_bytes(len)?,
        })
    }

    /// Wrap existing RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> SynthResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(SynthError::surface(format!(
                "expected {}x{}x4 bytes, got {}",
                width,
                height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Surface filled with one color.
    pub fn filled(canvas: Canvas, rgba: [u8; 4]) -> SynthResult<Self> {
        let mut s = Self::new(canvas)?;
        for px in s.data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Ok(s)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes.
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume into raw RGBA8 bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.index(x, y)?;
        let px = &self.data[i..i + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Write pixel `(x, y)`; returns `false` out of bounds.
    pub fn set(&mut self, x: u32, y: u32, rgba: [u8; 4]) -> bool {
        match self.pixel_mut(x, y) {
            Some(px) => {
                px.copy_from_slice(&rgba);
                true
            }
            None => false,
        }
    }

    /// Mutable 4-byte slice for pixel `(x, y)`.
    pub fn pixel_mut(&mut self, x: u32, y: u32) -> Option<&mut [u8]> {
        let i = self.index(x, y)?;
        Some(&mut self.data[i..i + 4])
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }
}

/// Zeroed RGBA8 buffer for a `width`x`height` image; a refused allocation is a surface error.
pub(crate) fn alloc_rgba8(width: u32, height: u32) -> SynthResult<Vec<u8>> {
    zeroed_bytes(byte_len(width, height)?)
}

/// Owned copy of `src`; a refused allocation is a surface error.
pub(crate) fn copy_bytes(src: &[u8]) -> SynthResult<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(src.len())
        .map_err(|e| SynthError::surface(format!("cannot copy {} bytes: {e}", src.len())))?;
    out.extend_from_slice(src);
    Ok(out)
}

fn zeroed_bytes(len: usize) -> SynthResult<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(len)
        .map_err(|e| SynthError::surface(format!("cannot allocate {len} byte surface: {e}")))?;
    out.resize(len, 0);
    Ok(out)
}

fn byte_len(width: u32, height: u32) -> SynthResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| SynthError::surface("surface buffer size overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
