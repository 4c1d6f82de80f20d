use crate::foundation::error::{SynthError, SynthResult};
use crate::render::surface::{RenderSurface, copy_bytes};
use base64::Engine as _;
use base64::engine::general_purpose;
use std::io::Cursor;

/// MIME type of [`encode_png`] output.
pub const PNG_MIME: &str = "image/png";

/// Encode a surface as PNG bytes (straight alpha).
pub fn encode_png(surface: &RenderSurface) -> SynthResult<Vec<u8>> {
    let mut straight = copy_bytes(surface.data())?;
    unpremultiply(&mut straight);
    let img = image::RgbaImage::from_raw(surface.width(), surface.height(), straight)
        .ok_or_else(|| SynthError::encode("surface buffer does not match its dimensions"))?;
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| SynthError::encode(format!("png encode failed: {e}")))?;
    Ok(buf)
}

/// `data:<mime>;base64,<payload>` URI for `bytes`.
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", general_purpose::STANDARD.encode(bytes))
}

fn unpremultiply(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/image.rs"]
mod tests;
