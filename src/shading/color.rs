use serde::{Deserialize, Serialize};

/// Opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the `#` is optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err("hex color must be #RRGGBB".to_owned());
        }

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        Ok(Self {
            r: hex_byte(&s[0..2])?,
            g: hex_byte(&s[2..4])?,
            b: hex_byte(&s[4..6])?,
        })
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Straight-alpha RGBA8 with the given alpha.
    pub fn to_rgba8(self, a: u8) -> [u8; 4] {
        [self.r, self.g, self.b, a]
    }

    /// Premultiplied RGBA8 with the given alpha.
    pub fn to_rgba8_premul(self, a: u8) -> [u8; 4] {
        let a16 = u16::from(a);
        let premul = |c: u8| -> u8 { (((u16::from(c) * a16) + 127) / 255) as u8 };
        [premul(self.r), premul(self.g), premul(self.b), a]
    }

    /// Rec. 709 luma in `[0, 255]`.
    pub fn luma(self) -> f64 {
        0.2126 * f64::from(self.r) + 0.7152 * f64::from(self.g) + 0.0722 * f64::from(self.b)
    }
}

/// Raise every channel by `round(2.55 * percent)`, clamped to 255.
pub fn lighten(c: Rgb, percent: f64) -> Rgb {
    shift(c, percent_step(percent))
}

/// Lower every channel by `round(2.55 * percent)`, clamped to 0.
pub fn darken(c: Rgb, percent: f64) -> Rgb {
    shift(c, -percent_step(percent))
}

/// Linear blend from `a` (t = 0) to `b` (t = 1).
pub fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let ch = |x: u8, y: u8| -> u8 {
        let x = f64::from(x);
        let y = f64::from(y);
        (x + (y - x) * t).round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

fn percent_step(percent: f64) -> i32 {
    if !percent.is_finite() {
        return 0;
    }
    (2.55 * percent).round() as i32
}

fn shift(c: Rgb, amt: i32) -> Rgb {
    let ch = |v: u8| -> u8 { (i32::from(v) + amt).clamp(0, 255) as u8 };
    Rgb::new(ch(c.r), ch(c.g), ch(c.b))
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr([u8; 3]),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr([r, g, b]) => Ok(Self::new(r, g, b)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shading/color.rs"]
mod tests;
