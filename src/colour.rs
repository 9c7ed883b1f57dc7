use glam::Vec4;
use std::fmt;
use std::str::FromStr;

/// Float RGBA colour, each channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba(pub Vec4);

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(Vec4::new(r, g, b, a))
    }

    pub fn r(&self) -> f32 {
        self.0.x
    }

    pub fn g(&self) -> f32 {
        self.0.y
    }

    pub fn b(&self) -> f32 {
        self.0.z
    }

    pub fn a(&self) -> f32 {
        self.0.w
    }

    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.2}, {:.2}, {:.2}, {:.2})",
            self.r(),
            self.g(),
            self.b(),
            self.a()
        )
    }
}

/// 8 bits per channel, as written in hex colour strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Srgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Srgba8> for Rgba {
    fn from(c: Srgba8) -> Self {
        let v = Vec4::new(c.r as f32, c.g as f32, c.b as f32, c.a as f32);
        Rgba(v / 255.0)
    }
}

impl From<Rgba> for Srgba8 {
    fn from(c: Rgba) -> Self {
        let v = (c.0.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
        Self {
            r: v.x as u8,
            g: v.y as u8,
            b: v.z as u8,
            a: v.w as u8,
        }
    }
}

impl fmt::Display for Srgba8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColourError(String);

impl fmt::Display for ParseColourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid colour {:?}: expected RRGGBB or RRGGBBAA hex", self.0)
    }
}

impl std::error::Error for ParseColourError {}

impl FromStr for Srgba8 {
    type Err = ParseColourError;

    /// Accepts `RRGGBB` or `RRGGBBAA`, with an optional leading `#`.
    /// Alpha defaults to opaque.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColourError(s.to_string());
        let hex = s.strip_prefix('#').unwrap_or(s);
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        let a = if hex.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        let c: Srgba8 = "#734f96".parse().unwrap();
        assert_eq!(c, Srgba8 { r: 0x73, g: 0x4f, b: 0x96, a: 0xff });

        let c: Srgba8 = "10203040".parse().unwrap();
        assert_eq!(c, Srgba8 { r: 0x10, g: 0x20, b: 0x30, a: 0x40 });
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "12345", "1234567", "#gg0000", "123456789", "#ééé", "#+f+f+f", "+0+0+0+0"] {
            assert!(bad.parse::<Srgba8>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn converts_to_unit_floats() {
        let c = Rgba::from(Srgba8 { r: 255, g: 0, b: 51, a: 255 });
        assert_eq!(c, Rgba::new(1.0, 0.0, 0.2, 1.0));
    }

    #[test]
    fn quantizes_and_clamps_back_to_bytes() {
        let c = Srgba8::from(Rgba::new(0.45, 0.31, 0.59, 1.0));
        assert_eq!(c, Srgba8 { r: 115, g: 79, b: 150, a: 255 });
        assert_eq!(c.to_string(), "#734f96ff");

        let c = Srgba8::from(Rgba::new(-1.0, 2.0, 0.5, 1.0));
        assert_eq!(c, Srgba8 { r: 0, g: 255, b: 128, a: 255 });
    }
}
