//! RGBA color values for circle styling

/// RGBA color representation
///
/// Color-valued paint properties cross the engine boundary as
/// `rgba(r, g, b, a)` strings with a fractional alpha component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Encode as the engine's `rgba(r, g, b, a)` color string
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            f32::from(self.a) / 255.0
        )
    }

    /// Parse an `rgba(r, g, b, a)` string produced by [`Color::to_rgba_string`]
    pub fn parse(value: &str) -> Option<Self> {
        let inner = value.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);

        let r = parts.next()?.parse::<u8>().ok()?;
        let g = parts.next()?.parse::<u8>().ok()?;
        let b = parts.next()?.parse::<u8>().ok()?;
        let alpha = parts.next()?.parse::<f32>().ok()?;
        if parts.next().is_some() || !(0.0..=1.0).contains(&alpha) {
            return None;
        }

        Some(Self::new(r, g, b, (alpha * 255.0).round() as u8))
    }
}

/// Common marker colors
impl Color {
    pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
    pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
    pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };
    pub const YELLOW: Color = Color { r: 255, g: 255, b: 0, a: 255 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
}
