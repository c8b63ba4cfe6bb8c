use std::fmt;
use std::hash::{Hash, Hasher};

/// Alpha values at or above this threshold render as fully opaque `rgb()`.
const OPAQUE_THRESHOLD: f32 = 0.999;

/// A resolved color: 8-bit channels plus a straight (non-premultiplied) alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl Color {
    /// Builds a color from unit-range channels as design tools report them.
    /// Channels are scaled to 0-255 and rounded; out-of-range input saturates.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
            a: a as f32,
        }
    }

    /// Composites an extra opacity factor onto the alpha channel.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.a *= opacity as f32;
        self
    }

    /// Formats as a CSS color string: `rgb(r, g, b)` when effectively opaque,
    /// `rgba(r, g, b, a)` with three-decimal alpha otherwise.
    pub fn to_css(&self) -> String {
        if self.a >= OPAQUE_THRESHOLD {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_channel_scaling() {
        let color = Color::from_unit(1.0, 0.5, 0.0, 1.0);
        assert_eq!((color.r, color.g, color.b), (255, 128, 0));
    }

    #[test]
    fn test_opaque_rgb_format() {
        assert_eq!(Color::from_unit(0.0, 0.0, 0.0, 1.0).to_css(), "rgb(0, 0, 0)");
    }

    #[test]
    fn test_near_opaque_rgb_format() {
        assert_eq!(Color::from_unit(1.0, 1.0, 1.0, 0.9995).to_css(), "rgb(255, 255, 255)");
    }

    #[test]
    fn test_translucent_rgba_format() {
        let css = Color::from_unit(10.0 / 255.0, 20.0 / 255.0, 30.0 / 255.0, 0.5).to_css();
        assert_eq!(css, "rgba(10, 20, 30, 0.500)");
    }

    #[test]
    fn test_opacity_composites_alpha() {
        let color = Color::from_unit(0.0, 0.0, 0.0, 0.8).with_opacity(0.5);
        assert_eq!(color.to_css(), "rgba(0, 0, 0, 0.400)");
    }

    #[test]
    fn test_full_opacity_alpha_unchanged() {
        let color = Color::from_unit(0.2, 0.4, 0.6, 1.0).with_opacity(1.0);
        assert_eq!(color.to_css(), "rgb(51, 102, 153)");
    }

    #[test]
    fn test_channel_saturation() {
        let color = Color::from_unit(1.5, -0.5, 0.0, 1.0);
        assert_eq!((color.r, color.g), (255, 0));
    }
}
