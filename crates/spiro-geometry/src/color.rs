use serde::{Deserialize, Serialize};
use spiro_core::traits::Validate;
use spiro_core::{Result, SpiroError};

/// Stroke colour with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// `#rrggbb` form used by SVG output.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Validate for Color {
    fn validate(&self) -> Result<()> {
        for (name, c) in [("red", self.r), ("green", self.g), ("blue", self.b)] {
            if !(0.0..=1.0).contains(&c) {
                return Err(SpiroError::invalid(format!(
                    "{name} channel must lie in [0, 1], got {c}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgb8() {
        assert_eq!(Color::BLACK.to_rgb8(), [0, 0, 0]);
        assert_eq!(Color::WHITE.to_rgb8(), [255, 255, 255]);
        assert_eq!(Color::new(0.5, 0.0, 1.0).to_rgb8(), [128, 0, 255]);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Color::new(1.0, 0.0, 0.0).to_hex(), "#ff0000");
        assert_eq!(Color::WHITE.to_hex(), "#ffffff");
    }

    #[test]
    fn test_validate_range() {
        assert!(Color::new(0.2, 0.4, 0.6).validate().is_ok());
        assert!(Color::new(1.2, 0.4, 0.6).validate().is_err());
        assert!(Color::new(0.2, -0.1, 0.6).validate().is_err());
    }
}
