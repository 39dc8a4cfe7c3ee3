use serde::{Deserialize, Serialize};

use crate::error::{EvmError, EvmResult};

/// Pixel dimensions of one rendered image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> EvmResult<()> {
        if !self.is_valid() {
            return Err(EvmError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> EvmResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(EvmError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Fixed chart palette, mirroring the established legend colors.
pub mod palette {
    use super::Color;

    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::rgb(0.0, 0.5, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const ORANGE: Color = Color::rgb(1.0, 0.647, 0.0);
    pub const PURPLE: Color = Color::rgb(0.5, 0.0, 0.5);
    pub const BROWN: Color = Color::rgb(0.647, 0.165, 0.165);
    pub const PINK: Color = Color::rgb(1.0, 0.753, 0.796);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Under-completion shading at half opacity.
    pub const LIGHT_GREEN: Color = Color::rgba(0.565, 0.933, 0.565, 0.5);
    /// Cost-overrun shading at half opacity.
    pub const LIGHT_CORAL: Color = Color::rgba(0.941, 0.502, 0.502, 0.5);
}

/// Stroke pattern for plotted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStrokeStyle {
    Solid,
    Dashed,
}
