// File: crates/plot-core/src/types.rs
// Summary: Shared types and constants (band heights, font sizes, colors).

/// Maximum number of series resident in one plot (one per palette entry).
pub const MAX_SERIES: usize = 6;

/// Default title band height in pixels.
pub const TITLE_HEIGHT: i32 = 50;
/// Default caption band height in pixels.
pub const CAPTION_HEIGHT: i32 = 25;
/// Default legend band height in pixels.
pub const LEGEND_HEIGHT: i32 = 25;
/// Width reserved for y-axis labels on each side of the data area.
/// Fixed, not derived from label metrics.
pub const YAXIS_OFFSET: i32 = 50;
/// Gap between the title band and the top of the data area.
pub const GRAPH_GAP: i32 = 3;
/// Gap above the legend band and between the band and its baseline.
pub const LEGEND_GAP: i32 = 5;

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const CAPTION_FONT_SIZE: f32 = 12.0;
pub const LABEL_FONT_SIZE: f32 = 12.0;
pub const LEGEND_FONT_SIZE: f32 = 14.0;

/// Separator appended after every legend entry.
pub const LEGEND_SEPARATOR: &str = "  ";

/// RGB color with channels in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: f32) -> Self {
        Self::new(level, level, level)
    }

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Quantize to 8-bit channels, clamping out-of-range input.
    pub fn to_u8(self) -> (u8, u8, u8) {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (q(self.r), q(self.g), q(self.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantize_clamps_channels() {
        assert_eq!(Rgb::new(0.0, 0.5, 1.5).to_u8(), (0, 128, 255));
        assert_eq!(Rgb::from_u8(255, 0, 51), Rgb::new(1.0, 0.0, 0.2));
    }
}
