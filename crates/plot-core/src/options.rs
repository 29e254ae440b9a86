// File: crates/plot-core/src/options.rs
// Summary: Typed plot configuration with explicit defaults, validated once at construction.

use std::convert::Infallible;
use std::str::FromStr;

use crate::error::{PlotError, Result};
use crate::surface::{FontSpec, FontWeight};
use crate::theme::Theme;
use crate::types::{
    CAPTION_FONT_SIZE, CAPTION_HEIGHT, LABEL_FONT_SIZE, LEGEND_FONT_SIZE, LEGEND_HEIGHT,
    TITLE_FONT_SIZE, TITLE_HEIGHT,
};

/// How a gap in a series is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// Break the line; the next present sample starts a new subpath.
    #[default]
    Skip,
    /// Substitute the series minimum and keep the line continuous.
    Min,
    /// Substitute the series maximum and keep the line continuous.
    Max,
}

impl FromStr for MissingPolicy {
    type Err = Infallible;

    /// `"min"` and `"max"` select clamping; anything else skips.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "min" => MissingPolicy::Min,
            "max" => MissingPolicy::Max,
            _ => MissingPolicy::Skip,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotOptions {
    pub title: String,
    pub caption: String,
    /// Font family used for all text.
    pub font: String,
    /// Draw gridlines at tick positions. Tick labels are drawn either way.
    pub auto_grid: bool,
    /// Desired number of x-axis labels; the result is approximate.
    pub x_ticks: u32,
    /// Desired number of y-axis labels; the result is approximate.
    pub y_ticks: u32,
    pub missing: MissingPolicy,
    pub title_h: i32,
    pub caption_h: i32,
    pub legend_h: i32,
    pub hidden: bool,
    pub theme: Theme,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: "Missing a title:".to_string(),
            caption: "Missing a caption:".to_string(),
            font: "Helvetica".to_string(),
            auto_grid: false,
            x_ticks: 8,
            y_ticks: 6,
            missing: MissingPolicy::Skip,
            title_h: TITLE_HEIGHT,
            caption_h: CAPTION_HEIGHT,
            legend_h: LEGEND_HEIGHT,
            hidden: false,
            theme: Theme::default(),
        }
    }
}

impl PlotOptions {
    pub fn validate(&self) -> Result<()> {
        if self.x_ticks == 0 || self.y_ticks == 0 {
            return Err(PlotError::invalid(format!(
                "x_ticks and y_ticks must be at least 1 (got {}, {})",
                self.x_ticks, self.y_ticks
            )));
        }
        if self.title_h < 0 || self.caption_h < 0 || self.legend_h < 0 {
            return Err(PlotError::invalid("band heights must be non-negative"));
        }
        if self.font.trim().is_empty() {
            return Err(PlotError::invalid("font name is empty"));
        }
        Ok(())
    }

    pub fn title_font(&self) -> FontSpec {
        FontSpec::new(&self.font, TITLE_FONT_SIZE, FontWeight::Bold)
    }
    pub fn caption_font(&self) -> FontSpec {
        FontSpec::new(&self.font, CAPTION_FONT_SIZE, FontWeight::Normal)
    }
    pub fn label_font(&self) -> FontSpec {
        FontSpec::new(&self.font, LABEL_FONT_SIZE, FontWeight::Normal)
    }
    pub fn legend_font(&self) -> FontSpec {
        FontSpec::new(&self.font, LEGEND_FONT_SIZE, FontWeight::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_policy_parses_like_the_widget_option() {
        assert_eq!("min".parse::<MissingPolicy>().unwrap(), MissingPolicy::Min);
        assert_eq!("max".parse::<MissingPolicy>().unwrap(), MissingPolicy::Max);
        assert_eq!("skip".parse::<MissingPolicy>().unwrap(), MissingPolicy::Skip);
        assert_eq!("whatever".parse::<MissingPolicy>().unwrap(), MissingPolicy::Skip);
    }

    #[test]
    fn defaults_validate() {
        let o = PlotOptions::default();
        assert!(o.validate().is_ok());
        assert_eq!((o.x_ticks, o.y_ticks), (8, 6));
        assert!(!o.auto_grid);
    }

    #[test]
    fn zero_ticks_rejected() {
        let o = PlotOptions { y_ticks: 0, ..Default::default() };
        assert!(matches!(o.validate(), Err(PlotError::InvalidArgument(_))));
    }
}
