// File: crates/plot-core/src/theme.rs
// Summary: Series palette, chrome colors, and named color lookup.

use crate::types::{Rgb, MAX_SERIES};

/// Default series colors, indexed by the slot a series is added into.
/// Immutable: per-series overrides live on the series itself.
pub const PALETTE: [Rgb; MAX_SERIES] = [
    Rgb::new(0.0, 0.0, 0.9), // blue
    Rgb::new(0.9, 0.0, 0.0), // red
    Rgb::new(0.0, 0.9, 0.0), // green
    Rgb::new(0.9, 0.9, 0.9), // "yellow", renders as light gray
    Rgb::new(0.9, 0.5, 0.0), // orange
    Rgb::new(0.5, 0.0, 0.9), // purple
];

pub fn palette_color(slot: usize) -> Rgb {
    PALETTE[slot % MAX_SERIES]
}

/// Colors for everything that is not series data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub frame: Rgb,
    pub label: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgb::gray(0.99),
            frame: Rgb::gray(0.1),
            label: Rgb::gray(0.1),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Resolves a color name (e.g. `"blue"`) to RGB.
pub trait ColorLookup {
    fn lookup(&self, name: &str) -> Option<Rgb>;
}

/// CSS color names and notations (`"teal"`, `"#3a7"`, `"rgb(10, 20, 30)"`).
#[derive(Clone, Copy, Debug, Default)]
pub struct CssColors;

impl ColorLookup for CssColors {
    fn lookup(&self, name: &str) -> Option<Rgb> {
        let name = name.trim().to_ascii_lowercase();
        if name.is_empty() {
            return None;
        }
        name.parse::<css_color_parser::Color>()
            .ok()
            .map(|c| Rgb::from_u8(c.r, c.g, c.b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_starts_with_blue() {
        assert_eq!(palette_color(0), Rgb::new(0.0, 0.0, 0.9));
        assert_eq!(palette_color(7), palette_color(1));
    }

    #[test]
    fn css_lookup_resolves_names_and_rejects_unknown() {
        let css = CssColors;
        assert_eq!(css.lookup("Red"), Some(Rgb::from_u8(255, 0, 0)));
        assert_eq!(css.lookup("#00ff00"), Some(Rgb::from_u8(0, 255, 0)));
        assert_eq!(css.lookup("not-a-color"), None);
        assert_eq!(css.lookup(""), None);
    }
}
