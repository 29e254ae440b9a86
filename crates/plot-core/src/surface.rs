// File: crates/plot-core/src/surface.rs
// Summary: Drawing surface trait the renderer targets, plus fonts, text metrics and polyline paths.

use crate::geometry::{Point, RectI32, Transform};
use crate::types::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size: f32,
    pub weight: FontWeight,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f32, weight: FontWeight) -> Self {
        Self { family: family.into(), size, weight }
    }
}

/// Metrics for a measured string in the current font.
///
/// `ascent` and `descent` are positive distances from the baseline; `height`
/// is the font's line height, not the ink height of the string.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TextMetrics {
    pub width: f32,
    pub ascent: f32,
    pub descent: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
}

/// Open polyline path made of one or more subpaths.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    cmds: Vec<PathCmd>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
    }

    /// Extends the current subpath. Without one, starts a subpath at `p`.
    pub fn line_to(&mut self, p: Point) {
        if self.cmds.is_empty() {
            self.cmds.push(PathCmd::MoveTo(p));
        } else {
            self.cmds.push(PathCmd::LineTo(p));
        }
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Points grouped per subpath, in drawing order.
    pub fn subpaths(&self) -> Vec<Vec<Point>> {
        let mut out: Vec<Vec<Point>> = Vec::new();
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) => out.push(vec![p]),
                PathCmd::LineTo(p) => match out.last_mut() {
                    Some(sub) => sub.push(p),
                    None => out.push(vec![p]),
                },
            }
        }
        out
    }

    /// Stroked segments as `(from, to)` pairs.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        self.subpaths()
            .iter()
            .flat_map(|sub| sub.windows(2).map(|w| (w[0], w[1])).collect::<Vec<_>>())
            .collect()
    }
}

/// 2D vector drawing backend.
///
/// Coordinates are in the current user space; `save`/`restore` bracket
/// transform and state changes.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, dx: i32, dy: i32);
    fn concat(&mut self, transform: &Transform);

    fn set_color(&mut self, color: Rgb);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: &FontSpec);
    /// Measure `text` in the current font.
    fn measure_text(&mut self, text: &str) -> TextMetrics;

    fn fill_rect(&mut self, rect: RectI32);
    fn stroke_rect(&mut self, rect: RectI32);
    fn draw_line(&mut self, from: Point, to: Point);
    fn stroke_path(&mut self, path: &Path);
    /// Draw `text` with its baseline-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: Point);
}
