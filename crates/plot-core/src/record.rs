// File: crates/plot-core/src/record.rs
// Summary: Recording surface; captures drawing primitives as a display list with deterministic text metrics.

use crate::geometry::{Point, RectI32, Transform};
use crate::surface::{FontSpec, FontWeight, Path, Surface, TextMetrics};
use crate::types::Rgb;

/// One recorded primitive. Drawing ops carry the color active at the time.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Translate { dx: i32, dy: i32 },
    Concat(Transform),
    FillRect { rect: RectI32, color: Rgb },
    StrokeRect { rect: RectI32, color: Rgb },
    Line { from: Point, to: Point, color: Rgb },
    Path { path: Path, color: Rgb },
    Text { text: String, at: Point, color: Rgb, font: FontSpec },
}

/// Surface that records instead of rasterizing.
///
/// Text is measured with a fixed advance of half the font size per char,
/// ascent 0.75 and descent 0.25 of the size, and a 1.2 line height, so
/// layout is reproducible without a font backend.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    ops: Vec<Op>,
    color: Rgb,
    line_width: f32,
    font: FontSpec,
    depth: usize,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            color: Rgb::gray(0.0),
            line_width: 1.0,
            font: FontSpec::new("sans-serif", 12.0, FontWeight::Normal),
            depth: 0,
        }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Current save depth; 0 once every `save` has been restored.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn texts(&self) -> Vec<(&str, Point, Rgb)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, at, color, .. } => Some((text.as_str(), *at, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn paths(&self) -> Vec<(&Path, Rgb)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Path { path, color } => Some((path, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Point, Point)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    /// Index of the first text op drawing exactly `text`.
    pub fn position_of_text(&self, text: &str) -> Option<usize> {
        self.ops
            .iter()
            .position(|op| matches!(op, Op::Text { text: t, .. } if t == text))
    }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.ops.push(Op::Save);
    }

    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(Op::Restore);
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.ops.push(Op::Translate { dx, dy });
    }

    fn concat(&mut self, transform: &Transform) {
        self.ops.push(Op::Concat(*transform));
    }

    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let size = self.font.size;
        TextMetrics {
            width: text.chars().count() as f32 * size * 0.5,
            ascent: size * 0.75,
            descent: size * 0.25,
            height: size * 1.2,
        }
    }

    fn fill_rect(&mut self, rect: RectI32) {
        self.ops.push(Op::FillRect { rect, color: self.color });
    }

    fn stroke_rect(&mut self, rect: RectI32) {
        self.ops.push(Op::StrokeRect { rect, color: self.color });
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.ops.push(Op::Line { from, to, color: self.color });
    }

    fn stroke_path(&mut self, path: &Path) {
        self.ops.push(Op::Path { path: path.clone(), color: self.color });
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            at,
            color: self.color,
            font: self.font.clone(),
        });
    }
}
