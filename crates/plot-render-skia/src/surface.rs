// File: crates/plot-render-skia/src/surface.rs
// Summary: `Surface` implementation over a Skia canvas.

use plot_core::{FontSpec, FontWeight, Path, PathCmd, Point, RectI32, Rgb, Surface, TextMetrics, Transform};
use skia_safe as skia;

use crate::fonts::FontBook;

pub struct SkiaSurface<'a> {
    canvas: &'a skia::Canvas,
    paint: skia::Paint,
    font: skia::Font,
    fonts: FontBook,
}

impl<'a> SkiaSurface<'a> {
    pub fn new(canvas: &'a skia::Canvas) -> Self {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);
        let mut fonts = FontBook::new();
        let font = fonts.font(&FontSpec::new("Helvetica", 12.0, FontWeight::Normal));
        Self { canvas, paint, font, fonts }
    }

    fn stroke(&self) -> skia::Paint {
        let mut p = self.paint.clone();
        p.set_style(skia::paint::Style::Stroke);
        p
    }

    fn fill(&self) -> skia::Paint {
        let mut p = self.paint.clone();
        p.set_style(skia::paint::Style::Fill);
        p
    }
}

fn to_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn to_point(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

impl Surface for SkiaSurface<'_> {
    fn save(&mut self) {
        self.canvas.save();
    }

    fn restore(&mut self) {
        self.canvas.restore();
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.canvas.translate((dx as f32, dy as f32));
    }

    fn concat(&mut self, t: &Transform) {
        let m = skia::Matrix::new_all(
            t.a as f32, t.c as f32, t.e as f32,
            t.b as f32, t.d as f32, t.f as f32,
            0.0, 0.0, 1.0,
        );
        self.canvas.concat(&m);
    }

    fn set_color(&mut self, color: Rgb) {
        let (r, g, b) = color.to_u8();
        self.paint.set_color(skia::Color::from_rgb(r, g, b));
    }

    fn set_line_width(&mut self, width: f32) {
        self.paint.set_stroke_width(width);
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = self.fonts.font(font);
    }

    fn measure_text(&mut self, text: &str) -> TextMetrics {
        let (width, _bounds) = self.font.measure_str(text, None);
        let (spacing, m) = self.font.metrics();
        TextMetrics { width, ascent: -m.ascent, descent: m.descent, height: spacing }
    }

    fn fill_rect(&mut self, rect: RectI32) {
        self.canvas.draw_rect(to_rect(rect), &self.fill());
    }

    fn stroke_rect(&mut self, rect: RectI32) {
        self.canvas.draw_rect(to_rect(rect), &self.stroke());
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.canvas.draw_line(to_point(from), to_point(to), &self.stroke());
    }

    fn stroke_path(&mut self, path: &Path) {
        let mut sk = skia::PathBuilder::new();
        for cmd in path.commands() {
            match *cmd {
                PathCmd::MoveTo(p) => {
                    sk.move_to(to_point(p));
                }
                PathCmd::LineTo(p) => {
                    sk.line_to(to_point(p));
                }
            }
        }
        self.canvas.draw_path(&sk.detach(), &self.stroke());
    }

    fn draw_text(&mut self, text: &str, at: Point) {
        self.canvas.draw_str(text, to_point(at), &self.font, &self.fill());
    }
}
