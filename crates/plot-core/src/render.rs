// File: crates/plot-core/src/render.rs
// Summary: Full-repaint renderer; emits fill, title, caption, axes, legend and data polylines to a Surface.
// Notes:
// - Draw order is fixed: fill, title, caption, then (with series) frame, ticks and
//   labels, legend, data.
// - Degenerate geometry never fails a draw; the affected element is skipped.

use std::ops::Range;

use log::{trace, warn};

use crate::axis::{format_tick, label_origin, y_axis_side, LabelSide, TickOrientation};
use crate::geometry::{Point, RectI32};
use crate::grid::{x_tick_offsets, y_tick_values};
use crate::layout::PlotLayout;
use crate::options::{MissingPolicy, PlotOptions};
use crate::scale::{SampleScale, ValueScale};
use crate::series::{Series, SeriesStore};
use crate::surface::{Path, Surface};
use crate::types::LEGEND_SEPARATOR;

/// Everything one repaint reads.
pub struct Frame<'a> {
    pub layout: PlotLayout,
    pub options: &'a PlotOptions,
    pub store: &'a SeriesStore,
    /// Visible sample indices, already clamped to the data.
    pub window: Range<usize>,
}

/// Clamp a `[first, last)` window to the samples the store actually holds.
pub fn visible_window(first: usize, last: usize, store: &SeriesStore) -> Range<usize> {
    let end = last.min(store.max_len());
    first.min(end)..end
}

pub fn draw_everything(surface: &mut dyn Surface, frame: &Frame<'_>) {
    trace!(
        "draw {}x{} with {} series, window {:?}",
        frame.layout.width,
        frame.layout.height,
        frame.store.count(),
        frame.window
    );
    surface.set_line_width(1.0);
    draw_fill(surface, frame);
    draw_title(surface, frame);
    draw_caption(surface, frame);

    if frame.store.is_empty() {
        return;
    }
    if !frame.layout.graph_is_drawable() {
        warn!("plot area collapsed ({:?}); skipping axes and data", frame.layout.graph);
        return;
    }
    draw_adornments(surface, frame);
    draw_datapts(surface, frame);
}

fn draw_fill(surface: &mut dyn Surface, frame: &Frame<'_>) {
    let rect = RectI32::from_ltwh(0, 0, frame.layout.width, frame.layout.height);
    surface.set_color(frame.options.theme.background);
    surface.fill_rect(rect);
    surface.stroke_rect(rect);
    surface.set_color(frame.options.theme.frame);
}

fn draw_title(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_font(&frame.options.title_font());
    surface.set_color(frame.options.theme.label);
    let metrics = surface.measure_text(&frame.options.title);
    let at = PlotLayout::centered_in(frame.layout.title, metrics);
    surface.draw_text(&frame.options.title, at);
}

fn draw_caption(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_font(&frame.options.caption_font());
    surface.set_color(frame.options.theme.label);
    let metrics = surface.measure_text(&frame.options.caption);
    let at = PlotLayout::centered_in(frame.layout.caption, metrics);
    surface.draw_text(&frame.options.caption, at);
}

fn draw_adornments(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_color(frame.options.theme.frame);
    surface.stroke_rect(frame.layout.graph);
    draw_ticks_and_labels(surface, frame);
    draw_legend(surface, frame);
}

fn draw_ticks_and_labels(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_font(&frame.options.label_font());
    surface.set_color(frame.options.theme.label);
    draw_x_axis(surface, frame);
    for (slot, series) in frame.store.iter().enumerate() {
        let Some(side) = y_axis_side(slot) else { break };
        draw_y_axis(surface, frame, series, side);
    }
}

fn draw_x_axis(surface: &mut dyn Surface, frame: &Frame<'_>) {
    let graph = frame.layout.graph;
    let samples = frame.window.len();
    if samples == 0 {
        warn!("empty sample window {:?}; no x axis labels", frame.window);
        return;
    }
    // series 0 supplies the x categories for every series
    let Some(labels) = frame.store.get(0) else { return };
    let scale = SampleScale::new(graph.left, graph.width(), samples);
    for offset in x_tick_offsets(graph.width(), frame.options.x_ticks, samples) {
        let at = Point::new(scale.to_px(offset), graph.bottom);
        let text = labels.label(frame.window.start + offset).unwrap_or(" ");
        draw_tick(surface, frame, at, TickOrientation::Vertical, LabelSide::Below);
        draw_label(surface, at, text, LabelSide::Below);
    }
}

fn draw_y_axis(surface: &mut dyn Surface, frame: &Frame<'_>, series: &Series, side: LabelSide) {
    let graph = frame.layout.graph;
    let Some(scale) = ValueScale::new(graph.top, graph.bottom, series.min, series.max) else {
        warn!("series '{}' has an empty value range; no y axis", series.short_name);
        return;
    };
    let x = match side {
        LabelSide::Right => graph.right,
        _ => graph.left,
    };
    for v in y_tick_values(graph.height(), frame.options.y_ticks, series.min, series.max) {
        let at = Point::new(x, scale.to_px(v as f64));
        draw_tick(surface, frame, at, TickOrientation::Horizontal, side);
        draw_label(surface, at, &format_tick(v), side);
    }
}

/// Gridline through a tick; only drawn with `auto_grid`.
fn draw_tick(
    surface: &mut dyn Surface,
    frame: &Frame<'_>,
    at: Point,
    orientation: TickOrientation,
    side: LabelSide,
) {
    if !frame.options.auto_grid {
        return;
    }
    let graph = frame.layout.graph;
    let to = match (orientation, side) {
        (TickOrientation::Vertical, _) => Point::new(at.x, graph.top),
        (TickOrientation::Horizontal, LabelSide::Right) => Point::new(graph.left, at.y),
        (TickOrientation::Horizontal, _) => Point::new(graph.right, at.y),
    };
    surface.draw_line(at, to);
}

fn draw_label(surface: &mut dyn Surface, at: Point, text: &str, side: LabelSide) {
    let metrics = surface.measure_text(text);
    let origin = label_origin(side, at, metrics.width as i32, metrics.height.ceil() as i32);
    surface.draw_text(text, origin);
}

fn draw_legend(surface: &mut dyn Surface, frame: &Frame<'_>) {
    surface.set_font(&frame.options.legend_font());
    let block: String = frame
        .store
        .iter()
        .map(|s| format!("{}{}", s.long_name, LEGEND_SEPARATOR))
        .collect();
    let total = surface.measure_text(&block).width;
    let y = frame.layout.legend_baseline();
    let mut pen = frame.layout.legend.left as f32 + (frame.layout.legend.width() as f32 - total) / 2.0;
    for series in frame.store.iter() {
        surface.set_color(series.color);
        surface.draw_text(&series.long_name, Point::new(pen as i32, y));
        pen += surface
            .measure_text(&format!("{}{}", series.long_name, LEGEND_SEPARATOR))
            .width;
    }
    surface.set_color(frame.options.theme.frame);
}

fn draw_datapts(surface: &mut dyn Surface, frame: &Frame<'_>) {
    let graph = frame.layout.graph;
    let samples = frame.window.len();
    if samples == 0 {
        return;
    }
    let xs = SampleScale::new(graph.left, graph.width(), samples);
    for series in frame.store.iter() {
        let Some(ys) = ValueScale::new(graph.top, graph.bottom, series.min, series.max) else {
            warn!("series '{}' has an empty value range; not drawn", series.short_name);
            continue;
        };
        let path = series_path(series, frame.window.clone(), frame.options.missing, &xs, &ys);
        if path.is_empty() {
            continue;
        }
        surface.set_color(series.color);
        surface.stroke_path(&path);
    }
    surface.set_color(frame.options.theme.frame);
}

/// Polyline for the visible part of `series`. Gaps either break the line or
/// are clamped, per `policy`; the line ends with the series' own samples.
pub fn series_path(
    series: &Series,
    window: Range<usize>,
    policy: MissingPolicy,
    xs: &SampleScale,
    ys: &ValueScale,
) -> Path {
    let mut path = Path::new();
    let mut pen_down = false;
    for (offset, idx) in window.enumerate() {
        if idx >= series.len() {
            break;
        }
        let Some(v) = series.resolved(idx, policy) else {
            pen_down = false;
            continue;
        };
        let p = Point::new(xs.to_px(offset), ys.to_px(v));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    path
}
