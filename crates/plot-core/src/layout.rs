// File: crates/plot-core/src/layout.rs
// Summary: Partition of the placed plot rectangle into title, graph, legend and caption regions.
// Notes:
// - Recomputed on every draw; nothing here is cached across data changes.
// - The y-axis label reserve is the fixed YAXIS_OFFSET on both sides.

use crate::geometry::{Point, RectI32};
use crate::surface::TextMetrics;
use crate::types::{GRAPH_GAP, LEGEND_GAP, YAXIS_OFFSET};

/// Band heights taken from the plot options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bands {
    pub title_h: i32,
    pub caption_h: i32,
    pub legend_h: i32,
}

/// Sub-regions in plot-local coordinates (origin at the placed top-left).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotLayout {
    pub width: i32,
    pub height: i32,
    pub title: RectI32,
    /// Data area. `graph.bottom` sits above the caption band only; the legend
    /// and x labels hang below it.
    pub graph: RectI32,
    pub legend: RectI32,
    pub caption: RectI32,
}

impl PlotLayout {
    pub fn compute(width: i32, height: i32, bands: Bands) -> Self {
        let graph = RectI32::from_ltrb(
            YAXIS_OFFSET,
            bands.title_h + GRAPH_GAP,
            width - YAXIS_OFFSET,
            height - bands.title_h - bands.caption_h,
        );
        Self {
            width,
            height,
            title: RectI32::from_ltwh(0, 0, width, bands.title_h),
            graph,
            legend: RectI32::from_ltwh(0, graph.bottom + LEGEND_GAP, width, bands.legend_h),
            caption: RectI32::from_ltrb(0, height - bands.caption_h, width, height),
        }
    }

    /// Whether the data area has room to draw into.
    pub fn graph_is_drawable(&self) -> bool {
        !self.graph.is_empty()
    }

    pub fn legend_baseline(&self) -> i32 {
        self.legend.bottom + LEGEND_GAP
    }

    /// Baseline-left origin that centers text with `metrics` inside `band`.
    /// Used for the caption too, so its baseline sits half the ascent below
    /// the band's middle rather than being offset by the full text height.
    pub fn centered_in(band: RectI32, metrics: TextMetrics) -> Point {
        let x = band.left + (band.width() as f32 / 2.0 - metrics.width / 2.0) as i32;
        let y = band.top + (band.height() as f32 / 2.0 + metrics.ascent / 2.0) as i32;
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BANDS: Bands = Bands { title_h: 50, caption_h: 25, legend_h: 25 };

    #[test]
    fn graph_edges_follow_band_heights() {
        let l = PlotLayout::compute(200, 150, BANDS);
        assert_eq!(l.graph, RectI32::from_ltrb(50, 53, 150, 75));
        assert_eq!(l.legend.top, 80);
        assert_eq!(l.legend_baseline(), 110);
        assert_eq!(l.caption, RectI32::from_ltrb(0, 125, 200, 150));
        assert!(l.graph_is_drawable());
    }

    #[test]
    fn tiny_plot_has_no_drawable_graph() {
        let l = PlotLayout::compute(90, 80, BANDS);
        assert!(!l.graph_is_drawable());
    }

    #[test]
    fn centering_uses_width_and_ascent() {
        let m = TextMetrics { width: 40.0, ascent: 12.0, descent: 4.0, height: 19.2 };
        let p = PlotLayout::centered_in(RectI32::from_ltwh(0, 0, 200, 50), m);
        assert_eq!(p, Point::new(80, 31));
    }
}
