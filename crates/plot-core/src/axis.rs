// File: crates/plot-core/src/axis.rs
// Summary: Axis sides, tick orientation, and label anchoring relative to a tick.

use crate::geometry::Point;

/// Where a tick label sits relative to its tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelSide {
    /// Left y axis: label ends just left of the axis.
    Left,
    /// x axis: label centered under the tick.
    Below,
    /// Right y axis: label starts at the axis.
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOrientation {
    /// Gridline from the x axis up to the top of the data area.
    Vertical,
    /// Gridline across the data area at a y tick.
    Horizontal,
}

/// Axis used by the series in `slot`. Only the first two series get their
/// own y axis; the rest share the existing ones without ticks.
pub fn y_axis_side(slot: usize) -> Option<LabelSide> {
    match slot {
        0 => Some(LabelSide::Left),
        1 => Some(LabelSide::Right),
        _ => None,
    }
}

/// Baseline-left origin for a label of `text_width` anchored at tick `at`.
/// `line_height` is the font's line height rounded up to whole pixels.
pub fn label_origin(side: LabelSide, at: Point, text_width: i32, line_height: i32) -> Point {
    let half_down = line_height - line_height / 2;
    match side {
        LabelSide::Left => Point::new(at.x - (text_width + 3) - 1, at.y + half_down),
        LabelSide::Right => Point::new(at.x, at.y + half_down),
        LabelSide::Below => Point::new(at.x - text_width / 2, at.y + line_height + 3),
    }
}

pub fn format_tick(v: i64) -> String {
    v.to_string()
}
