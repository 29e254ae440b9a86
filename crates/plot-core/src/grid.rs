// File: crates/plot-core/src/grid.rs
// Summary: Tick interval and tick position helpers for both axes.
// Notes:
// - Intervals aim at roughly `ticks` labels per axis; the exact count varies.
// - Every interval is at least 1, so tick loops always advance.

/// Interval in samples between x labels.
///
/// `ceil((span / ticks) / px_per_sample)`, where `span / ticks` is integer
/// division of pixel counts floored at 1.
pub fn x_interval(span_px: i32, ticks: u32, samples: usize) -> usize {
    let gaps = samples.max(2) - 1;
    let px_per_sample = span_px as f64 / gaps as f64;
    let cell = cell_px(span_px, ticks);
    at_least_one(cell as f64 / px_per_sample) as usize
}

/// Visible sample offsets that get an x tick and label.
pub fn x_tick_offsets(span_px: i32, ticks: u32, samples: usize) -> impl Iterator<Item = usize> {
    (0..samples).step_by(x_interval(span_px, ticks, samples))
}

/// Interval in value units between y labels, or `None` for an empty span.
pub fn y_interval(span_px: i32, ticks: u32, vmin: f64, vmax: f64) -> Option<i64> {
    let span = vmax - vmin;
    if !span.is_finite() || span <= 0.0 {
        return None;
    }
    let px_per_unit = span_px as f64 / span;
    let cell = cell_px(span_px, ticks);
    Some(at_least_one(cell as f64 / px_per_unit).min(i64::MAX as f64) as i64)
}

/// Integer values that get a y tick: `trunc(min) + 1`, stepping by the
/// interval, while below `ceil(max)`.
pub fn y_tick_values(span_px: i32, ticks: u32, vmin: f64, vmax: f64) -> Vec<i64> {
    let Some(step) = y_interval(span_px, ticks, vmin, vmax) else {
        return Vec::new();
    };
    let end = vmax.ceil() as i64;
    let mut v = (vmin.trunc() as i64).saturating_add(1);
    let mut out = Vec::new();
    while v < end {
        out.push(v);
        v = match v.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    out
}

fn cell_px(span_px: i32, ticks: u32) -> i64 {
    (i64::from(span_px) / i64::from(ticks.max(1))).max(1)
}

fn at_least_one(raw: f64) -> f64 {
    let c = raw.ceil();
    if c.is_finite() && c >= 1.0 { c } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_samples_get_sparse_labels() {
        // 300px, 8 ticks: 37px cells over 3px per sample
        assert_eq!(x_interval(300, 8, 101), 13);
        let offsets: Vec<_> = x_tick_offsets(300, 8, 101).collect();
        assert_eq!(offsets.first(), Some(&0));
        assert!(offsets.iter().all(|o| o % 13 == 0));
        assert_eq!(offsets.len(), 8);
    }

    #[test]
    fn sparse_samples_label_every_index() {
        let offsets: Vec<_> = x_tick_offsets(100, 8, 5).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn interval_never_below_one() {
        for span in [-5, 0, 1, 3, 1000] {
            for ticks in [0u32, 1, 7, 100_000] {
                for samples in [0usize, 1, 2, 50, 10_000] {
                    assert!(x_interval(span, ticks, samples) >= 1);
                }
                assert!(y_interval(span, ticks, 0.0, 1e12).unwrap() >= 1);
            }
        }
    }

    #[test]
    fn y_values_stay_inside_range() {
        // 22px high, 6 ticks: cell 3px at 1.1px/unit -> interval 3
        assert_eq!(y_interval(22, 6, 0.0, 20.0), Some(3));
        assert_eq!(y_tick_values(22, 6, 0.0, 20.0), vec![1, 4, 7, 10, 13, 16, 19]);
    }

    #[test]
    fn y_values_for_empty_span_are_empty() {
        assert!(y_tick_values(100, 6, 4.0, 4.0).is_empty());
        assert!(y_tick_values(100, 6, 4.0, -4.0).is_empty());
    }

    #[test]
    fn huge_span_terminates() {
        let v = y_tick_values(100, 6, -1e300, 1e300);
        assert!(v.len() <= 2);
    }
}
