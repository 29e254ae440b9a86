// File: crates/plot-core/src/scale.rs
// Summary: Sample-index (X) and value (Y) scale transforms from data space to whole pixels.

/// Horizontal scale: visible sample offset to pixel x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleScale {
    pub left_px: i32,
    /// Pixels between neighbouring samples (`span / (R - 1)`).
    pub px_per_sample: f64,
}

impl SampleScale {
    /// Scale spreading `samples` visible samples over `span_px` pixels.
    /// Fewer than two samples is treated as two, so a lone sample sits at
    /// the left edge.
    pub fn new(left_px: i32, span_px: i32, samples: usize) -> Self {
        let gaps = samples.max(2) - 1;
        Self { left_px, px_per_sample: span_px as f64 / gaps as f64 }
    }

    #[inline]
    pub fn to_px(&self, offset: usize) -> i32 {
        self.left_px + (offset as f64 * self.px_per_sample).round() as i32
    }
}

/// Vertical scale: value to pixel y, increasing values going up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub bottom_px: i32,
    pub vmin: f64,
    pub vmax: f64,
    /// Pixels per value unit (`height / (max - min)`).
    pub px_per_unit: f64,
}

impl ValueScale {
    /// `None` when the value span is empty, inverted or not finite.
    pub fn new(top_px: i32, bottom_px: i32, vmin: f64, vmax: f64) -> Option<Self> {
        let span = vmax - vmin;
        if !span.is_finite() || span <= 0.0 {
            return None;
        }
        let height = (bottom_px - top_px) as f64;
        Some(Self { bottom_px, vmin, vmax, px_per_unit: height / span })
    }

    /// Values far outside `[vmin, vmax]` saturate at the i32 range.
    #[inline]
    pub fn to_px(&self, v: f64) -> i32 {
        let y = f64::from(self.bottom_px) - ((v - self.vmin) * self.px_per_unit).round();
        y.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
    }
}
