// File: crates/plot-core/src/series.rs
// Summary: Series model and the fixed-capacity series store (add/delete/find by name).
// Notes:
// - Slots are contiguous: deleting one shifts later series down, so a slot index
//   is only valid until the next delete. Use `find_by_name` for a stable handle.

use log::debug;

use crate::error::{PlotError, Result};
use crate::options::MissingPolicy;
use crate::theme::{palette_color, ColorLookup};
use crate::types::{Rgb, MAX_SERIES};

/// Per-series color override.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorSpec {
    /// Resolved through the plot's [`ColorLookup`] when the series is added.
    Named(String),
    Rgb(Rgb),
}

/// Caller input for [`SeriesStore::add`]. Required fields are optional here so
/// that missing ones are reported as errors instead of being unrepresentable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSpec {
    pub values: Option<Vec<Option<f64>>>,
    pub x_labels: Option<Vec<String>>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub short_name: Option<String>,
    pub long_name: Option<String>,
    pub color: Option<ColorSpec>,
}

impl SeriesSpec {
    /// Spec with every required field set. `None` samples are gaps.
    pub fn new(
        short_name: impl Into<String>,
        values: impl IntoIterator<Item = Option<f64>>,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            values: Some(values.into_iter().collect()),
            min: Some(min),
            max: Some(max),
            short_name: Some(short_name.into()),
            ..Self::default()
        }
    }

    /// Same as [`SeriesSpec::new`] for data without gaps.
    pub fn dense(short_name: impl Into<String>, values: &[f64], min: f64, max: f64) -> Self {
        Self::new(short_name, values.iter().copied().map(Some), min, max)
    }

    pub fn with_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.x_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_long_name(mut self, long_name: impl Into<String>) -> Self {
        self.long_name = Some(long_name.into());
        self
    }

    pub fn with_color_name(mut self, name: impl Into<String>) -> Self {
        self.color = Some(ColorSpec::Named(name.into()));
        self
    }

    pub fn with_rgb(mut self, color: Rgb) -> Self {
        self.color = Some(ColorSpec::Rgb(color));
        self
    }
}

/// A resident series.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub values: Vec<Option<f64>>,
    pub x_labels: Vec<String>,
    pub min: f64,
    pub max: f64,
    pub short_name: String,
    pub long_name: String,
    pub color: Rgb,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at `idx`; `None` for gaps, non-finite samples and indices
    /// past the end.
    pub fn sample(&self, idx: usize) -> Option<f64> {
        self.values.get(idx).copied().flatten().filter(|v| v.is_finite())
    }

    pub fn label(&self, idx: usize) -> Option<&str> {
        self.x_labels.get(idx).map(String::as_str)
    }

    /// Value to plot at `idx` under `policy`; `None` means the line breaks.
    pub fn resolved(&self, idx: usize, policy: MissingPolicy) -> Option<f64> {
        match (self.sample(idx), policy) {
            (Some(v), _) => Some(v),
            (None, MissingPolicy::Skip) => None,
            (None, MissingPolicy::Min) => Some(self.min),
            (None, MissingPolicy::Max) => Some(self.max),
        }
    }

    fn from_spec(spec: SeriesSpec, slot: usize, colors: &dyn ColorLookup) -> Result<Self> {
        let values = spec
            .values
            .ok_or_else(|| PlotError::invalid("add: missing an array of values"))?;
        let (min, max) = match (spec.min, spec.max) {
            (Some(min), Some(max)) => (min, max),
            _ => return Err(PlotError::invalid("add: missing min or max")),
        };
        if !min.is_finite() || !max.is_finite() {
            return Err(PlotError::invalid(format!("add: min/max must be finite (got {min}, {max})")));
        }
        let short_name = spec
            .short_name
            .ok_or_else(|| PlotError::invalid("add: missing name"))?;
        let color = match spec.color {
            None => palette_color(slot),
            Some(ColorSpec::Rgb(rgb)) => rgb,
            Some(ColorSpec::Named(name)) => colors
                .lookup(&name)
                .ok_or_else(|| PlotError::invalid(format!("add: '{name}' is not a known color")))?,
        };
        let x_labels = spec
            .x_labels
            .unwrap_or_else(|| (1..=values.len()).map(|i| i.to_string()).collect());
        let long_name = spec.long_name.unwrap_or_else(|| short_name.clone());
        Ok(Self { values, x_labels, min, max, short_name, long_name, color })
    }
}

/// Up to [`MAX_SERIES`] series in contiguous slots.
#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    slots: Vec<Series>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self { slots: Vec::with_capacity(MAX_SERIES) }
    }

    /// Validate `spec` and append it. Returns the slot it landed in.
    /// The store is untouched on error.
    pub fn add(&mut self, spec: SeriesSpec, colors: &dyn ColorLookup) -> Result<usize> {
        if self.is_full() {
            return Err(PlotError::invalid(format!("maximum of {MAX_SERIES} series")));
        }
        let slot = self.slots.len();
        let series = Series::from_spec(spec, slot, colors)?;
        debug!("series '{}' added at slot {} ({} samples)", series.short_name, slot, series.len());
        self.slots.push(series);
        Ok(slot)
    }

    /// Remove the series at `slot`; later slots shift down by one.
    pub fn delete(&mut self, slot: usize) -> Result<Series> {
        if slot >= self.slots.len() {
            return Err(PlotError::invalid(format!(
                "delete: slot {slot} is out of range (count {})",
                self.slots.len()
            )));
        }
        let removed = self.slots.remove(slot);
        debug!("series '{}' deleted from slot {}", removed.short_name, slot);
        Ok(removed)
    }

    /// First slot whose short name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|s| s.short_name == name)
    }

    pub fn count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= MAX_SERIES
    }

    pub fn get(&self, slot: usize) -> Option<&Series> {
        self.slots.get(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.slots.iter()
    }

    /// Sample count of the longest resident series.
    pub fn max_len(&self) -> usize {
        self.slots.iter().map(Series::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::CssColors;

    #[test]
    fn resolved_applies_policy_to_gaps_and_tail() {
        let s = Series::from_spec(SeriesSpec::new("a", [Some(1.0), None], -2.0, 9.0), 0, &CssColors).unwrap();
        assert_eq!(s.resolved(0, MissingPolicy::Skip), Some(1.0));
        assert_eq!(s.resolved(1, MissingPolicy::Skip), None);
        assert_eq!(s.resolved(1, MissingPolicy::Min), Some(-2.0));
        assert_eq!(s.resolved(5, MissingPolicy::Max), Some(9.0));
    }

    #[test]
    fn non_finite_samples_are_gaps() {
        let values = [Some(f64::NAN), Some(f64::NEG_INFINITY), Some(2.0)];
        let s = Series::from_spec(SeriesSpec::new("a", values, 0.0, 4.0), 0, &CssColors).unwrap();
        assert_eq!(s.sample(0), None);
        assert_eq!(s.resolved(1, MissingPolicy::Skip), None);
        assert_eq!(s.resolved(1, MissingPolicy::Max), Some(4.0));
        assert_eq!(s.sample(2), Some(2.0));
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let mut store = SeriesStore::new();
        let err = store.add(SeriesSpec::dense("a", &[1.0], 0.0, f64::NAN), &CssColors);
        assert!(err.is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn explicit_rgb_override_wins() {
        let mut store = SeriesStore::new();
        let c = Rgb::new(0.2, 0.3, 0.4);
        store.add(SeriesSpec::dense("a", &[1.0], 0.0, 2.0).with_rgb(c), &CssColors).unwrap();
        assert_eq!(store.get(0).unwrap().color, c);
    }
}
