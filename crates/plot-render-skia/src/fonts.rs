// File: crates/plot-render-skia/src/fonts.rs
// Summary: Typeface resolution with family fallbacks, cached per (family, weight).

use std::collections::HashMap;

use log::debug;
use plot_core::{FontSpec, FontWeight};
use skia_safe as skia;

const FALLBACK_FAMILIES: &[&str] = &["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct FontBook {
    mgr: skia::FontMgr,
    cache: HashMap<(String, FontWeight), Option<skia::Typeface>>,
}

impl Default for FontBook {
    fn default() -> Self {
        Self::new()
    }
}

impl FontBook {
    pub fn new() -> Self {
        Self { mgr: skia::FontMgr::default(), cache: HashMap::new() }
    }

    /// Font for `spec`. Unknown families fall back to common sans faces and
    /// finally to Skia's default font.
    pub fn font(&mut self, spec: &FontSpec) -> skia::Font {
        let size = spec.size.max(1.0);
        match self.typeface(&spec.family, spec.weight) {
            Some(tf) => skia::Font::from_typeface(tf, size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }

    fn typeface(&mut self, family: &str, weight: FontWeight) -> Option<skia::Typeface> {
        let key = (family.to_string(), weight);
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }
        let style = match weight {
            FontWeight::Bold => skia::FontStyle::bold(),
            FontWeight::Normal => skia::FontStyle::normal(),
        };
        let found = std::iter::once(family)
            .chain(FALLBACK_FAMILIES.iter().copied())
            .find_map(|name| self.mgr.match_family_style(name, style).map(|tf| (name, tf)));
        let resolved = match found {
            Some((name, tf)) => {
                if name != family {
                    debug!("font family '{family}' unavailable; using '{name}'");
                }
                Some(tf)
            }
            None => self.mgr.legacy_make_typeface(None, style),
        };
        self.cache.insert(key, resolved.clone());
        resolved
    }
}
