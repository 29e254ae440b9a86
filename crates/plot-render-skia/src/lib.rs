// File: crates/plot-render-skia/src/lib.rs
// Summary: Headless Skia rendering of a plot to PNG bytes, PNG files and RGBA8 buffers.

pub mod fonts;
pub mod surface;

use anyhow::Result;
use log::debug;
use plot_core::{Placement, Plot};
use skia_safe as skia;

pub use fonts::FontBook;
pub use surface::SkiaSurface;

/// Screen resolution that `export_png` treats as scale 1.
pub const BASE_DPI: f32 = 90.0;

pub struct RenderOptions {
    /// Device pixels per plot unit.
    pub scale: f32,
    /// Clear color under the plot; only visible when the plot is hidden or transformed.
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { scale: 1.0, background: skia::Color::WHITE }
    }
}

fn device_size(plot: &Plot, scale: f32) -> (i32, i32) {
    let w = (plot.width() as f32 * scale).ceil() as i32;
    let h = (plot.height() as f32 * scale).ceil() as i32;
    (w.max(1), h.max(1))
}

fn raster(plot: &Plot, opts: &RenderOptions) -> Result<skia::Surface> {
    if !(opts.scale.is_finite() && opts.scale > 0.0) {
        anyhow::bail!("render scale must be positive (got {})", opts.scale);
    }
    let (w, h) = device_size(plot, opts.scale);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
    let canvas = surface.canvas();
    canvas.clear(opts.background);
    canvas.scale((opts.scale, opts.scale));
    let mut target = SkiaSurface::new(canvas);
    plot.render(&mut target, &Placement::origin(plot.width(), plot.height()));
    debug!("rendered plot to {w}x{h} raster");
    Ok(surface)
}

/// Render `plot` and encode it as PNG.
pub fn render_to_png_bytes(plot: &Plot, opts: &RenderOptions) -> Result<Vec<u8>> {
    let mut surface = raster(plot, opts)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    Ok(data.as_bytes().to_vec())
}

/// Render `plot` into an unpremultiplied RGBA8 buffer.
/// Returns `(pixels, width, height, row_stride)`.
pub fn render_to_rgba8(plot: &Plot, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
    let mut surface = raster(plot, opts)?;
    let (w, h) = (surface.width(), surface.height());
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        anyhow::bail!("reading raster pixels failed");
    }
    Ok((pixels, w, h, stride))
}

/// Write `plot` to a PNG file at `dpi`; 90 dpi is one device pixel per unit.
pub fn export_png(plot: &Plot, path: impl AsRef<std::path::Path>, dpi: f32) -> Result<()> {
    let opts = RenderOptions { scale: dpi / BASE_DPI, ..Default::default() };
    let bytes = render_to_png_bytes(plot, &opts)?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes)?;
    debug!("exported plot to {} at {dpi} dpi", path.display());
    Ok(())
}
