// File: crates/plot-core/src/plot.rs
// Summary: Plot widget controller; owns options, series and range window, and talks to its host.
// Notes:
// - Mutations request a repaint from the host instead of drawing; the host
//   later calls `draw` with the placement it computed.
// - Range setters leave redraw to the caller (`redraw_to` is the exception).

use log::{debug, trace};

use crate::error::{PlotError, Result};
use crate::geometry::{Placement, RectI32, Transform};
use crate::interaction::{HoverState, MouseButton};
use crate::layout::{Bands, PlotLayout};
use crate::options::PlotOptions;
use crate::render::{draw_everything, visible_window, Frame};
use crate::series::{Series, SeriesSpec, SeriesStore};
use crate::surface::Surface;
use crate::theme::{ColorLookup, CssColors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Arrow,
    /// Pointer over something clickable.
    Link,
}

/// The container that owns a plot.
pub trait Host {
    /// Schedule a full redraw at some later point. Fire and forget.
    fn repaint(&self);
    fn set_cursor(&self, _cursor: Cursor) {}
    /// Drop the plot from the container's contents.
    fn detach(&self) {}
}

/// Host that ignores every request, for headless rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl Host for NullHost {
    fn repaint(&self) {}
}

/// Callback receiving the plot that fired it.
pub type Handler = Box<dyn FnMut(&Plot)>;

pub struct Plot {
    host: Option<Box<dyn Host>>,
    width: i32,
    height: i32,
    options: PlotOptions,
    store: SeriesStore,
    first: usize,
    last: usize,
    hover: HoverState,
    transform: Transform,
    bounds: Option<RectI32>,
    colors: Box<dyn ColorLookup>,
    on_click: Option<Handler>,
    on_release: Option<Handler>,
}

impl Plot {
    pub fn new(host: impl Host + 'static, width: i32, height: i32, options: PlotOptions) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::invalid(format!("plot size must be positive (got {width}x{height})")));
        }
        options.validate()?;
        Ok(Self {
            host: Some(Box::new(host)),
            width,
            height,
            options,
            store: SeriesStore::new(),
            first: 0,
            last: 0,
            hover: HoverState::Idle,
            transform: Transform::IDENTITY,
            bounds: None,
            colors: Box::new(CssColors),
            on_click: None,
            on_release: None,
        })
    }

    /// Replace the color name resolver used by `add`.
    pub fn with_color_lookup(mut self, colors: impl ColorLookup + 'static) -> Self {
        self.colors = Box::new(colors);
        self
    }

    pub fn on_click(&mut self, handler: impl FnMut(&Plot) + 'static) {
        self.on_click = Some(Box::new(handler));
    }

    pub fn on_release(&mut self, handler: impl FnMut(&Plot) + 'static) {
        self.on_release = Some(Box::new(handler));
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn options(&self) -> &PlotOptions { &self.options }
    pub fn hover_state(&self) -> HoverState { self.hover }
    pub fn transform(&self) -> Transform { self.transform }

    // ---- series -------------------------------------------------------------

    /// Add a series at the next free slot and reset the window to all of its
    /// samples. Returns the slot.
    pub fn add(&mut self, spec: SeriesSpec) -> Result<usize> {
        let slot = self.store.add(spec, self.colors.as_ref())?;
        self.first = 0;
        self.last = self.store.get(slot).map_or(0, Series::len);
        self.request_repaint();
        Ok(slot)
    }

    /// Remove the series at `slot`; later series move down one slot.
    pub fn delete(&mut self, slot: usize) -> Result<()> {
        self.store.delete(slot)?;
        self.request_repaint();
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.store.find_by_name(name)
    }

    pub fn series_count(&self) -> usize {
        self.store.count()
    }

    pub fn series(&self, slot: usize) -> Option<&Series> {
        self.store.get(slot)
    }

    pub fn series_store(&self) -> &SeriesStore {
        &self.store
    }

    // ---- range window ---------------------------------------------------------

    pub fn first(&self) -> usize { self.first }
    pub fn last(&self) -> usize { self.last }

    pub fn set_first(&mut self, first: usize) -> Result<()> {
        self.set_range(first, self.last)
    }

    pub fn set_last(&mut self, last: usize) -> Result<()> {
        self.set_range(self.first, last)
    }

    /// Set both window ends. Rejects `first > last`; does not repaint.
    pub fn set_range(&mut self, first: usize, last: usize) -> Result<()> {
        if first > last {
            return Err(PlotError::invalid(format!("range start {first} is past its end {last}")));
        }
        self.first = first;
        self.last = last;
        debug!("range window set to {first}..{last}");
        Ok(())
    }

    /// Move the window end to `last` and repaint, for progressively drawn data.
    pub fn redraw_to(&mut self, last: usize) -> Result<()> {
        self.set_last(last)?;
        self.request_repaint();
        Ok(())
    }

    // ---- visibility, transform, detach -----------------------------------------

    pub fn is_hidden(&self) -> bool {
        self.options.hidden
    }

    pub fn hide(&mut self) {
        self.options.hidden = true;
        self.request_repaint();
    }

    pub fn show(&mut self) {
        self.options.hidden = false;
        self.request_repaint();
    }

    pub fn rotate(&mut self, degrees: f64) {
        self.transform.rotate(degrees);
        self.request_repaint();
    }

    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.transform.scale(sx, sy);
        self.request_repaint();
    }

    pub fn skew(&mut self, x_degrees: f64, y_degrees: f64) {
        self.transform.skew(x_degrees, y_degrees);
        self.request_repaint();
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.transform.translate(dx, dy);
        self.request_repaint();
    }

    pub fn reset_transform(&mut self) {
        self.transform = Transform::IDENTITY;
        self.request_repaint();
    }

    pub fn is_attached(&self) -> bool {
        self.host.is_some()
    }

    /// Detach from the host. Calling it again does nothing.
    pub fn remove(&mut self) {
        if let Some(host) = self.host.take() {
            debug!("plot detached from host");
            host.detach();
            host.repaint();
        }
    }

    fn request_repaint(&self) {
        if let Some(host) = &self.host {
            host.repaint();
        }
    }

    // ---- drawing ------------------------------------------------------------------

    /// Host repaint entry point. Remembers `placement` for hit testing.
    pub fn draw(&mut self, surface: &mut dyn Surface, placement: &Placement) {
        if self.options.hidden {
            return;
        }
        self.bounds = Some(placement.rect());
        self.render(surface, placement);
    }

    /// Draw without touching interaction state, e.g. onto an offscreen surface.
    pub fn render(&self, surface: &mut dyn Surface, placement: &Placement) {
        if self.options.hidden {
            trace!("plot hidden; draw skipped");
            return;
        }
        let bands = Bands {
            title_h: self.options.title_h,
            caption_h: self.options.caption_h,
            legend_h: self.options.legend_h,
        };
        let frame = Frame {
            layout: PlotLayout::compute(placement.width, placement.height, bands),
            options: &self.options,
            store: &self.store,
            window: visible_window(self.first, self.last, &self.store),
        };
        surface.save();
        surface.translate(placement.x, placement.y);
        if !self.transform.is_identity() {
            surface.concat(&self.transform);
        }
        draw_everything(surface, &frame);
        surface.restore();
    }

    // ---- interaction ----------------------------------------------------------------

    /// Area that counts as "inside": the last placement, or the requested
    /// size at the origin before the first draw.
    pub fn bounds(&self) -> RectI32 {
        self.bounds
            .unwrap_or_else(|| RectI32::from_ltwh(0, 0, self.width, self.height))
    }

    /// Pointer moved to `(x, y)`. Returns whether it is over the plot.
    pub fn motion(&mut self, x: i32, y: i32) -> bool {
        let inside = self.bounds().contains(x, y);
        let entered = inside && !self.hover.is_hovered();
        self.hover = self.hover.on_motion(inside);
        if entered && (self.on_click.is_some() || self.on_release.is_some()) {
            if let Some(host) = &self.host {
                host.set_cursor(Cursor::Link);
            }
        }
        inside
    }

    pub fn press(&mut self, button: MouseButton, x: i32, y: i32) {
        if button != MouseButton::Primary {
            return;
        }
        self.motion(x, y);
        if !self.hover.is_hovered() {
            return;
        }
        self.hover = self.hover.on_press();
        if let Some(mut handler) = self.on_click.take() {
            handler(&*self);
            self.on_click = Some(handler);
        }
    }

    /// Completes a click pressed inside the plot, wherever the pointer is now.
    pub fn release(&mut self, button: MouseButton, _x: i32, _y: i32) {
        if button != MouseButton::Primary {
            return;
        }
        let (next, clicked) = self.hover.on_release();
        self.hover = next;
        if !clicked {
            return;
        }
        if let Some(mut handler) = self.on_release.take() {
            handler(&*self);
            self.on_release = Some(handler);
        }
    }
}
