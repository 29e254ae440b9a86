// File: crates/plot-core/src/lib.rs
// Summary: Core library entry point; exports the plot widget API, layout, scaling and surface traits.

pub mod error;
pub mod types;
pub mod geometry;
pub mod theme;
pub mod options;
pub mod series;
pub mod scale;
pub mod grid;
pub mod axis;
pub mod layout;
pub mod surface;
pub mod record;
pub mod render;
pub mod interaction;
pub mod plot;

pub use error::{PlotError, Result};
pub use types::{Rgb, MAX_SERIES};
pub use geometry::{Placement, Point, RectI32, Transform};
pub use theme::{ColorLookup, CssColors, Theme, PALETTE};
pub use options::{MissingPolicy, PlotOptions};
pub use series::{ColorSpec, Series, SeriesSpec, SeriesStore};
pub use layout::PlotLayout;
pub use surface::{FontSpec, FontWeight, Path, PathCmd, Surface, TextMetrics};
pub use record::{Op, RecordingSurface};
pub use interaction::{HoverState, MouseButton};
pub use plot::{Cursor, Host, NullHost, Plot};
