mod primitives;
mod recording_surface;

pub use primitives::{Color, RectPrimitive};
pub use recording_surface::{RecordingSurface, SurfaceCommand};

use crate::error::ChartResult;

/// Contract implemented by any 2D surface the selection overlay paints on.
///
/// Style mutations made between `save` and `restore` must not leak into
/// drawing that happens after `restore`.
pub trait DrawingSurface {
    fn save(&mut self) -> ChartResult<()>;
    fn restore(&mut self) -> ChartResult<()>;
    fn begin_path(&mut self);
    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoOverlaySurface, CairoSurfaceStats};
