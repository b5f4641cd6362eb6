pub mod geometry;
pub mod types;

pub use geometry::{
    DragDirection, DragRectangle, contains_point, is_click_only, normalize_rectangle,
    resolve_drag_rectangle, to_local_position,
};
pub use types::{ChartArea, ChartId, PointerPosition, SeriesPoint, SurfaceBounds};
