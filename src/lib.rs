//! chart-dragzone: drag-to-select rectangles for interactive 2D charts.
//!
//! A host chart forwards raw pointer events to `DragSelectionController`,
//! which tracks the gesture, paints a translucent overlay during the drag and
//! reports the plotted points inside the final rectangle.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DragSelectionConfig, DragSelectionController, SelectionOverrides, SelectionResult};
pub use error::{ChartError, ChartResult};
