mod controller;
mod host;
mod options;
mod selection;
mod snapshot;

pub use crate::interaction::DEFAULT_REDRAW_INTERVAL_MS;

pub use controller::DragSelectionController;
pub use host::{
    ChartHost, ListenerBinding, ListenerId, ListenerTarget, PointerEventKind, PointerEventSource,
    RedrawReason, SeriesSource,
};
pub use options::{
    DEFAULT_SELECTION_COLOR, DEFAULT_SELECTION_FILL, DragSelectionCallback, DragSelectionConfig,
    SELECTION_DEFAULTS, SelectionDefaults, SelectionOptions, SelectionOverrides,
    merge_selection_options,
};
pub use selection::{SelectedPoint, SelectionResult, SeriesSelection, collect_selection};
pub use snapshot::{
    DRAG_SESSION_SNAPSHOT_JSON_SCHEMA_V1, DragSessionSnapshot, DragSessionSnapshotJsonContractV1,
};
