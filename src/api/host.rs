use serde::{Deserialize, Serialize};

use crate::core::{ChartArea, ChartId, SeriesPoint, SurfaceBounds};

/// Identity of one registered pointer listener.
///
/// Hosts receive ids through `PointerEventSource::subscribe` and hand them
/// back to `DragSelectionController::dispatch` with each raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Where a listener is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerTarget {
    /// The chart drawing surface itself.
    Surface,
    /// The document owning the surface, so releases outside the chart are seen.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// Named listener registration; subscribe and unsubscribe use the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerBinding {
    pub id: ListenerId,
    pub kind: PointerEventKind,
    pub target: ListenerTarget,
}

/// Why the controller asks the host for a redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RedrawReason {
    /// Live overlay update while dragging; already throttled.
    DragProgress,
    /// Gesture ended; the overlay must disappear right away.
    DragFinished,
}

/// Subscribe/unsubscribe surface for raw pointer input.
pub trait PointerEventSource {
    fn subscribe(&mut self, binding: ListenerBinding);
    fn unsubscribe(&mut self, binding: ListenerBinding);
}

/// Read-only access to plotted series and their resolved screen positions.
pub trait SeriesSource {
    fn series_count(&self) -> usize;

    /// Points of one series in plotting order, `None` when the index is unknown.
    fn series_points(&self, series_index: usize) -> Option<&[SeriesPoint]>;
}

/// Chart instance as seen by the selection controller.
pub trait ChartHost: PointerEventSource + SeriesSource {
    fn chart_id(&self) -> ChartId;
    fn surface_bounds(&self) -> SurfaceBounds;
    fn chart_area(&self) -> ChartArea;
    fn request_redraw(&mut self, reason: RedrawReason);
}
