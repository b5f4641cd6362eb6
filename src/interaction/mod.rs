use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::PointerPosition;

mod throttle;

pub use throttle::{DEFAULT_REDRAW_INTERVAL, DEFAULT_REDRAW_INTERVAL_MS, RedrawThrottle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragMode {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Raw pointer event as delivered by the host input system.
///
/// Coordinates are client-space; `timestamp` is read from a monotonic host
/// clock and drives redraw throttling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
    pub button: PointerButton,
    pub timestamp: Duration,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(client_x: f64, client_y: f64, timestamp: Duration) -> Self {
        Self {
            client_x,
            client_y,
            button: PointerButton::Primary,
            timestamp,
        }
    }

    #[must_use]
    pub const fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// Per-chart drag state.
///
/// `current` is only populated while the session is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    mode: DragMode,
    anchor: Option<PointerPosition>,
    current: Option<PointerPosition>,
}

impl DragSession {
    #[must_use]
    pub fn mode(self) -> DragMode {
        self.mode
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self.mode == DragMode::Dragging
    }

    #[must_use]
    pub fn anchor(self) -> Option<PointerPosition> {
        self.anchor
    }

    #[must_use]
    pub fn current(self) -> Option<PointerPosition> {
        self.current
    }

    /// Starts a drag at `anchor`. Returns `false` when a drag is already running.
    pub fn begin(&mut self, anchor: PointerPosition) -> bool {
        if self.is_active() {
            return false;
        }
        self.mode = DragMode::Dragging;
        self.anchor = Some(anchor);
        self.current = None;
        true
    }

    /// Moves the live end of the drag. Returns `false` while idle.
    pub fn update(&mut self, position: PointerPosition) -> bool {
        if !self.is_active() {
            return false;
        }
        self.current = Some(position);
        true
    }

    /// Ends the drag and hands back its anchor. Returns `None` while idle.
    pub fn finish(&mut self) -> Option<PointerPosition> {
        if !self.is_active() {
            return None;
        }
        let anchor = self.anchor;
        self.reset();
        anchor
    }

    pub fn reset(&mut self) {
        self.mode = DragMode::Idle;
        self.anchor = None;
        self.current = None;
    }
}
