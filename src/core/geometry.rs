use serde::{Deserialize, Serialize};

use crate::core::{ChartArea, PointerPosition, SurfaceBounds};

/// Axes along which the pointer shapes the selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragDirection {
    /// Both axes follow the pointer.
    #[default]
    All,
    /// Only X follows the pointer; Y always spans the full chart area.
    Horizontal,
    /// Only Y follows the pointer; X always spans the full chart area.
    Vertical,
}

impl DragDirection {
    #[must_use]
    pub const fn tracks_x(self) -> bool {
        matches!(self, Self::All | Self::Horizontal)
    }

    #[must_use]
    pub const fn tracks_y(self) -> bool {
        matches!(self, Self::All | Self::Vertical)
    }
}

/// Normalized selection rectangle in surface-local pixels.
///
/// Always satisfies `start_x <= end_x` and `start_y <= end_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragRectangle {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl DragRectangle {
    /// Rectangle covering the whole plotted area.
    #[must_use]
    pub fn from_area(area: ChartArea) -> Self {
        Self {
            start_x: area.left.min(area.right),
            start_y: area.top.min(area.bottom),
            end_x: area.left.max(area.right),
            end_y: area.top.max(area.bottom),
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.end_x - self.start_x
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.end_y - self.start_y
    }
}

/// Translates raw client coordinates into surface-local coordinates.
#[must_use]
pub fn to_local_position(bounds: SurfaceBounds, client_x: f64, client_y: f64) -> PointerPosition {
    PointerPosition::new(client_x - bounds.left, client_y - bounds.top)
}

/// Builds the normalized rectangle spanned by two pointer positions.
///
/// Axes excluded by `direction` are pinned to the full extent of `area`
/// instead of following the pointer.
#[must_use]
pub fn normalize_rectangle(
    a: PointerPosition,
    b: PointerPosition,
    direction: DragDirection,
    area: ChartArea,
) -> DragRectangle {
    let full = DragRectangle::from_area(area);

    let (start_x, end_x) = if direction.tracks_x() {
        (a.x.min(b.x), a.x.max(b.x))
    } else {
        (full.start_x, full.end_x)
    };
    let (start_y, end_y) = if direction.tracks_y() {
        (a.y.min(b.y), a.y.max(b.y))
    } else {
        (full.start_y, full.end_y)
    };

    DragRectangle {
        start_x,
        start_y,
        end_x,
        end_y,
    }
}

/// Resolves a rectangle even when one of the endpoints is not known yet.
///
/// Without both endpoints the full chart area is returned.
#[must_use]
pub fn resolve_drag_rectangle(
    anchor: Option<PointerPosition>,
    end: Option<PointerPosition>,
    direction: DragDirection,
    area: ChartArea,
) -> DragRectangle {
    match (anchor, end) {
        (Some(anchor), Some(end)) => normalize_rectangle(anchor, end, direction, area),
        _ => DragRectangle::from_area(area),
    }
}

/// Returns `true` when the rectangle has no extent along any tracked axis.
///
/// Such gestures are clicks and never produce a selection.
#[must_use]
pub fn is_click_only(rect: DragRectangle, direction: DragDirection) -> bool {
    let x_collapsed = !direction.tracks_x() || rect.start_x == rect.end_x;
    let y_collapsed = !direction.tracks_y() || rect.start_y == rect.end_y;
    x_collapsed && y_collapsed
}

/// Closed-interval containment: points on the rectangle edge are inside.
#[must_use]
pub fn contains_point(point: PointerPosition, rect: DragRectangle) -> bool {
    rect.start_x <= point.x
        && point.x <= rect.end_x
        && rect.start_y <= point.y
        && point.y <= rect.end_y
}
