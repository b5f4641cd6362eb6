use std::time::Duration;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    ChartId, DragRectangle, is_click_only, normalize_rectangle, to_local_position,
};
use crate::error::ChartResult;
use crate::interaction::{DragSession, PointerButton, PointerEvent, RedrawThrottle};
use crate::render::{DrawingSurface, RectPrimitive};

use super::{
    ChartHost, DragSelectionCallback, DragSelectionConfig, ListenerBinding, ListenerId,
    ListenerTarget, PointerEventKind, RedrawReason, SelectionOptions, collect_selection,
    merge_selection_options,
};

pub(super) type ListenerSet = SmallVec<[ListenerBinding; 3]>;

const LISTENER_LAYOUT: [(PointerEventKind, ListenerTarget); 3] = [
    (PointerEventKind::Down, ListenerTarget::Surface),
    (PointerEventKind::Move, ListenerTarget::Surface),
    (PointerEventKind::Up, ListenerTarget::Document),
];

/// Everything the controller owns for one attached chart.
pub(super) struct ChartBinding<H> {
    pub(super) options: SelectionOptions,
    pub(super) on_drag_selection: Option<DragSelectionCallback<H>>,
    pub(super) session: DragSession,
    pub(super) throttle: RedrawThrottle,
    pub(super) listeners: ListenerSet,
}

impl<H: ChartHost> ChartBinding<H> {
    fn listener_kind(&self, listener: ListenerId) -> Option<PointerEventKind> {
        self.listeners
            .iter()
            .find(|binding| binding.id == listener)
            .map(|binding| binding.kind)
    }

    fn live_rectangle(&self, host: &H) -> Option<DragRectangle> {
        let anchor = self.session.anchor()?;
        let current = self.session.current()?;
        Some(normalize_rectangle(
            anchor,
            current,
            self.options.direction,
            host.chart_area(),
        ))
    }

    fn pointer_down(&mut self, host: &mut H, event: PointerEvent) {
        let chart_id = host.chart_id().0;
        if event.button != PointerButton::Primary {
            trace!(chart_id, button = ?event.button, "ignoring non-primary pointer down");
            return;
        }

        let anchor = to_local_position(host.surface_bounds(), event.client_x, event.client_y);
        if !anchor.is_finite() {
            trace!(chart_id, "ignoring pointer down without finite position");
            return;
        }
        if !self.session.begin(anchor) {
            trace!(chart_id, "ignoring pointer down while already dragging");
            return;
        }
        debug!(chart_id, x = anchor.x, y = anchor.y, "drag selection started");
    }

    fn pointer_move(&mut self, host: &mut H, event: PointerEvent) {
        let chart_id = host.chart_id().0;
        let position = to_local_position(host.surface_bounds(), event.client_x, event.client_y);
        if !position.is_finite() || !self.session.update(position) {
            trace!(chart_id, "ignoring pointer move outside of a drag");
            return;
        }

        if self.throttle.request(event.timestamp) {
            host.request_redraw(RedrawReason::DragProgress);
        } else {
            trace!(chart_id, "coalescing drag redraw into trailing edge");
        }
    }

    fn pointer_up(&mut self, host: &mut H, event: PointerEvent) {
        let chart_id = host.chart_id().0;
        let Some(anchor) = self.session.finish() else {
            trace!(chart_id, "ignoring pointer up outside of a drag");
            return;
        };

        // The up event, not the throttled `current`, decides the final rectangle.
        let end = to_local_position(host.surface_bounds(), event.client_x, event.client_y);
        self.throttle.cancel();
        host.request_redraw(RedrawReason::DragFinished);

        if !end.is_finite() {
            debug!(chart_id, "drag ended without finite position; selection dropped");
            return;
        }

        let direction = self.options.direction;
        let rectangle = normalize_rectangle(anchor, end, direction, host.chart_area());
        if is_click_only(rectangle, direction) {
            debug!(chart_id, "click without drag extent; selection suppressed");
            return;
        }

        let Some(callback) = self.on_drag_selection.as_mut() else {
            debug!(chart_id, "drag finished without selection callback");
            return;
        };

        let selection = collect_selection(&*host, rectangle);
        debug!(
            chart_id,
            start_x = rectangle.start_x,
            start_y = rectangle.start_y,
            end_x = rectangle.end_x,
            end_y = rectangle.end_y,
            series = selection.series.len(),
            points = selection.total_points(),
            "drag selection finished"
        );
        callback(selection, host);
    }
}

/// Drag-to-select controller for any number of charts of one host type.
///
/// Each chart owns exactly one session. Hosts forward raw pointer events
/// through `dispatch`, drive trailing redraws through `flush_pending_redraw`,
/// and call `render_overlay` from their draw cycle.
pub struct DragSelectionController<H: ChartHost> {
    pub(super) charts: IndexMap<ChartId, ChartBinding<H>>,
    next_listener_id: u64,
}

impl<H: ChartHost> Default for DragSelectionController<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ChartHost> DragSelectionController<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            charts: IndexMap::new(),
            next_listener_id: 1,
        }
    }

    /// Attaches drag selection to `host`, replacing any previous attachment.
    ///
    /// Options are validated before existing state is touched, so a failed
    /// re-attach leaves the previous binding in place.
    pub fn attach(&mut self, host: &mut H, config: DragSelectionConfig<H>) -> ChartResult<()> {
        let options = merge_selection_options(config.overrides)?;
        let chart_id = host.chart_id();

        if let Some(previous) = self.charts.get(&chart_id) {
            for binding in &previous.listeners {
                host.unsubscribe(*binding);
            }
            debug!(chart_id = chart_id.0, "re-attaching drag selection");
        }

        let listeners = self.allocate_listeners();
        for binding in &listeners {
            host.subscribe(*binding);
        }

        debug!(
            chart_id = chart_id.0,
            direction = ?options.direction,
            color = %options.color,
            redraw_interval_ms = options.redraw_interval_ms,
            "drag selection attached"
        );

        let throttle = RedrawThrottle::new(options.redraw_interval());
        self.charts.insert(
            chart_id,
            ChartBinding {
                options,
                on_drag_selection: config.on_drag_selection,
                session: DragSession::default(),
                throttle,
                listeners,
            },
        );
        Ok(())
    }

    /// Releases all listeners of `host` and discards its session.
    ///
    /// Returns `false` when the chart was not attached.
    pub fn detach(&mut self, host: &mut H) -> bool {
        let chart_id = host.chart_id();
        let Some(binding) = self.charts.shift_remove(&chart_id) else {
            trace!(chart_id = chart_id.0, "detach on chart without drag selection");
            return false;
        };

        for listener in &binding.listeners {
            host.unsubscribe(*listener);
        }
        debug!(
            chart_id = chart_id.0,
            mid_drag = binding.session.is_active(),
            "drag selection detached"
        );
        true
    }

    /// Routes one raw pointer event received by listener `listener`.
    ///
    /// Events for detached charts, stale listeners or the wrong drag state
    /// are ignored.
    pub fn dispatch(&mut self, host: &mut H, listener: ListenerId, event: PointerEvent) {
        let chart_id = host.chart_id();
        let Some(binding) = self.charts.get_mut(&chart_id) else {
            trace!(chart_id = chart_id.0, "ignoring pointer event for detached chart");
            return;
        };
        let Some(kind) = binding.listener_kind(listener) else {
            trace!(
                chart_id = chart_id.0,
                listener = listener.get(),
                "ignoring pointer event from stale listener"
            );
            return;
        };

        match kind {
            PointerEventKind::Down => binding.pointer_down(host, event),
            PointerEventKind::Move => binding.pointer_move(host, event),
            PointerEventKind::Up => binding.pointer_up(host, event),
        }
    }

    /// Delivers a due trailing redraw. Returns `true` when a redraw was requested.
    pub fn flush_pending_redraw(&mut self, host: &mut H, now: Duration) -> bool {
        let Some(binding) = self.charts.get_mut(&host.chart_id()) else {
            return false;
        };
        if !binding.throttle.poll(now) {
            return false;
        }
        host.request_redraw(RedrawReason::DragProgress);
        true
    }

    /// When the next trailing redraw for `chart_id` is due, if one is pending.
    #[must_use]
    pub fn next_redraw_deadline(&self, chart_id: ChartId) -> Option<Duration> {
        self.charts
            .get(&chart_id)
            .and_then(|binding| binding.throttle.deadline())
    }

    /// Paints the live selection rectangle. Returns `false` when nothing was drawn.
    pub fn render_overlay<S: DrawingSurface + ?Sized>(
        &self,
        host: &H,
        surface: &mut S,
    ) -> ChartResult<bool> {
        let Some(binding) = self.charts.get(&host.chart_id()) else {
            return Ok(false);
        };
        let Some(rectangle) = binding.live_rectangle(host) else {
            return Ok(false);
        };

        let primitive = RectPrimitive::new(
            rectangle.start_x,
            rectangle.start_y,
            rectangle.width(),
            rectangle.height(),
            binding.options.fill_color,
        );

        surface.save()?;
        surface.begin_path();
        let filled = surface.fill_rect(&primitive);
        let restored = surface.restore();
        filled?;
        restored?;
        Ok(true)
    }

    /// Live rectangle of the running drag on `host`, if any.
    #[must_use]
    pub fn active_rectangle(&self, host: &H) -> Option<DragRectangle> {
        self.charts
            .get(&host.chart_id())
            .and_then(|binding| binding.live_rectangle(host))
    }

    #[must_use]
    pub fn is_attached(&self, chart_id: ChartId) -> bool {
        self.charts.contains_key(&chart_id)
    }

    #[must_use]
    pub fn is_dragging(&self, chart_id: ChartId) -> bool {
        self.charts
            .get(&chart_id)
            .is_some_and(|binding| binding.session.is_active())
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn session(&self, chart_id: ChartId) -> Option<DragSession> {
        self.charts.get(&chart_id).map(|binding| binding.session)
    }

    #[must_use]
    pub fn options(&self, chart_id: ChartId) -> Option<&SelectionOptions> {
        self.charts.get(&chart_id).map(|binding| &binding.options)
    }

    #[must_use]
    pub fn listener_bindings(&self, chart_id: ChartId) -> Option<&[ListenerBinding]> {
        self.charts
            .get(&chart_id)
            .map(|binding| binding.listeners.as_slice())
    }

    fn allocate_listeners(&mut self) -> ListenerSet {
        LISTENER_LAYOUT
            .into_iter()
            .map(|(kind, target)| {
                let id = ListenerId::new(self.next_listener_id);
                self.next_listener_id += 1;
                ListenerBinding { id, kind, target }
            })
            .collect()
    }
}
