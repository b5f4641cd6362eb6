#![allow(dead_code)]

use std::time::Duration;

use chart_dragzone::api::{
    ChartHost, DragSelectionController, ListenerBinding, ListenerId, PointerEventKind,
    PointerEventSource, RedrawReason, SeriesSource,
};
use chart_dragzone::core::{ChartArea, ChartId, SeriesPoint, SurfaceBounds};
use chart_dragzone::interaction::PointerEvent;

/// In-memory chart standing in for a real host.
#[derive(Debug, Clone)]
pub struct FakeChart {
    pub id: ChartId,
    pub bounds: SurfaceBounds,
    pub area: ChartArea,
    pub series: Vec<Vec<SeriesPoint>>,
    pub declared_series_count: Option<usize>,
    pub listeners: Vec<ListenerBinding>,
    pub subscribe_calls: usize,
    pub unsubscribe_calls: usize,
    pub redraws: Vec<RedrawReason>,
}

impl FakeChart {
    pub fn new(id: u64) -> Self {
        Self {
            id: ChartId(id),
            bounds: SurfaceBounds::new(0.0, 0.0),
            area: ChartArea::new(0.0, 0.0, 400.0, 300.0),
            series: Vec::new(),
            declared_series_count: None,
            listeners: Vec::new(),
            subscribe_calls: 0,
            unsubscribe_calls: 0,
            redraws: Vec::new(),
        }
    }

    pub fn with_bounds(mut self, left: f64, top: f64) -> Self {
        self.bounds = SurfaceBounds::new(left, top);
        self
    }

    pub fn with_area(mut self, area: ChartArea) -> Self {
        self.area = area;
        self
    }

    pub fn with_series(mut self, points: &[(f64, f64)]) -> Self {
        self.series.push(
            points
                .iter()
                .enumerate()
                .map(|(index, (x, y))| {
                    SeriesPoint::new(*x, *y).with_payload(serde_json::json!({ "index": index }))
                })
                .collect(),
        );
        self
    }

    pub fn listener(&self, kind: PointerEventKind) -> ListenerId {
        self.listeners
            .iter()
            .find(|binding| binding.kind == kind)
            .map(|binding| binding.id)
            .expect("listener subscribed")
    }

    pub fn progress_redraws(&self) -> usize {
        self.redraws
            .iter()
            .filter(|reason| **reason == RedrawReason::DragProgress)
            .count()
    }
}

impl PointerEventSource for FakeChart {
    fn subscribe(&mut self, binding: ListenerBinding) {
        self.subscribe_calls += 1;
        self.listeners.push(binding);
    }

    fn unsubscribe(&mut self, binding: ListenerBinding) {
        self.unsubscribe_calls += 1;
        self.listeners.retain(|entry| *entry != binding);
    }
}

impl SeriesSource for FakeChart {
    fn series_count(&self) -> usize {
        self.declared_series_count.unwrap_or(self.series.len())
    }

    fn series_points(&self, series_index: usize) -> Option<&[SeriesPoint]> {
        self.series.get(series_index).map(Vec::as_slice)
    }
}

impl ChartHost for FakeChart {
    fn chart_id(&self) -> ChartId {
        self.id
    }

    fn surface_bounds(&self) -> SurfaceBounds {
        self.bounds
    }

    fn chart_area(&self) -> ChartArea {
        self.area
    }

    fn request_redraw(&mut self, reason: RedrawReason) {
        self.redraws.push(reason);
    }
}

pub fn at(client_x: f64, client_y: f64, millis: u64) -> PointerEvent {
    PointerEvent::new(client_x, client_y, Duration::from_millis(millis))
}

/// Delivers an event the way a host would: through the currently subscribed listener.
pub fn send(
    controller: &mut DragSelectionController<FakeChart>,
    chart: &mut FakeChart,
    kind: PointerEventKind,
    event: PointerEvent,
) {
    let listener = chart.listener(kind);
    controller.dispatch(chart, listener, event);
}

pub fn drag(
    controller: &mut DragSelectionController<FakeChart>,
    chart: &mut FakeChart,
    from: (f64, f64),
    to: (f64, f64),
) {
    send(controller, chart, PointerEventKind::Down, at(from.0, from.1, 0));
    send(controller, chart, PointerEventKind::Move, at(to.0, to.1, 10));
    send(controller, chart, PointerEventKind::Up, at(to.0, to.1, 20));
}
