mod common;

use chart_dragzone::api::{
    DRAG_SESSION_SNAPSHOT_JSON_SCHEMA_V1, DragSelectionConfig, DragSelectionController,
    DragSessionSnapshot, PointerEventKind,
};
use chart_dragzone::core::{ChartId, DragDirection, PointerPosition};
use chart_dragzone::interaction::DragMode;

use common::{FakeChart, at, send};

#[test]
fn snapshot_reflects_running_drag() {
    let mut controller = DragSelectionController::new();
    let mut chart = FakeChart::new(11);
    controller
        .attach(&mut chart, DragSelectionConfig::default())
        .expect("attach");

    let idle = controller.snapshot(ChartId(11)).expect("snapshot");
    assert_eq!(idle.mode, DragMode::Idle);
    assert_eq!(idle.anchor, None);
    assert_eq!(idle.listener_count, 3);

    send(&mut controller, &mut chart, PointerEventKind::Down, at(5.0, 6.0, 0));
    send(&mut controller, &mut chart, PointerEventKind::Move, at(9.0, 9.0, 1));
    send(&mut controller, &mut chart, PointerEventKind::Move, at(12.0, 14.0, 2));

    let dragging = controller.snapshot(ChartId(11)).expect("snapshot");
    assert_eq!(dragging.mode, DragMode::Dragging);
    assert_eq!(dragging.anchor, Some(PointerPosition::new(5.0, 6.0)));
    assert_eq!(dragging.current, Some(PointerPosition::new(12.0, 14.0)));
    assert_eq!(dragging.direction, DragDirection::All);
    assert!(dragging.redraw_pending);
}

#[test]
fn snapshot_json_contract_v1_round_trips() {
    let mut controller = DragSelectionController::new();
    let mut chart = FakeChart::new(12);
    controller
        .attach(&mut chart, DragSelectionConfig::default())
        .expect("attach");
    send(&mut controller, &mut chart, PointerEventKind::Down, at(1.0, 2.0, 0));
    let snapshot = controller.snapshot(ChartId(12)).expect("snapshot");

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    assert!(json.contains(&format!(
        "\"schema_version\": {DRAG_SESSION_SNAPSHOT_JSON_SCHEMA_V1}"
    )));

    let parsed = DragSessionSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(parsed, snapshot);

    let bare = serde_json::to_string(&snapshot).expect("serialize bare");
    let parsed_bare = DragSessionSnapshot::from_json_compat_str(&bare).expect("parse bare");
    assert_eq!(parsed_bare, snapshot);
}

#[test]
fn snapshot_json_rejects_unknown_schema_version() {
    let mut controller = DragSelectionController::new();
    let mut chart = FakeChart::new(13);
    controller
        .attach(&mut chart, DragSelectionConfig::default())
        .expect("attach");
    let snapshot = controller.snapshot(ChartId(13)).expect("snapshot");

    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("serialize contract");
    let mut payload: serde_json::Value = serde_json::from_str(&json).expect("json");
    payload["schema_version"] = serde_json::json!(2);

    let err = DragSessionSnapshot::from_json_compat_str(&payload.to_string())
        .expect_err("unsupported version");
    assert!(err.to_string().contains("unsupported drag snapshot schema version"));
}
