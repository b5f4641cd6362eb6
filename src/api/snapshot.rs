use serde::{Deserialize, Serialize};

use crate::core::{ChartId, DragDirection, PointerPosition};
use crate::error::{ChartError, ChartResult};
use crate::interaction::DragMode;

use super::{ChartHost, DragSelectionController};

pub const DRAG_SESSION_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Read-only view of one chart's drag state, meant for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSessionSnapshot {
    pub chart_id: ChartId,
    pub mode: DragMode,
    pub anchor: Option<PointerPosition>,
    pub current: Option<PointerPosition>,
    pub direction: DragDirection,
    pub color: String,
    pub redraw_interval_ms: u64,
    pub redraw_pending: bool,
    pub listener_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSessionSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: DragSessionSnapshot,
}

impl DragSessionSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DragSessionSnapshotJsonContractV1 {
            schema_version: DRAG_SESSION_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize drag snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<DragSessionSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: DragSessionSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse drag snapshot json payload: {e}"))
            })?;
        if payload.schema_version != DRAG_SESSION_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported drag snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<H: ChartHost> DragSelectionController<H> {
    #[must_use]
    pub fn snapshot(&self, chart_id: ChartId) -> Option<DragSessionSnapshot> {
        let binding = self.charts.get(&chart_id)?;
        Some(DragSessionSnapshot {
            chart_id,
            mode: binding.session.mode(),
            anchor: binding.session.anchor(),
            current: binding.session.current(),
            direction: binding.options.direction,
            color: binding.options.color.clone(),
            redraw_interval_ms: binding.options.redraw_interval_ms,
            redraw_pending: binding.throttle.is_pending(),
            listener_count: binding.listeners.len(),
        })
    }
}
