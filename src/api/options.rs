use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::DragDirection;
use crate::error::{ChartError, ChartResult};
use crate::interaction::DEFAULT_REDRAW_INTERVAL_MS;
use crate::render::Color;

use super::SelectionResult;

pub const DEFAULT_SELECTION_COLOR: &str = "#4692ca4d";

/// `DEFAULT_SELECTION_COLOR`, parsed at compile time.
pub const DEFAULT_SELECTION_FILL: Color = match Color::from_hex(DEFAULT_SELECTION_COLOR) {
    Some(color) => color,
    None => panic!("DEFAULT_SELECTION_COLOR must be hex notation"),
};

/// Constant defaults applied under host overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionDefaults {
    pub direction: DragDirection,
    pub color: &'static str,
    pub redraw_interval_ms: u64,
}

pub const SELECTION_DEFAULTS: SelectionDefaults = SelectionDefaults {
    direction: DragDirection::All,
    color: DEFAULT_SELECTION_COLOR,
    redraw_interval_ms: DEFAULT_REDRAW_INTERVAL_MS,
};

/// Host-supplied option overrides.
///
/// Keys this crate does not recognize are kept in `extensions` and carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<DragDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redraw_interval_ms: Option<u64>,
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

impl SelectionOverrides {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse selection options json: {e}"))
        })
    }

    pub fn from_json_value(value: Value) -> ChartResult<Self> {
        serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse selection options json: {e}"))
        })
    }

    #[must_use]
    pub fn with_direction(mut self, direction: DragDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_redraw_interval_ms(mut self, interval_ms: u64) -> Self {
        self.redraw_interval_ms = Some(interval_ms);
        self
    }
}

/// Fully resolved options for one attached chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOptions {
    pub direction: DragDirection,
    pub color: String,
    pub fill_color: Color,
    pub redraw_interval_ms: u64,
    pub extensions: Map<String, Value>,
}

impl SelectionOptions {
    #[must_use]
    pub fn redraw_interval(&self) -> Duration {
        Duration::from_millis(self.redraw_interval_ms)
    }
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            direction: SELECTION_DEFAULTS.direction,
            color: SELECTION_DEFAULTS.color.to_owned(),
            fill_color: DEFAULT_SELECTION_FILL,
            redraw_interval_ms: SELECTION_DEFAULTS.redraw_interval_ms,
            extensions: Map::new(),
        }
    }
}

/// Resolves overrides against `SELECTION_DEFAULTS` and validates the result.
pub fn merge_selection_options(overrides: SelectionOverrides) -> ChartResult<SelectionOptions> {
    let color = overrides
        .color
        .unwrap_or_else(|| SELECTION_DEFAULTS.color.to_owned());
    let fill_color = Color::from_css(&color).map_err(|err| ChartError::InvalidOption {
        name: "color",
        reason: err.to_string(),
    })?;

    let redraw_interval_ms = overrides
        .redraw_interval_ms
        .unwrap_or(SELECTION_DEFAULTS.redraw_interval_ms);
    if redraw_interval_ms == 0 {
        return Err(ChartError::InvalidOption {
            name: "redrawIntervalMs",
            reason: "must be > 0".to_owned(),
        });
    }

    Ok(SelectionOptions {
        direction: overrides.direction.unwrap_or(SELECTION_DEFAULTS.direction),
        color,
        fill_color,
        redraw_interval_ms,
        extensions: overrides.extensions,
    })
}

/// Invoked once per completed drag with the selected points and the chart.
pub type DragSelectionCallback<H> = Box<dyn FnMut(SelectionResult, &mut H)>;

/// Everything `attach` needs for one chart.
pub struct DragSelectionConfig<H> {
    pub overrides: SelectionOverrides,
    pub on_drag_selection: Option<DragSelectionCallback<H>>,
}

impl<H> DragSelectionConfig<H> {
    #[must_use]
    pub fn new(overrides: SelectionOverrides) -> Self {
        Self {
            overrides,
            on_drag_selection: None,
        }
    }

    #[must_use]
    pub fn with_on_drag_selection(
        mut self,
        callback: impl FnMut(SelectionResult, &mut H) + 'static,
    ) -> Self {
        self.on_drag_selection = Some(Box::new(callback));
        self
    }
}

impl<H> Default for DragSelectionConfig<H> {
    fn default() -> Self {
        Self::new(SelectionOverrides::default())
    }
}

impl<H> fmt::Debug for DragSelectionConfig<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragSelectionConfig")
            .field("overrides", &self.overrides)
            .field("on_drag_selection", &self.on_drag_selection.is_some())
            .finish()
    }
}
