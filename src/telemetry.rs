//! Tracing setup for hosts embedding `chart-dragzone`.
//!
//! The crate never installs a subscriber on its own. What it emits, all under
//! the `chart_dragzone` target:
//!
//! - `debug`: attach, re-attach and detach of a chart, drag start (anchor
//!   `x`/`y`), drag finish (rectangle corners plus `series` and `points`
//!   counts), suppressed clicks, drags dropped for a non-finite release, and
//!   drags that end without a selection callback. Each carries `chart_id`.
//! - `trace`: pointer events ignored for the current drag state, stale
//!   listeners or detached charts, and redraws coalesced into a trailing edge.
//! - `warn`: series missing from the host data model and points without a
//!   resolved screen position, tagged with `series_index`.

/// Filter used when `RUST_LOG` is unset: host output at `info`, drag
/// lifecycle events at `debug`.
pub const DEFAULT_TRACING_FILTER: &str = "info,chart_dragzone=debug";

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// Returns `false` when the feature is disabled or the host already set a
/// global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
