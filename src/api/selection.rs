use serde::{Deserialize, Serialize};
use tracing::warn;

#[cfg(feature = "parallel-selection")]
use rayon::prelude::*;

use crate::core::{DragRectangle, SeriesPoint, contains_point};

use super::SeriesSource;

/// One hit: the datum and its position inside its series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedPoint {
    pub data_index: usize,
    pub point: SeriesPoint,
}

/// Hits of one series, in series order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSelection {
    pub series_index: usize,
    pub points: Vec<SelectedPoint>,
}

/// Outcome of one completed drag.
///
/// Series without hits are omitted, so `series` is sparse and ordered by
/// `series_index`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub rectangle: DragRectangle,
    pub series: Vec<SeriesSelection>,
}

impl SelectionResult {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn total_points(&self) -> usize {
        self.series.iter().map(|entry| entry.points.len()).sum()
    }

    #[must_use]
    pub fn series(&self, series_index: usize) -> Option<&SeriesSelection> {
        self.series
            .iter()
            .find(|entry| entry.series_index == series_index)
    }
}

/// Hit-tests every point of every series against `rectangle`.
///
/// Missing series and points without a resolved position are skipped; they
/// never abort the rest of the selection.
pub fn collect_selection<S: SeriesSource + ?Sized>(
    source: &S,
    rectangle: DragRectangle,
) -> SelectionResult {
    let mut series = Vec::new();

    for series_index in 0..source.series_count() {
        let Some(points) = source.series_points(series_index) else {
            warn!(series_index, "skipping series missing from host data model");
            continue;
        };

        let unresolved = points
            .iter()
            .filter(|point| !point.has_resolved_position())
            .count();
        if unresolved > 0 {
            warn!(
                series_index,
                unresolved, "skipping points without resolved screen position"
            );
        }

        let hits = hit_test_series(points, rectangle);
        if !hits.is_empty() {
            series.push(SeriesSelection {
                series_index,
                points: hits,
            });
        }
    }

    SelectionResult { rectangle, series }
}

fn hit_test_point(
    data_index: usize,
    point: &SeriesPoint,
    rectangle: DragRectangle,
) -> Option<SelectedPoint> {
    let inside = point.has_resolved_position() && contains_point(point.position(), rectangle);
    inside.then(|| SelectedPoint {
        data_index,
        point: point.clone(),
    })
}

fn hit_test_series(points: &[SeriesPoint], rectangle: DragRectangle) -> Vec<SelectedPoint> {
    // Indexed parallel iteration keeps hits in series order.
    #[cfg(feature = "parallel-selection")]
    {
        points
            .par_iter()
            .enumerate()
            .filter_map(|(data_index, point)| hit_test_point(data_index, point, rectangle))
            .collect()
    }

    #[cfg(not(feature = "parallel-selection"))]
    {
        points
            .iter()
            .enumerate()
            .filter_map(|(data_index, point)| hit_test_point(data_index, point, rectangle))
            .collect()
    }
}
