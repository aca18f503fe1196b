use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{AxisId, DataPoint};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Line series data bound to one x and one y axis, kept sorted by x.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    id: SeriesId,
    x_axis: AxisId,
    y_axis: AxisId,
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(id: impl Into<SeriesId>, points: Vec<DataPoint>) -> ChartResult<Self> {
        let mut series = Self {
            id: id.into(),
            x_axis: AxisId::PRIMARY_X,
            y_axis: AxisId::PRIMARY_Y,
            points: Vec::new(),
        };
        series.set_points(points)?;
        Ok(series)
    }

    pub fn with_axes(mut self, x_axis: AxisId, y_axis: AxisId) -> ChartResult<Self> {
        if !x_axis.is_x() || y_axis.is_x() {
            return Err(ChartError::InvalidData(format!(
                "series `{}` must bind an x axis and a y axis, got {x_axis} and {y_axis}",
                self.id
            )));
        }
        self.x_axis = x_axis;
        self.y_axis = y_axis;
        Ok(self)
    }

    #[must_use]
    pub fn id(&self) -> &SeriesId {
        &self.id
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisId {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisId {
        self.y_axis
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<DataPoint> {
        self.points.get(index).copied()
    }

    pub fn set_points(&mut self, mut points: Vec<DataPoint>) -> ChartResult<()> {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{}` contains non-finite values",
                self.id
            )));
        }
        points.sort_by(|a, b| a.x.total_cmp(&b.x));
        self.points = points;
        Ok(())
    }

    /// Appends points that must not precede the current last x.
    pub fn append_points(&mut self, points: &[DataPoint]) -> ChartResult<()> {
        let mut last_x = self.points.last().map_or(f64::NEG_INFINITY, |p| p.x);
        for point in points {
            if !point.x.is_finite() || !point.y.is_finite() || point.x < last_x {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` append must be finite and sorted by x",
                    self.id
                )));
            }
            last_x = point.x;
        }
        self.points.extend_from_slice(points);
        Ok(())
    }

    #[must_use]
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let last = self.points.last()?;
        Some((first.x, last.x))
    }

    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |acc, p| match acc {
            None => Some((p.y, p.y)),
            Some((lo, hi)) => Some((lo.min(p.y), hi.max(p.y))),
        })
    }

    /// Index of the point nearest to `x`; equal-x candidates are ranked by
    /// distance to `y`.
    #[must_use]
    pub fn nearest_index(&self, x: f64, y: f64) -> Option<usize> {
        if self.points.is_empty() || !x.is_finite() || !y.is_finite() {
            return None;
        }

        let split = self.points.partition_point(|p| p.x < x);
        let mut anchors: SmallVec<[usize; 2]> = SmallVec::new();
        if split > 0 {
            anchors.push(split - 1);
        }
        if split < self.points.len() {
            anchors.push(split);
        }

        let best_dx = anchors
            .iter()
            .map(|&idx| OrderedFloat((self.points[idx].x - x).abs()))
            .min()?;

        let mut candidates: SmallVec<[usize; 4]> = SmallVec::new();
        for &anchor in &anchors {
            if OrderedFloat((self.points[anchor].x - x).abs()) != best_dx {
                continue;
            }
            let run_x = self.points[anchor].x;
            let start = self.points.partition_point(|p| p.x < run_x);
            let end = self.points.partition_point(|p| p.x <= run_x);
            candidates.extend(start..end);
        }

        candidates
            .into_iter()
            .min_by_key(|&idx| (OrderedFloat((self.points[idx].y - y).abs()), idx))
    }
}
