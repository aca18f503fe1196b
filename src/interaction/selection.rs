use serde::{Deserialize, Serialize};

use crate::core::SeriesId;

/// Identifies one data point by series and index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedPoint {
    pub series: SeriesId,
    pub index: usize,
}

/// Only replace-mode is supported: a new selection discards the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    #[default]
    Replace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChange {
    pub mode: SelectionMode,
    /// `None` clears the selection.
    pub point: Option<SelectedPoint>,
}

impl SelectionChange {
    #[must_use]
    pub fn replace(point: Option<SelectedPoint>) -> Self {
        Self {
            mode: SelectionMode::Replace,
            point,
        }
    }
}

/// Ordered selected points of a surface.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    points: Vec<SelectedPoint>,
}

impl Selection {
    #[must_use]
    pub fn points(&self) -> &[SelectedPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Applies `change`; returns `true` when the selection differs afterwards.
    pub fn apply(&mut self, change: &SelectionChange) -> bool {
        let next: Vec<SelectedPoint> = match change.mode {
            SelectionMode::Replace => change.point.iter().cloned().collect(),
        };
        if next == self.points {
            return false;
        }
        self.points = next;
        true
    }
}
