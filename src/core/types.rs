use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Pointer position in view coordinates (pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in view coordinates.
///
/// Always finite with `left <= right` and `top <= bottom`; deserialization
/// goes through [`Rect::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectEdges", into = "RectEdges")]
pub struct Rect {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RectEdges {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl TryFrom<RectEdges> for Rect {
    type Error = ChartError;

    fn try_from(edges: RectEdges) -> ChartResult<Self> {
        Self::new(edges.left, edges.top, edges.right, edges.bottom)
    }
}

impl From<Rect> for RectEdges {
    fn from(rect: Rect) -> Self {
        Self {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> ChartResult<Self> {
        let finite = left.is_finite() && top.is_finite() && right.is_finite() && bottom.is_finite();
        if !finite || right < left || bottom < top {
            return Err(ChartError::InvalidRect {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Builds the rectangle spanned by two corners in any order.
    pub fn spanning(a: Point, b: Point) -> ChartResult<Self> {
        Self::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    #[must_use]
    pub fn left(self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Inclusive on every edge: a point on the boundary belongs to the rect.
    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    #[must_use]
    pub fn clamp_point(self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.left, self.right),
            point.y.clamp(self.top, self.bottom),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

/// Identifies one axis of a chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisId {
    pub kind: AxisKind,
    pub index: u16,
}

impl AxisId {
    pub const PRIMARY_X: Self = Self::x(0);
    pub const PRIMARY_Y: Self = Self::y(0);

    #[must_use]
    pub const fn x(index: u16) -> Self {
        Self {
            kind: AxisKind::X,
            index,
        }
    }

    #[must_use]
    pub const fn y(index: u16) -> Self {
        Self {
            kind: AxisKind::Y,
            index,
        }
    }

    #[must_use]
    pub fn is_x(self) -> bool {
        self.kind == AxisKind::X
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AxisKind::X => write!(f, "x{}", self.index),
            AxisKind::Y => write!(f, "y{}", self.index),
        }
    }
}
