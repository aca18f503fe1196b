use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Numeric interval currently displayed by an axis.
///
/// Always finite with `min < max`; every operation that could break that
/// invariant goes through [`VisibleRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds", into = "RangeBounds")]
pub struct VisibleRange {
    min: f64,
    max: f64,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RangeBounds {
    min: f64,
    max: f64,
}

impl TryFrom<RangeBounds> for VisibleRange {
    type Error = ChartError;

    fn try_from(bounds: RangeBounds) -> ChartResult<Self> {
        Self::new(bounds.min, bounds.max)
    }
}

impl From<VisibleRange> for RangeBounds {
    fn from(range: VisibleRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
        }
    }
}

impl VisibleRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ChartError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds a range from two bounds given in any order.
    pub fn from_unordered(a: f64, b: f64) -> ChartResult<Self> {
        Self::new(a.min(b), a.max(b))
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn translated(self, delta: f64) -> ChartResult<Self> {
        Self::new(self.min + delta, self.max + delta)
    }

    /// Rescales the span by `factor` keeping `anchor` at the same relative
    /// position. `factor < 1` zooms in.
    ///
    /// The resulting span never drops below `min_span`.
    pub fn scaled_around(self, anchor: f64, factor: f64, min_span: f64) -> ChartResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "range scale factor must be finite and > 0".to_owned(),
            ));
        }
        if !anchor.is_finite() {
            return Err(ChartError::InvalidData(
                "range scale anchor must be finite".to_owned(),
            ));
        }

        let span = self.span();
        let mut effective = factor;
        if span * effective < min_span {
            effective = min_span / span;
        }

        let left_ratio = (anchor - self.min) / span;
        let new_span = span * effective;
        let new_min = anchor - left_ratio * new_span;
        Self::new(new_min, new_min + new_span)
    }

    /// Intersects with `extents`. Returns `None` when nothing of positive
    /// width remains.
    #[must_use]
    pub fn clamped_to(self, extents: VisibleRange) -> Option<Self> {
        let min = self.min.max(extents.min);
        let max = self.max.min(extents.max);
        Self::new(min, max).ok()
    }

    /// Builds a range covering data extents, padding zero-span extents.
    pub fn covering(data_min: f64, data_max: f64) -> ChartResult<Self> {
        if data_min == data_max {
            return Self::new(data_min - 0.5, data_max + 0.5);
        }
        Self::from_unordered(data_min, data_max)
    }
}

#[cfg(test)]
mod tests {
    use super::VisibleRange;

    #[test]
    fn rejects_empty_or_inverted_bounds() {
        assert!(VisibleRange::new(1.0, 1.0).is_err());
        assert!(VisibleRange::new(2.0, 1.0).is_err());
        assert!(VisibleRange::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn scaling_keeps_anchor_ratio() {
        let range = VisibleRange::new(0.0, 100.0).expect("range");
        let scaled = range.scaled_around(25.0, 0.5, 1e-9).expect("scaled");
        assert!((scaled.min() - 12.5).abs() <= 1e-12);
        assert!((scaled.max() - 62.5).abs() <= 1e-12);
    }

    #[test]
    fn scaling_respects_min_span() {
        let range = VisibleRange::new(0.0, 10.0).expect("range");
        let scaled = range.scaled_around(5.0, 1e-6, 1.0).expect("scaled");
        assert!((scaled.span() - 1.0).abs() <= 1e-12);
    }

    #[test]
    fn clamping_outside_extents_yields_none() {
        let range = VisibleRange::new(0.0, 10.0).expect("range");
        let extents = VisibleRange::new(20.0, 30.0).expect("extents");
        assert!(range.clamped_to(extents).is_none());
    }

    #[test]
    fn deserialization_rejects_inverted_bounds() {
        let range = VisibleRange::new(-1.0, 2.0).expect("range");
        let json = serde_json::to_string(&range).expect("serialize");
        assert_eq!(json, r#"{"min":-1.0,"max":2.0}"#);
        assert_eq!(serde_json::from_str::<VisibleRange>(&json).expect("parse"), range);

        assert!(serde_json::from_str::<VisibleRange>(r#"{"min":2.0,"max":-1.0}"#).is_err());
        assert!(serde_json::from_str::<VisibleRange>(r#"{"min":1.0,"max":1.0}"#).is_err());
    }

    #[test]
    fn covering_pads_single_value() {
        let range = VisibleRange::covering(4.0, 4.0).expect("range");
        assert_eq!(range.bounds(), (3.5, 4.5));
    }
}
