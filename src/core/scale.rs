use crate::core::range::VisibleRange;
use crate::core::types::{AxisKind, Rect};
use crate::error::{ChartError, ChartResult};

/// Linear mapping between an axis visible range and a pixel extent.
///
/// X axes grow to the right; y axes are inverted so larger values sit higher
/// on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    range: VisibleRange,
    pixel_start: f64,
    pixel_length: f64,
    inverted: bool,
}

impl LinearScale {
    pub fn new(
        range: VisibleRange,
        pixel_start: f64,
        pixel_length: f64,
        inverted: bool,
    ) -> ChartResult<Self> {
        if !pixel_start.is_finite() || !pixel_length.is_finite() || pixel_length <= 0.0 {
            return Err(ChartError::InvalidData(
                "scale pixel extent must be finite and > 0".to_owned(),
            ));
        }

        Ok(Self {
            range,
            pixel_start,
            pixel_length,
            inverted,
        })
    }

    /// Builds the scale of an axis of `kind` laid along `rect`.
    pub fn along(kind: AxisKind, range: VisibleRange, rect: Rect) -> ChartResult<Self> {
        match kind {
            AxisKind::X => Self::new(range, rect.left(), rect.width(), false),
            AxisKind::Y => Self::new(range, rect.top(), rect.height(), true),
        }
    }

    #[must_use]
    pub fn range(self) -> VisibleRange {
        self.range
    }

    #[must_use]
    pub fn pixel_length(self) -> f64 {
        self.pixel_length
    }

    #[must_use]
    pub fn is_inverted(self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        let mut normalized = (pixel - self.pixel_start) / self.pixel_length;
        if self.inverted {
            normalized = 1.0 - normalized;
        }
        self.range.min() + normalized * self.range.span()
    }

    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let mut normalized = (value - self.range.min()) / self.range.span();
        if self.inverted {
            normalized = 1.0 - normalized;
        }
        self.pixel_start + normalized * self.pixel_length
    }

    /// Converts a pointer displacement into the range offset that keeps the
    /// content under the pointer ("grab" panning).
    #[must_use]
    pub fn grab_offset(self, delta_px: f64) -> f64 {
        let units = delta_px / self.pixel_length * self.range.span();
        if self.inverted { units } else { -units }
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;
    use crate::core::{AxisKind, Rect, VisibleRange};

    #[test]
    fn y_scale_is_inverted() {
        let rect = Rect::new(0.0, 0.0, 100.0, 200.0).expect("rect");
        let range = VisibleRange::new(0.0, 10.0).expect("range");
        let scale = LinearScale::along(AxisKind::Y, range, rect).expect("scale");
        assert!((scale.pixel_to_value(0.0) - 10.0).abs() <= 1e-12);
        assert!((scale.pixel_to_value(200.0)).abs() <= 1e-12);
        assert!((scale.value_to_pixel(5.0) - 100.0).abs() <= 1e-12);
    }

    #[test]
    fn pixel_value_round_trip() {
        let rect = Rect::new(40.0, 0.0, 440.0, 300.0).expect("rect");
        let range = VisibleRange::new(-50.0, 150.0).expect("range");
        let scale = LinearScale::along(AxisKind::X, range, rect).expect("scale");
        let value = scale.pixel_to_value(123.0);
        assert!((scale.value_to_pixel(value) - 123.0).abs() <= 1e-9);
    }

    #[test]
    fn grab_offset_follows_pointer() {
        let rect = Rect::new(0.0, 0.0, 500.0, 400.0).expect("rect");
        let range = VisibleRange::new(0.0, 500.0).expect("range");
        let x = LinearScale::along(AxisKind::X, range, rect).expect("x scale");
        assert!((x.grab_offset(50.0) + 50.0).abs() <= 1e-12);

        let range = VisibleRange::new(0.0, 400.0).expect("range");
        let y = LinearScale::along(AxisKind::Y, range, rect).expect("y scale");
        assert!((y.grab_offset(20.0) - 20.0).abs() <= 1e-12);
    }

    #[test]
    fn zero_pixel_extent_is_rejected() {
        let range = VisibleRange::new(0.0, 1.0).expect("range");
        assert!(LinearScale::new(range, 0.0, 0.0, false).is_err());
    }
}
