use crate::error::{ChartError, ChartResult};

/// DOM wheel units per notch; drag distances reuse the same normalization.
pub(crate) const WHEEL_STEP_UNITS: f64 = 120.0;

/// Zoom factor for a wheel delta. Negative deltas (scroll up) zoom in.
pub(crate) fn resolve_wheel_zoom_factor(
    wheel_delta_y: f64,
    zoom_step_ratio: f64,
) -> ChartResult<Option<f64>> {
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let base = 1.0 + zoom_step_ratio;
    let factor = base.powf(normalized_steps);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "computed wheel zoom factor must be finite and > 0".to_owned(),
        ));
    }
    Ok(Some(factor))
}

/// Range offset for a wheel delta on a panned axis.
pub(crate) fn resolve_wheel_pan_offset(
    wheel_delta_y: f64,
    visible_span: f64,
    pan_step_ratio: f64,
) -> ChartResult<Option<f64>> {
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let offset = normalized_steps * visible_span * pan_step_ratio;
    if !offset.is_finite() {
        return Err(ChartError::InvalidData(
            "computed wheel pan offset must be finite".to_owned(),
        ));
    }
    Ok(Some(offset))
}

/// Span factor for an axis scaling drag.
///
/// `drag_px` is signed so that positive values grow the span (zoom out).
pub(crate) fn resolve_drag_scale_factor(drag_px: f64, zoom_step_ratio: f64) -> ChartResult<f64> {
    let normalized_steps = drag_px / WHEEL_STEP_UNITS;
    let factor = (1.0 + zoom_step_ratio).powf(normalized_steps);
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "computed axis drag zoom factor must be finite and > 0".to_owned(),
        ));
    }
    Ok(factor)
}

#[cfg(test)]
mod tests {
    use super::{resolve_drag_scale_factor, resolve_wheel_pan_offset, resolve_wheel_zoom_factor};

    #[test]
    fn zero_wheel_delta_returns_none() {
        assert!(resolve_wheel_zoom_factor(0.0, 0.1).expect("factor").is_none());
        assert!(resolve_wheel_pan_offset(0.0, 10.0, 0.1).expect("offset").is_none());
    }

    #[test]
    fn negative_wheel_delta_zooms_in() {
        let factor = resolve_wheel_zoom_factor(-120.0, 0.1)
            .expect("factor")
            .expect("some");
        assert!(factor < 1.0);
        assert!((factor - 1.0 / 1.1).abs() <= 1e-12);
    }

    #[test]
    fn wheel_pan_offset_is_fraction_of_span() {
        let offset = resolve_wheel_pan_offset(240.0, 50.0, 0.1)
            .expect("offset")
            .expect("some");
        assert!((offset - 10.0).abs() <= 1e-12);
    }

    #[test]
    fn drag_factor_rejects_non_finite_result() {
        let err = resolve_drag_scale_factor(f64::INFINITY, 0.2).expect_err("infinite");
        assert!(format!("{err}").contains("axis drag zoom factor"));
    }
}
