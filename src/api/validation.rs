use crate::core::VisibleRange;
use crate::error::{ChartError, ChartResult};
use crate::interaction::GestureTuning;

use super::SurfaceConfig;

fn ensure_positive_finite(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_gesture_tuning(tuning: GestureTuning) -> ChartResult<GestureTuning> {
    ensure_positive_finite(tuning.wheel_zoom_step_ratio, "wheel zoom step ratio")?;
    ensure_positive_finite(tuning.wheel_pan_step_ratio, "wheel pan step ratio")?;
    ensure_positive_finite(tuning.axis_drag_zoom_step_ratio, "axis drag zoom step ratio")?;
    ensure_positive_finite(tuning.min_span, "min span")?;
    ensure_positive_finite(tuning.selection_hit_radius_px, "selection hit radius")?;
    if tuning.wheel_pan_step_ratio > 1.0 {
        return Err(ChartError::InvalidData(
            "wheel pan step ratio must be <= 1".to_owned(),
        ));
    }
    Ok(tuning)
}

/// Checks the whole bootstrap config and returns the two initial ranges.
pub(super) fn validate_surface_config(
    config: &SurfaceConfig,
) -> ChartResult<(VisibleRange, VisibleRange)> {
    validate_gesture_tuning(config.tuning)?;
    let x_range = VisibleRange::new(config.x_min, config.x_max)?;
    let y_range = VisibleRange::new(config.y_min, config.y_max)?;
    if x_range.span() < config.tuning.min_span || y_range.span() < config.tuning.min_span {
        return Err(ChartError::InvalidData(
            "initial visible ranges must be at least min span wide".to_owned(),
        ));
    }
    Ok((x_range, y_range))
}
