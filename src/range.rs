//! Scan window calculation from a center estimate.

use crate::error::AlignError;
use crate::sweep::ScanWindow;

/// Compute a symmetric scan window around `center`.
///
/// The window runs from `center - span` to `center + span` and the point
/// count is chosen so adjacent points are `step` apart, endpoints
/// inclusive. Both `span` and `step` must be positive and finite.
pub fn range_from_center(
    center: f64,
    span: f64,
    step: f64,
) -> Result<(ScanWindow, usize), AlignError> {
    if !span.is_finite() || span <= 0.0 {
        return Err(AlignError::BadRange(format!("span must be positive, got {span}")));
    }
    if !step.is_finite() || step <= 0.0 {
        return Err(AlignError::BadRange(format!("step must be positive, got {step}")));
    }
    let num = (2.0 * span / step).round() as usize + 1;
    Ok((ScanWindow::new(center - span, center + span), num))
}
