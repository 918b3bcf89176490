//! Single-mode ramp laws for the region between cut-in and rated speed.
//!
//! These compute the ramp formula unconditionally; deciding whether the wind
//! speed actually lies in the ramp region is [`super::evaluate`]'s job.

use snafu::ensure;

use super::types::{CurveError, DegenerateCurveSnafu, TurbineCurveParameters};

/// Linear ramp: `rated_power * (u - cut_in) / (rated_speed - cut_in)`.
///
/// # Errors
///
/// Returns [`CurveError::DegenerateCurve`] when `rated_speed == cut_in`.
pub fn linear_ramp(wind_speed: f64, params: &TurbineCurveParameters) -> Result<f64, CurveError> {
    ensure_linear_defined(params)?;
    let span = params.rated_speed - params.cut_in;
    Ok(params.rated_power * (wind_speed - params.cut_in) / span)
}

/// Cubic ramp: `rated_power * (u / rated_speed)^3`.
///
/// Reaches exactly `rated_power` at `u == rated_speed`. At `u == cut_in` it
/// is generally non-zero, so the curve jumps at cut-in.
///
/// # Errors
///
/// Returns [`CurveError::DegenerateCurve`] when `rated_speed == 0`.
pub fn cubic_ramp(wind_speed: f64, params: &TurbineCurveParameters) -> Result<f64, CurveError> {
    ensure_cubic_defined(params)?;
    Ok(params.rated_power * (wind_speed / params.rated_speed).powi(3))
}

pub(crate) fn ensure_linear_defined(params: &TurbineCurveParameters) -> Result<(), CurveError> {
    ensure!(
        params.rated_speed != params.cut_in,
        DegenerateCurveSnafu {
            reason: format!(
                "linear ramp needs rated_speed != cut_in (both are {} m/s)",
                params.cut_in
            ),
        }
    );
    Ok(())
}

pub(crate) fn ensure_cubic_defined(params: &TurbineCurveParameters) -> Result<(), CurveError> {
    ensure!(
        params.rated_speed != 0.0,
        DegenerateCurveSnafu {
            reason: "cubic ramp needs rated_speed != 0",
        }
    );
    Ok(())
}
