//! API response and query types.

use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::curve::types::NonFiniteInputSnafu;
use crate::curve::{self, CurveError, CurvePoint, Interpolation, TurbineCurveParameters};

/// Query for `/power`. Unset turbine fields fall back to the server's turbine.
#[derive(Debug, Default, Deserialize)]
pub struct PowerQuery {
    /// Wind speed to evaluate (m/s).
    pub wind_speed: f64,
    /// `"Linear"` or `"Cubic"`; kept as text so bad names map to a 400.
    pub interpolation: Option<String>,
    pub cut_in: Option<f64>,
    pub cut_out: Option<f64>,
    pub rated_speed: Option<f64>,
    pub rated_power: Option<f64>,
}

impl PowerQuery {
    /// Overlays the query's turbine fields on `base`.
    ///
    /// # Errors
    ///
    /// Returns the evaluator's error for an unknown interpolation name, or
    /// [`CurveError::NonFiniteInput`] when the wind speed or an override is
    /// NaN or infinite.
    pub fn resolve(
        &self,
        base: &TurbineCurveParameters,
    ) -> Result<TurbineCurveParameters, CurveError> {
        ensure!(
            self.wind_speed.is_finite(),
            NonFiniteInputSnafu {
                field: "wind_speed",
                value: self.wind_speed,
            }
        );
        let interpolation = match &self.interpolation {
            Some(name) => name.parse::<Interpolation>()?,
            None => base.interpolation,
        };
        let params = TurbineCurveParameters::new(
            self.cut_in.unwrap_or(base.cut_in),
            self.cut_out.unwrap_or(base.cut_out),
            self.rated_speed.unwrap_or(base.rated_speed),
            self.rated_power.unwrap_or(base.rated_power),
            interpolation,
        );
        curve::check_finite(&params)?;
        Ok(params)
    }
}

/// Single evaluation result.
#[derive(Debug, Serialize)]
pub struct PowerResponse {
    /// Evaluated wind speed (m/s).
    pub wind_speed_ms: f64,
    /// Computed power (MW).
    pub power_mw: f64,
    /// Parameters actually used after applying query overrides.
    pub parameters: TurbineCurveParameters,
}

/// Optional sweep bounds for `/curve`.
#[derive(Debug, Deserialize)]
pub struct CurveQuery {
    /// First wind speed (m/s).
    pub from: Option<f64>,
    /// Last wind speed, inclusive (m/s).
    pub to: Option<f64>,
    /// Sample spacing (m/s).
    pub step: Option<f64>,
}

/// Sampled curve with the parameters that produced it.
#[derive(Debug, Serialize)]
pub struct CurveResponse {
    pub parameters: TurbineCurveParameters,
    pub points: Vec<CurvePoint>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
