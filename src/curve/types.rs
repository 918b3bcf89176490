//! Turbine parameters, interpolation laws, and evaluator errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use snafu::Snafu;

/// Errors raised while evaluating or sampling a power curve.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum CurveError {
    /// The interpolation selector is neither `"Linear"` nor `"Cubic"`.
    #[snafu(display(
        "interpolation method can only be \"Linear\" or \"Cubic\", got \"{mode}\""
    ))]
    InvalidInterpolationMode { mode: String },

    /// The ramp formula is undefined for this parameter set.
    #[snafu(display("degenerate power curve: {reason}"))]
    DegenerateCurve { reason: String },

    /// A wind speed or turbine field is NaN or infinite.
    #[snafu(display("{field} must be a finite number, got {value}"))]
    NonFiniteInput { field: String, value: f64 },

    /// The requested wind-speed sweep cannot be sampled.
    #[snafu(display("invalid sweep: {reason}"))]
    InvalidSweep { reason: String },
}

/// Shape of the ramp between cut-in and rated speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Straight line from zero at cut-in to rated power at rated speed.
    #[default]
    Linear,
    /// `rated_power * (u / rated_speed)^3`.
    Cubic,
}

impl Interpolation {
    /// Every accepted selector, in display order.
    pub const ALL: [Interpolation; 2] = [Interpolation::Linear, Interpolation::Cubic];

    /// Returns the exact selector string accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Cubic => "Cubic",
        }
    }

    /// Returns the other interpolation law.
    pub fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::Cubic,
            Self::Cubic => Self::Linear,
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interpolation {
    type Err = CurveError;

    /// Parses a selector. Matching is case-sensitive and there is no fallback:
    /// `"linear"` is rejected just like `"Quadratic"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linear" => Ok(Self::Linear),
            "Cubic" => Ok(Self::Cubic),
            other => InvalidInterpolationModeSnafu { mode: other }.fail(),
        }
    }
}

/// Call-time bundle of turbine parameters.
///
/// Speeds are in m/s and power in MW. The evaluator expects
/// `0 <= cut_in < rated_speed < cut_out` and `rated_power >= 0` but does not
/// enforce those orderings; only configurations that make the ramp formula
/// undefined are rejected.
///
/// # Examples
///
/// ```
/// use power_curve::curve::{Interpolation, TurbineCurveParameters};
///
/// let params = TurbineCurveParameters::default();
/// assert_eq!(params.rated_power, 15.0);
/// assert_eq!(params.interpolation, Interpolation::Linear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbineCurveParameters {
    /// Wind speed below which the turbine produces nothing (m/s).
    pub cut_in: f64,
    /// Wind speed at and above which the turbine is shut down (m/s).
    pub cut_out: f64,
    /// Wind speed at which rated power is first reached (m/s).
    pub rated_speed: f64,
    /// Power delivered between rated speed and cut-out (MW).
    pub rated_power: f64,
    /// Ramp shape between cut-in and rated speed.
    pub interpolation: Interpolation,
}

impl Default for TurbineCurveParameters {
    fn default() -> Self {
        Self {
            cut_in: 3.0,
            cut_out: 25.0,
            rated_speed: 11.0,
            rated_power: 15.0,
            interpolation: Interpolation::Linear,
        }
    }
}

impl TurbineCurveParameters {
    /// Creates a parameter set.
    ///
    /// # Arguments
    ///
    /// * `cut_in` - Cut-in wind speed (m/s)
    /// * `cut_out` - Cut-out wind speed (m/s)
    /// * `rated_speed` - Rated wind speed (m/s)
    /// * `rated_power` - Rated power (MW)
    /// * `interpolation` - Ramp law between cut-in and rated speed
    pub fn new(
        cut_in: f64,
        cut_out: f64,
        rated_speed: f64,
        rated_power: f64,
        interpolation: Interpolation,
    ) -> Self {
        Self {
            cut_in,
            cut_out,
            rated_speed,
            rated_power,
            interpolation,
        }
    }

    /// Returns a copy with a different ramp law.
    pub fn with_interpolation(self, interpolation: Interpolation) -> Self {
        Self {
            interpolation,
            ..self
        }
    }

    /// Evaluates the power curve at `wind_speed`.
    ///
    /// Shorthand for [`super::evaluate`] when one parameter set is reused across
    /// many wind-speed samples.
    pub fn power_mw(&self, wind_speed: f64) -> Result<f64, CurveError> {
        super::evaluate(wind_speed, self)
    }
}

/// One sample of a wind-speed sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    /// Wind speed at hub height (m/s).
    pub wind_speed_ms: f64,
    /// Turbine output (MW).
    pub power_mw: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_selectors() {
        assert_eq!("Linear".parse::<Interpolation>(), Ok(Interpolation::Linear));
        assert_eq!("Cubic".parse::<Interpolation>(), Ok(Interpolation::Cubic));
    }

    #[test]
    fn rejects_unknown_selector_without_fallback() {
        let err = "Quadratic".parse::<Interpolation>().unwrap_err();
        assert_eq!(
            err,
            CurveError::InvalidInterpolationMode {
                mode: "Quadratic".to_string()
            }
        );
        assert!(err.to_string().contains("Quadratic"));
    }

    #[test]
    fn selector_matching_is_case_sensitive() {
        assert!("linear".parse::<Interpolation>().is_err());
        assert!("CUBIC".parse::<Interpolation>().is_err());
        assert!(" Linear".parse::<Interpolation>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for mode in Interpolation::ALL {
            assert_eq!(mode.to_string().parse::<Interpolation>(), Ok(mode));
        }
    }

    #[test]
    fn default_mode_is_linear() {
        assert_eq!(Interpolation::default(), Interpolation::Linear);
    }

    #[test]
    fn toggled_swaps_laws() {
        assert_eq!(Interpolation::Linear.toggled(), Interpolation::Cubic);
        assert_eq!(Interpolation::Cubic.toggled(), Interpolation::Linear);
    }

    #[test]
    fn default_parameters_match_reference_turbine() {
        let p = TurbineCurveParameters::default();
        assert_eq!(p.cut_in, 3.0);
        assert_eq!(p.cut_out, 25.0);
        assert_eq!(p.rated_speed, 11.0);
        assert_eq!(p.rated_power, 15.0);
    }

    #[test]
    fn with_interpolation_keeps_other_fields() {
        let p = TurbineCurveParameters::default().with_interpolation(Interpolation::Cubic);
        assert_eq!(p.interpolation, Interpolation::Cubic);
        assert_eq!(p.rated_speed, 11.0);
    }
}
