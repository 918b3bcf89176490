//! Piecewise power-curve evaluation.

use snafu::ensure;

use super::ramp::{cubic_ramp, ensure_cubic_defined, ensure_linear_defined, linear_ramp};
use super::types::{CurveError, Interpolation, NonFiniteInputSnafu, TurbineCurveParameters};

/// Computes turbine output (MW) at `wind_speed` (m/s).
///
/// Intervals are tested in order, lower bound inclusive:
///
/// | wind speed `u`               | output        |
/// |------------------------------|---------------|
/// | `u < cut_in`                 | `0.0`         |
/// | `cut_in <= u < rated_speed`  | ramp value    |
/// | `rated_speed <= u < cut_out` | `rated_power` |
/// | `u >= cut_out`               | `0.0`         |
///
/// The ramp value comes from [`linear_ramp`] or [`cubic_ramp`] depending on
/// `params.interpolation`. A configuration that makes the selected ramp
/// undefined is rejected for every wind speed, not only inside the ramp
/// region. A NaN wind speed fails every comparison and yields `0.0`.
///
/// # Errors
///
/// Returns [`CurveError::DegenerateCurve`] when `rated_speed == cut_in`
/// (Linear) or `rated_speed == 0` (Cubic).
///
/// # Examples
///
/// ```
/// use power_curve::curve::{evaluate, TurbineCurveParameters};
///
/// let params = TurbineCurveParameters::default();
/// assert_eq!(evaluate(7.0, &params), Ok(7.5));
/// assert_eq!(evaluate(30.0, &params), Ok(0.0));
/// ```
pub fn evaluate(wind_speed: f64, params: &TurbineCurveParameters) -> Result<f64, CurveError> {
    check_ramp(params)?;

    if wind_speed < params.cut_in {
        Ok(0.0)
    } else if wind_speed < params.rated_speed {
        match params.interpolation {
            Interpolation::Linear => linear_ramp(wind_speed, params),
            Interpolation::Cubic => cubic_ramp(wind_speed, params),
        }
    } else if wind_speed < params.cut_out {
        Ok(params.rated_power)
    } else {
        Ok(0.0)
    }
}

/// Evaluates the curve from loose arguments and a string selector.
///
/// This is the flat programmatic entry point used by front ends that collect
/// the selector as text. Pass `"Linear"` for the default law.
///
/// # Errors
///
/// Returns [`CurveError::InvalidInterpolationMode`] unless `interpolation` is
/// exactly `"Linear"` or `"Cubic"`; nothing is computed in that case.
/// Degenerate ramps fail as in [`evaluate`].
pub fn power_curve(
    wind_speed: f64,
    interpolation: &str,
    cut_in: f64,
    cut_out: f64,
    rated_speed: f64,
    rated_power: f64,
) -> Result<f64, CurveError> {
    let interpolation = interpolation.parse::<Interpolation>()?;
    let params =
        TurbineCurveParameters::new(cut_in, cut_out, rated_speed, rated_power, interpolation);
    evaluate(wind_speed, &params)
}

/// Checks that the selected ramp law is defined for `params`.
pub fn check_ramp(params: &TurbineCurveParameters) -> Result<(), CurveError> {
    match params.interpolation {
        Interpolation::Linear => ensure_linear_defined(params),
        Interpolation::Cubic => ensure_cubic_defined(params),
    }
}

/// Checks that both speeds, the rated speed and the rated power are finite.
///
/// [`evaluate`] does not call this; front ends that accept free-form numbers
/// run it before evaluating.
pub fn check_finite(params: &TurbineCurveParameters) -> Result<(), CurveError> {
    let fields = [
        ("cut_in", params.cut_in),
        ("cut_out", params.cut_out),
        ("rated_speed", params.rated_speed),
        ("rated_power", params.rated_power),
    ];
    for (field, value) in fields {
        ensure!(value.is_finite(), NonFiniteInputSnafu { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn reference(interpolation: Interpolation) -> TurbineCurveParameters {
        TurbineCurveParameters::default().with_interpolation(interpolation)
    }

    #[test]
    fn rated_speed_falls_in_flat_branch() {
        let p = reference(Interpolation::Linear);
        assert_eq!(evaluate(11.0, &p), Ok(15.0));
    }

    #[test]
    fn linear_ramp_value() {
        let p = reference(Interpolation::Linear);
        assert_eq!(evaluate(7.0, &p), Ok(7.5));
    }

    #[test]
    fn cubic_ramp_value() {
        let p = reference(Interpolation::Cubic);
        let power = evaluate(7.0, &p).unwrap();
        let expected = 15.0 * (7.0_f64 / 11.0).powi(3);
        assert!((power - expected).abs() < 1e-12);
        assert!((power - 3.8655).abs() < 1e-3);
    }

    #[test]
    fn below_cut_in_is_zero_for_both_laws() {
        for mode in Interpolation::ALL {
            assert_eq!(evaluate(2.0, &reference(mode)), Ok(0.0), "{mode}");
        }
    }

    #[test]
    fn above_cut_out_is_zero_for_both_laws() {
        for mode in Interpolation::ALL {
            assert_eq!(evaluate(30.0, &reference(mode)), Ok(0.0), "{mode}");
        }
    }

    #[test]
    fn cut_out_boundary_is_zero() {
        for mode in Interpolation::ALL {
            assert_eq!(evaluate(25.0, &reference(mode)), Ok(0.0), "{mode}");
        }
    }

    #[test]
    fn cut_in_boundary_uses_ramp_formula() {
        assert_eq!(evaluate(3.0, &reference(Interpolation::Linear)), Ok(0.0));

        let cubic = evaluate(3.0, &reference(Interpolation::Cubic)).unwrap();
        let expected = 15.0 * (3.0_f64 / 11.0).powi(3);
        assert!((cubic - expected).abs() < 1e-12);
    }

    #[test]
    fn cubic_is_continuous_at_rated_speed() {
        let p = reference(Interpolation::Cubic);
        let just_below = evaluate(11.0 - 1e-9, &p).unwrap();
        assert!((just_below - 15.0).abs() < 1e-6);
        assert_eq!(evaluate(11.0, &p), Ok(15.0));
    }

    #[test]
    fn linear_ramp_is_monotonic() {
        let p = reference(Interpolation::Linear);
        let mut prev = evaluate(3.0, &p).unwrap();
        let mut u = 3.0;
        while u < 11.0 {
            let power = evaluate(u, &p).unwrap();
            assert!(power >= prev, "power dropped at u={u}");
            prev = power;
            u += 0.05;
        }
    }

    #[test]
    fn negative_wind_speed_is_zero() {
        assert_eq!(evaluate(-4.0, &reference(Interpolation::Linear)), Ok(0.0));
    }

    #[test]
    fn output_stays_within_rated_range_for_random_turbines() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let cut_in = rng.random_range(0.0..5.0);
            let rated_speed = cut_in + rng.random_range(0.5..10.0);
            let cut_out = rated_speed + rng.random_range(0.5..15.0);
            let rated_power = rng.random_range(0.0..20.0);
            for mode in Interpolation::ALL {
                let p =
                    TurbineCurveParameters::new(cut_in, cut_out, rated_speed, rated_power, mode);
                let u = rng.random_range(-5.0..40.0);
                let power = evaluate(u, &p).unwrap();
                assert!(
                    (0.0..=rated_power + 1e-9).contains(&power),
                    "power {power} outside [0, {rated_power}] at u={u} ({mode})"
                );
                if u < cut_in || u >= cut_out {
                    assert_eq!(power, 0.0);
                } else if u >= rated_speed {
                    assert_eq!(power, rated_power);
                }
            }
        }
    }

    #[test]
    fn degenerate_linear_fails_everywhere() {
        let p = TurbineCurveParameters::new(5.0, 25.0, 5.0, 3.0, Interpolation::Linear);
        for u in [0.0, 5.0, 10.0, 30.0] {
            assert!(matches!(
                evaluate(u, &p),
                Err(CurveError::DegenerateCurve { .. })
            ));
        }
    }

    #[test]
    fn degenerate_cubic_fails() {
        let p = TurbineCurveParameters::new(0.0, 25.0, 0.0, 3.0, Interpolation::Cubic);
        assert!(matches!(
            evaluate(1.0, &p),
            Err(CurveError::DegenerateCurve { .. })
        ));
    }

    #[test]
    fn power_curve_accepts_string_selector() {
        assert_eq!(power_curve(7.0, "Linear", 3.0, 25.0, 11.0, 15.0), Ok(7.5));
        assert_eq!(power_curve(11.0, "Cubic", 3.0, 25.0, 11.0, 15.0), Ok(15.0));
    }

    #[test]
    fn power_curve_rejects_unknown_mode() {
        let err = power_curve(7.0, "Quadratic", 3.0, 25.0, 11.0, 15.0).unwrap_err();
        assert_eq!(
            err,
            CurveError::InvalidInterpolationMode {
                mode: "Quadratic".to_string()
            }
        );
    }

    #[test]
    fn check_finite_names_the_offending_field() {
        assert_eq!(check_finite(&reference(Interpolation::Linear)), Ok(()));

        let mut p = reference(Interpolation::Cubic);
        p.rated_power = f64::INFINITY;
        let err = check_finite(&p).unwrap_err();
        assert!(matches!(
            &err,
            CurveError::NonFiniteInput { field, .. } if field == "rated_power"
        ));
        assert!(err.to_string().contains("rated_power must be a finite number"));

        p.rated_power = 15.0;
        p.cut_in = f64::NAN;
        assert!(matches!(
            check_finite(&p),
            Err(CurveError::NonFiniteInput { field, .. }) if field == "cut_in"
        ));
    }

    #[test]
    fn power_mw_matches_evaluate() {
        let p = reference(Interpolation::Cubic);
        assert_eq!(p.power_mw(9.0), evaluate(9.0, &p));
    }
}
