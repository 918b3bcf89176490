//! Evenly spaced sampling of a power curve.

use snafu::ensure;

use super::evaluator::{check_ramp, evaluate};
use super::types::{CurveError, CurvePoint, InvalidSweepSnafu, TurbineCurveParameters};

/// Upper bound on the number of points a single sweep may produce.
pub const MAX_SWEEP_POINTS: usize = 100_000;

/// Slack added to the upper bound so `to` is included despite rounding.
const ENDPOINT_TOLERANCE: f64 = 1e-9;

/// Samples the curve at `from, from + step, ...` up to and including `to`.
///
/// Speeds are computed as `from + i * step` rather than by accumulation, so
/// long sweeps do not drift.
///
/// # Errors
///
/// Returns [`CurveError::InvalidSweep`] for non-finite bounds, `step <= 0`,
/// `from > to`, or a sweep longer than [`MAX_SWEEP_POINTS`]. Degenerate
/// ramps fail as in [`evaluate`].
pub fn sample(
    params: &TurbineCurveParameters,
    from: f64,
    to: f64,
    step: f64,
) -> Result<Vec<CurvePoint>, CurveError> {
    ensure!(
        from.is_finite() && to.is_finite() && step.is_finite(),
        InvalidSweepSnafu {
            reason: "bounds and step must be finite",
        }
    );
    ensure!(
        step > 0.0,
        InvalidSweepSnafu {
            reason: format!("step must be > 0, got {step}"),
        }
    );
    ensure!(
        from <= to,
        InvalidSweepSnafu {
            reason: format!("from ({from}) must be <= to ({to})"),
        }
    );
    check_ramp(params)?;

    let intervals = ((to - from) / step + ENDPOINT_TOLERANCE).floor();
    ensure!(
        intervals < MAX_SWEEP_POINTS as f64,
        InvalidSweepSnafu {
            reason: format!("sweep would exceed {MAX_SWEEP_POINTS} points"),
        }
    );

    let count = intervals as usize + 1;
    (0..count)
        .map(|i| {
            let wind_speed_ms = from + i as f64 * step;
            evaluate(wind_speed_ms, params).map(|power_mw| CurvePoint {
                wind_speed_ms,
                power_mw,
            })
        })
        .collect()
}

/// Samples from 0 m/s to a little past cut-out, the range a plot needs.
pub fn full_range(
    params: &TurbineCurveParameters,
    step: f64,
) -> Result<Vec<CurvePoint>, CurveError> {
    let to = params.cut_out.max(0.0) + 5.0;
    sample(params, 0.0, to, step)
}
