//! Wind turbine power curve: parameters, ramp laws, and evaluation.

pub mod evaluator;
pub mod ramp;
pub mod sweep;
pub mod types;

pub use evaluator::{check_finite, check_ramp, evaluate, power_curve};
pub use ramp::{cubic_ramp, linear_ramp};
pub use sweep::{full_range, sample};
pub use types::{CurveError, CurvePoint, Interpolation, TurbineCurveParameters};
