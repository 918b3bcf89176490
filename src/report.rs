//! Human-readable output for evaluations and sampled curves.

use std::fmt;

use crate::curve::{CurvePoint, TurbineCurveParameters};

/// Result of a single evaluation, printed as one summary sentence.
#[derive(Debug, Clone, Copy)]
pub struct PowerReport {
    /// Turbine parameters used for the evaluation.
    pub params: TurbineCurveParameters,
    /// Evaluated wind speed (m/s).
    pub wind_speed_ms: f64,
    /// Computed power (MW).
    pub power_mw: f64,
}

impl fmt::Display for PowerReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.params;
        write!(
            f,
            "The wind turbine power calculated for a turbine with rated power of {:.2} MW, \
             cut-in speed of {:.2} m/s, cut-out speed of {:.2} m/s, rated speed of {:.2} m/s \
             and the {} interpolation method is {:.2} MW at a wind speed of {:.2} m/s",
            p.rated_power,
            p.cut_in,
            p.cut_out,
            p.rated_speed,
            p.interpolation,
            self.power_mw,
            self.wind_speed_ms,
        )
    }
}

/// Sampled curve printed as an aligned two-column table.
pub struct CurveTable<'a> {
    pub params: &'a TurbineCurveParameters,
    pub points: &'a [CurvePoint],
}

impl fmt::Display for CurveTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.params;
        writeln!(
            f,
            "--- Power Curve ({}, {:.2} MW, cut-in {:.2}, rated {:.2}, cut-out {:.2} m/s) ---",
            p.interpolation, p.rated_power, p.cut_in, p.rated_speed, p.cut_out
        )?;
        write!(f, "{:>10}  {:>10}", "u [m/s]", "P [MW]")?;
        for point in self.points {
            write!(
                f,
                "\n{:>10.2}  {:>10.4}",
                point.wind_speed_ms, point.power_mw
            )?;
        }
        Ok(())
    }
}
