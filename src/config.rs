//! TOML-based turbine configuration and preset definitions.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use snafu::Snafu;

use crate::curve::{self, Interpolation, TurbineCurveParameters};

/// Top-level turbine configuration parsed from TOML.
///
/// All fields have defaults matching the `reference` preset. Load from
/// TOML with [`TurbineConfig::from_toml_file`] or use
/// [`TurbineConfig::reference`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurbineConfig {
    /// Power curve parameters.
    #[serde(default)]
    pub turbine: TurbineSection,
    /// Wind-speed range used for curve export.
    #[serde(default)]
    pub sweep: SweepSection,
}

/// Power curve parameters as written in the config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurbineSection {
    /// Cut-in wind speed (m/s).
    pub cut_in: f64,
    /// Cut-out wind speed (m/s).
    pub cut_out: f64,
    /// Rated wind speed (m/s).
    pub rated_speed: f64,
    /// Rated power (MW).
    pub rated_power: f64,
    /// Ramp law: `"Linear"` or `"Cubic"`.
    pub interpolation: String,
}

impl Default for TurbineSection {
    fn default() -> Self {
        let p = TurbineCurveParameters::default();
        Self {
            cut_in: p.cut_in,
            cut_out: p.cut_out,
            rated_speed: p.rated_speed,
            rated_power: p.rated_power,
            interpolation: p.interpolation.to_string(),
        }
    }
}

/// Wind-speed sweep bounds (m/s).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SweepSection {
    /// First sampled wind speed.
    pub from: f64,
    /// Last sampled wind speed (inclusive).
    pub to: f64,
    /// Spacing between samples.
    pub step: f64,
}

impl Default for SweepSection {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 30.0,
            step: 0.5,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Snafu)]
#[snafu(display("config error: {field}: {message}"))]
pub struct ConfigError {
    /// Dotted field path (e.g., `"turbine.interpolation"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl TurbineConfig {
    /// Returns the reference turbine: 15 MW, cut-in 3, rated 11, cut-out 25, linear ramp.
    pub fn reference() -> Self {
        Self {
            turbine: TurbineSection::default(),
            sweep: SweepSection::default(),
        }
    }

    /// Returns the reference turbine with a cubic ramp.
    pub fn reference_cubic() -> Self {
        Self {
            turbine: TurbineSection {
                interpolation: Interpolation::Cubic.to_string(),
                ..TurbineSection::default()
            },
            sweep: SweepSection::default(),
        }
    }

    /// Returns a 3.6 MW onshore-class turbine with a cubic ramp.
    pub fn onshore() -> Self {
        Self {
            turbine: TurbineSection {
                cut_in: 3.5,
                cut_out: 25.0,
                rated_speed: 13.0,
                rated_power: 3.6,
                interpolation: Interpolation::Cubic.to_string(),
            },
            sweep: SweepSection {
                step: 0.25,
                ..SweepSection::default()
            },
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["reference", "reference_cubic", "onshore"];

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "reference" => Ok(Self::reference()),
            "reference_cubic" => Ok(Self::reference_cubic()),
            "onshore" => Ok(Self::onshore()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates the whole configuration and returns a list of errors.
    ///
    /// Combines [`TurbineConfig::validate_turbine`] and
    /// [`TurbineConfig::validate_sweep`].
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = self.validate_turbine();
        errors.extend(self.validate_sweep());
        errors
    }

    /// Validates the turbine section.
    ///
    /// Checks that every number is finite, the interpolation name, and ramp
    /// definedness; the ordering of the speeds is left to the caller.
    pub fn validate_turbine(&self) -> Vec<ConfigError> {
        let t = &self.turbine;
        let mut errors: Vec<ConfigError> = [
            ("turbine.cut_in", t.cut_in),
            ("turbine.cut_out", t.cut_out),
            ("turbine.rated_speed", t.rated_speed),
            ("turbine.rated_power", t.rated_power),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, value)| non_finite(field, value))
        .collect();

        match t.interpolation.parse::<Interpolation>() {
            Ok(interpolation) => {
                let params = self.parameters_with(interpolation);
                if let Err(e) = curve::check_ramp(&params) {
                    errors.push(ConfigError {
                        field: "turbine.rated_speed".into(),
                        message: e.to_string(),
                    });
                }
            }
            Err(e) => errors.push(ConfigError {
                field: "turbine.interpolation".into(),
                message: e.to_string(),
            }),
        }

        errors
    }

    /// Validates the sweep section. Only needed when a curve is sampled.
    pub fn validate_sweep(&self) -> Vec<ConfigError> {
        let s = &self.sweep;
        let mut errors: Vec<ConfigError> = [
            ("sweep.from", s.from),
            ("sweep.to", s.to),
            ("sweep.step", s.step),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, value)| non_finite(field, value))
        .collect();

        if s.step.is_finite() && s.step <= 0.0 {
            errors.push(ConfigError {
                field: "sweep.step".into(),
                message: "must be > 0".into(),
            });
        }
        if s.from > s.to {
            errors.push(ConfigError {
                field: "sweep.from".into(),
                message: "must be <= sweep.to".into(),
            });
        }

        errors
    }

    /// Converts the turbine section into evaluator parameters.
    ///
    /// # Errors
    ///
    /// Returns the first turbine validation error, if any. The sweep section
    /// is not consulted.
    pub fn to_parameters(&self) -> Result<TurbineCurveParameters, ConfigError> {
        if let Some(first) = self.validate_turbine().into_iter().next() {
            return Err(first);
        }
        let interpolation = self
            .turbine
            .interpolation
            .parse::<Interpolation>()
            .map_err(|e| ConfigError {
                field: "turbine.interpolation".into(),
                message: e.to_string(),
            })?;
        Ok(self.parameters_with(interpolation))
    }

    /// Overwrites the turbine section from evaluator parameters.
    pub fn set_parameters(&mut self, params: &TurbineCurveParameters) {
        self.turbine = TurbineSection {
            cut_in: params.cut_in,
            cut_out: params.cut_out,
            rated_speed: params.rated_speed,
            rated_power: params.rated_power,
            interpolation: params.interpolation.to_string(),
        };
    }

    fn parameters_with(&self, interpolation: Interpolation) -> TurbineCurveParameters {
        let t = &self.turbine;
        TurbineCurveParameters::new(
            t.cut_in,
            t.cut_out,
            t.rated_speed,
            t.rated_power,
            interpolation,
        )
    }
}

fn non_finite(field: &str, value: f64) -> ConfigError {
    ConfigError {
        field: field.to_string(),
        message: format!("must be a finite number, got {value}"),
    }
}
