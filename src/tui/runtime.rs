//! TUI application state.

use crate::config::TurbineConfig;
use crate::curve::{self, CurveError, CurvePoint, TurbineCurveParameters};

/// Wind-speed step options in m/s (finest → coarsest).
const STEP_LEVELS: [f64; 5] = [0.1, 0.25, 0.5, 1.0, 2.0];

/// Default step index (0.5 m/s).
const DEFAULT_STEP_IDX: usize = 2;

/// Sample spacing for the plotted curve (m/s).
const CHART_RESOLUTION: f64 = 0.05;

/// TUI application state.
pub struct App {
    /// Turbine being plotted.
    pub params: TurbineCurveParameters,
    /// Name of the active preset, or `"custom"`.
    pub preset_name: String,
    /// Current operating point (m/s).
    pub wind_speed: f64,
    /// Current index into `STEP_LEVELS`.
    pub step_idx: usize,
    /// Sampled curve for the chart; empty when the curve is degenerate.
    pub curve: Vec<CurvePoint>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates a new app from a preset name, falling back to `reference`.
    pub fn new(preset: &str) -> Self {
        let (name, cfg) = match TurbineConfig::from_preset(preset) {
            Ok(cfg) => (preset, cfg),
            Err(_) => ("reference", TurbineConfig::reference()),
        };
        let params = cfg.to_parameters().unwrap_or_default();
        Self::with_parameters(params, name)
    }

    /// Creates a new app for an explicit parameter set.
    pub fn with_parameters(params: TurbineCurveParameters, label: &str) -> Self {
        let mut app = Self {
            params,
            preset_name: label.to_string(),
            wind_speed: params.rated_speed.max(0.0) * 0.5,
            step_idx: DEFAULT_STEP_IDX,
            curve: Vec::new(),
            quit: false,
        };
        app.refresh_curve();
        app
    }

    fn refresh_curve(&mut self) {
        self.curve = curve::full_range(&self.params, CHART_RESOLUTION).unwrap_or_default();
        self.wind_speed = self.wind_speed.clamp(0.0, self.max_wind_speed());
    }

    /// Upper end of the plotted range (m/s).
    pub fn max_wind_speed(&self) -> f64 {
        self.params.cut_out.max(0.0) + 5.0
    }

    /// Evaluates the curve at the current operating point.
    pub fn power(&self) -> Result<f64, CurveError> {
        curve::evaluate(self.wind_speed, &self.params)
    }

    /// Returns the current wind-speed step in m/s.
    pub fn wind_step(&self) -> f64 {
        STEP_LEVELS[self.step_idx]
    }

    /// Moves the operating point up by one step.
    pub fn increase_wind(&mut self) {
        self.wind_speed = (self.wind_speed + self.wind_step()).min(self.max_wind_speed());
    }

    /// Moves the operating point down by one step.
    pub fn decrease_wind(&mut self) {
        self.wind_speed = (self.wind_speed - self.wind_step()).max(0.0);
    }

    /// Uses a larger wind-speed step.
    pub fn coarser_step(&mut self) {
        if self.step_idx + 1 < STEP_LEVELS.len() {
            self.step_idx += 1;
        }
    }

    /// Uses a smaller wind-speed step.
    pub fn finer_step(&mut self) {
        if self.step_idx > 0 {
            self.step_idx -= 1;
        }
    }

    /// Switches between the linear and cubic ramp.
    pub fn toggle_interpolation(&mut self) {
        self.params = self
            .params
            .with_interpolation(self.params.interpolation.toggled());
        self.refresh_curve();
    }

    /// Switches to a different preset, keeping the operating point where possible.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(params) = TurbineConfig::from_preset(name).and_then(|c| c.to_parameters()) else {
            return;
        };
        self.params = params;
        self.preset_name = name.to_string();
        self.refresh_curve();
    }
}
