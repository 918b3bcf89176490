//! Command-line argument parsing for the `power-curve` binary.

use std::env;
use std::path::PathBuf;

use crate::config::TurbineConfig;

/// Default port for the REST API.
pub const DEFAULT_PORT: u16 = 3000;

/// Parsed command-line options.
#[derive(Debug, Default)]
pub struct CliOptions {
    /// Wind speed to evaluate (m/s).
    pub wind_speed: Option<f64>,
    /// Ramp law selector, validated later so a bad name surfaces as a curve error.
    pub interpolation: Option<String>,
    pub cut_in: Option<f64>,
    pub cut_out: Option<f64>,
    pub rated_speed: Option<f64>,
    pub rated_power: Option<f64>,
    /// TOML turbine configuration file.
    pub config: Option<PathBuf>,
    /// Built-in preset name.
    pub preset: Option<String>,
    /// Prompt for every parameter on stdin.
    pub interactive: bool,
    /// CSV destination for a sampled curve.
    pub sweep_out: Option<PathBuf>,
    pub sweep_from: Option<f64>,
    pub sweep_to: Option<f64>,
    pub sweep_step: Option<f64>,
    /// Start the REST API after any one-shot output.
    pub serve: bool,
    /// REST API port.
    pub port: Option<u16>,
    /// Launch the terminal UI.
    pub tui: bool,
    /// `--help` was requested.
    pub help: bool,
}

impl CliOptions {
    /// Resolves the base configuration from `--config` or `--preset`,
    /// defaulting to the `reference` preset.
    pub fn base_config(&self) -> Result<TurbineConfig, String> {
        let cfg = if let Some(path) = &self.config {
            TurbineConfig::from_toml_file(path)
        } else if let Some(name) = &self.preset {
            TurbineConfig::from_preset(name)
        } else {
            Ok(TurbineConfig::reference())
        };
        cfg.map_err(|e| e.to_string())
    }

    /// Applies per-field command-line overrides on top of `cfg`.
    pub fn apply_overrides(&self, cfg: &mut TurbineConfig) {
        let t = &mut cfg.turbine;
        if let Some(v) = self.cut_in {
            t.cut_in = v;
        }
        if let Some(v) = self.cut_out {
            t.cut_out = v;
        }
        if let Some(v) = self.rated_speed {
            t.rated_speed = v;
        }
        if let Some(v) = self.rated_power {
            t.rated_power = v;
        }
        if let Some(v) = &self.interpolation {
            t.interpolation.clone_from(v);
        }

        let s = &mut cfg.sweep;
        if let Some(v) = self.sweep_from {
            s.from = v;
        }
        if let Some(v) = self.sweep_to {
            s.to = v;
        }
        if let Some(v) = self.sweep_step {
            s.step = v;
        }
    }
}

/// Parses the process arguments.
pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(args)
}

/// Parses an explicit argument list (without the program name).
pub fn parse_args_from(args: Vec<String>) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut i = 0usize;

    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--help" | "-h" => {
                opts.help = true;
                return Ok(opts);
            }
            "--interactive" => opts.interactive = true,
            "--serve" => opts.serve = true,
            "--tui" => opts.tui = true,
            "--wind-speed" => set_once(&mut opts.wind_speed, flag, number(&args, &mut i, flag)?)?,
            "--cut-in" => set_once(&mut opts.cut_in, flag, number(&args, &mut i, flag)?)?,
            "--cut-out" => set_once(&mut opts.cut_out, flag, number(&args, &mut i, flag)?)?,
            "--rated-speed" => {
                set_once(&mut opts.rated_speed, flag, number(&args, &mut i, flag)?)?;
            }
            "--rated-power" => {
                set_once(&mut opts.rated_power, flag, number(&args, &mut i, flag)?)?;
            }
            "--sweep-from" => set_once(&mut opts.sweep_from, flag, number(&args, &mut i, flag)?)?,
            "--sweep-to" => set_once(&mut opts.sweep_to, flag, number(&args, &mut i, flag)?)?,
            "--sweep-step" => set_once(&mut opts.sweep_step, flag, number(&args, &mut i, flag)?)?,
            "--interpolation" => {
                let v = value(&args, &mut i, flag, "Linear or Cubic")?;
                set_once(&mut opts.interpolation, flag, v.to_string())?;
            }
            "--config" => {
                let v = value(&args, &mut i, flag, "a TOML file path")?;
                set_once(&mut opts.config, flag, PathBuf::from(v))?;
            }
            "--preset" => {
                let v = value(&args, &mut i, flag, "a preset name")?;
                set_once(&mut opts.preset, flag, v.to_string())?;
            }
            "--sweep-out" => {
                let v = value(&args, &mut i, flag, "a CSV file path")?;
                set_once(&mut opts.sweep_out, flag, PathBuf::from(v))?;
            }
            "--port" => {
                let v = value(&args, &mut i, flag, "a u16")?;
                let port = v
                    .parse::<u16>()
                    .map_err(|_| format!("--port value \"{v}\" is not a valid u16"))?;
                set_once(&mut opts.port, flag, port)?;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.config.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--config` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }
    if let Some(flag) = interactive_conflict(&opts) {
        return Err(format!("`--interactive` prompts for every parameter; drop `{flag}`"));
    }

    Ok(opts)
}

/// First flag that an interactive session would otherwise ignore.
fn interactive_conflict(opts: &CliOptions) -> Option<&'static str> {
    if !opts.interactive {
        return None;
    }
    [
        ("--wind-speed", opts.wind_speed.is_some()),
        ("--interpolation", opts.interpolation.is_some()),
        ("--cut-in", opts.cut_in.is_some()),
        ("--cut-out", opts.cut_out.is_some()),
        ("--rated-speed", opts.rated_speed.is_some()),
        ("--rated-power", opts.rated_power.is_some()),
        ("--config", opts.config.is_some()),
        ("--preset", opts.preset.is_some()),
        ("--sweep-out", opts.sweep_out.is_some()),
        ("--sweep-from", opts.sweep_from.is_some()),
        ("--sweep-to", opts.sweep_to.is_some()),
        ("--sweep-step", opts.sweep_step.is_some()),
        ("--serve", opts.serve),
        ("--port", opts.port.is_some()),
        ("--tui", opts.tui),
    ]
    .into_iter()
    .find_map(|(flag, set)| set.then_some(flag))
}

fn value<'a>(
    args: &'a [String],
    i: &mut usize,
    flag: &str,
    expected: &str,
) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("missing value for {flag} (expected {expected})"))
}

fn number(args: &[String], i: &mut usize, flag: &str) -> Result<f64, String> {
    let v = value(args, i, flag, "a number")?;
    let n = v
        .parse::<f64>()
        .map_err(|_| format!("{flag} value \"{v}\" is not a number"))?;
    if !n.is_finite() {
        return Err(format!("{flag} value \"{v}\" must be finite"));
    }
    Ok(n)
}

fn set_once<T>(slot: &mut Option<T>, flag: &str, value: T) -> Result<(), String> {
    if slot.replace(value).is_some() {
        return Err(format!("{flag} provided more than once"));
    }
    Ok(())
}

/// Prints usage to stderr.
pub fn print_usage() {
    eprintln!("power-curve: wind turbine power curve evaluator");
    eprintln!();
    eprintln!("Usage: power-curve [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --wind-speed <m/s>         Evaluate the curve at this wind speed");
    eprintln!("  --interpolation <mode>     Ramp law: Linear or Cubic");
    eprintln!("  --cut-in <m/s>             Override cut-in wind speed");
    eprintln!("  --cut-out <m/s>            Override cut-out wind speed");
    eprintln!("  --rated-speed <m/s>        Override rated wind speed");
    eprintln!("  --rated-power <MW>         Override rated power");
    eprintln!("  --config <path>            Load turbine from TOML config file");
    eprintln!(
        "  --preset <name>            Use a built-in preset ({})",
        TurbineConfig::PRESETS.join(", ")
    );
    eprintln!("  --interactive              Prompt for all parameters on stdin");
    eprintln!("  --sweep-out <path>         Export a sampled curve to CSV");
    eprintln!("  --sweep-from <m/s>         First sampled wind speed");
    eprintln!("  --sweep-to <m/s>           Last sampled wind speed");
    eprintln!("  --sweep-step <m/s>         Sample spacing");
    eprintln!("  --serve                    Start REST API server (feature `api`)");
    eprintln!("  --port <u16>               API server port (default: {DEFAULT_PORT})");
    eprintln!("  --tui                      Launch terminal UI (feature `tui`)");
    eprintln!("  --help                     Show this help message");
    eprintln!();
    eprintln!("If neither --wind-speed nor --sweep-out is given, the sampled curve is printed.");
}
