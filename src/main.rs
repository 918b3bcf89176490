//! power-curve entry point: CLI wiring and config-driven evaluation.

use std::error::Error;
use std::io;
use std::process;

use tracing_subscriber::EnvFilter;

use power_curve::cli::{self, CliOptions};
use power_curve::config::{ConfigError, TurbineConfig};
use power_curve::curve::{self, TurbineCurveParameters};
use power_curve::io::export::export_csv;
use power_curve::prompt;
use power_curve::report::{CurveTable, PowerReport};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reports every error after the first on stderr and returns the first.
fn first_error(errors: Vec<ConfigError>) -> Result<(), Box<dyn Error>> {
    let mut errors = errors.into_iter();
    let Some(first) = errors.next() else {
        return Ok(());
    };
    for e in errors {
        eprintln!("{e}");
    }
    Err(first.into())
}

/// Loads the base config and applies command-line overrides.
///
/// Only the turbine section is validated here; the sweep section is checked
/// by the paths that sample a curve.
fn resolve_config(opts: &CliOptions) -> Result<TurbineConfig, Box<dyn Error>> {
    let mut cfg = opts.base_config()?;
    opts.apply_overrides(&mut cfg);
    first_error(cfg.validate_turbine())?;
    match (&opts.config, &opts.preset) {
        (Some(path), _) => tracing::debug!("turbine loaded from {}", path.display()),
        (_, Some(name)) => tracing::debug!("turbine loaded from preset \"{name}\""),
        _ => tracing::debug!("using reference turbine"),
    }
    Ok(cfg)
}

fn run() -> Result<(), Box<dyn Error>> {
    let opts = cli::parse_args()?;
    if opts.help {
        cli::print_usage();
        return Ok(());
    }

    if opts.interactive {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        prompt::run_interactive(&mut stdin.lock(), &mut stdout)?;
        return Ok(());
    }

    let cfg = resolve_config(&opts)?;
    let params = cfg.to_parameters()?;

    if opts.tui {
        return run_tui(&opts, params);
    }

    let prints_table = opts.wind_speed.is_none() && !opts.serve;
    if opts.sweep_out.is_some() || prints_table || opts.serve {
        first_error(cfg.validate_sweep())?;
    }

    if let Some(wind_speed) = opts.wind_speed {
        let power_mw = curve::evaluate(wind_speed, &params)?;
        let report = PowerReport {
            params,
            wind_speed_ms: wind_speed,
            power_mw,
        };
        println!("{report}");
    }

    let sweep = &cfg.sweep;
    if let Some(path) = &opts.sweep_out {
        let points = curve::sample(&params, sweep.from, sweep.to, sweep.step)?;
        export_csv(&points, path)
            .map_err(|e| format!("failed to write CSV \"{}\": {e}", path.display()))?;
        tracing::info!("curve ({} points) written to {}", points.len(), path.display());
    } else if prints_table {
        let points = curve::sample(&params, sweep.from, sweep.to, sweep.step)?;
        println!(
            "{}",
            CurveTable {
                params: &params,
                points: &points,
            }
        );
    }

    if opts.serve {
        return run_server(&opts, params, cfg);
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run_tui(opts: &CliOptions, params: TurbineCurveParameters) -> Result<(), Box<dyn Error>> {
    use power_curve::tui::{self, runtime::App};

    let label = opts.preset.as_deref().unwrap_or("custom");
    tui::run(App::with_parameters(params, label))?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_tui(_opts: &CliOptions, _params: TurbineCurveParameters) -> Result<(), Box<dyn Error>> {
    Err("--tui requires building with `--features tui`".into())
}

#[cfg(feature = "api")]
fn run_server(
    opts: &CliOptions,
    params: TurbineCurveParameters,
    cfg: TurbineConfig,
) -> Result<(), Box<dyn Error>> {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use power_curve::api::{self, AppState};

    let state = Arc::new(AppState {
        params,
        sweep: cfg.sweep,
    });
    let port = opts.port.unwrap_or(cli::DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to create tokio runtime: {e}"))?;
    rt.block_on(api::serve(state, addr))
        .map_err(|e| format!("server error on {addr}: {e}"))?;
    Ok(())
}

#[cfg(not(feature = "api"))]
fn run_server(
    _opts: &CliOptions,
    _params: TurbineCurveParameters,
    _cfg: TurbineConfig,
) -> Result<(), Box<dyn Error>> {
    Err("--serve requires building with `--features api`".into())
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
