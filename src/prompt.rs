//! Interactive front end: prompts for turbine parameters and prints the result.
//!
//! Works over any `BufRead`/`Write` pair so the dialogue can be driven from
//! in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use snafu::{ResultExt, Snafu, ensure};

use crate::curve::{self, CurveError, Interpolation, TurbineCurveParameters};
use crate::report::PowerReport;

/// Errors raised during an interactive session.
#[derive(Debug, Snafu)]
pub enum PromptError {
    #[snafu(display("terminal I/O failed: {source}"))]
    Io { source: io::Error },

    #[snafu(display("input ended while waiting for: {prompt}"))]
    EndOfInput { prompt: String },

    #[snafu(display("\"{value}\" is not a number ({prompt})"))]
    InvalidNumber { prompt: String, value: String },

    #[snafu(display("{source}"))]
    Curve { source: CurveError },
}

/// Runs the full prompt sequence and writes the summary sentence.
///
/// The interpolation method is checked as soon as it is entered; an unknown
/// name aborts the session before any further prompt.
///
/// # Errors
///
/// Returns a [`PromptError`] on I/O failure, premature end of input, an
/// unparsable number, an unknown interpolation method, or a degenerate curve.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<PowerReport, PromptError> {
    let wind_speed = ask_number(input, output, "Enter wind speed in m/s")?;
    let mode = ask(input, output, "Select interpolation method from Linear or Cubic")?;
    let interpolation = mode.parse::<Interpolation>().context(CurveSnafu)?;
    let cut_in = ask_number(input, output, "Enter cut in wind speed in m/s")?;
    let cut_out = ask_number(input, output, "Enter cut out wind speed in m/s")?;
    let rated_speed = ask_number(input, output, "Enter rated wind speed in m/s")?;
    let rated_power = ask_number(input, output, "Enter rated power of the turbine in MW")?;

    let params =
        TurbineCurveParameters::new(cut_in, cut_out, rated_speed, rated_power, interpolation);
    let power_mw = curve::evaluate(wind_speed, &params).context(CurveSnafu)?;
    let report = PowerReport {
        params,
        wind_speed_ms: wind_speed,
        power_mw,
    };

    writeln!(output, "{report}").context(IoSnafu)?;
    output.flush().context(IoSnafu)?;
    Ok(report)
}

fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, PromptError> {
    write!(output, "{prompt} : ").context(IoSnafu)?;
    output.flush().context(IoSnafu)?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context(IoSnafu)?;
    ensure!(read > 0, EndOfInputSnafu { prompt });
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<f64, PromptError> {
    let raw = ask(input, output, prompt)?;
    let value = raw.trim();
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => InvalidNumberSnafu { prompt, value }.fail(),
    }
}
