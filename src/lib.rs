//! Wind turbine power curve evaluator.
//!
//! The core is [`curve::evaluate`], a pure piecewise map from wind speed to
//! power. Everything else (config files, CLI, prompts, CSV, HTTP, TUI) is a
//! front end over it.

#[cfg(feature = "api")]
pub mod api;
pub mod cli;
pub mod config;
pub mod curve;
pub mod io;
pub mod prompt;
pub mod report;
#[cfg(feature = "tui")]
pub mod tui;
