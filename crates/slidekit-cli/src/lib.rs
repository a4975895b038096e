//! Slidekit CLI Library
//!
//! Command-line front end for `slidekit`: run headless transition
//! simulations, check a configuration's lifecycle timing, and print
//! resolved configurations.

#![warn(missing_docs)]
#![allow(clippy::format_push_string)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    CheckArgs, Cli, ColorArg, Commands, ConfigArgs, DirectionArg, OutputFormat, PanelArgs,
    SimulateArgs, TransitionArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
