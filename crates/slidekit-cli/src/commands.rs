//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use slidekit::SlideDirection;
use std::path::PathBuf;

/// Slidekit: simulate and verify slide-in/hold/slide-out panel transitions
#[derive(Parser, Debug)]
#[command(name = "slidekit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Write logs to stderr as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a scripted simulation and print the event log
    Simulate(SimulateArgs),

    /// Verify one uninterrupted show against the expected timeline
    Check(CheckArgs),

    /// Print the resolved transition configuration as YAML
    Config(ConfigArgs),
}

/// Transition and panel options shared by every command
#[derive(Args, Debug, Clone)]
pub struct TransitionArgs {
    /// Transition config file (.yaml, .yml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the slide direction
    #[arg(long)]
    pub direction: Option<DirectionArg>,

    /// Override the slide duration in seconds
    #[arg(long)]
    pub animation_duration: Option<f32>,

    /// Override the hold duration in seconds (0 disables auto-hide)
    #[arg(long)]
    pub on_screen_duration: Option<f32>,
}

/// Panel geometry
#[derive(Args, Debug, Clone)]
pub struct PanelArgs {
    /// Panel width
    #[arg(long, default_value = "320")]
    pub width: f32,

    /// Panel height
    #[arg(long, default_value = "64")]
    pub height: f32,

    /// On-screen anchor x
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub x: f32,

    /// On-screen anchor y
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub y: f32,

    /// Panel is not enclosed in a frame (no off-screen margin)
    #[arg(long)]
    pub unframed: bool,
}

/// Arguments for the simulate command
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Transition options
    #[command(flatten)]
    pub transition: TransitionArgs,

    /// Panel geometry
    #[command(flatten)]
    pub panel: PanelArgs,

    /// Ticks per second
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Simulated seconds
    #[arg(short, long, default_value = "5")]
    pub duration: f64,

    /// Call show() at this time (repeatable)
    #[arg(long = "show-at", value_name = "SECS")]
    pub show_at: Vec<f64>,

    /// Call hide() at this time (repeatable)
    #[arg(long = "hide-at", value_name = "SECS")]
    pub hide_at: Vec<f64>,

    /// Show this message with the first show
    #[arg(long)]
    pub message: Option<String>,

    /// Include per-tick position samples in the output
    #[arg(long)]
    pub samples: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Transition options
    #[command(flatten)]
    pub transition: TransitionArgs,

    /// Panel geometry
    #[command(flatten)]
    pub panel: PanelArgs,

    /// Ticks per second
    #[arg(long, default_value = "60")]
    pub fps: u32,

    /// Allowed timing error in milliseconds
    #[arg(long, default_value = "1.0")]
    pub tolerance_ms: f64,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Transition options
    #[command(flatten)]
    pub transition: TransitionArgs,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Slide direction
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    /// Enter from the top edge
    FromTop,
    /// Enter from the bottom edge
    FromBottom,
    /// Enter from the left edge
    FromLeft,
    /// Enter from the right edge
    FromRight,
}

impl From<DirectionArg> for SlideDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::FromTop => Self::FromTop,
            DirectionArg::FromBottom => Self::FromBottom,
            DirectionArg::FromLeft => Self::FromLeft,
            DirectionArg::FromRight => Self::FromRight,
        }
    }
}

/// Color output choice
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
