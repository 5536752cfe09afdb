use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "DieOpt Developers",
    version,
    about = "DieOpt CLI - Estimate and place rectangular dies on a circular wafer using a three fixed-offset grid search.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to evaluate offsets in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count and place dies on a wafer, comparing the three fixed grid offsets.
    Run(RunArgs),
    /// List the named wafer sizes accepted by `--preset`.
    Presets,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Path to a job configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Wafer ---
    /// Wafer diameter in mm. Takes precedence over `--preset`.
    #[arg(short = 'd', long, value_name = "MM")]
    pub diameter: Option<f64>,

    /// Named wafer size (e.g., '2in', '300mm'). See `dieopt presets`.
    #[arg(short = 'p', long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Width of the unusable ring at the wafer rim, in mm.
    #[arg(short = 'e', long, value_name = "MM")]
    pub edge_exclusion: Option<f64>,

    // --- Die ---
    /// Die width in mm.
    #[arg(long, value_name = "MM")]
    pub width: Option<f64>,

    /// Die height in mm.
    #[arg(long, value_name = "MM")]
    pub height: Option<f64>,

    /// Scribe (saw street) width added to both pitches, in mm.
    #[arg(long, value_name = "MM")]
    pub scribe: Option<f64>,

    // --- Output ---
    /// Which placement to output: best, iter1, iter2, iter3 or all.
    #[arg(short = 's', long = "select", value_name = "MODE")]
    pub selection: Option<String>,

    /// Output format for the die coordinates.
    #[arg(short = 'f', long, value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Write the die coordinates to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S die.scribe=0.1
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
