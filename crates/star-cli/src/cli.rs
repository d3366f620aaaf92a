//! CLI argument definitions for the star catalog.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stars",
    version,
    about = "Personal star catalog with Bayer (Greek-letter) designations",
    long_about = "Keep a personal catalog of stars.\n\n\
                  Each star is validated, stored as one file under the catalog \
                  directory and designated Alpha, Beta, Gamma, ... within its \
                  constellation in order of addition."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog directory (default: $STARS_CATALOG_DIR or ./stars).
    #[arg(long = "catalog-dir", value_name = "DIR", global = true)]
    pub catalog_dir: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Display all stars.
    List,

    /// Display the stars of one constellation.
    Constellation {
        /// Constellation name (case-insensitive).
        name: String,
    },

    /// Add a new star; its designation is assigned automatically.
    Add(AddArgs),

    /// Remove a star by catalog designation, e.g. "Beta Orion".
    Remove {
        /// Catalog designation (case-insensitive).
        designation: String,
    },

    /// Find stars at a distance from Earth, in parsecs (2 decimal places).
    Distance {
        #[arg(value_name = "PARSECS")]
        parsecs: f64,
    },

    /// Find stars within a temperature interval, in degrees Celsius.
    Temperature {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Find stars within an absolute magnitude interval.
    Magnitude {
        #[arg(allow_negative_numbers = true)]
        min: f64,
        #[arg(allow_negative_numbers = true)]
        max: f64,
    },

    /// Find stars in a hemisphere (N, S, Northern, Southern).
    Hemisphere { hemisphere: String },

    /// Find stars above the Chandrasekhar limit (1.44 solar masses).
    Supernovas,

    /// Show one star by admission name.
    Show { name: String },
}

#[derive(Args)]
pub struct AddArgs {
    /// Admission name: 3 uppercase letters and 4 digits (e.g. ORI0001).
    #[arg(long)]
    pub name: String,

    /// Constellation the star belongs to.
    #[arg(long)]
    pub constellation: String,

    /// Hemisphere: N, S, Northern or Southern.
    #[arg(long)]
    pub hemisphere: String,

    /// Declination degrees ([0, 90] north, [-90, 0] south).
    #[arg(long = "dec-degrees", allow_negative_numbers = true)]
    pub dec_degrees: i32,

    /// Declination arc-minutes [0, 60).
    #[arg(long = "dec-minutes", default_value_t = 0)]
    pub dec_minutes: i32,

    /// Declination arc-seconds [0, 60).
    #[arg(long = "dec-seconds", default_value_t = 0.0)]
    pub dec_seconds: f64,

    /// Right ascension hours [0, 24).
    #[arg(long = "ra-hours")]
    pub ra_hours: i32,

    /// Right ascension minutes [0, 60).
    #[arg(long = "ra-minutes", default_value_t = 0)]
    pub ra_minutes: i32,

    /// Right ascension seconds [0, 60).
    #[arg(long = "ra-seconds", default_value_t = 0)]
    pub ra_seconds: i32,

    /// Apparent magnitude [-26.74, 15.00].
    #[arg(long = "apparent-magnitude", allow_negative_numbers = true)]
    pub apparent_magnitude: f64,

    /// Distance from Earth in light-years.
    #[arg(long)]
    pub distance: f64,

    /// Temperature in degrees Celsius (at least 2000).
    #[arg(long)]
    pub temperature: f64,

    /// Mass in solar masses [0.1, 50].
    #[arg(long)]
    pub mass: f64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
