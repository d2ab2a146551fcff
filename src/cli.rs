//! Command-line interface for the `mausam` binary.

use std::path::PathBuf;

use clap::Parser;
use mausam_core::Verbosity;
use mausam_weather::Locale;

/// mausam - current weather and seasonal advice for a city
///
/// Looks the city up on Open-Meteo, then prints temperature, humidity, the
/// rain chance for the next few hours, and advice for the season. With no
/// city given, reads one city per line from stdin.
#[derive(Debug, Parser)]
#[command(name = "mausam")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// City to look up; several words are joined into one name
    #[arg(value_name = "CITY")]
    pub city: Vec<String>,

    /// Display language (hi or en); overrides the config file
    #[arg(short, long, value_name = "LANG")]
    pub lang: Option<Locale>,

    /// Print each result as a JSON object
    #[arg(long)]
    pub json: bool,

    /// Path to custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }

    /// The city given on the command line, or `None` for interactive mode
    pub fn city_arg(&self) -> Option<String> {
        if self.city.is_empty() {
            None
        } else {
            Some(self.city.join(" "))
        }
    }
}
