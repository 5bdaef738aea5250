use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use remote::protocol::DEFAULT_ADDR;
use scan_core::UnitStyle;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rtlsdr-scan", version, about = "RTL-SDR scanner helper CLI")]
pub struct Cli {
    /// JSON settings file (precision, sample rate, timestamp file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Treat this directory as the packaged bundle instead of the executable's directory
    #[arg(long, global = true)]
    pub bundle_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send a tune command to the remote control port
    Tune {
        /// Frequency value forwarded as-is
        frequency: f64,
        #[arg(long, default_value_t = DEFAULT_ADDR)]
        addr: SocketAddr,
        #[arg(long, default_value_t = 1000)]
        timeout_ms: u64,
    },
    /// List serial ports
    Ports,
    /// Write, read or fetch the build timestamp
    Version {
        #[command(subcommand)]
        command: VersionCommands,
    },
    /// Sample count and real dwell time for a dwell setting
    Samples {
        #[arg(long)]
        dwell: f64,
        #[arg(long)]
        sample_rate: Option<f64>,
    },
    /// Format a frequency and/or level with the configured precision
    Format {
        #[arg(long, allow_hyphen_values = true)]
        freq: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        level: Option<f64>,
        #[arg(long, value_enum, default_value_t = UnitsArg::Plain)]
        units: UnitsArg,
    },
    /// Format a Unix timestamp
    Time {
        timestamp: f64,
        #[arg(long)]
        with_date: bool,
        #[arg(long, conflicts_with = "with_date")]
        iso: bool,
    },
    /// Convert between linear level and dB
    #[command(group(ArgGroup::new("input").required(true).args(["level", "db"])))]
    Convert {
        #[arg(long, allow_hyphen_values = true)]
        level: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        db: Option<f64>,
    },
    /// Great-circle distance in metres
    Distance {
        #[arg(allow_hyphen_values = true)]
        lat1: f64,
        #[arg(allow_hyphen_values = true)]
        lat2: f64,
        #[arg(allow_hyphen_values = true)]
        lon1: f64,
        #[arg(allow_hyphen_values = true)]
        lon2: f64,
    },
    /// Show the script and resource directories
    Paths {
        resource: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VersionCommands {
    /// Write the current time to the timestamp file
    Stamp,
    /// Read the timestamp file
    Show {
        #[arg(long)]
        seconds: bool,
    },
    /// Fetch the published timestamp
    Repo {
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitsArg {
    Bare,
    Plain,
    Fancy,
}

impl From<UnitsArg> for UnitStyle {
    fn from(value: UnitsArg) -> Self {
        match value {
            UnitsArg::Bare => UnitStyle::Bare,
            UnitsArg::Plain => UnitStyle::Plain,
            UnitsArg::Fancy => UnitStyle::Fancy,
        }
    }
}
