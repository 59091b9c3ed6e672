//! Command-line interface for the simulator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Log level for the simulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Show all messages including trace
    Trace,
    /// Show debug messages and above (includes every failed sensor poll)
    Debug,
    /// Show info messages and above (default)
    Info,
    /// Show warnings and errors only
    Warn,
    /// Show errors only
    Error,
}

impl LogLevel {
    /// Convert LogLevel to env_logger filter string
    pub fn to_filter_string(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Climate panel simulator: renders the panel against a simulated DHT22
#[derive(Parser, Debug)]
#[command(name = "climate-panel")]
#[command(version)]
#[command(about = "Runs the climate panel against a simulated DHT22 sensor", long_about = None)]
pub struct Cli {
    /// Number of 10 ms ticks to run headless
    #[arg(short, long, default_value_t = 1000)]
    pub ticks: u32,

    /// PNG snapshot written after a headless run
    #[arg(short, long, default_value = "climate-panel.png")]
    pub output: PathBuf,

    /// Pixel scale of the snapshot or window
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=8))]
    pub scale: u32,

    /// Make every N-th sensor conversion time out
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub fail_every: Option<u32>,

    /// Simulate a sensor that never becomes ready
    #[arg(long)]
    pub sensor_offline: bool,

    /// Simulate a display that fails to initialize
    #[arg(long)]
    pub display_offline: bool,

    /// Open an interactive window instead of running headless
    #[arg(short, long)]
    pub window: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(short, long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self { Self::parse() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(LogLevel::Info.to_filter_string(), "info");
        assert_eq!(LogLevel::Debug.to_filter_string(), "debug");
        assert_eq!(LogLevel::Error.to_filter_string(), "error");
    }

    #[test]
    fn test_default_values() {
        let cli = Cli::parse_from(["climate-panel"]);
        assert_eq!(cli.ticks, 1000);
        assert_eq!(cli.output, PathBuf::from("climate-panel.png"));
        assert_eq!(cli.scale, 2);
        assert_eq!(cli.fail_every, None);
        assert!(!cli.sensor_offline);
        assert!(!cli.display_offline);
        assert!(!cli.window);
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "climate-panel",
            "--ticks",
            "250",
            "--fail-every",
            "3",
            "--sensor-offline",
            "--display-offline",
            "-l",
            "debug",
        ]);
        assert_eq!(cli.ticks, 250);
        assert_eq!(cli.fail_every, Some(3));
        assert!(cli.sensor_offline);
        assert!(cli.display_offline);
        assert_eq!(cli.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_zero_fail_every_rejected() {
        assert!(Cli::try_parse_from(["climate-panel", "--fail-every", "0"]).is_err());
    }
}
