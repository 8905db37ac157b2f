//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "countdown-board")]
#[command(about = "An HTTP-fronted countdown clock that renders HH:MM:SS once per second")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Start a countdown with this many seconds at boot
    #[arg(short, long)]
    pub seconds: Option<u64>,

    /// Stop the tick task once the countdown reaches zero instead of
    /// re-rendering 00:00:00 forever
    #[arg(long)]
    pub halt_on_expiry: bool,

    /// Do not mirror the countdown display to stdout
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
