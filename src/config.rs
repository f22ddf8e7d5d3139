//! Configuration and CLI argument handling

use clap::Parser;

use crate::state::PowerAction;

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "shutdown-timer")]
#[command(about = "A background timer that shuts down, restarts, or sleeps the Mac")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20552")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Power action armed on startup
    #[arg(short, long, value_enum, default_value_t = PowerAction::Shutdown)]
    pub action: PowerAction,

    /// Countdown duration armed on startup, in seconds
    #[arg(short, long, default_value = "60", value_parser = clap::value_parser!(u64).range(1..))]
    pub duration: u64,

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
