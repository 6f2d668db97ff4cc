//! Command-line surface. No subcommand answers one message from the terminal.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "smart-responder")]
#[command(about = "Rule-based auto-responder: terminal mode or HTTP API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the HTTP API (bind address from RESPONDER_HOST / RESPONDER_PORT).
    Serve,
}
