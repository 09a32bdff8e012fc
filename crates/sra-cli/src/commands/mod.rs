//! CLI command definitions.

pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sra", about = "Security Report Assistant", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the analysis web server
    Serve(serve::ServeArgs),
}
