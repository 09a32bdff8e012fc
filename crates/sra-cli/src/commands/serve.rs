//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use sra_core::config::AppConfig;
use sra_web::state::AppState;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = AppConfig::from_env();
    if config.api_key.is_none() {
        tracing::warn!(
            "GEMINI_API_KEY is not set; analysis requests will fail until it is configured"
        );
    }

    let state = AppState::new(&config);

    println!();
    println!("  {} {}", "SRA".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Frontend".green(),
        args.host,
        args.port
    );
    println!(
        "  {}       POST http://{}:{}/process",
        "API".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    sra_web::run_server(state, &args.host, args.port).await?;

    Ok(())
}
