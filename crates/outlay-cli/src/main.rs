//! Outlay CLI - Personal expense tracker
//!
//! Usage:
//!   outlay init                       Initialize database
//!   outlay add --title T --amount N   Record an expense
//!   outlay budget --amount N          Set this month's budget
//!   outlay dashboard                  Show summary and insights
//!   outlay report --output out.pdf    Export the monthly PDF report
//!   outlay serve --port 3000          Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Serve {
            port,
            host,
            no_auth,
            static_dir,
        } => commands::cmd_serve(&cli.db, &host, port, no_auth, static_dir.as_deref()).await,
        Commands::Add { title, amount } => commands::cmd_add(&cli.db, &title, amount).await,
        Commands::Budget { amount, month } => {
            commands::cmd_budget(&cli.db, amount, month.as_deref())
        }
        Commands::Dashboard => commands::cmd_dashboard(&cli.db).await,
        Commands::Report { period, output } => {
            commands::cmd_report(&cli.db, period.as_deref(), output.as_deref())
        }
    }
}
