//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Outlay - Track spending with AI-assisted categorization
#[derive(Parser)]
#[command(name = "outlay")]
#[command(about = "Personal expense tracker with AI categorization", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "outlay.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        /// By default, the server requires a bearer key from OUTLAY_API_KEYS.
        #[arg(long)]
        no_auth: bool,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Record an expense (category assigned automatically)
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        title: String,

        /// Amount spent (must be positive)
        #[arg(short, long)]
        amount: f64,
    },

    /// Set the monthly budget
    Budget {
        /// Budget amount (must be non-negative)
        #[arg(short, long)]
        amount: f64,

        /// Budget month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show dashboard summary and insights
    Dashboard,

    /// Show or export the monthly spending report
    Report {
        /// Report month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,

        /// Write the report as a PDF to this path instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
