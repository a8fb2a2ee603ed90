//! # Maturity CLI Module
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `stages` - List the stage catalog
//! - `show` - Render one stage (default when no command is given)
//! - `tour` - Interactive navigation from stdin

mod commands;
mod render;

use crate::error::AppError;
use clap::{Parser, Subcommand};
use maturity_core::ViewMode;
use std::path::PathBuf;

pub use commands::*;
pub use render::{render_stage_list, render_view};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Maturity - five-stage maturity simulator
///
/// Walks the Foundation → Crawl → Walk → Run → Fly journey in the terminal or
/// serves it over HTTP.
#[derive(Parser, Debug)]
#[command(name = "maturity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the stage catalog
    Stages,

    /// Render one stage
    Show {
        /// Stage index (0-based) or id (foundation, crawl, walk, run, fly)
        #[arg(short, long)]
        stage: Option<String>,

        /// View mode (application, service)
        #[arg(short, long, default_value = "application")]
        mode: ViewMode,
    },

    /// Navigate interactively (next, prev, select N, mode M, toggle, reset, quit)
    Tour {
        /// Initial view mode (application, service)
        #[arg(short, long, default_value = "application")]
        mode: ViewMode,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), AppError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => {
            cmd_server(cli.config.as_deref(), host, port).await
        }
        Some(Commands::Stages) => cmd_stages(json_mode),
        Some(Commands::Show { stage, mode }) => cmd_show(stage.as_deref(), mode, json_mode),
        Some(Commands::Tour { mode }) => cmd_tour(mode, json_mode),
        None => cmd_show(None, ViewMode::Application, json_mode),
    }
}
