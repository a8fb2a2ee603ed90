//! # Maturity - Maturity Simulator
//!
//! The main binary for the five-stage maturity simulator.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │              apps/maturity (THE BINARY)           │
//! │                                                   │
//! │  ┌─────────────────┐        ┌─────────────────┐   │
//! │  │  CLI / Tour     │        │    HTTP API     │   │
//! │  │    (clap)       │        │     (axum)      │   │
//! │  └────────┬────────┘        └────────┬────────┘   │
//! │           └─────────────┬────────────┘            │
//! │                         ▼                         │
//! │                 ┌───────────────┐                 │
//! │                 │ maturity-core │                 │
//! │                 │  (THE LOGIC)  │                 │
//! │                 └───────────────┘                 │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Render the first stage
//! maturity
//!
//! # Render a specific stage in service mode
//! maturity show --stage walk --mode service
//!
//! # Step through the journey interactively
//! maturity tour
//!
//! # Start the HTTP server
//! maturity server --host 0.0.0.0 --port 8080
//! ```

use clap::Parser;
use maturity::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // MATURITY_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("MATURITY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "maturity=debug,maturity_core=debug,tower_http=debug"
    } else {
        "maturity=info,tower_http=debug"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    // Logs go to stderr; stdout carries rendered views and JSON.
    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  Foundation > Crawl > Walk > Run > Fly

  Maturity Simulator v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
