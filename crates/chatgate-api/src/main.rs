//! Chatgate HTTP gateway entry point.
//!
//! Binary name: `chatgate`
//!
//! Parses CLI arguments, reads configuration from the environment, then
//! starts the HTTP server or reports configuration status.

mod http;
mod state;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chatgate_infra::config::GatewayConfig;
use state::AppState;

/// Session-bootstrap and handoff gateway for the embedded chat widget.
#[derive(Parser)]
#[command(name = "chatgate", version, about, long_about = None)]
struct Cli {
    /// Suppress all output except errors.
    #[arg(long, global = true)]
    quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Report which configuration is present (never the values).
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,chatgate=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = GatewayConfig::from_env();

    match cli.command {
        Commands::Serve { host, port } => {
            if config.openai_api_key.is_none() {
                tracing::warn!("OPENAI_API_KEY is unset; session requests will fail");
            }
            if config.slack_webhook_url.is_none() {
                tracing::warn!("SLACK_WEBHOOK_URL is unset; handoff requests will fail");
            }
            if config.default_workflow_id.is_none() {
                tracing::warn!(
                    "CHATKIT_WORKFLOW_ID is unset; session requests must name a workflow"
                );
            }

            let state = AppState::from_config(config);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Chatgate listening on {}",
                console::style("\u{26A1}").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::Check => {
            let check_mark = |ok: bool| {
                if ok {
                    format!("{}", console::style("\u{2713}").green())
                } else {
                    format!("{}", console::style("\u{2717}").red())
                }
            };
            println!();
            println!(
                "  {} OPENAI_API_KEY",
                check_mark(config.openai_api_key.is_some())
            );
            println!(
                "  {} CHATKIT_WORKFLOW_ID",
                check_mark(config.default_workflow_id.is_some())
            );
            println!(
                "  {} SLACK_WEBHOOK_URL",
                check_mark(config.slack_webhook_url.is_some())
            );
            println!("  {} base URL: {}", check_mark(true), config.chatkit_base_url);
            println!();
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
