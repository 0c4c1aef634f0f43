//! Agentgate CLI binary

use agentgate_cli::client::AgentClient;
use agentgate_cli::runner::run_non_interactive;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "agentgate-cli",
    about = "Agentgate CLI - run a prompt against the gateway"
)]
struct Cli {
    /// The prompt to run
    prompt: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout is reserved for the answer.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentgate=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = AgentClient::from_env();
    run_non_interactive(&client, &cli.prompt).await
}
