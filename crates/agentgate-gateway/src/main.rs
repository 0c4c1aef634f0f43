//! Agentgate gateway binary

use agentgate_core::GatewayConfig;
use agentgate_gateway::start_gateway;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "agentgate",
    about = "Agentgate - tool-augmented conversation gateway"
)]
struct Cli {
    /// Listening port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,
    /// Model identifier (overrides GEMINI_MODEL)
    #[arg(short, long)]
    model: Option<String>,
    /// Maximum model exchanges per run (overrides AGENT_MAX_TURNS)
    #[arg(long)]
    max_turns: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentgate=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Fails fast when GEMINI_API_KEY or AGENT_SERVER_API_KEY is unset.
    let mut config = GatewayConfig::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(max_turns) = cli.max_turns {
        config.max_run_turns = max_turns;
    }

    start_gateway(config).await
}
