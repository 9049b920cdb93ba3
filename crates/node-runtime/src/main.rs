//! # Tessera Node
//!
//! Entry point: selects the network, verifies its genesis anchor and keeps
//! the process running until interrupted.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use node_runtime::{NodeConfig, NodeContext};

/// Tessera node.
#[derive(Parser, Debug)]
#[command(name = "node-runtime", version, about = "Tessera node runtime")]
struct Cli {
    /// Network to run on: main, test or regtest
    #[arg(long, env = "TS_NETWORK", default_value = node_runtime::container::DEFAULT_NETWORK)]
    network: String,

    /// Override the network's default P2P port
    #[arg(long, env = "TS_P2P_PORT")]
    port: Option<u16>,

    /// Print the selected chain parameters as JSON and exit
    #[arg(long)]
    print_params: bool,
}

impl Cli {
    fn into_config(self) -> NodeConfig {
        NodeConfig {
            network: self.network,
            p2p_port: self.port,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let print_params = cli.print_params;
    let config = cli.into_config();
    let network = config.network.clone();

    let ctx = NodeContext::new(config)
        .with_context(|| format!("failed to select chain parameters for {network}"))?;

    if print_params {
        let json = serde_json::to_string_pretty(ctx.params())?;
        println!("{json}");
        return Ok(());
    }

    info!("===========================================");
    info!("  Tessera Node Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("  Network: {}", ctx.network());
    info!("  Genesis: {}", ctx.params().genesis_hash());
    info!("  P2P port: {}", ctx.p2p_port());
    info!("===========================================");

    info!("Node is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;
    info!("Shutting down");

    Ok(())
}
