use clap::Parser;
use flux_inventory_server::{logging, shutdown, AppConfig, Server};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path (TOML); environment variables prefixed with FLUX_INVENTORY__ override it
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = AppConfig::load(args.config.as_deref())?;
    logging::init(&config.logging)?;

    tracing::info!(
        config = ?args.config,
        addr = %config.bind_addr(),
        "Starting flux-inventory server"
    );

    let server = Server::bind(&config).await?;
    server
        .run(async {
            let signal = shutdown::wait_for_signal().await;
            tracing::info!(signal = ?signal, "Shutting down");
        })
        .await
}
