use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use shift_ledger::api::{AppState, create_router};
use shift_ledger::config::ConfigLoader;
use shift_ledger::logging;

/// Serves shift classification and compensatory-time settlement over HTTP.
#[derive(Debug, Parser)]
#[command(name = "shift-ledger", version, about)]
struct Args {
    /// Path to the shift rule table (YAML).
    #[arg(long, env = "SHIFT_LEDGER_RULES", default_value = "./config/shift_rules.yaml")]
    rules: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "SHIFT_LEDGER_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    info!("shift-ledger v{}", env!("CARGO_PKG_VERSION"));

    let loader = ConfigLoader::load(&args.rules)
        .with_context(|| format!("loading shift rules from {}", args.rules.display()))?;
    info!(
        rules = %args.rules.display(),
        codes = loader.rules().durations().len(),
        default_daily_hours = %loader.rules().default_daily_hours(),
        "Shift rules loaded"
    );

    let app = create_router(AppState::from_loader(loader));

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("binding {}", args.bind))?;
    info!(addr = %args.bind, "Listening");

    axum::serve(listener, app).await?;
    Ok(())
}
