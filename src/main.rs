use clap::Parser;
use fault_api::{config::Config, server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_filter().into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.addr(),
        seeded = config.seed.is_some(),
        "starting fault-api"
    );

    server::serve(config.addr(), config.decider()).await?;
    Ok(())
}
