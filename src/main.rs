use std::path::PathBuf;

use clap::Parser;
use cosmos_query_demo::{menu, CosmosClient, DemoConfig, QueryRunner};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "cosmos-query-demo")]
#[command(about = "Azure Cosmos DB query optimizations demo", long_about = None)]
struct Args {
    /// Path to the demo configuration file
    #[arg(short, long, default_value = "appsettings.json")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cosmos_query_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = DemoConfig::load(&args.config)?;
    tracing::info!(
        database = %config.database,
        container = %config.container,
        "Configuration loaded"
    );

    let client_with = CosmosClient::new(
        &config.endpoint_with_improvements,
        &config.key_with_improvements,
        &config.database,
        &config.container,
    )?;
    let runner_with = QueryRunner::new(client_with, config.endpoint_with_improvements.as_str(), true);

    let client_without = CosmosClient::new(
        &config.endpoint_without_improvements,
        &config.key_without_improvements,
        &config.database,
        &config.container,
    )?;
    let runner_without = QueryRunner::new(
        client_without,
        config.endpoint_without_improvements.as_str(),
        false,
    );

    menu::run_menu(&runner_with, &runner_without).await?;

    Ok(())
}
