use clap::Parser;

mod cli;
mod sync;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("cap error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let mut config = cap_config::CapConfig::load_with_dotenv()?;
    if let Some(url) = cli.url {
        config.upstream.url = url;
    }
    if let Some(db) = cli.db {
        config.database.path = db;
    }

    let db = cap_db::CapDb::connect(&config.database).await?;
    let client = cap_upstream::UpstreamClient::new(config.upstream.timeout_secs);

    let report = sync::SyncPipeline::new(db, client)
        .run(&config.upstream.url)
        .await?;
    tracing::info!(
        fetched = report.fetched,
        inserted = report.inserted(),
        updated = report.updated(),
        "sync completed successfully"
    );
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("CAPITOL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
