use clap::{Parser, Subcommand};

mod commands;

use commands::{CompleteArgs, ImportMetricsArgs, MetricsStatusArgs, ModelsArgs, ServeArgs};

#[derive(Parser)]
#[command(name = "trade-dash")]
#[command(about = "Metrics dashboard backend for the LLM trading bot", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the dashboard web API server
    Serve(ServeArgs),
    /// Show which provider backs each model slot
    Models(ModelsArgs),
    /// Send a prompt to a model slot
    Complete(CompleteArgs),
    /// Show stored metrics and what the dashboard serves from them
    MetricsStatus(MetricsStatusArgs),
    /// Import a snapshot history from a JSON file
    ImportMetrics(ImportMetricsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Models(args) => commands::run_models(&args)?,
        Commands::Complete(args) => commands::run_complete(args).await?,
        Commands::MetricsStatus(args) => commands::run_metrics_status(args).await?,
        Commands::ImportMetrics(args) => commands::run_import_metrics(args).await?,
    }

    Ok(())
}
