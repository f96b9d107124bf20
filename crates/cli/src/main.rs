use clap::Parser;
use colored::Colorize;

use stockroom_client::ApiClient;

use stockroom_cli::cli::{Cli, Commands};
use stockroom_cli::commands;
use stockroom_cli::error::CliError;
use stockroom_cli::output::OutputWriter;

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{} {}", "error:".red().bold(), err);
        std::process::exit(err.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let base_url = cli
        .api_url
        .or_else(|| std::env::var("STOCKROOM_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    tracing::debug!(%base_url, "using inventory API");

    let api = ApiClient::new(base_url);
    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Commands::Lookup(args) => commands::lookup::execute(args, api, &writer).await,
        Commands::Search(args) => commands::search::execute(args, api, &writer).await,
        Commands::Item(args) => commands::item::execute(args.action, api, &writer).await,
        Commands::Supplier(args) => commands::supplier::execute(args.action, api, &writer).await,
        Commands::Ping => commands::ping::execute(api, &writer).await,
    }
}
