mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "taste-cli")]
#[command(about = "Search DiningCode restaurants by region and export them to a spreadsheet")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch, rank, and print the top restaurants of a region
    Search {
        /// Region name to search for (e.g. 홍대)
        region: String,

        /// Where to write the spreadsheet (defaults to
        /// `<TASTE_EXPORT_DIR>/diningcode_<region>_data.xlsx`)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the table only; do not write a spreadsheet
        #[arg(long, conflicts_with = "output")]
        no_export: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = taste_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            region,
            output,
            no_export,
        }) => search::run_search_command(&config, &region, output, no_export).await?,
        None => println!("taste-cli ready; run `taste-cli search <REGION>`"),
    }

    Ok(())
}
