//! FX CLI
//!
//! Command-line interface for the Currency Conversion API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use fx_client::FxClient;

#[derive(Parser)]
#[command(name = "fx")]
#[command(author, version, about = "Currency Conversion API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Currency Conversion API
    #[arg(long, env = "FX_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code (e.g. USD)
        from: String,
        /// Target currency code (e.g. EUR)
        to: String,
        /// Amount in the source currency
        amount: f64,
        /// Use the path-style GET endpoint instead of POST
        #[arg(long)]
        get: bool,
    },
    /// List supported currency codes
    Currencies,
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = FxClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Convert {
            from,
            to,
            amount,
            get,
        } => {
            let result = if get {
                client.convert_path(&from, &to, amount).await?
            } else {
                client.convert(&from, &to, amount).await?
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Commands::Currencies => {
            let codes = client.supported_currencies().await?;
            println!("{}", codes.join(", "));
        }
    }

    Ok(())
}
