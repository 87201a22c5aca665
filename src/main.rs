use clap::Parser;

use inventory_backend::cli::{execute_command, Cli};
use inventory_backend::config::{init_logging, BootstrapSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();
    let settings = BootstrapSettings::from_env()?;
    tracing::debug!("Loaded settings: {:?}", settings);

    if let Err(e) = execute_command(cli, &settings).await {
        tracing::error!("Fatal error: {}", e);
        return Err(e);
    }

    Ok(())
}
