// CLI module - process entry points

pub mod serve;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Inventory backend CLI
#[derive(Parser, Debug)]
#[command(name = "inventory-backend")]
#[command(about = "Inventory tracking REST backend", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Run migrations and start the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}

/// Execute CLI command
///
/// Connects to the database and applies migrations for every command, then
/// either serves HTTP until shutdown or returns.
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let app_data = AppData::new(db);
            serve::run_server(settings, &app_data).await?;
        }
        Commands::Migrate => {
            tracing::info!("Migrations applied");
        }
    }

    Ok(())
}
