use migration::{ItemMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Connect to the inventory database
///
/// The connection (a pool for networked backends) is created once and shared
/// for the lifetime of the process. There is no reconnect logic.
/// Does NOT run migrations - call migrate_database() separately.
pub async fn init_database(bootstrap_settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = bootstrap_settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::info!("Connected to database: {}", database_url);

    Ok(db)
}

/// Run pending migrations on the inventory database
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    ItemMigrator::up(db, None)
        .await
        .map_err(InternalError::migration)?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
