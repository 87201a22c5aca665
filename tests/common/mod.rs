// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use inventory_backend::app_data::AppData;
use inventory_backend::services::InventoryService;
use inventory_backend::types::internal::items::NewItem;
use migration::{ItemMigrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

/// Creates an in-memory SQLite database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    ItemMigrator::up(&db, None)
        .await
        .expect("Failed to run item migrations");

    db
}

/// Creates the production inventory service over a fresh database
pub async fn setup_inventory_service() -> Arc<InventoryService> {
    AppData::new(setup_test_db().await).inventory_service
}

pub fn new_item(name: &str, rack: &str, bin: &str, quantity: i64) -> NewItem {
    NewItem {
        name: name.to_string(),
        rack: rack.to_string(),
        bin: bin.to_string(),
        quantity,
    }
}
