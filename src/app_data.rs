use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::services::InventoryService;
use crate::stores::{ItemStore, SeaOrmItemStore};

/// Process-wide application data
///
/// Created once in main.rs after the database is connected and migrated.
/// Handlers receive the store through the InventoryService rather than a
/// global, so any ItemStore implementation can be substituted.
///
/// ```text
/// main.rs
///   ↓
/// AppData::new(db)
///   └─ inventory_service (Arc<InventoryService>)
///        └─ SeaOrmItemStore (owns the DatabaseConnection)
/// ```
pub struct AppData {
    pub inventory_service: Arc<InventoryService>,
}

impl AppData {
    pub fn new(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let item_store: Arc<dyn ItemStore> = Arc::new(SeaOrmItemStore::new(db));
        let inventory_service = Arc::new(InventoryService::new(item_store));

        Self { inventory_service }
    }
}
