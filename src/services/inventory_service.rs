use std::sync::Arc;

use crate::errors::internal::ItemError;
use crate::errors::InternalError;
use crate::providers::{Clock, SystemClock};
use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::internal::items::{NewItem, QuantityUpdate};

/// Inventory operations over a shared ItemStore
///
/// Inputs arrive already validated. This layer stamps the server-side
/// `updated` timestamp and turns "no matching record" into
/// `ItemError::NotFound` so the API layer has a single error path.
pub struct InventoryService {
    store: Arc<dyn ItemStore>,
    clock: Arc<dyn Clock>,
}

impl InventoryService {
    /// Create a service stamping timestamps from the system clock
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock::new()))
    }

    pub fn with_clock(store: Arc<dyn ItemStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Store a new item with a fresh `updated` timestamp
    ///
    /// # Errors
    /// * `ItemError::DuplicateName` - An item with the same name exists
    /// * `InternalError::Database` - Store failure
    pub async fn add_item(&self, item: NewItem) -> Result<item::Model, InternalError> {
        let updated = self.clock.timestamp();
        let model = self.store.insert(item, updated).await?;

        tracing::info!(name = %model.name, quantity = model.quantity, "Item added");

        Ok(model)
    }

    /// Find the item called `name`
    pub async fn find_item(&self, name: &str) -> Result<item::Model, InternalError> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| ItemError::NotFound(name.to_string()).into())
    }

    /// Every stored item, insertion order
    pub async fn list_items(&self) -> Result<Vec<item::Model>, InternalError> {
        self.store.find_all().await
    }

    /// Replace the quantity of an existing item and re-stamp `updated`
    ///
    /// Never creates an item: an unknown name yields `ItemError::NotFound`.
    pub async fn update_quantity(&self, update: QuantityUpdate) -> Result<item::Model, InternalError> {
        let updated = self.clock.timestamp();
        let model = self
            .store
            .update_quantity_by_name(&update.name, update.quantity, updated)
            .await?
            .ok_or_else(|| ItemError::NotFound(update.name.clone()))?;

        tracing::info!(name = %model.name, quantity = model.quantity, "Item quantity updated");

        Ok(model)
    }

    /// Remove the item called `name`
    ///
    /// # Returns
    /// * `Ok(count)` - Number of records removed (at least one)
    /// * `Err(ItemError::NotFound)` - Nothing matched
    pub async fn delete_item(&self, name: &str) -> Result<u64, InternalError> {
        let removed = self.store.delete_by_name(name).await?;
        if removed == 0 {
            return Err(ItemError::NotFound(name.to_string()).into());
        }

        tracing::info!(name = %name, "Item deleted");

        Ok(removed)
    }
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService")
            .field("store", &"<item_store>")
            .field("clock", &"<clock>")
            .finish()
    }
}
