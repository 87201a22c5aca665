use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::internal::ItemError;
use crate::errors::InternalError;
use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::internal::items::NewItem;

/// In-process ItemStore
///
/// Same contract as the database store (unique names, insertion order,
/// sequential ids) without any I/O. Used to exercise handler and service
/// logic in isolation.
#[derive(Debug, Default)]
pub struct MemoryItemStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i32,
    items: Vec<item::Model>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, item: NewItem, updated: String) -> Result<item::Model, InternalError> {
        let mut state = self.state.write().await;

        if state.items.iter().any(|existing| existing.name == item.name) {
            return Err(ItemError::DuplicateName(item.name).into());
        }

        state.last_id += 1;
        let model = item::Model {
            id: state.last_id,
            name: item.name,
            rack: item.rack,
            bin: item.bin,
            quantity: item.quantity,
            updated,
        };
        state.items.push(model.clone());

        Ok(model)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<item::Model>, InternalError> {
        let state = self.state.read().await;
        Ok(state.items.iter().find(|item| item.name == name).cloned())
    }

    async fn find_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Ok(self.state.read().await.items.clone())
    }

    async fn update_quantity_by_name(
        &self,
        name: &str,
        quantity: i64,
        updated: String,
    ) -> Result<Option<item::Model>, InternalError> {
        let mut state = self.state.write().await;

        Ok(state.items.iter_mut().find(|item| item.name == name).map(|item| {
            item.quantity = quantity;
            item.updated = updated;
            item.clone()
        }))
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, InternalError> {
        let mut state = self.state.write().await;
        let before = state.items.len();
        state.items.retain(|item| item.name != name);

        Ok((before - state.items.len()) as u64)
    }
}
