// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, TimeZone};
use sea_orm::DbErr;

use crate::errors::InternalError;
use crate::providers::Clock;
use crate::stores::ItemStore;
use crate::types::db::item;
use crate::types::internal::items::NewItem;

/// Clock that moves forward one minute every time it is read
///
/// The first reading is 3/1/2025 9:00 AM local time.
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Local.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap() + Duration::minutes(tick)
    }
}

/// Store whose every operation fails like a lost connection
pub struct UnreachableStore;

fn connection_lost(operation: &str) -> InternalError {
    InternalError::database(operation, DbErr::Custom("connection lost".to_string()))
}

#[async_trait]
impl ItemStore for UnreachableStore {
    async fn insert(&self, _item: NewItem, _updated: String) -> Result<item::Model, InternalError> {
        Err(connection_lost("insert_item"))
    }

    async fn find_by_name(&self, _name: &str) -> Result<Option<item::Model>, InternalError> {
        Err(connection_lost("find_item_by_name"))
    }

    async fn find_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Err(connection_lost("find_all_items"))
    }

    async fn update_quantity_by_name(
        &self,
        _name: &str,
        _quantity: i64,
        _updated: String,
    ) -> Result<Option<item::Model>, InternalError> {
        Err(connection_lost("update_item_quantity"))
    }

    async fn delete_by_name(&self, _name: &str) -> Result<u64, InternalError> {
        Err(connection_lost("delete_item"))
    }
}
