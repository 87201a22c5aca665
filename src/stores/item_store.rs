use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

use crate::errors::internal::ItemError;
use crate::errors::InternalError;
use crate::types::db::item::{self, ActiveModel, Entity as Item};
use crate::types::internal::items::NewItem;

/// Persistence contract for item records
///
/// All lookups are exact matches on `name`. Implementations enforce that
/// `name` is unique, so "first match" is always the only match.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Persist a new item stamped with `updated`
    ///
    /// # Returns
    /// * `Ok(Model)` - The stored record
    /// * `Err(InternalError::Item(ItemError::DuplicateName))` - Name already taken
    /// * `Err(InternalError::Database)` - Store failure
    async fn insert(&self, item: NewItem, updated: String) -> Result<item::Model, InternalError>;

    /// Look up the item called `name`
    async fn find_by_name(&self, name: &str) -> Result<Option<item::Model>, InternalError>;

    /// All items in insertion order
    async fn find_all(&self) -> Result<Vec<item::Model>, InternalError>;

    /// Set `quantity` and `updated` on the item called `name`
    ///
    /// `name`, `rack` and `bin` are left untouched. Returns the record as
    /// stored after the update, or `None` when no item matched.
    async fn update_quantity_by_name(
        &self,
        name: &str,
        quantity: i64,
        updated: String,
    ) -> Result<Option<item::Model>, InternalError>;

    /// Remove the item called `name`, returning how many records were removed
    async fn delete_by_name(&self, name: &str) -> Result<u64, InternalError>;
}

/// ItemStore backed by a SeaORM connection
pub struct SeaOrmItemStore {
    db: DatabaseConnection,
}

impl SeaOrmItemStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemStore for SeaOrmItemStore {
    async fn insert(&self, item: NewItem, updated: String) -> Result<item::Model, InternalError> {
        let name = item.name.clone();
        let new_item = ActiveModel {
            name: Set(item.name),
            rack: Set(item.rack),
            bin: Set(item.bin),
            quantity: Set(item.quantity),
            updated: Set(updated),
            ..Default::default()
        };

        new_item.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ItemError::DuplicateName(name).into(),
            _ => InternalError::database("insert_item", e),
        })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<item::Model>, InternalError> {
        Item::find()
            .filter(item::Column::Name.eq(name))
            .order_by_asc(item::Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item_by_name", e))
    }

    async fn find_all(&self) -> Result<Vec<item::Model>, InternalError> {
        Item::find()
            .order_by_asc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("find_all_items", e))
    }

    async fn update_quantity_by_name(
        &self,
        name: &str,
        quantity: i64,
        updated: String,
    ) -> Result<Option<item::Model>, InternalError> {
        // One statement keyed on name, so a concurrent delete shows up as zero
        // affected rows. Concurrent updates are last write wins.
        let result = Item::update_many()
            .col_expr(item::Column::Quantity, Expr::value(quantity))
            .col_expr(item::Column::Updated, Expr::value(updated))
            .filter(item::Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("update_item_quantity", e))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_name(name).await
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64, InternalError> {
        let result = Item::delete_many()
            .filter(item::Column::Name.eq(name))
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        Ok(result.rows_affected)
    }
}

impl std::fmt::Debug for SeaOrmItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeaOrmItemStore")
            .field("db", &"<connection>")
            .finish()
    }
}
