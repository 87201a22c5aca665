use poem_openapi::{param::Query, payload::Json, OpenApi, Tags};
use std::sync::Arc;

use crate::errors::ItemsApiError;
use crate::services::InventoryService;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::items::{
    validate_search_name, AddItemRequest, DeleteItemRequest, ItemResponse, UpdateItemResponse,
    UpdateQuantityRequest,
};

/// Inventory item endpoints
pub struct ItemsApi {
    inventory: Arc<InventoryService>,
}

impl ItemsApi {
    /// Create a new ItemsApi with the given InventoryService
    pub fn new(inventory: Arc<InventoryService>) -> Self {
        Self { inventory }
    }

    async fn all_items(&self, context: &str) -> Result<Json<Vec<ItemResponse>>, ItemsApiError> {
        let items = self
            .inventory
            .list_items()
            .await
            .map_err(|e| ItemsApiError::from_internal_error(e, context))?;

        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Inventory item management
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// Add a new item
    ///
    /// Requires name, rack, bin and a non-negative quantity. The `updated`
    /// timestamp is set by the server.
    #[oai(path = "/add", method = "post", tag = "ItemTags::Items")]
    async fn add(&self, body: Json<AddItemRequest>) -> Result<Json<MessageResponse>, ItemsApiError> {
        let item = body.0.validate().map_err(ItemsApiError::from_validation)?;

        self.inventory
            .add_item(item)
            .await
            .map_err(|e| ItemsApiError::from_internal_error(e, "Failed to add item"))?;

        Ok(Json(MessageResponse::new("Item added")))
    }

    /// Search for an item by exact name
    #[oai(path = "/search", method = "get", tag = "ItemTags::Items")]
    async fn search(&self, name: Query<Option<String>>) -> Result<Json<ItemResponse>, ItemsApiError> {
        let name = validate_search_name(name.0).map_err(ItemsApiError::from_validation)?;

        let item = self
            .inventory
            .find_item(&name)
            .await
            .map_err(|e| ItemsApiError::from_internal_error(e, "Error while searching"))?;

        Ok(Json(item.into()))
    }

    /// List all items
    #[oai(path = "/items", method = "get", tag = "ItemTags::Items")]
    async fn items(&self) -> Result<Json<Vec<ItemResponse>>, ItemsApiError> {
        self.all_items("Error fetching items").await
    }

    /// List all spares
    ///
    /// Currently returns the same collection as `/items`.
    #[oai(path = "/spares", method = "get", tag = "ItemTags::Items")]
    async fn spares(&self) -> Result<Json<Vec<ItemResponse>>, ItemsApiError> {
        self.all_items("Error fetching spares").await
    }

    /// Update the quantity of an existing item
    #[oai(path = "/update", method = "put", tag = "ItemTags::Items")]
    async fn update(
        &self,
        body: Json<UpdateQuantityRequest>,
    ) -> Result<Json<UpdateItemResponse>, ItemsApiError> {
        let update = body.0.validate().map_err(ItemsApiError::from_validation)?;

        let item = self
            .inventory
            .update_quantity(update)
            .await
            .map_err(|e| ItemsApiError::from_internal_error(e, "Error updating item"))?;

        Ok(Json(UpdateItemResponse {
            message: "Quantity updated".to_string(),
            item: item.into(),
        }))
    }

    /// Delete an item by name
    #[oai(path = "/delete", method = "delete", tag = "ItemTags::Items")]
    async fn delete(&self, body: Json<DeleteItemRequest>) -> Result<Json<MessageResponse>, ItemsApiError> {
        let name = body.0.validate().map_err(ItemsApiError::from_validation)?;

        self.inventory
            .delete_item(&name)
            .await
            .map_err(|e| ItemsApiError::from_internal_error(e, "Error deleting item"))?;

        Ok(Json(MessageResponse::new("Item deleted successfully")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::MemoryItemStore;

    fn setup_api() -> ItemsApi {
        let inventory = Arc::new(InventoryService::new(Arc::new(MemoryItemStore::new())));
        ItemsApi::new(inventory)
    }

    fn add_request(name: &str, quantity: i64) -> Json<AddItemRequest> {
        Json(AddItemRequest {
            name: Some(name.to_string()),
            rack: Some("R1".to_string()),
            bin: Some("B1".to_string()),
            quantity: Some(quantity),
        })
    }

    #[tokio::test]
    async fn test_add_then_search() {
        let api = setup_api();

        let added = api.add(add_request("bolt", 3)).await.unwrap();
        assert_eq!(added.0.message, "Item added");

        let found = api.search(Query(Some("bolt".to_string()))).await.unwrap();
        assert_eq!(found.0.rack, "R1");
        assert_eq!(found.0.bin, "B1");
        assert_eq!(found.0.quantity, 3);
        assert!(!found.0.updated.is_empty());
    }

    #[tokio::test]
    async fn test_add_negative_quantity_is_rejected() {
        let api = setup_api();

        let err = api.add(add_request("bolt", -1)).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Quantity cannot be negative");

        assert!(api.items().await.unwrap().0.is_empty());
    }

    #[tokio::test]
    async fn test_search_without_name() {
        let api = setup_api();

        let err = api.search(Query(None)).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Item name is required");
    }

    #[tokio::test]
    async fn test_items_and_spares_match() {
        let api = setup_api();
        api.add(add_request("bolt", 3)).await.unwrap();
        api.add(add_request("nut", 8)).await.unwrap();

        let items = api.items().await.unwrap().0;
        let spares = api.spares().await.unwrap().0;

        assert_eq!(items.len(), 2);
        assert_eq!(items, spares);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_item() {
        let api = setup_api();

        let err = api
            .update(Json(UpdateQuantityRequest {
                name: Some("ghost".to_string()),
                quantity: Some(1),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);

        let err = api
            .delete(Json(DeleteItemRequest {
                name: Some("ghost".to_string()),
            }))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
