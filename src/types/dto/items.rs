use poem_openapi::Object;

use crate::errors::ValidationError;
use crate::types::db::item;
use crate::types::internal::items::{NewItem, QuantityUpdate};

/// Request model for adding an item
///
/// Fields are optional at the wire level so that a missing field is reported
/// as a validation error rather than a parse error.
#[derive(Object, Debug, Default)]
pub struct AddItemRequest {
    /// Name of the item, used as its lookup key
    pub name: Option<String>,

    /// Rack the item is stored on
    pub rack: Option<String>,

    /// Bin within the rack
    pub bin: Option<String>,

    /// Quantity in stock (must not be negative)
    pub quantity: Option<i64>,
}

impl AddItemRequest {
    /// Check required fields and quantity range
    ///
    /// # Returns
    /// * `Ok(NewItem)` - All fields present, quantity >= 0
    /// * `Err(ValidationError)` - Missing field or negative quantity
    pub fn validate(self) -> Result<NewItem, ValidationError> {
        let (Some(name), Some(rack), Some(bin), Some(quantity)) = (
            non_empty(self.name),
            non_empty(self.rack),
            non_empty(self.bin),
            self.quantity,
        ) else {
            return Err(ValidationError::MissingItemFields);
        };

        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }

        Ok(NewItem {
            name,
            rack,
            bin,
            quantity,
        })
    }
}

/// Request model for updating an item's quantity
#[derive(Object, Debug, Default)]
pub struct UpdateQuantityRequest {
    /// Name of the item to update
    pub name: Option<String>,

    /// New quantity (must not be negative)
    pub quantity: Option<i64>,
}

impl UpdateQuantityRequest {
    pub fn validate(self) -> Result<QuantityUpdate, ValidationError> {
        let (Some(name), Some(quantity)) = (non_empty(self.name), self.quantity) else {
            return Err(ValidationError::MissingUpdateFields);
        };

        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity);
        }

        Ok(QuantityUpdate { name, quantity })
    }
}

/// Request model for deleting an item
#[derive(Object, Debug, Default)]
pub struct DeleteItemRequest {
    /// Name of the item to delete
    pub name: Option<String>,
}

impl DeleteItemRequest {
    pub fn validate(self) -> Result<String, ValidationError> {
        non_empty(self.name).ok_or(ValidationError::MissingName)
    }
}

/// Validate the `name` query parameter of a search
pub fn validate_search_name(name: Option<String>) -> Result<String, ValidationError> {
    non_empty(name).ok_or(ValidationError::MissingName)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ItemResponse {
    /// Storage identifier
    pub id: i32,

    pub name: String,
    pub rack: String,
    pub bin: String,
    pub quantity: i64,

    /// Local time of the last create or quantity update
    pub updated: String,
}

impl From<item::Model> for ItemResponse {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            rack: model.rack,
            bin: model.bin,
            quantity: model.quantity,
            updated: model.updated,
        }
    }
}

/// Response model for a successful quantity update
#[derive(Object, Debug)]
pub struct UpdateItemResponse {
    pub message: String,

    /// The item as stored after the update
    pub item: ItemResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_request(name: &str, rack: &str, bin: &str, quantity: Option<i64>) -> AddItemRequest {
        AddItemRequest {
            name: Some(name.to_string()),
            rack: Some(rack.to_string()),
            bin: Some(bin.to_string()),
            quantity,
        }
    }

    #[test]
    fn test_add_request_valid() {
        let item = add_request("bolt", "R1", "B1", Some(0)).validate().unwrap();
        assert_eq!(item.name, "bolt");
        assert_eq!(item.rack, "R1");
        assert_eq!(item.bin, "B1");
        assert_eq!(item.quantity, 0);
    }

    #[test]
    fn test_add_request_missing_field() {
        let mut request = add_request("bolt", "R1", "B1", Some(3));
        request.rack = None;
        assert_eq!(request.validate().unwrap_err(), ValidationError::MissingItemFields);

        let request = add_request("bolt", "R1", "B1", None);
        assert_eq!(request.validate().unwrap_err(), ValidationError::MissingItemFields);
    }

    #[test]
    fn test_add_request_empty_string_counts_as_missing() {
        let request = add_request("", "R1", "B1", Some(3));
        assert_eq!(request.validate().unwrap_err(), ValidationError::MissingItemFields);
    }

    #[test]
    fn test_add_request_negative_quantity() {
        let request = add_request("bolt", "R1", "B1", Some(-1));
        assert_eq!(request.validate().unwrap_err(), ValidationError::NegativeQuantity);
    }

    #[test]
    fn test_missing_field_reported_before_negative_quantity() {
        let request = add_request("bolt", "", "B1", Some(-1));
        assert_eq!(request.validate().unwrap_err(), ValidationError::MissingItemFields);
    }

    #[test]
    fn test_update_request_validation() {
        let update = UpdateQuantityRequest {
            name: Some("bolt".to_string()),
            quantity: Some(5),
        }
        .validate()
        .unwrap();
        assert_eq!(update.name, "bolt");
        assert_eq!(update.quantity, 5);

        let missing = UpdateQuantityRequest {
            name: Some("bolt".to_string()),
            quantity: None,
        };
        assert_eq!(missing.validate().unwrap_err(), ValidationError::MissingUpdateFields);

        let negative = UpdateQuantityRequest {
            name: Some("bolt".to_string()),
            quantity: Some(-4),
        };
        assert_eq!(negative.validate().unwrap_err(), ValidationError::NegativeQuantity);
    }

    #[test]
    fn test_delete_and_search_require_name() {
        assert_eq!(
            DeleteItemRequest::default().validate().unwrap_err(),
            ValidationError::MissingName
        );
        assert_eq!(validate_search_name(Some(String::new())).unwrap_err(), ValidationError::MissingName);
        assert_eq!(validate_search_name(Some("bolt".to_string())).unwrap(), "bolt");
    }
}
