/// A validated item ready to be stored
///
/// `updated` is not part of this type; it is stamped by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub rack: String,
    pub bin: String,
    pub quantity: i64,
}

/// A validated quantity change for the item called `name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub name: String,
    pub quantity: i64,
}
