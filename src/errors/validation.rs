use thiserror::Error;

/// Request validation failures
///
/// Always client-caused. The display text is returned verbatim in the 400 body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingItemFields,

    #[error("Item name and quantity are required")]
    MissingUpdateFields,

    #[error("Item name is required")]
    MissingName,

    #[error("Quantity cannot be negative")]
    NegativeQuantity,
}
