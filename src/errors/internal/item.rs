use thiserror::Error;

/// Item store specific errors
#[derive(Error, Debug)]
pub enum ItemError {
    /// No item is stored under the given name
    #[error("Item not found: {0}")]
    NotFound(String),

    /// An item with this name already exists
    #[error("Item already exists: {0}")]
    DuplicateName(String),
}
