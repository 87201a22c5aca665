use thiserror::Error;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemError;

/// Internal error type for store and service operations
///
/// Separates infrastructure errors (database) from domain errors (items).
/// Not exposed via API - endpoints must convert to ItemsApiError.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn migration(source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Migration { source })
    }
}
