// API-facing error types
pub mod items;

// Re-exports for convenience
pub use items::ItemsApiError;
