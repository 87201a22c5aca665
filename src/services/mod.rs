// Services layer - Business logic over the stores
pub mod inventory_service;

pub use inventory_service::InventoryService;
