// Internal types - validated inputs passed between layers
pub mod items;
