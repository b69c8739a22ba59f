pub mod aggregate;
pub mod fixtures;

pub use aggregate::{inventory_criteria, InventoryItem, InventoryItemId, InventorySummary};
pub use fixtures::inventory_items;
