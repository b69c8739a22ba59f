use once_cell::sync::Lazy;

use super::aggregate::InventoryItem;

static INVENTORY_ITEMS: Lazy<Vec<InventoryItem>> = Lazy::new(|| {
    vec![
        InventoryItem::new(1, "Office Chair - Ergonomic", 45, 20, "Furniture Co.", "Furniture"),
        InventoryItem::new(2, "Printer Paper A4", 12, 50, "Office Supplies Ltd", "Stationery"),
        InventoryItem::new(3, "Wireless Mouse", 89, 25, "Tech Solutions", "Electronics"),
        InventoryItem::new(4, "USB-C Cable", 156, 30, "Cable Corp", "Electronics"),
        InventoryItem::new(5, "Desk Lamp LED", 8, 15, "Lighting Plus", "Electronics"),
        InventoryItem::new(6, "Notebook A5", 234, 50, "Paper Works", "Stationery"),
    ]
});

/// Sample product inventory shown on the inventory page.
pub fn inventory_items() -> &'static [InventoryItem] {
    &INVENTORY_ITEMS
}
