use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

use crate::shared::filter::{count_where, sum_by, FilterCriterion};
use crate::shared::indicators::{IndicatorStatus, SummaryCard};
use crate::shared::record::{FieldValue, Record};
use crate::shared::stock_status::StockStatus;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InventoryItemId(pub u32);

// ============================================================================
// Fields
// ============================================================================

/// Column names understood by [`InventoryItem`]'s [`Record`] impl.
pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const STOCK: &str = "stock";
    pub const THRESHOLD: &str = "threshold";
    pub const SUPPLIER: &str = "supplier";
    pub const CATEGORY: &str = "category";
    /// Derived from stock and threshold, never stored.
    pub const STATUS: &str = "status";
}

/// Columns covered by the "Search products or suppliers..." box.
pub const SEARCH_FIELDS: [&str; 2] = [fields::NAME, fields::SUPPLIER];

/// Category dropdown options (besides "all").
pub const CATEGORIES: [&str; 3] = ["Electronics", "Furniture", "Stationery"];

// ============================================================================
// Aggregate
// ============================================================================

/// Product row of the inventory table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: InventoryItemId,
    pub name: String,
    pub stock: u32,
    /// Reorder threshold.
    pub threshold: u32,
    pub supplier: String,
    pub category: String,
}

impl InventoryItem {
    pub fn new(
        id: u32,
        name: &str,
        stock: u32,
        threshold: u32,
        supplier: &str,
        category: &str,
    ) -> Self {
        Self {
            id: InventoryItemId(id),
            name: name.to_string(),
            stock,
            threshold,
            supplier: supplier.to_string(),
            category: category.to_string(),
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::of(f64::from(self.stock), f64::from(self.threshold))
    }

    /// Row warning icon is shown for low-stock items.
    pub fn needs_reorder(&self) -> bool {
        self.status() == StockStatus::Low
    }
}

impl Record for InventoryItem {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            fields::ID => self.id.0.into(),
            fields::NAME => self.name.as_str().into(),
            fields::STOCK => self.stock.into(),
            fields::THRESHOLD => self.threshold.into(),
            fields::SUPPLIER => self.supplier.as_str().into(),
            fields::CATEGORY => self.category.as_str().into(),
            fields::STATUS => self.status().label().into(),
            _ => FieldValue::Null,
        }
    }
}

/// Criteria of the inventory page: search box, category and status dropdowns.
pub fn inventory_criteria(search: &str, category: &str, status: &str) -> Vec<FilterCriterion> {
    vec![
        FilterCriterion::text(SEARCH_FIELDS, search),
        FilterCriterion::select(fields::CATEGORY, category),
        FilterCriterion::select(fields::STATUS, status),
    ]
}

// ============================================================================
// Summary
// ============================================================================

/// Stock summary cards under the inventory table, computed over the filtered rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InventorySummary {
    pub well_stocked: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub total_units: u64,
}

impl InventorySummary {
    pub fn from_items<T: Borrow<InventoryItem>>(items: &[T]) -> Self {
        let with_status = |status: StockStatus| {
            count_where(items, |item| item.borrow().status() == status)
        };
        Self {
            well_stocked: with_status(StockStatus::WellStocked),
            in_stock: with_status(StockStatus::Normal),
            low_stock: with_status(StockStatus::Low),
            total_units: sum_by(items, |item| f64::from(item.borrow().stock)) as u64,
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::count("well_stocked", "Well Stocked", self.well_stocked, IndicatorStatus::Good),
            SummaryCard::count("in_stock", "In Stock", self.in_stock, IndicatorStatus::Warning),
            SummaryCard::count("low_stock", "Low Stock", self.low_stock, IndicatorStatus::Bad),
            SummaryCard::count("total_items", "Total Items", self.total_units as usize, IndicatorStatus::Neutral),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_inventory_item::fixtures::inventory_items;
    use crate::shared::filter::{filter_records, FilteredView};

    #[test]
    fn test_derived_status_field() {
        let paper = InventoryItem::new(2, "Printer Paper A4", 12, 50, "Office Supplies Ltd", "Stationery");
        assert_eq!(paper.field(fields::STATUS), FieldValue::from("Low Stock"));
        assert_eq!(paper.field(fields::STOCK), FieldValue::Number(12.0));
        assert!(paper.field("price").is_null());
        assert!(paper.needs_reorder());
    }

    #[test]
    fn test_usb_scenario() {
        let items = vec![
            InventoryItem::new(2, "Printer Paper A4", 12, 50, "Office Supplies Ltd", "Stationery"),
            InventoryItem::new(4, "USB-C Cable", 156, 30, "Cable Corp", "Electronics"),
        ];
        let found = filter_records(&items, &[FilterCriterion::text([fields::NAME], "usb")]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "USB-C Cable");
    }

    #[test]
    fn test_page_filters() {
        let items = inventory_items();

        let all = filter_records(items, &inventory_criteria("", "all", "all"));
        assert_eq!(all.len(), items.len());

        let electronics = filter_records(items, &inventory_criteria("", "Electronics", "all"));
        let names: Vec<_> = electronics.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Wireless Mouse", "USB-C Cable", "Desk Lamp LED"]);

        // supplier column is searched too
        let by_supplier = filter_records(items, &inventory_criteria("paper works", "all", "all"));
        assert_eq!(by_supplier.len(), 1);
        assert_eq!(by_supplier[0].name, "Notebook A5");

        let low = filter_records(items, &inventory_criteria("", "all", "Low Stock"));
        let names: Vec<_> = low.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Printer Paper A4", "Desk Lamp LED"]);

        let none = filter_records(items, &inventory_criteria("lamp", "Furniture", "all"));
        assert!(none.is_empty());
    }

    #[test]
    fn test_summary_over_filtered_view() {
        let items = inventory_items();
        let global = InventorySummary::from_items(items);
        assert_eq!(
            global,
            InventorySummary {
                well_stocked: 4,
                in_stock: 0,
                low_stock: 2,
                total_units: 544,
            }
        );

        let view = FilteredView::new(items, &inventory_criteria("", "Electronics", "all"));
        let summary = InventorySummary::from_items(view.rows());
        assert_eq!(summary.well_stocked, 2);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.total_units, 253);

        let empty: Vec<InventoryItem> = Vec::new();
        assert_eq!(InventorySummary::from_items(&empty), InventorySummary::default());
    }

    #[test]
    fn test_cards() {
        let cards = InventorySummary::from_items(inventory_items()).cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[2].label, "Low Stock");
        assert_eq!(cards[2].value, 2.0);
        assert_eq!(cards[3].value, 544.0);
    }
}
