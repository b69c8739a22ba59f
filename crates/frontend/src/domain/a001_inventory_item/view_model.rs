use contracts::domain::a001_inventory_item::{
    inventory_criteria, inventory_items, InventoryItem, InventorySummary,
};
use contracts::domain::a001_inventory_item::aggregate::CATEGORIES;
use contracts::shared::filter::{active_count, filter_cloned, FilterCriterion, ALL_SENTINEL};
use contracts::shared::stock_status::StockStatus;
use leptos::prelude::*;

/// ViewModel for the inventory list page
///
/// Holds the search box and the two dropdowns. `rows` is filtered from the
/// fixture list when a filter signal changes; `summary` follows `rows`.
#[derive(Clone, Copy)]
pub struct InventoryListViewModel {
    pub search: RwSignal<String>,
    pub category: RwSignal<String>,
    pub status: RwSignal<String>,
    pub rows: Memo<Vec<InventoryItem>>,
    pub summary: Memo<InventorySummary>,
}

impl InventoryListViewModel {
    pub fn new() -> Self {
        let search = RwSignal::new(String::new());
        let category = RwSignal::new(ALL_SENTINEL.to_string());
        let status = RwSignal::new(ALL_SENTINEL.to_string());

        let rows = Memo::new(move |_| {
            let criteria = inventory_criteria(&search.get(), &category.get(), &status.get());
            filter_cloned(inventory_items(), &criteria)
        });
        let summary = Memo::new(move |_| rows.with(|items| InventorySummary::from_items(items.as_slice())));

        Self {
            search,
            category,
            status,
            rows,
            summary,
        }
    }

    pub fn criteria(&self) -> Vec<FilterCriterion> {
        inventory_criteria(&self.search.get(), &self.category.get(), &self.status.get())
    }

    pub fn active_filter_count(&self) -> usize {
        active_count(&self.criteria())
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.log_criteria();
    }

    pub fn set_category(&self, value: String) {
        self.category.set(value);
        self.log_criteria();
    }

    pub fn set_status(&self, value: String) {
        self.status.set(value);
        self.log_criteria();
    }

    fn log_criteria(&self) {
        log::debug!("inventory filters: {}", self.criteria_snapshot());
    }

    pub fn reset_filters(&self) {
        self.search.set(String::new());
        self.category.set(ALL_SENTINEL.to_string());
        self.status.set(ALL_SENTINEL.to_string());
    }

    /// JSON snapshot of the current criteria, written to the debug log on every change.
    pub fn criteria_snapshot(&self) -> serde_json::Value {
        let criteria = inventory_criteria(
            &self.search.get_untracked(),
            &self.category.get_untracked(),
            &self.status.get_untracked(),
        );
        serde_json::to_value(criteria).unwrap_or_default()
    }

    pub fn category_options() -> Vec<(String, String)> {
        let mut options = vec![(ALL_SENTINEL.to_string(), "All Categories".to_string())];
        options.extend(CATEGORIES.iter().map(|c| (c.to_string(), c.to_string())));
        options
    }

    pub fn status_options() -> Vec<(String, String)> {
        let mut options = vec![(ALL_SENTINEL.to_string(), "All Status".to_string())];
        options.extend(
            StockStatus::all()
                .iter()
                .map(|s| (s.label().to_string(), s.label().to_string())),
        );
        options
    }
}

impl Default for InventoryListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(vm: &InventoryListViewModel) -> Vec<String> {
        vm.rows.get_untracked().into_iter().map(|i| i.name).collect()
    }

    #[test]
    fn test_initial_state_shows_everything() {
        let vm = InventoryListViewModel::new();
        assert_eq!(vm.rows.get_untracked().len(), inventory_items().len());
        assert_eq!(vm.active_filter_count(), 0);
    }

    #[test]
    fn test_search_and_status() {
        let vm = InventoryListViewModel::new();
        vm.set_search("paper".to_string());
        assert_eq!(names(&vm), vec!["Printer Paper A4", "Notebook A5"]);

        vm.set_status("Low Stock".to_string());
        assert_eq!(names(&vm), vec!["Printer Paper A4"]);
        assert_eq!(vm.active_filter_count(), 2);
        assert_eq!(vm.summary.get_untracked().low_stock, 1);
        assert_eq!(vm.summary.get_untracked().total_units, 12);

        vm.reset_filters();
        assert_eq!(vm.rows.get_untracked().len(), inventory_items().len());
    }

    #[test]
    fn test_summary_memo_follows_category() {
        let vm = InventoryListViewModel::new();
        assert_eq!(vm.summary.get_untracked().total_units, 544);

        vm.set_category("Electronics".to_string());
        let summary = vm.summary.get_untracked();
        assert_eq!(summary.well_stocked, 2);
        assert_eq!(summary.low_stock, 1);
        assert_eq!(summary.total_units, 253);
    }

    #[test]
    fn test_snapshot_and_options() {
        let vm = InventoryListViewModel::new();
        vm.set_category("Furniture".to_string());
        let snapshot = vm.criteria_snapshot();
        assert_eq!(snapshot[1]["kind"], "exact");
        assert_eq!(snapshot[1]["target"]["value"], "Furniture");

        assert_eq!(InventoryListViewModel::category_options().len(), 4);
        let statuses = InventoryListViewModel::status_options();
        assert_eq!(statuses[0].0, "all");
        assert_eq!(statuses[3].1, "Low Stock");
    }
}
