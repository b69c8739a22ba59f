use contracts::domain::a002_supplier::{
    pending_orders, supplier_criteria, suppliers, PendingOrder, Supplier, SupplierSummary,
};
use contracts::shared::filter::filter_cloned;
use leptos::prelude::*;

/// ViewModel for the supplier directory. Only the search box is transient state.
#[derive(Clone, Copy)]
pub struct SupplierListViewModel {
    pub search: RwSignal<String>,
    pub rows: Memo<Vec<Supplier>>,
}

impl SupplierListViewModel {
    pub fn new() -> Self {
        let search = RwSignal::new(String::new());
        let rows = Memo::new(move |_| filter_cloned(suppliers(), &supplier_criteria(&search.get())));
        Self { search, rows }
    }

    /// Header cards ignore the search box.
    pub fn summary(&self) -> SupplierSummary {
        SupplierSummary::new(suppliers(), pending_orders())
    }

    pub fn pending_orders(&self) -> &'static [PendingOrder] {
        pending_orders()
    }

    pub fn set_search(&self, value: String) {
        log::debug!("supplier search: '{}'", value);
        self.search.set(value);
    }
}

impl Default for SupplierListViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_does_not_change_summary() {
        let vm = SupplierListViewModel::new();
        let before = vm.summary();

        vm.set_search("paper".to_string());
        let rows = vm.rows.get_untracked();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Paper Works Inc");
        assert_eq!(vm.summary(), before);
        assert_eq!(vm.pending_orders().len(), 3);
    }
}
