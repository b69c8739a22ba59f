use contracts::system::navigation::Page;

use crate::domain::a001_inventory_item::InventoryListViewModel;
use crate::domain::a002_supplier::SupplierListViewModel;
use crate::system::settings::SettingsViewModel;
use crate::system::users::UsersViewModel;

/// View-model of the page in the content area. Pages without transient
/// state carry nothing.
#[derive(Clone, Copy, Default)]
pub enum PageState {
    #[default]
    Dashboard,
    Inventory(InventoryListViewModel),
    Predictions,
    Reports,
    Suppliers(SupplierListViewModel),
    Users(UsersViewModel),
    Settings(SettingsViewModel),
}

impl PageState {
    /// Fresh state for `page`; filters and selections start empty.
    pub fn for_page(page: Page) -> Self {
        match page {
            Page::Dashboard => PageState::Dashboard,
            Page::Inventory => PageState::Inventory(InventoryListViewModel::new()),
            Page::Predictions => PageState::Predictions,
            Page::Reports => PageState::Reports,
            Page::Suppliers => PageState::Suppliers(SupplierListViewModel::new()),
            Page::Users => PageState::Users(UsersViewModel::new()),
            Page::Settings => PageState::Settings(SettingsViewModel::new(None)),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            PageState::Dashboard => Page::Dashboard,
            PageState::Inventory(_) => Page::Inventory,
            PageState::Predictions => Page::Predictions,
            PageState::Reports => Page::Reports,
            PageState::Suppliers(_) => Page::Suppliers,
            PageState::Users(_) => Page::Users,
            PageState::Settings(_) => Page::Settings,
        }
    }
}
