pub mod aggregate;
pub mod fixtures;

pub use aggregate::{rating_stars, supplier_criteria, PendingOrder, Supplier, SupplierId, SupplierSummary};
pub use fixtures::{pending_orders, suppliers};
