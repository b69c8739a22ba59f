use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::activity::ActivityStatus;
use crate::shared::filter::{average_by, count_where, FilterCriterion};
use crate::shared::indicators::{IndicatorStatus, SummaryCard, ValueFormat};
use crate::shared::record::{FieldValue, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SupplierId(pub u32);

pub mod fields {
    pub const ID: &str = "id";
    pub const NAME: &str = "name";
    pub const CONTACT: &str = "contact";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const LOCATION: &str = "location";
    pub const CATEGORY: &str = "category";
    pub const RATING: &str = "rating";
    pub const ORDERS: &str = "orders";
    pub const LAST_ORDER: &str = "last_order";
    pub const STATUS: &str = "status";
    pub const RELIABILITY: &str = "reliability";
}

pub const SEARCH_FIELDS: [&str; 3] = [fields::NAME, fields::CONTACT, fields::CATEGORY];

/// Supplier directory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub category: String,
    /// 0.0..=5.0
    pub rating: f64,
    pub orders: u32,
    pub last_order: NaiveDate,
    pub status: ActivityStatus,
    /// On-time delivery, percent.
    pub reliability: u32,
}

impl Record for Supplier {
    fn field(&self, name: &str) -> FieldValue {
        match name {
            fields::ID => self.id.0.into(),
            fields::NAME => self.name.as_str().into(),
            fields::CONTACT => self.contact.as_str().into(),
            fields::EMAIL => self.email.as_str().into(),
            fields::PHONE => self.phone.as_str().into(),
            fields::LOCATION => self.location.as_str().into(),
            fields::CATEGORY => self.category.as_str().into(),
            fields::RATING => self.rating.into(),
            fields::ORDERS => self.orders.into(),
            fields::LAST_ORDER => self.last_order.format("%Y-%m-%d").to_string().into(),
            fields::STATUS => self.status.label().into(),
            fields::RELIABILITY => self.reliability.into(),
            _ => FieldValue::Null,
        }
    }
}

/// Supplier search box; the page has no dropdown filters.
pub fn supplier_criteria(search: &str) -> Vec<FilterCriterion> {
    vec![FilterCriterion::text(SEARCH_FIELDS, search)]
}

/// Number of filled stars (out of five) for a rating.
pub fn rating_stars(rating: f64) -> u8 {
    if rating.is_nan() {
        return 0;
    }
    rating.floor().clamp(0.0, 5.0) as u8
}

/// Order placed with a supplier and not yet delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOrder {
    pub supplier: String,
    pub product: String,
    pub quantity: u32,
    pub estimated_delivery: NaiveDate,
}

/// Header cards of the supplier page. These are global totals, not affected
/// by the search box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SupplierSummary {
    pub total: usize,
    pub active: usize,
    pub pending_orders: usize,
    /// `None` when there are no suppliers.
    pub average_rating: Option<f64>,
}

impl SupplierSummary {
    pub fn new(suppliers: &[Supplier], pending: &[PendingOrder]) -> Self {
        Self {
            total: suppliers.len(),
            active: count_where(suppliers, |s| s.status.is_active()),
            pending_orders: pending.len(),
            average_rating: average_by(suppliers, |s| s.rating),
        }
    }

    pub fn cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard::count("total_suppliers", "Total Suppliers", self.total, IndicatorStatus::Neutral),
            SummaryCard::count("active_suppliers", "Active Suppliers", self.active, IndicatorStatus::Good),
            SummaryCard::count("pending_orders", "Pending Orders", self.pending_orders, IndicatorStatus::Warning),
            SummaryCard::count("avg_rating", "Avg Supplier Rating", 0, IndicatorStatus::Neutral)
                .with_format(ValueFormat::Number { decimals: 1 })
                .with_value(self.average_rating.unwrap_or(0.0)),
        ]
    }
}
