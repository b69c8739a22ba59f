use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::aggregate::{PendingOrder, Supplier, SupplierId};
use crate::shared::activity::ActivityStatus;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

#[allow(clippy::too_many_arguments)]
fn supplier(
    id: u32,
    name: &str,
    contact: &str,
    email: &str,
    phone: &str,
    location: &str,
    category: &str,
    rating: f64,
    orders: u32,
    last_order: NaiveDate,
    status: ActivityStatus,
    reliability: u32,
) -> Supplier {
    Supplier {
        id: SupplierId(id),
        name: name.to_string(),
        contact: contact.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        location: location.to_string(),
        category: category.to_string(),
        rating,
        orders,
        last_order,
        status,
        reliability,
    }
}

static SUPPLIERS: Lazy<Vec<Supplier>> = Lazy::new(|| {
    use ActivityStatus::{Active, Inactive};
    vec![
        supplier(1, "Tech Solutions Ltd", "Sarah Johnson", "sarah@techsolutions.com", "+1 (555) 123-4567", "New York, NY", "Electronics", 4.8, 47, date(2024, 1, 15), Active, 98),
        supplier(2, "Office Furniture Co", "Mike Chen", "mike@officefurniture.com", "+1 (555) 234-5678", "Chicago, IL", "Furniture", 4.6, 32, date(2024, 1, 12), Active, 95),
        supplier(3, "Paper Works Inc", "Lisa Anderson", "lisa@paperworks.com", "+1 (555) 345-6789", "Portland, OR", "Stationery", 4.9, 68, date(2024, 1, 18), Active, 99),
        supplier(4, "Global Supplies", "David Kim", "david@globalsupplies.com", "+1 (555) 456-7890", "Los Angeles, CA", "Mixed", 4.2, 23, date(2023, 12, 28), Inactive, 87),
        supplier(5, "Premium Office Solutions", "Emma Wilson", "emma@premiumoffice.com", "+1 (555) 567-8901", "Boston, MA", "Office Supplies", 4.7, 41, date(2024, 1, 20), Active, 96),
    ]
});

static PENDING_ORDERS: Lazy<Vec<PendingOrder>> = Lazy::new(|| {
    let order = |supplier: &str, product: &str, quantity: u32, eta: NaiveDate| PendingOrder {
        supplier: supplier.to_string(),
        product: product.to_string(),
        quantity,
        estimated_delivery: eta,
    };
    vec![
        order("Tech Solutions Ltd", "USB-C Cables", 200, date(2024, 1, 25)),
        order("Paper Works Inc", "Printer Paper A4", 500, date(2024, 1, 22)),
        order("Office Furniture Co", "Ergonomic Chairs", 15, date(2024, 1, 28)),
    ]
});

pub fn suppliers() -> &'static [Supplier] {
    &SUPPLIERS
}

pub fn pending_orders() -> &'static [PendingOrder] {
    &PENDING_ORDERS
}
