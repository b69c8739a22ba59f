use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::filter::{share_percent, sum_by};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesTrendPoint {
    pub month: String,
    pub sales: u32,
    pub orders: u32,
}

/// Demand per product group for one quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalDemand {
    pub quarter: String,
    pub office: u32,
    pub furniture: u32,
    pub electronics: u32,
}

impl SeasonalDemand {
    pub fn total(&self) -> u32 {
        self.office + self.furniture + self.electronics
    }
}

/// Slice of the "Top Selling Products" pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductShare {
    pub name: String,
    pub value: u32,
    /// Slice colour, `#RRGGBB`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportType {
    pub id: String,
    pub name: String,
    pub description: String,
}

static SALES_TREND: Lazy<Vec<SalesTrendPoint>> = Lazy::new(|| {
    [
        ("Jan", 12400, 145),
        ("Feb", 13200, 152),
        ("Mar", 10800, 128),
        ("Apr", 14600, 168),
        ("May", 16200, 185),
        ("Jun", 15800, 179),
    ]
    .into_iter()
    .map(|(month, sales, orders)| SalesTrendPoint {
        month: month.to_string(),
        sales,
        orders,
    })
    .collect()
});

static SEASONAL_DEMAND: Lazy<Vec<SeasonalDemand>> = Lazy::new(|| {
    [
        ("Q1 2024", 8500, 6200, 4800),
        ("Q2 2024", 9200, 7100, 5400),
        ("Q3 2024", 7800, 5900, 4200),
        ("Q4 2024", 11200, 8800, 7100),
    ]
    .into_iter()
    .map(|(quarter, office, furniture, electronics)| SeasonalDemand {
        quarter: quarter.to_string(),
        office,
        furniture,
        electronics,
    })
    .collect()
});

static TOP_SELLING: Lazy<Vec<ProductShare>> = Lazy::new(|| {
    [
        ("USB-C Cables", 25, "#0088FE"),
        ("Office Chairs", 20, "#00C49F"),
        ("Notebooks", 18, "#FFBB28"),
        ("Desk Lamps", 15, "#FF8042"),
        ("Printer Paper", 12, "#8884D8"),
        ("Others", 10, "#82CA9D"),
    ]
    .into_iter()
    .map(|(name, value, color)| ProductShare {
        name: name.to_string(),
        value,
        color: color.to_string(),
    })
    .collect()
});

static REPORT_TYPES: Lazy<Vec<ReportType>> = Lazy::new(|| {
    [
        ("inventory", "Inventory Report", "Current stock levels and valuations"),
        ("sales", "Sales Analytics", "Sales performance and trends"),
        ("supplier", "Supplier Performance", "Supplier delivery and quality metrics"),
        ("forecast", "Demand Forecast", "AI-generated demand predictions"),
        ("financial", "Financial Summary", "Cost analysis and profit margins"),
    ]
    .into_iter()
    .map(|(id, name, description)| ReportType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
});

pub fn sales_trend() -> &'static [SalesTrendPoint] {
    &SALES_TREND
}

pub fn seasonal_demand() -> &'static [SeasonalDemand] {
    &SEASONAL_DEMAND
}

pub fn top_selling() -> &'static [ProductShare] {
    &TOP_SELLING
}

pub fn report_types() -> &'static [ReportType] {
    &REPORT_TYPES
}

pub fn total_sales(points: &[SalesTrendPoint]) -> f64 {
    sum_by(points, |p| f64::from(p.sales))
}

pub fn total_orders(points: &[SalesTrendPoint]) -> f64 {
    sum_by(points, |p| f64::from(p.orders))
}

/// Pie labels `"<name> <share>%"`, share rounded to a whole percent of the total.
pub fn share_labels(shares: &[ProductShare]) -> Vec<String> {
    let total = sum_by(shares, |s| f64::from(s.value));
    shares
        .iter()
        .map(|s| {
            // halves round up, not to even
            let percent = share_percent(f64::from(s.value), total).round();
            format!("{} {}%", s.name, percent)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_labels() {
        let labels = share_labels(top_selling());
        assert_eq!(labels[0], "USB-C Cables 25%");
        assert_eq!(labels[5], "Others 10%");

        let uneven = vec![
            ProductShare { name: "A".into(), value: 1, color: "#000000".into() },
            ProductShare { name: "B".into(), value: 2, color: "#FFFFFF".into() },
        ];
        assert_eq!(share_labels(&uneven), vec!["A 33%", "B 67%"]);

        let halves = vec![
            ProductShare { name: "A".into(), value: 1, color: "#000000".into() },
            ProductShare { name: "B".into(), value: 7, color: "#FFFFFF".into() },
        ];
        assert_eq!(share_labels(&halves), vec!["A 13%", "B 88%"]);

        let zero = vec![ProductShare { name: "Z".into(), value: 0, color: "#000000".into() }];
        assert_eq!(share_labels(&zero), vec!["Z 0%"]);
    }

    #[test]
    fn test_totals() {
        assert_eq!(total_sales(sales_trend()), 83000.0);
        assert_eq!(total_orders(sales_trend()), 957.0);
        assert_eq!(total_sales(&[]), 0.0);
        assert_eq!(seasonal_demand()[3].total(), 27100);
    }
}
