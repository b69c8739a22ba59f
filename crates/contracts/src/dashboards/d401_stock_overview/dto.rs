use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::shared::indicators::{IndicatorStatus, SummaryCard};

/// Point of the "Real-time Stock Levels" line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockLevelPoint {
    pub month: String,
    pub level: u32,
}

/// Entry of the "Recent Activity" feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub action: String,
    pub item: String,
    pub quantity: Option<u32>,
    /// Relative time as shown, e.g. "2 hours ago".
    pub time: String,
    #[serde(default)]
    pub alert: bool,
}

impl RecentActivity {
    /// Second line of the entry: item name, plus quantity when there is a non-zero one.
    pub fn detail(&self) -> String {
        match self.quantity.filter(|q| *q > 0) {
            Some(q) => format!("{} \u{2022} Qty: {}", self.item, q),
            None => self.item.clone(),
        }
    }
}

static STOCK_TREND: Lazy<Vec<StockLevelPoint>> = Lazy::new(|| {
    [("Jan", 850), ("Feb", 720), ("Mar", 890), ("Apr", 650), ("May", 780), ("Jun", 920)]
        .into_iter()
        .map(|(month, level)| StockLevelPoint {
            month: month.to_string(),
            level,
        })
        .collect()
});

static RECENT_ACTIVITY: Lazy<Vec<RecentActivity>> = Lazy::new(|| {
    let entry = |action: &str, item: &str, quantity: Option<u32>, time: &str, alert: bool| RecentActivity {
        action: action.to_string(),
        item: item.to_string(),
        quantity,
        time: time.to_string(),
        alert,
    };
    vec![
        entry("Stock added", "Office Chairs", Some(50), "2 hours ago", false),
        entry("Low stock alert", "Printer Paper", Some(15), "4 hours ago", true),
        entry("Order completed", "USB Cables", Some(200), "6 hours ago", false),
        entry("New supplier added", "Tech Solutions Ltd", None, "1 day ago", false),
    ]
});

pub fn stock_trend() -> &'static [StockLevelPoint] {
    &STOCK_TREND
}

pub fn recent_activity() -> &'static [RecentActivity] {
    &RECENT_ACTIVITY
}

/// Header cards of the dashboard page.
pub fn stock_cards() -> Vec<SummaryCard> {
    vec![
        SummaryCard::count("total_stock", "Total Stock", 2847, IndicatorStatus::Neutral)
            .with_description("Items in inventory"),
        SummaryCard::count("low_stock_alerts", "Low Stock Alerts", 23, IndicatorStatus::Bad)
            .with_description("Items need reordering"),
        SummaryCard::count("pending_orders", "Pending Orders", 67, IndicatorStatus::Warning)
            .with_description("Orders awaiting fulfillment"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_detail() {
        let feed = recent_activity();
        assert_eq!(feed[0].detail(), "Office Chairs \u{2022} Qty: 50");
        assert_eq!(feed[3].detail(), "Tech Solutions Ltd");

        let zero = RecentActivity {
            quantity: Some(0),
            ..feed[0].clone()
        };
        assert_eq!(zero.detail(), "Office Chairs");
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(stock_trend().len(), 6);
        assert_eq!(recent_activity().iter().filter(|a| a.alert).count(), 1);
        let cards = stock_cards();
        assert_eq!(cards[0].value, 2847.0);
        assert_eq!(cards[1].description.as_deref(), Some("Items need reordering"));
    }
}
