pub mod dto;

pub use dto::{recent_activity, stock_cards, stock_trend, RecentActivity, StockLevelPoint};
