pub mod activity;
pub mod error;
pub mod filter;
pub mod indicators;
pub mod record;
pub mod stock_status;
