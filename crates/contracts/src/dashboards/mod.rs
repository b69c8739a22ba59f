pub mod d401_stock_overview;
pub mod d402_demand_forecast;
pub mod d403_sales_reports;
