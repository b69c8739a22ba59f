pub mod dto;

pub use dto::{
    report_types, sales_trend, seasonal_demand, share_labels, top_selling, total_orders,
    total_sales, ProductShare, ReportType, SalesTrendPoint, SeasonalDemand,
};
