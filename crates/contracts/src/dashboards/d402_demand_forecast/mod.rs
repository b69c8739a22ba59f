pub mod dto;

pub use dto::{
    ai_insights, approval_queue, demand_forecast, model_performance, observed_points,
    product_forecasts, AiInsight, ForecastPoint, InsightKind, Priority, ProductForecast,
};
