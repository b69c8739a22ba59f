//! AI demand prediction page. All figures are static sample data; nothing
//! here is computed by a model.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::ParseLabelError;
use crate::shared::indicators::{IndicatorStatus, SummaryCard, ValueFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            _ => Err(ParseLabelError::new("priority", s)),
        }
    }
}

/// Weekly point of the forecast chart; `actual` is unknown for future weeks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub week: String,
    pub predicted: u32,
    pub actual: Option<u32>,
    pub confidence: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForecast {
    pub product: String,
    pub current_stock: u32,
    pub suggested_reorder: u32,
    pub confidence: u32,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Trend,
    Alert,
    Opportunity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiInsight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub confidence: u32,
    pub impact: Priority,
}

static DEMAND_FORECAST: Lazy<Vec<ForecastPoint>> = Lazy::new(|| {
    [
        (120, Some(115), 95),
        (135, Some(142), 92),
        (148, Some(138), 88),
        (155, None, 85),
        (162, None, 82),
        (171, None, 78),
        (178, None, 75),
        (185, None, 72),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (predicted, actual, confidence))| ForecastPoint {
        week: format!("Week {}", i + 1),
        predicted,
        actual,
        confidence,
    })
    .collect()
});

static PRODUCT_FORECASTS: Lazy<Vec<ProductForecast>> = Lazy::new(|| {
    let row = |product: &str, current_stock, suggested_reorder, confidence, priority| ProductForecast {
        product: product.to_string(),
        current_stock,
        suggested_reorder,
        confidence,
        priority,
    };
    vec![
        row("Office Chairs", 45, 30, 92, Priority::Medium),
        row("Printer Paper", 12, 200, 98, Priority::High),
        row("USB Cables", 156, 50, 85, Priority::Low),
        row("Desk Lamps", 8, 25, 94, Priority::High),
        row("Notebooks", 234, 100, 78, Priority::Low),
    ]
});

static AI_INSIGHTS: Lazy<Vec<AiInsight>> = Lazy::new(|| {
    let insight = |kind, title: &str, description: &str, confidence, impact| AiInsight {
        kind,
        title: title.to_string(),
        description: description.to_string(),
        confidence,
        impact,
    };
    vec![
        insight(
            InsightKind::Trend,
            "Seasonal Demand Increase",
            "Office furniture demand typically increases by 25% in Q4",
            89,
            Priority::High,
        ),
        insight(
            InsightKind::Alert,
            "Supply Chain Risk",
            "Printer paper supplier may have delays next month",
            76,
            Priority::Medium,
        ),
        insight(
            InsightKind::Opportunity,
            "Cost Optimization",
            "Bulk ordering USB cables could save 15% on costs",
            92,
            Priority::Medium,
        ),
    ]
});

pub fn demand_forecast() -> &'static [ForecastPoint] {
    &DEMAND_FORECAST
}

pub fn product_forecasts() -> &'static [ProductForecast] {
    &PRODUCT_FORECASTS
}

pub fn ai_insights() -> &'static [AiInsight] {
    &AI_INSIGHTS
}

/// Suggestions waiting for manager approval: the high-priority ones, in order.
pub fn approval_queue(forecasts: &[ProductForecast]) -> Vec<&ProductForecast> {
    forecasts
        .iter()
        .filter(|f| f.priority == Priority::High)
        .collect()
}

/// Weeks that already have an observed value.
pub fn observed_points(points: &[ForecastPoint]) -> impl Iterator<Item = &ForecastPoint> {
    points.iter().filter(|p| p.actual.is_some())
}

/// "Model Performance" cards.
pub fn model_performance() -> Vec<SummaryCard> {
    let percent = ValueFormat::Percent { decimals: 0 };
    vec![
        SummaryCard::count("overall_accuracy", "Overall Accuracy", 87, IndicatorStatus::Good)
            .with_format(percent.clone()),
        SummaryCard::count("trend_detection", "Trend Detection", 92, IndicatorStatus::Neutral)
            .with_format(percent.clone()),
        SummaryCard::count("cost_reduction", "Cost Reduction", 15, IndicatorStatus::Neutral)
            .with_format(percent),
    ]
}
