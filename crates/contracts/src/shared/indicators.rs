use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, e.g. `"total_stock"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// One summary card of a page header (count, sum or ratio).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    pub id: IndicatorId,
    pub label: String,
    pub value: f64,
    pub format: ValueFormat,
    pub status: IndicatorStatus,
    /// Optional secondary text displayed below the value.
    pub description: Option<String>,
}

impl SummaryCard {
    pub fn count(id: &str, label: &str, value: usize, status: IndicatorStatus) -> Self {
        Self {
            id: IndicatorId::new(id),
            label: label.to_string(),
            value: value as f64,
            format: ValueFormat::Integer,
            status,
            description: None,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
