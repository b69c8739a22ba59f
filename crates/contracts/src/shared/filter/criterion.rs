use serde::{Deserialize, Serialize};

use crate::shared::record::{FieldValue, Record};

/// Select-control value meaning "no filter on this column".
pub const ALL_SENTINEL: &str = "all";

/// Case-insensitive substring search over one or more fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCriterion {
    pub fields: Vec<String>,
    pub query: String,
}

impl TextCriterion {
    pub fn new<I, S>(fields: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            query: query.into(),
        }
    }

    /// An empty query matches every record.
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        if !self.is_active() {
            return true;
        }
        let needle = self.query.to_lowercase();
        self.fields.iter().any(|field| {
            record
                .field(field)
                .to_string()
                .to_lowercase()
                .contains(&needle)
        })
    }
}

/// Target of an exact-match filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", content = "value", rename_all = "snake_case")]
pub enum ExactTarget {
    /// Sentinel: the column is not filtered.
    All,
    Value(FieldValue),
}

impl ExactTarget {
    /// Builds a target from a single-select value, `"all"` being the sentinel.
    pub fn from_select(value: &str) -> Self {
        if value == ALL_SENTINEL {
            ExactTarget::All
        } else {
            ExactTarget::Value(FieldValue::from(value))
        }
    }
}

/// Exact equality on one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExactCriterion {
    pub field: String,
    pub target: ExactTarget,
}

impl ExactCriterion {
    pub fn new(field: impl Into<String>, target: ExactTarget) -> Self {
        Self {
            field: field.into(),
            target,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.target, ExactTarget::All)
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match &self.target {
            ExactTarget::All => true,
            ExactTarget::Value(expected) => record.field(&self.field) == *expected,
        }
    }
}

/// One filter condition of a list page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterCriterion {
    Text(TextCriterion),
    Exact(ExactCriterion),
}

impl FilterCriterion {
    pub fn text<I, S>(fields: I, query: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterCriterion::Text(TextCriterion::new(fields, query))
    }

    pub fn exact(field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        FilterCriterion::Exact(ExactCriterion::new(field, ExactTarget::Value(value.into())))
    }

    /// Exact criterion driven by a dropdown: `"all"` disables it.
    pub fn select(field: impl Into<String>, selected: &str) -> Self {
        FilterCriterion::Exact(ExactCriterion::new(field, ExactTarget::from_select(selected)))
    }

    pub fn is_active(&self) -> bool {
        match self {
            FilterCriterion::Text(c) => c.is_active(),
            FilterCriterion::Exact(c) => c.is_active(),
        }
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            FilterCriterion::Text(c) => c.matches(record),
            FilterCriterion::Exact(c) => c.matches(record),
        }
    }

    /// Chip text for the active-filters row.
    pub fn display_text(&self) -> String {
        match self {
            FilterCriterion::Text(c) => {
                format!("{} contains \"{}\"", c.fields.join(", "), c.query)
            }
            FilterCriterion::Exact(c) => match &c.target {
                ExactTarget::All => format!("{}: all", c.field),
                ExactTarget::Value(v) => format!("{} = {}", c.field, v),
            },
        }
    }
}

/// Number of criteria that actually restrict the list.
pub fn active_count(criteria: &[FilterCriterion]) -> usize {
    criteria.iter().filter(|c| c.is_active()).count()
}
