use super::aggregate;
use super::criterion::FilterCriterion;
use crate::shared::record::Record;

/// True when `record` satisfies every criterion (an empty list accepts all).
pub fn matches_all<R: Record + ?Sized>(record: &R, criteria: &[FilterCriterion]) -> bool {
    criteria.iter().all(|c| c.matches(record))
}

/// Order-preserving subsequence of `records` satisfying all criteria.
pub fn filter_records<'a, R: Record>(records: &'a [R], criteria: &[FilterCriterion]) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| matches_all(*record, criteria))
        .collect()
}

/// Same as [`filter_records`] but returns owned rows for table state.
pub fn filter_cloned<R: Record + Clone>(records: &[R], criteria: &[FilterCriterion]) -> Vec<R> {
    records
        .iter()
        .filter(|record| matches_all(*record, criteria))
        .cloned()
        .collect()
}

/// Borrowed, filtered view over a fixture collection.
///
/// Statistics computed through the view only see the filtered rows; use the
/// source slice directly for global totals.
#[derive(Debug, Clone)]
pub struct FilteredView<'a, R> {
    rows: Vec<&'a R>,
    source_len: usize,
}

impl<'a, R: Record> FilteredView<'a, R> {
    pub fn new(records: &'a [R], criteria: &[FilterCriterion]) -> Self {
        Self {
            rows: filter_records(records, criteria),
            source_len: records.len(),
        }
    }

    /// Applies further criteria on top of the current rows.
    pub fn refine(&self, criteria: &[FilterCriterion]) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .copied()
                .filter(|record| matches_all(*record, criteria))
                .collect(),
            source_len: self.source_len,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Size of the collection the view was built from.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn rows(&self) -> &[&'a R] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.rows.iter().copied()
    }

    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&R) -> bool,
    {
        aggregate::count_where(&self.rows, |r| predicate(*r))
    }

    pub fn sum_by<F>(&self, mut value: F) -> f64
    where
        F: FnMut(&R) -> f64,
    {
        aggregate::sum_by(&self.rows, |r| value(*r))
    }

    pub fn sum_field(&self, field: &str) -> f64 {
        aggregate::sum_field(&self.rows, field)
    }

    pub fn to_owned_rows(&self) -> Vec<R>
    where
        R: Clone,
    {
        self.rows.iter().map(|r| (*r).clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sample() -> Vec<Value> {
        vec![
            json!({ "name": "Printer Paper A4", "stock": 12, "threshold": 50, "category": "Stationery" }),
            json!({ "name": "USB-C Cable", "stock": 156, "threshold": 30, "category": "Electronics" }),
            json!({ "name": "Wireless Mouse", "stock": 89, "threshold": 25, "category": "Electronics" }),
        ]
    }

    #[test]
    fn test_text_scenario() {
        let records = sample();
        let result = filter_records(&records[..2], &[FilterCriterion::text(["name"], "usb")]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0]["name"], "USB-C Cable");
    }

    #[test]
    fn test_sentinel_scenario() {
        let records = sample();
        let result = filter_cloned(&records[..2], &[FilterCriterion::select("category", "all")]);
        assert_eq!(result, records[..2].to_vec());
    }

    #[test]
    fn test_no_criteria_is_identity() {
        let records = sample();
        assert_eq!(filter_cloned(&records, &[]), records);
    }

    #[test]
    fn test_and_semantics_and_order() {
        let records = sample();
        let criteria = vec![
            FilterCriterion::select("category", "Electronics"),
            FilterCriterion::text(["name"], "e"),
        ];
        let names: Vec<_> = filter_records(&records, &criteria)
            .iter()
            .map(|r| r["name"].as_str().unwrap_or_default().to_string())
            .collect();
        assert_eq!(names, vec!["USB-C Cable", "Wireless Mouse"]);
    }

    #[test]
    fn test_idempotent() {
        let records = sample();
        let criteria = vec![FilterCriterion::text(["name", "category"], "ELEC")];
        let once = filter_cloned(&records, &criteria);
        let twice = filter_cloned(&once, &criteria);
        assert_eq!(once, twice);

        let view = FilteredView::new(&records, &criteria);
        assert_eq!(view.refine(&criteria).len(), view.len());
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let records = sample();
        let view = FilteredView::new(&records, &[FilterCriterion::text(["name"], "zzz")]);
        assert!(view.is_empty());
        assert_eq!(view.source_len(), 3);
        assert_eq!(view.sum_field("stock"), 0.0);
        assert_eq!(view.count_where(|_| true), 0);
    }

    #[test]
    fn test_view_statistics_use_filtered_rows() {
        let records = sample();
        let view = FilteredView::new(&records, &[FilterCriterion::select("category", "Electronics")]);
        assert_eq!(view.sum_field("stock"), 245.0);
        assert_eq!(view.count_where(|r| r["stock"].as_u64().unwrap_or(0) > 100), 1);
        assert_eq!(view.sum_by(|r| r["threshold"].as_f64().unwrap_or(0.0)), 55.0);
        assert_eq!(view.to_owned_rows().len(), 2);
    }

    #[test]
    fn test_source_untouched() {
        let records = sample();
        let before = records.clone();
        let _ = filter_records(&records, &[FilterCriterion::text(["name"], "paper")]);
        assert_eq!(records, before);
    }
}
