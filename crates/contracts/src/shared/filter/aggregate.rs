//! Reductions over a (filtered) slice of rows. Empty input gives zero.

use crate::shared::record::Record;

pub fn count_where<T, P>(items: &[T], mut predicate: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    items.iter().filter(|item| predicate(*item)).count()
}

pub fn sum_by<T, F>(items: &[T], value: F) -> f64
where
    F: FnMut(&T) -> f64,
{
    items.iter().map(value).sum()
}

/// Sums a numeric column; missing or non-numeric values count as zero.
pub fn sum_field<T: Record>(items: &[T], field: &str) -> f64 {
    items
        .iter()
        .map(|item| item.field(field).as_number().unwrap_or(0.0))
        .sum()
}

/// Arithmetic mean, `None` for an empty slice.
pub fn average_by<T, F>(items: &[T], value: F) -> Option<f64>
where
    F: FnMut(&T) -> f64,
{
    if items.is_empty() {
        return None;
    }
    Some(sum_by(items, value) / items.len() as f64)
}

/// `part` as a percentage of `total`; a zero total yields 0.
pub fn share_percent(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_input() {
        let empty: Vec<serde_json::Value> = Vec::new();
        assert_eq!(count_where(&empty, |_| true), 0);
        assert_eq!(sum_field(&empty, "stock"), 0.0);
        assert_eq!(sum_by(&empty, |_| 1.0), 0.0);
        assert_eq!(average_by(&empty, |_| 1.0), None);
    }

    #[test]
    fn test_sum_field_skips_non_numeric() {
        let rows = vec![
            json!({ "stock": 10 }),
            json!({ "stock": "n/a" }),
            json!({}),
            json!({ "stock": 2.5 }),
        ];
        assert_eq!(sum_field(&rows, "stock"), 12.5);
    }

    #[test]
    fn test_count_and_average() {
        let ratings = [4.8, 4.6, 4.9, 4.2, 4.7];
        assert_eq!(count_where(&ratings, |r| *r >= 4.7), 3);
        let avg = average_by(&ratings, |r| *r).unwrap();
        assert!((avg - 4.64).abs() < 1e-9);
    }

    #[test]
    fn test_share_percent() {
        assert_eq!(share_percent(25.0, 100.0), 25.0);
        assert_eq!(share_percent(5.0, 0.0), 0.0);
    }
}
