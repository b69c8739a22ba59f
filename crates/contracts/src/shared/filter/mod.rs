//! Client-side filtering of tabular records.
//!
//! A page keeps its search box and dropdown values as transient state, turns
//! them into [`FilterCriterion`] values and runs them over its fixture slice.
//! Everything here is pure: the source slice is never modified and the
//! result is an order-preserving subsequence.

pub mod aggregate;
pub mod criterion;
pub mod view;

pub use aggregate::{average_by, count_where, share_percent, sum_by, sum_field};
pub use criterion::{
    active_count, ExactCriterion, ExactTarget, FilterCriterion, TextCriterion, ALL_SENTINEL,
};
pub use view::{filter_cloned, filter_records, matches_all, FilteredView};
