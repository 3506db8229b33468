//! Pure aggregation reducers shared by all report builders.
//!
//! Every function here is stateless: it folds an already-fetched record
//! list into grouped counts or sums. Degenerate arithmetic (no tasks, no
//! estimate, empty window) always yields 0, never NaN or infinity.

use crate::libs::records::{TaskPriority, TaskRecord, TaskStatus};
use crate::libs::window::DateWindow;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Counts tasks per status over the full fixed enum set. Unseen variants
/// stay present with a count of 0.
pub fn status_histogram<'a, I>(tasks: I) -> BTreeMap<TaskStatus, i64>
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    let mut histogram: BTreeMap<TaskStatus, i64> = TaskStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for task in tasks {
        *histogram.entry(task.status).or_insert(0) += 1;
    }
    histogram
}

/// Counts tasks per priority over the full fixed enum set, zero-filled.
pub fn priority_histogram<'a, I>(tasks: I) -> BTreeMap<TaskPriority, i64>
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    let mut histogram: BTreeMap<TaskPriority, i64> = TaskPriority::ALL.iter().map(|p| (*p, 0)).collect();
    for task in tasks {
        *histogram.entry(task.priority).or_insert(0) += 1;
    }
    histogram
}

/// Pre-filled day buckets for a window, one zero-valued entry per
/// calendar day. Reducers only increment existing buckets, so days with
/// no matching records still appear with value 0.
pub fn day_buckets(window: &DateWindow) -> BTreeMap<NaiveDate, i64> {
    window.days().into_iter().map(|day| (day, 0)).collect()
}

/// Increments the bucket for `key` by one. Keys outside the pre-filled
/// set are ignored, which is how records outside the window drop out.
pub fn count_into<K: Ord>(buckets: &mut BTreeMap<K, i64>, key: K) {
    if let Some(slot) = buckets.get_mut(&key) {
        *slot += 1;
    }
}

/// Adds `amount` to the bucket for `key`, ignoring unknown keys.
pub fn add_into<K: Ord>(buckets: &mut BTreeMap<K, i64>, key: K, amount: i64) {
    if let Some(slot) = buckets.get_mut(&key) {
        *slot += amount;
    }
}

/// Stable descending sort by a numeric key. Ties keep the original fetch
/// order; that ordering is acceptable, not guaranteed meaningful.
pub fn rank_desc<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Builds an id-keyed lookup in one pass so cross-entity joins stay
/// O(n + m) instead of nested scans.
pub fn index_by<T, F>(items: &[T], key: F) -> HashMap<i64, &T>
where
    F: Fn(&T) -> i64,
{
    items.iter().map(|item| (key(item), item)).collect()
}

/// Percentage of `part` in `whole`, rounded to the nearest integer.
/// 0 when `whole` is 0 (guarded division).
pub fn percent(part: i64, whole: i64) -> i64 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as i64
    }
}

/// `total / count` rounded to one decimal, 0.0 when `count` is 0.
pub fn ratio(total: i64, count: i64) -> f64 {
    if count == 0 {
        0.0
    } else {
        round1(total as f64 / count as f64)
    }
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
