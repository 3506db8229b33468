//! Report builders.
//!
//! Each builder is a pure async function of its inputs plus fresh fetch
//! results: no caching, no shared state, no writes. Independent fetches
//! for one report run concurrently via `tokio::try_join!`; any fetch
//! failure aborts the build. A missing user or project yields `Ok(None)`
//! rather than an error.

pub mod dashboard;
pub mod individual;
pub mod project;
pub mod team;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One unit of a gap-filled daily time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub value: i64,
}

/// Flattens an ordered bucket map into the serialized series shape.
pub(crate) fn into_day_series(buckets: BTreeMap<NaiveDate, i64>) -> Vec<DayBucket> {
    buckets
        .into_iter()
        .map(|(date, value)| DayBucket { date, value })
        .collect()
}
