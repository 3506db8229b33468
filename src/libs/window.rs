//! Date window resolution and gap-filled calendar sequences.
//!
//! Every builder computes its day and week buckets through this single
//! module, so a "day" always means the same thing everywhere: the UTC
//! calendar date of the relevant timestamp. Mixing per-builder date
//! arithmetic is what causes midnight-boundary mismatches between
//! aggregations, so none of it lives anywhere else.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rolling window anchored at "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RollingPeriod {
    Day,
    Week,
    Month,
    Quarter,
    Year,
}

/// Logical window specifier supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowSpec {
    Rolling(RollingPeriod),
    Custom { start: NaiveDate, end: NaiveDate },
}

/// An inclusive `[start, end]` date range.
///
/// A window with `end < start` is valid: it simply contains nothing and
/// produces empty day and week sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateWindow { start, end }
    }

    /// Resolves a logical window specifier against an explicit reference
    /// instant. Passing `now` in keeps rolling windows deterministic
    /// under test; production callers pass `Utc::now()`.
    ///
    /// Rolling "day" is today only; "week" subtracts 7 days; "month",
    /// "quarter" and "year" subtract the corresponding calendar interval.
    /// Custom boundaries are used verbatim.
    pub fn resolve(spec: &WindowSpec, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        match spec {
            WindowSpec::Custom { start, end } => DateWindow::new(*start, *end),
            WindowSpec::Rolling(period) => {
                let start = match period {
                    RollingPeriod::Day => today,
                    RollingPeriod::Week => today - Duration::days(7),
                    RollingPeriod::Month => today.checked_sub_months(Months::new(1)).unwrap_or(today),
                    RollingPeriod::Quarter => today.checked_sub_months(Months::new(3)).unwrap_or(today),
                    RollingPeriod::Year => today.checked_sub_months(Months::new(12)).unwrap_or(today),
                };
                DateWindow::new(start, today)
            }
        }
    }

    /// A window covering the last `n` calendar days ending today.
    pub fn last_days(n: i64, now: DateTime<Utc>) -> Self {
        let today = now.date_naive();
        DateWindow::new(today - Duration::days(n.max(1) - 1), today)
    }

    /// Number of calendar days in the window, 0 when reversed.
    pub fn num_days(&self) -> i64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn contains_instant(&self, ts: DateTime<Utc>) -> bool {
        self.contains(ts.date_naive())
    }

    /// One entry per calendar day from start to end inclusive, strictly
    /// increasing. Empty when the window is reversed.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        if self.end < self.start {
            return days;
        }
        let mut day = self.start;
        loop {
            days.push(day);
            if day >= self.end {
                break;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        days
    }

    /// One entry per ISO-8601 week touched by the window, in order.
    pub fn weeks(&self) -> Vec<WeekKey> {
        let mut weeks: Vec<WeekKey> = Vec::new();
        for day in self.days() {
            let key = WeekKey::of(day);
            if weeks.last() != Some(&key) {
                weeks.push(key);
            }
        }
        weeks
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.start, self.end)
    }
}

/// ISO-8601 week identifier (Monday-start, Thursday-rule year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub iso_year: i32,
    pub week: u32,
}

impl WeekKey {
    pub fn of(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        WeekKey {
            iso_year: iso.year(),
            week: iso.week(),
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.iso_year, self.week)
    }
}
