//! Calendar normalization: grouping day records into per-month buckets with
//! the calendar geometry (starting weekday, week count) layout needs.
//!
//! Iteration order contract: buckets live in a `BTreeMap` keyed by
//! `(year, month)`, so months always iterate in ascending calendar order
//! regardless of the input record order. Downstream row indices depend on
//! this ordering.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::feed::DayRecord;

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
}

impl MonthKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of this calendar month.
    ///
    /// `month` always comes from a parsed `NaiveDate`, so construction
    /// cannot be out of range; the fallback is never taken.
    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }
}

/// All records of one calendar month plus its placement geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    pub key: MonthKey,
    /// Records in ascending date order.
    pub days: Vec<DayRecord>,
    /// Weekday of the 1st of the month, 0 = Sunday .. 6 = Saturday.
    /// Computed from the calendar, not from the first *present* record.
    pub start_weekday: u32,
    /// Week rows needed to hold the whole month at that offset:
    /// `ceil((start_weekday + days_in_month) / 7)`, from the true month
    /// length even when the feed has gaps.
    pub week_count: u32,
}

impl MonthBucket {
    fn new(key: MonthKey) -> Self {
        let start_weekday = key.first_day().weekday().num_days_from_sunday();
        let week_count = (start_weekday + days_in_month(key)).div_ceil(7);
        Self {
            key,
            days: Vec::new(),
            start_weekday,
            week_count,
        }
    }
}

/// True length of a calendar month, leap years included.
pub fn days_in_month(key: MonthKey) -> u32 {
    let (ny, nm) = if key.month == 12 {
        (key.year + 1, 1)
    } else {
        (key.year, key.month + 1)
    };
    MonthKey {
        year: ny,
        month: nm,
    }
    .first_day()
    .pred_opt()
    .map(|d| d.day())
    .unwrap_or_default()
}

/// Groups records into month buckets. Buckets exist only for months that
/// have at least one record; each bucket's `days` is sorted ascending.
pub fn bucket_by_month(days: &[DayRecord]) -> BTreeMap<MonthKey, MonthBucket> {
    let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();
    for day in days {
        let key = MonthKey::of(day.date);
        buckets
            .entry(key)
            .or_insert_with(|| MonthBucket::new(key))
            .days
            .push(*day);
    }
    for bucket in buckets.values_mut() {
        bucket.days.sort_by_key(|d| d.date);
    }
    buckets
}
