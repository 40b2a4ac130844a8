//! Grid layout engine: turns month buckets into placed, colored, height-
//! scaled grid cells plus month label anchors.
//!
//! Axes: X is the weekday (0 = Sunday .. 6 = Saturday), Z is the stacking
//! axis along which months are laid out end-to-end. Each month occupies the
//! row range `[month_start, month_start + week_count)` followed by a
//! one-row gap, so cells of different months can never share a row and the
//! visual order reads chronologically.

use std::collections::BTreeMap;

use bevy::prelude::*;
use chrono::{Datelike, NaiveDate};

use crate::config::{HEIGHT_SCALE, LABEL_COLUMN_X, MIN_HEIGHT, MONTH_GAP_ROWS};
use crate::error::CalendarError;
use crate::months::{MonthBucket, MonthKey};

/// Five-tier severity ladder over daily counts.
///
/// The boundaries are a contract of the visualization (inclusive lower,
/// exclusive upper): 0 / 1-9 / 10-19 / 20-29 / 30+.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    Zero,
    Low,
    Medium,
    High,
    Peak,
}

impl ColorBucket {
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Zero,
            1..=9 => Self::Low,
            10..=19 => Self::Medium,
            20..=29 => Self::High,
            _ => Self::Peak,
        }
    }

    /// Index into per-bucket material/palette tables.
    pub fn index(self) -> usize {
        match self {
            Self::Zero => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Peak => 4,
        }
    }
}

/// One rendered bar corresponding to one day. Created at layout time and
/// read-only afterward; the interaction loop never mutates cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub count: u32,
    /// Weekday column, 0-6.
    pub column: u32,
    /// Week row within the cell's own month.
    pub week_index: u32,
    /// Stacking-axis coordinate: cumulative month offset + `week_index`.
    pub row: u32,
    /// World-space center of the bar (Y is half the height, so the bar
    /// rests on the ground plane).
    pub position: Vec3,
    pub height: f32,
    pub color_bucket: ColorBucket,
}

/// Month name label and the world-space anchor it hangs off, aligned with
/// that month's week-0 row.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthLabel {
    pub text: String,
    pub anchor: Vec3,
}

/// The session-lifetime layout: one cell per day record plus label anchors.
#[derive(Debug, Clone, PartialEq, Resource)]
pub struct GridLayout {
    pub cells: Vec<GridCell>,
    pub labels: Vec<MonthLabel>,
    /// Total rows occupied along the stacking axis, trailing gap excluded.
    pub span_rows: u32,
}

impl GridLayout {
    /// Center of the grid footprint on the ground plane; the camera focus.
    pub fn focus(&self) -> Vec3 {
        let depth = self.span_rows.saturating_sub(1) as f32;
        Vec3::new(3.0, 0.0, depth * 0.5)
    }
}

/// Builds the full layout from month buckets, iterating months in the
/// normalizer's ascending order.
pub fn build_layout(
    buckets: &BTreeMap<MonthKey, MonthBucket>,
) -> Result<GridLayout, CalendarError> {
    let mut cells = Vec::new();
    let mut labels = Vec::new();
    let mut cumulative_offset: u32 = 0;

    for bucket in buckets.values() {
        if bucket.week_count == 0 {
            return Err(CalendarError::LayoutInvariantViolation(format!(
                "month {}-{:02} has zero week rows",
                bucket.key.year, bucket.key.month
            )));
        }
        let month_start = cumulative_offset;

        for day in &bucket.days {
            let column = day.date.weekday().num_days_from_sunday();
            let week_index = (bucket.start_weekday + day.date.day() - 1) / 7;
            if week_index >= bucket.week_count {
                return Err(CalendarError::LayoutInvariantViolation(format!(
                    "{} falls in week {week_index} of a {}-week month",
                    day.date, bucket.week_count
                )));
            }
            let row = month_start + week_index;
            let height = (day.count as f32 * HEIGHT_SCALE).max(MIN_HEIGHT);
            cells.push(GridCell {
                date: day.date,
                count: day.count,
                column,
                week_index,
                row,
                position: Vec3::new(column as f32, height * 0.5, row as f32),
                height,
                color_bucket: ColorBucket::from_count(day.count),
            });
        }

        labels.push(MonthLabel {
            text: bucket.key.first_day().format("%b").to_string(),
            anchor: Vec3::new(LABEL_COLUMN_X, 0.0, month_start as f32),
        });

        cumulative_offset += bucket.week_count + MONTH_GAP_ROWS;
    }

    Ok(GridLayout {
        cells,
        labels,
        span_rows: cumulative_offset.saturating_sub(MONTH_GAP_ROWS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::DayRecord;
    use crate::months::bucket_by_month;

    fn day(y: i32, m: u32, d: u32, count: u32) -> DayRecord {
        DayRecord {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            count,
        }
    }

    fn layout_of(records: &[DayRecord]) -> GridLayout {
        build_layout(&bucket_by_month(records)).unwrap()
    }

    #[test]
    fn test_color_bucket_boundaries_exact() {
        assert_eq!(ColorBucket::from_count(0), ColorBucket::Zero);
        assert_eq!(ColorBucket::from_count(1), ColorBucket::Low);
        assert_eq!(ColorBucket::from_count(9), ColorBucket::Low);
        assert_eq!(ColorBucket::from_count(10), ColorBucket::Medium);
        assert_eq!(ColorBucket::from_count(19), ColorBucket::Medium);
        assert_eq!(ColorBucket::from_count(20), ColorBucket::High);
        assert_eq!(ColorBucket::from_count(29), ColorBucket::High);
        assert_eq!(ColorBucket::from_count(30), ColorBucket::Peak);
        assert_eq!(ColorBucket::from_count(31), ColorBucket::Peak);
    }

    #[test]
    fn test_single_day_scenario() {
        // 2024-03-01 is a Friday; March 2024 spans 6 week rows.
        let layout = layout_of(&[day(2024, 3, 1, 45)]);
        assert_eq!(layout.cells.len(), 1);
        let cell = &layout.cells[0];
        assert!((cell.height - 4.5).abs() < f32::EPSILON);
        assert_eq!(cell.color_bucket, ColorBucket::Peak);
        assert_eq!(cell.column, 5);
        assert_eq!(cell.week_index, 0);
        assert_eq!(cell.row, 0);
        assert_eq!(cell.position, Vec3::new(5.0, 2.25, 0.0));
        assert_eq!(layout.span_rows, 6);
    }

    #[test]
    fn test_zero_count_day_keeps_minimum_height() {
        let layout = layout_of(&[day(2024, 3, 4, 0)]);
        let cell = &layout.cells[0];
        assert!((cell.height - MIN_HEIGHT).abs() < f32::EPSILON);
        assert!((cell.position.y - MIN_HEIGHT * 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_every_record_produces_exactly_one_cell() {
        let mut records = Vec::new();
        for d in 1..=31 {
            records.push(day(2024, 1, d, d));
        }
        for d in 1..=29 {
            records.push(day(2024, 2, d, d * 2));
        }
        let layout = layout_of(&records);
        assert_eq!(layout.cells.len(), records.len());
        // No duplicate (column, row) placements either.
        let mut seen: Vec<(u32, u32)> = layout.cells.iter().map(|c| (c.column, c.row)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), records.len());
    }

    #[test]
    fn test_months_never_share_a_row() {
        // Consecutive and gapped months alike.
        let layout = layout_of(&[
            day(2024, 1, 1, 1),
            day(2024, 1, 31, 1),
            day(2024, 2, 1, 1),
            day(2024, 2, 29, 1),
            day(2024, 5, 15, 1),
        ]);
        let mut ranges: BTreeMap<(i32, u32), (u32, u32)> = BTreeMap::new();
        for cell in &layout.cells {
            let key = (cell.date.year(), cell.date.month());
            let entry = ranges.entry(key).or_insert((cell.row, cell.row));
            entry.0 = entry.0.min(cell.row);
            entry.1 = entry.1.max(cell.row);
        }
        let spans: Vec<(u32, u32)> = ranges.values().copied().collect();
        for pair in spans.windows(2) {
            assert!(
                pair[0].1 < pair[1].0,
                "month row ranges overlap: {:?} vs {:?}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_week_index_matches_canonical_formula() {
        // January 2024 starts on a Monday (weekday 1).
        let layout = layout_of(&[day(2024, 1, 6, 1), day(2024, 1, 7, 1), day(2024, 1, 31, 1)]);
        let by_day = |d: u32| {
            layout
                .cells
                .iter()
                .find(|c| c.date.day() == d)
                .unwrap()
                .week_index
        };
        assert_eq!(by_day(6), 0); // (1 + 6 - 1) / 7 = 0, Saturday of week 0
        assert_eq!(by_day(7), 1); // Sunday rolls into week 1
        assert_eq!(by_day(31), 4);
    }

    #[test]
    fn test_label_anchor_aligns_with_week_zero_row() {
        let layout = layout_of(&[day(2024, 1, 1, 1), day(2024, 2, 1, 1)]);
        assert_eq!(layout.labels.len(), 2);
        assert_eq!(layout.labels[0].text, "Jan");
        assert_eq!(layout.labels[1].text, "Feb");
        for (label, month) in layout.labels.iter().zip([1u32, 2u32]) {
            let first_row = layout
                .cells
                .iter()
                .filter(|c| c.date.month() == month)
                .map(|c| c.row)
                .min()
                .unwrap();
            assert!((label.anchor.z - first_row as f32).abs() < f32::EPSILON);
            assert!((label.anchor.x - LABEL_COLUMN_X).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_focus_centers_the_stacking_span() {
        let layout = layout_of(&[day(2024, 1, 1, 1)]);
        // January 2024: 5 week rows, focus at the middle row.
        assert_eq!(layout.span_rows, 5);
        assert_eq!(layout.focus(), Vec3::new(3.0, 0.0, 2.0));
    }
}
