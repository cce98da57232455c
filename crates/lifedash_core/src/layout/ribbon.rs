//! Ribbon (Gantt-style) layout.
//!
//! # Responsibility
//! - Build the rolling day window starting at the reference date.
//! - Clip event date ranges to the window and assign each a row.
//!
//! # Invariants
//! - Exactly one day cell is today, at index 0.
//! - Spans sharing a row never overlap.
//! - Row assignment is greedy first-fit over spans stably sorted by start,
//!   so ties keep input order and rows stay put across refreshes.

use crate::config::LayoutConfig;
use crate::layout::clock::{day_offset, days_from_now};
use crate::layout::urgency::urgency_color;
use crate::model::event::Event;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use serde::Serialize;

/// One calendar day in the ribbon window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub index: u32,
    pub is_today: bool,
    pub is_weekend: bool,
}

/// Inclusive day-index interval inside the window. `start_idx <= end_idx`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanInterval {
    start_idx: u32,
    end_idx: u32,
}

impl SpanInterval {
    /// Bounds given in either order describe the same days.
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            start_idx: a.min(b),
            end_idx: a.max(b),
        }
    }

    pub fn start_idx(&self) -> u32 {
        self.start_idx
    }

    pub fn end_idx(&self) -> u32 {
        self.end_idx
    }

    pub fn overlaps(&self, other: &SpanInterval) -> bool {
        !(self.start_idx > other.end_idx || self.end_idx < other.start_idx)
    }
}

/// Row-assigned event bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSpan {
    pub name: String,
    pub start_idx: u32,
    pub end_idx: u32,
    pub row: usize,
    pub color: String,
}

/// Complete ribbon output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RibbonLayout {
    pub days: Vec<DayCell>,
    pub spans: Vec<EventSpan>,
    pub row_count: usize,
}

/// `window_days` consecutive days starting at `today`.
pub fn day_window(today: NaiveDate, window_days: u32) -> Vec<DayCell> {
    (0..window_days)
        .map_while(|index| {
            let date = today.checked_add_days(Days::new(u64::from(index)))?;
            Some(DayCell {
                date,
                index,
                is_today: index == 0,
                is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            })
        })
        .collect()
}

/// Clips a date range to a window of `window_days` starting at `today`.
///
/// Returns `None` when the range lies wholly outside the window.
pub fn clip_to_window(
    start: NaiveDate,
    end: NaiveDate,
    today: NaiveDate,
    window_days: u32,
) -> Option<SpanInterval> {
    let last = i64::from(window_days) - 1;
    let start_offset = day_offset(start, today);
    let end_offset = day_offset(end, today);
    if last < 0 || end_offset < 0 || start_offset > last {
        return None;
    }
    Some(SpanInterval::new(
        start_offset.clamp(0, last) as u32,
        end_offset.clamp(0, last) as u32,
    ))
}

/// Greedy first-fit row assignment.
///
/// Returned rows line up with `intervals` by index. The number of distinct
/// rows equals the maximum number of intervals covering any single day.
pub fn assign_rows(intervals: &[SpanInterval]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..intervals.len()).collect();
    order.sort_by_key(|&index| intervals[index].start_idx);

    let mut rows: Vec<Vec<SpanInterval>> = Vec::new();
    let mut assigned = vec![0; intervals.len()];
    for index in order {
        let span = intervals[index];
        let row = match rows
            .iter()
            .position(|placed| placed.iter().all(|other| !span.overlaps(other)))
        {
            Some(row) => row,
            None => {
                rows.push(Vec::new());
                rows.len() - 1
            }
        };
        rows[row].push(span);
        assigned[index] = row;
    }
    assigned
}

/// Lays out the ribbon for the day containing `now`.
pub fn layout_ribbon(events: &[Event], now: NaiveDateTime, config: &LayoutConfig) -> RibbonLayout {
    let today = now.date();
    let days = day_window(today, config.window_days);

    let visible: Vec<(&Event, SpanInterval)> = events
        .iter()
        .filter_map(|event| {
            let schedule = event.schedule();
            clip_to_window(schedule.start(), schedule.end(), today, config.window_days)
                .map(|interval| (event, interval))
        })
        .collect();

    let intervals: Vec<SpanInterval> = visible.iter().map(|(_, interval)| *interval).collect();
    let rows = assign_rows(&intervals);
    let row_count = rows.iter().max().map_or(0, |row| row + 1);

    let spans = visible
        .into_iter()
        .zip(rows)
        .map(|((event, interval), row)| EventSpan {
            name: event.name().to_string(),
            start_idx: interval.start_idx,
            end_idx: interval.end_idx,
            row,
            color: urgency_color(days_from_now(event.schedule().start(), now), None, config),
        })
        .collect();

    RibbonLayout {
        days,
        spans,
        row_count,
    }
}

#[cfg(test)]
mod tests {
    use super::{assign_rows, clip_to_window, day_window, SpanInterval};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn window_marks_today_and_weekends() {
        // 2026-10-19 is a Monday.
        let days = day_window(date(2026, 10, 19), 7);
        assert_eq!(days.len(), 7);
        assert_eq!(days.iter().filter(|day| day.is_today).count(), 1);
        assert!(days[0].is_today && days[0].index == 0);
        let weekend: Vec<u32> = days
            .iter()
            .filter(|day| day.is_weekend)
            .map(|day| day.index)
            .collect();
        assert_eq!(weekend, [5, 6]);
    }

    #[test]
    fn clipping_drops_outside_and_clamps_partial() {
        let today = date(2026, 10, 19);
        assert_eq!(
            clip_to_window(date(2026, 10, 10), date(2026, 10, 18), today, 30),
            None
        );
        assert_eq!(
            clip_to_window(date(2026, 11, 18), date(2026, 11, 20), today, 30),
            None
        );
        assert_eq!(
            clip_to_window(date(2026, 10, 17), date(2026, 10, 21), today, 30),
            Some(SpanInterval::new(0, 2))
        );
        assert_eq!(
            clip_to_window(date(2026, 11, 15), date(2026, 11, 30), today, 30),
            Some(SpanInterval::new(27, 29))
        );
    }

    #[test]
    fn touching_is_overlap_adjacent_is_not() {
        let a = SpanInterval::new(0, 2);
        assert!(a.overlaps(&SpanInterval::new(2, 4)));
        assert!(!a.overlaps(&SpanInterval::new(3, 4)));
    }

    #[test]
    fn reversed_bounds_are_reordered() {
        let reversed = SpanInterval::new(6, 2);
        assert_eq!((reversed.start_idx(), reversed.end_idx()), (2, 6));
        assert_eq!(reversed, SpanInterval::new(2, 6));
        assert!(reversed.overlaps(&SpanInterval::new(4, 4)));
        assert_eq!(assign_rows(&[SpanInterval::new(0, 3), SpanInterval::new(5, 1)]), [0, 1]);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = assign_rows(&[
            SpanInterval::new(4, 6),
            SpanInterval::new(4, 5),
            SpanInterval::new(0, 9),
        ]);
        assert_eq!(rows, [1, 2, 0]);
    }

    #[test]
    fn freed_rows_are_reused_first() {
        let rows = assign_rows(&[
            SpanInterval::new(0, 3),
            SpanInterval::new(1, 8),
            SpanInterval::new(5, 6),
        ]);
        assert_eq!(rows, [0, 1, 0]);
    }
}
