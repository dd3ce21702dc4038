//! Schedule math: day bucketing, the month grid, and the agenda feed.
//!
//! Pure functions over the in-memory collection. Bucketing compares by
//! local calendar day, the same day-boundary rule the rendering grid
//! uses, so events near midnight never land one cell off.

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::foundation::{DomainError, Timestamp};

use super::CalendarEvent;

/// Per-cell display cap in the month grid; further events collapse into
/// a "+N more" indicator. A display policy, not a data limit.
pub const DAY_DISPLAY_CAP: usize = 3;

/// Maximum entries in the agenda feed. A bounded upcoming view, not a
/// paginated list.
pub const AGENDA_LIMIT: usize = 20;

/// One cell of the rendered month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCell {
    pub date: NaiveDate,

    /// False for the de-emphasized leading/trailing days borrowed from
    /// adjacent months.
    pub in_month: bool,

    /// At most [`DAY_DISPLAY_CAP`] events starting on this day.
    pub events: Vec<CalendarEvent>,

    /// How many further events were collapsed.
    pub hidden: usize,
}

/// Events whose start falls on the given local calendar day.
pub fn events_on_day<'a>(events: &'a [CalendarEvent], day: NaiveDate) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|event| event.start_time.local_day() == day)
        .collect()
}

/// The full run of days the month view renders: every week overlapping
/// the target month, from the Sunday on/before the 1st through the
/// Saturday on/after the last day (35 or 42 cells).
///
/// # Errors
///
/// - `ValidationFailed` for an out-of-range year/month
pub fn month_grid(year: i32, month: u32) -> Result<Vec<NaiveDate>, DomainError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| DomainError::validation("month", format!("Invalid month {}-{}", year, month)))?;
    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| DomainError::validation("month", "Month arithmetic overflow"))?;
    let last = next_month_first
        .pred_opt()
        .ok_or_else(|| DomainError::validation("month", "Month arithmetic overflow"))?;

    let lead = first.weekday().num_days_from_sunday() as u64;
    let trail = 6 - last.weekday().num_days_from_sunday() as u64;
    let start = first
        .checked_sub_days(Days::new(lead))
        .ok_or_else(|| DomainError::validation("month", "Grid start out of range"))?;
    let end = last
        .checked_add_days(Days::new(trail))
        .ok_or_else(|| DomainError::validation("month", "Grid end out of range"))?;

    let mut days = Vec::with_capacity(42);
    let mut day = start;
    while day <= end {
        days.push(day);
        day = day
            .succ_opt()
            .ok_or_else(|| DomainError::validation("month", "Grid day out of range"))?;
    }
    Ok(days)
}

/// The month grid with events bucketed into cells and capped for display.
pub fn month_cells(
    events: &[CalendarEvent],
    year: i32,
    month: u32,
) -> Result<Vec<MonthCell>, DomainError> {
    let cells = month_grid(year, month)?
        .into_iter()
        .map(|date| {
            let on_day = events_on_day(events, date);
            let hidden = on_day.len().saturating_sub(DAY_DISPLAY_CAP);
            MonthCell {
                date,
                in_month: date.year() == year && date.month() == month,
                events: on_day
                    .into_iter()
                    .take(DAY_DISPLAY_CAP)
                    .cloned()
                    .collect(),
                hidden,
            }
        })
        .collect();
    Ok(cells)
}

/// The forward-looking feed: incomplete events starting at or after
/// `now`, ascending by start, capped at [`AGENDA_LIMIT`].
pub fn upcoming_agenda(events: &[CalendarEvent], now: Timestamp) -> Vec<CalendarEvent> {
    let mut upcoming: Vec<CalendarEvent> = events
        .iter()
        .filter(|event| !event.is_completed() && !event.start_time.is_before(&now))
        .cloned()
        .collect();
    upcoming.sort_by_key(|event| event.start_time);
    upcoming.truncate(AGENDA_LIMIT);
    upcoming
}

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;
