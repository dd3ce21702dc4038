use chrono::{Datelike, Local, TimeZone, Utc, Weekday};
use proptest::prelude::*;

use crate::domain::calendar::{
    events_on_day, month_cells, month_grid, upcoming_agenda, CalendarEvent, EventDraft,
    EventPriority, EventType, AGENDA_LIMIT, DAY_DISPLAY_CAP,
};
use crate::domain::foundation::{EventId, Timestamp, UserId, UserRole};
use crate::domain::identity::Identity;

fn creator() -> Identity {
    Identity {
        id: UserId::new("user-1").unwrap(),
        name: "Ada Silva".to_string(),
        email: "ada@firm.example".to_string(),
        role: UserRole::Lawyer,
    }
}

fn event_at(title: &str, start: Timestamp) -> CalendarEvent {
    let draft = EventDraft {
        title: title.to_string(),
        description: None,
        event_type: EventType::Meeting,
        priority: EventPriority::Medium,
        start_time: start,
        end_time: start.add_minutes(60),
        all_day: false,
        location: None,
        client_id: None,
        process_id: None,
        contract_id: None,
        attendees: vec![],
        color: None,
        created_by: None,
    };
    CalendarEvent::from_draft(EventId::new(), draft, creator(), Timestamp::now()).unwrap()
}

fn local_ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    let local = Local
        .with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid local time");
    Timestamp::from_datetime(local.with_timezone(&Utc))
}

// Day bucketing

#[test]
fn events_near_midnight_land_in_different_buckets() {
    let late = event_at("Late filing", local_ts(2024, 3, 5, 23, 59));
    let early = event_at("Early hearing", local_ts(2024, 3, 6, 0, 1));
    let events = vec![late.clone(), early.clone()];

    let day_five = events_on_day(&events, chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    let day_six = events_on_day(&events, chrono::NaiveDate::from_ymd_opt(2024, 3, 6).unwrap());

    assert_eq!(day_five.len(), 1);
    assert_eq!(day_five[0].id, late.id);
    assert_eq!(day_six.len(), 1);
    assert_eq!(day_six[0].id, early.id);
}

#[test]
fn bucketing_matches_each_events_own_local_day() {
    let events: Vec<CalendarEvent> = (0..5i64)
        .map(|i| event_at("Spread", local_ts(2024, 3, 1, 9, 0).add_days(i)))
        .collect();
    for event in &events {
        let bucket = events_on_day(&events, event.start_time.local_day());
        assert!(bucket.iter().any(|e| e.id == event.id));
    }
}

// Month grid

#[test]
fn march_2024_grid_is_six_full_weeks() {
    // March 2024 starts on a Friday and ends on a Sunday.
    let grid = month_grid(2024, 3).unwrap();
    assert_eq!(grid.len(), 42);
    assert_eq!(grid[0].weekday(), Weekday::Sun);
    assert_eq!(grid[41].weekday(), Weekday::Sat);
}

#[test]
fn february_2015_grid_is_exactly_the_month() {
    // February 2015: 28 days, starts Sunday, ends Saturday -> 4 weeks.
    let grid = month_grid(2015, 2).unwrap();
    assert_eq!(grid.len(), 28);
    assert!(grid.iter().all(|d| d.month() == 2));
}

#[test]
fn invalid_month_is_rejected() {
    assert!(month_grid(2024, 13).is_err());
    assert!(month_grid(2024, 0).is_err());
}

#[test]
fn month_cells_cap_display_and_count_overflow() {
    let start = local_ts(2024, 3, 14, 9, 0);
    let events: Vec<CalendarEvent> =
        (0..5i64).map(|i| event_at(&format!("Event {}", i), start.add_minutes(i))).collect();

    let cells = month_cells(&events, 2024, 3).unwrap();
    let cell = cells
        .iter()
        .find(|c| c.date == start.local_day())
        .expect("day cell exists");

    assert_eq!(cell.events.len(), DAY_DISPLAY_CAP);
    assert_eq!(cell.hidden, 5 - DAY_DISPLAY_CAP);
    assert!(cell.in_month);
}

#[test]
fn month_cells_mark_boundary_overlap_days() {
    let cells = month_cells(&[], 2024, 3).unwrap();
    // March 2024 grid opens on Feb 25.
    assert!(!cells[0].in_month);
    assert!(cells.iter().any(|c| c.in_month));
}

proptest! {
    /// For any month, the day sequence is contiguous, starts on a Sunday,
    /// ends on a Saturday, and contains the entire target month.
    #[test]
    fn grid_covers_month_between_sunday_and_saturday(year in 1970i32..2100, month in 1u32..=12) {
        let grid = month_grid(year, month).unwrap();

        prop_assert!(grid.len() == 28 || grid.len() == 35 || grid.len() == 42);
        prop_assert_eq!(grid[0].weekday(), Weekday::Sun);
        prop_assert_eq!(grid[grid.len() - 1].weekday(), Weekday::Sat);

        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].succ_opt().unwrap(), pair[1]);
        }

        let in_month = grid.iter().filter(|d| d.year() == year && d.month() == month).count();
        let first = chrono::NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let next = if month == 12 {
            chrono::NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
        } else {
            chrono::NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
        };
        prop_assert_eq!(in_month as i64, (next - first).num_days());
    }
}

// Agenda feed

#[test]
fn agenda_is_sorted_incomplete_and_forward_looking() {
    let now = local_ts(2024, 3, 10, 12, 0);
    let past = event_at("Past", now.add_days(-1));
    let soon = event_at("Soon", now.add_minutes(30));
    let later = event_at("Later", now.add_days(2));
    let mut done = event_at("Done", now.add_days(1));
    done.mark_completed(now).unwrap();

    let events = vec![later.clone(), past, done, soon.clone()];
    let agenda = upcoming_agenda(&events, now);

    assert_eq!(agenda.len(), 2);
    assert_eq!(agenda[0].id, soon.id);
    assert_eq!(agenda[1].id, later.id);
}

#[test]
fn agenda_includes_events_starting_exactly_now() {
    let now = local_ts(2024, 3, 10, 12, 0);
    let at_now = event_at("Right now", now);
    let agenda = upcoming_agenda(&[at_now.clone()], now);
    assert_eq!(agenda.len(), 1);
    assert_eq!(agenda[0].id, at_now.id);
}

#[test]
fn agenda_caps_at_limit() {
    let now = local_ts(2024, 3, 10, 8, 0);
    let events: Vec<CalendarEvent> = (0..(AGENDA_LIMIT as i64 + 5))
        .map(|i| event_at(&format!("Upcoming {}", i), now.add_minutes(i + 1)))
        .collect();
    let agenda = upcoming_agenda(&events, now);
    assert_eq!(agenda.len(), AGENDA_LIMIT);
    // The cap keeps the earliest entries.
    assert_eq!(agenda[0].title, "Upcoming 0");
}
