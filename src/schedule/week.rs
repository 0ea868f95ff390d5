//! Week window math and the fixed 45-minute slot sequence

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Short day names, Monday first, matching the grid column order
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const START_HOUR: u32 = 6;
const END_HOUR: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekDirection {
    Previous,
    Next,
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - Duration::days(days_from_monday as i64)
}

/// The seven dates of the Monday-Sunday week containing `reference`
pub fn week_days(reference: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(reference);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Reference date for the adjacent week; pure, the input is left untouched
pub fn shift_week(reference: NaiveDate, direction: WeekDirection) -> NaiveDate {
    match direction {
        WeekDirection::Previous => reference - Duration::days(7),
        WeekDirection::Next => reference + Duration::days(7),
    }
}

pub fn is_today(date: NaiveDate) -> bool {
    date == Local::now().date_naive()
}

/// Intraday slot labels in grid order: "HH:00" and "HH:45" for every hour
/// from 06:00 up to (not including) 22:00. The same 32 labels for every week.
pub fn time_slots() -> Vec<String> {
    let mut slots = Vec::with_capacity(((END_HOUR - START_HOUR) * 2) as usize);
    for hour in START_HOUR..END_HOUR {
        for minute in [0, 45] {
            slots.push(format!("{:02}:{:02}", hour, minute));
        }
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_lands_on_monday() {
        // Wednesday maps back to the Monday two days earlier
        assert_eq!(week_start(date(2025, 3, 12)), date(2025, 3, 10));
        // Monday maps to itself
        assert_eq!(week_start(date(2025, 3, 10)), date(2025, 3, 10));
        // Sunday belongs to the week that started six days earlier
        assert_eq!(week_start(date(2025, 3, 16)), date(2025, 3, 10));
    }

    #[test]
    fn test_window_runs_monday_through_sunday() {
        let reference = date(2025, 7, 31); // a Thursday
        let days = week_days(reference);

        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6].weekday(), Weekday::Sun);
        assert_eq!(days[6], days[0] + Duration::days(6));
        assert!(days.contains(&reference));
    }

    #[test]
    fn test_window_crosses_year_boundary() {
        let days = week_days(date(2024, 12, 31)); // a Tuesday
        assert_eq!(days[0], date(2024, 12, 30));
        assert_eq!(days[6], date(2025, 1, 5));
    }

    #[test]
    fn test_shift_forward_then_back_is_a_no_op() {
        let reference = date(2025, 2, 14);
        let forward = shift_week(reference, WeekDirection::Next);

        assert_eq!(forward, reference + Duration::days(7));
        assert_eq!(shift_week(forward, WeekDirection::Previous), reference);
    }

    #[test]
    fn test_is_today() {
        let today = Local::now().date_naive();
        assert!(is_today(today));
        assert!(!is_today(today - Duration::days(1)));
    }

    #[test]
    fn test_time_slots_sequence() {
        let slots = time_slots();

        assert_eq!(slots.len(), 32);
        assert_eq!(slots.first().map(String::as_str), Some("06:00"));
        assert_eq!(slots.last().map(String::as_str), Some("21:45"));
        // Zero-padded HH:MM labels sort lexicographically in time order
        assert!(slots.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
