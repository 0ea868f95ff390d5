use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::schedule::{week_days, ScheduleStore, SessionType};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write plan file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
pub struct WeeklyPlan {
    pub week_start: String,
    pub week_end: String,
    pub exported_at: String,
    pub scheduled_study: usize,
    pub completed_study: usize,
    pub total_points: u32,
    pub slots: Vec<PlannedSlot>,
}

#[derive(Serialize)]
pub struct PlannedSlot {
    pub date: String,
    pub time: String,
    pub session: SessionType,
    pub completed: bool,
}

/// Snapshot the store against the currently displayed week. Slots are keyed
/// by grid position, so the dates they resolve to depend on `reference`.
pub fn build_week_plan(store: &ScheduleStore, reference: NaiveDate) -> WeeklyPlan {
    let days = week_days(reference);
    let summary = store.goal_summary();

    let mut slots: Vec<PlannedSlot> = store
        .slots()
        .iter()
        .map(|slot| PlannedSlot {
            date: days[slot.day].format("%Y-%m-%d").to_string(),
            time: slot.time.clone(),
            session: slot.session,
            completed: slot.completed,
        })
        .collect();
    slots.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));

    WeeklyPlan {
        week_start: days[0].format("%Y-%m-%d").to_string(),
        week_end: days[6].format("%Y-%m-%d").to_string(),
        exported_at: Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        scheduled_study: summary.scheduled_study,
        completed_study: summary.completed_study,
        total_points: summary.total_points,
        slots,
    }
}

/// Export the displayed week's plan to a JSON file next to the executable.
/// Returns the path of the created file on success.
pub fn export_week(store: &ScheduleStore, reference: NaiveDate) -> Result<PathBuf, ExportError> {
    let exe_path = std::env::current_exe()?;
    let exe_dir = exe_path.parent().unwrap_or_else(|| Path::new("."));

    let plans_dir = exe_dir.join("weekly-plans");
    fs::create_dir_all(&plans_dir)?;

    let plan = build_week_plan(store, reference);
    let iso_week = week_days(reference)[0].iso_week();
    let filename = format!("{}-W{:02}.json", iso_week.year(), iso_week.week());
    let file_path = plans_dir.join(&filename);

    let json = serde_json::to_string_pretty(&plan)?;
    fs::write(&file_path, json)?;

    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_resolves_positions_against_the_displayed_week() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(0, "06:00", SessionType::Study);
        store.toggle_slot(6, "21:45", SessionType::Work);
        store.toggle_completed(0, "06:00");

        // Week of Monday 2025-03-10; reference is the Wednesday
        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let plan = build_week_plan(&store, reference);

        assert_eq!(plan.week_start, "2025-03-10");
        assert_eq!(plan.week_end, "2025-03-16");
        assert_eq!(plan.slots.len(), 2);
        assert_eq!(plan.slots[0].date, "2025-03-10");
        assert_eq!(plan.slots[0].time, "06:00");
        assert!(plan.slots[0].completed);
        assert_eq!(plan.slots[1].date, "2025-03-16");
        assert_eq!(plan.slots[1].session, SessionType::Work);
    }

    #[test]
    fn test_plan_carries_the_goal_numbers() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(1, "09:00", SessionType::Study);
        store.toggle_slot(2, "09:00", SessionType::Study);
        store.toggle_completed(1, "09:00");

        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let plan = build_week_plan(&store, reference);

        assert_eq!(plan.scheduled_study, 2);
        assert_eq!(plan.completed_study, 1);
        assert_eq!(plan.total_points, 10);
    }

    #[test]
    fn test_slots_sorted_by_date_then_time() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(4, "06:45", SessionType::Study);
        store.toggle_slot(4, "06:00", SessionType::Study);
        store.toggle_slot(1, "20:45", SessionType::Exam);

        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let plan = build_week_plan(&store, reference);

        let keys: Vec<(&str, &str)> = plan
            .slots
            .iter()
            .map(|s| (s.date.as_str(), s.time.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2025-03-11", "20:45"),
                ("2025-03-14", "06:00"),
                ("2025-03-14", "06:45"),
            ]
        );
    }

    #[test]
    fn test_empty_store_exports_an_empty_plan() {
        let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let plan = build_week_plan(&ScheduleStore::new(), reference);

        assert!(plan.slots.is_empty());
        assert_eq!(plan.scheduled_study, 0);
        assert_eq!(plan.total_points, 0);
    }
}
