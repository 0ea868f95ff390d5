//! The slot collection behind the week grid, plus the goal-tracker numbers
//! derived from it.
//!
//! Slots are keyed by grid position (day 0-6, Monday first) and time label,
//! not by calendar date: navigating to another week shows the same slots at
//! the same positions.

use serde::{Deserialize, Serialize};

/// Points awarded per completed study session. Work and exam sessions are
/// tracked but never score.
const POINTS_PER_COMPLETED_STUDY: u32 = 10;

/// Classification of a scheduled slot, fixed at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    #[default]
    Study,
    Work,
    Exam,
}

impl SessionType {
    pub const ALL: [SessionType; 3] = [SessionType::Study, SessionType::Work, SessionType::Exam];

    pub fn label(self) -> &'static str {
        match self {
            SessionType::Study => "Study",
            SessionType::Work => "Work",
            SessionType::Exam => "Exam",
        }
    }
}

/// A scheduled 45-minute cell. Existence implies scheduled; `(day, time)`
/// is the identity and at most one slot exists per pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub day: usize,
    pub time: String,
    pub completed: bool,
    pub session: SessionType,
}

/// Derived goal-tracker numbers, recomputed from the full collection on
/// every call. Only study sessions count toward the goal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalSummary {
    pub scheduled_study: usize,
    pub completed_study: usize,
    pub total_points: u32,
    pub progress_percentage: f32,
    pub remaining: usize,
}

impl GoalSummary {
    /// True once every scheduled study session is completed
    pub fn all_complete(&self) -> bool {
        self.scheduled_study > 0 && self.completed_study >= self.scheduled_study
    }
}

/// In-memory, insertion-ordered collection of scheduled slots. Nothing is
/// persisted across restarts.
#[derive(Debug, Clone, Default)]
pub struct ScheduleStore {
    slots: Vec<Slot>,
}

impl ScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn find(&self, day: usize, time: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.day == day && s.time == time)
    }

    /// Remove the slot at `(day, time)` if one exists, otherwise schedule a
    /// new one of the given session type. Calling twice restores the prior
    /// state; recreating a removed slot always starts uncompleted.
    pub fn toggle_slot(&mut self, day: usize, time: &str, session: SessionType) {
        if self.find(day, time).is_some() {
            self.slots.retain(|s| !(s.day == day && s.time == time));
        } else {
            self.slots.push(Slot {
                day,
                time: time.to_string(),
                completed: false,
                session,
            });
        }
    }

    /// Flip the completed flag at `(day, time)`. Silent no-op when nothing
    /// is scheduled there; never alters the session type.
    pub fn toggle_completed(&mut self, day: usize, time: &str) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.day == day && s.time == time) {
            slot.completed = !slot.completed;
        }
    }

    pub fn is_scheduled(&self, day: usize, time: &str) -> bool {
        self.find(day, time).is_some()
    }

    pub fn is_completed(&self, day: usize, time: &str) -> bool {
        self.find(day, time).is_some_and(|s| s.completed)
    }

    /// Session type at `(day, time)`; `None` when the cell is empty
    pub fn session_at(&self, day: usize, time: &str) -> Option<SessionType> {
        self.find(day, time).map(|s| s.session)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Drop every slot
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Recompute the goal numbers by scanning the full collection
    pub fn goal_summary(&self) -> GoalSummary {
        let scheduled_study = self
            .slots
            .iter()
            .filter(|s| s.session == SessionType::Study)
            .count();
        let completed_study = self
            .slots
            .iter()
            .filter(|s| s.session == SessionType::Study && s.completed)
            .count();
        let progress_percentage = if scheduled_study > 0 {
            completed_study as f32 / scheduled_study as f32 * 100.0
        } else {
            0.0
        };

        GoalSummary {
            scheduled_study,
            completed_study,
            total_points: completed_study as u32 * POINTS_PER_COMPLETED_STUDY,
            progress_percentage,
            remaining: scheduled_study - completed_study,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_slot_schedules_and_removes() {
        let mut store = ScheduleStore::new();

        store.toggle_slot(0, "06:00", SessionType::Study);
        assert!(store.is_scheduled(0, "06:00"));
        assert!(!store.is_completed(0, "06:00"));
        assert_eq!(store.session_at(0, "06:00"), Some(SessionType::Study));

        // Second toggle removes it again; the type is irrelevant on removal
        store.toggle_slot(0, "06:00", SessionType::Exam);
        assert!(!store.is_scheduled(0, "06:00"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_one_slot_per_cell() {
        let mut store = ScheduleStore::new();

        store.toggle_slot(3, "10:30", SessionType::Work);
        store.toggle_slot(3, "10:45", SessionType::Work);
        store.toggle_slot(4, "10:30", SessionType::Work);
        assert_eq!(store.len(), 3);

        // Same cell toggled again shrinks the collection instead of duplicating
        store.toggle_slot(3, "10:30", SessionType::Study);
        assert_eq!(store.len(), 2);
        assert!(!store.is_scheduled(3, "10:30"));
        assert!(store.is_scheduled(3, "10:45"));
    }

    #[test]
    fn test_toggle_completed_flips_and_preserves_type() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(2, "14:00", SessionType::Exam);

        store.toggle_completed(2, "14:00");
        assert!(store.is_completed(2, "14:00"));
        assert_eq!(store.session_at(2, "14:00"), Some(SessionType::Exam));

        store.toggle_completed(2, "14:00");
        assert!(!store.is_completed(2, "14:00"));
        assert!(store.is_scheduled(2, "14:00"));
    }

    #[test]
    fn test_toggle_completed_on_empty_cell_is_a_no_op() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(1, "09:00", SessionType::Study);

        store.toggle_completed(5, "18:45");

        assert_eq!(store.len(), 1);
        assert!(!store.is_completed(5, "18:45"));
        assert!(!store.is_scheduled(5, "18:45"));
    }

    #[test]
    fn test_recreated_slot_starts_uncompleted() {
        let mut store = ScheduleStore::new();

        store.toggle_slot(0, "07:30", SessionType::Study);
        store.toggle_completed(0, "07:30");
        assert!(store.is_completed(0, "07:30"));

        // Removing a completed slot and recreating it resets the flag
        store.toggle_slot(0, "07:30", SessionType::Study);
        store.toggle_slot(0, "07:30", SessionType::Study);
        assert!(store.is_scheduled(0, "07:30"));
        assert!(!store.is_completed(0, "07:30"));
    }

    #[test]
    fn test_session_at_empty_cell_is_none() {
        let store = ScheduleStore::new();
        assert_eq!(store.session_at(6, "21:45"), None);
    }

    #[test]
    fn test_goal_summary_counts_only_study_sessions() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(0, "06:00", SessionType::Study);
        store.toggle_completed(0, "06:00");
        store.toggle_slot(0, "06:45", SessionType::Study);
        store.toggle_slot(1, "06:00", SessionType::Work);
        store.toggle_completed(1, "06:00");

        let summary = store.goal_summary();

        assert_eq!(summary.scheduled_study, 2);
        assert_eq!(summary.completed_study, 1);
        // The completed work session earns nothing
        assert_eq!(summary.total_points, 10);
        assert_eq!(summary.progress_percentage, 50.0);
        assert_eq!(summary.remaining, 1);
        assert!(!summary.all_complete());
    }

    #[test]
    fn test_goal_summary_on_empty_store() {
        let summary = ScheduleStore::new().goal_summary();

        assert_eq!(summary.scheduled_study, 0);
        assert_eq!(summary.total_points, 0);
        assert_eq!(summary.progress_percentage, 0.0);
        assert_eq!(summary.remaining, 0);
        assert!(!summary.all_complete());
    }

    #[test]
    fn test_all_complete_when_every_study_slot_is_done() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(2, "08:00", SessionType::Study);
        store.toggle_slot(3, "08:00", SessionType::Study);
        store.toggle_completed(2, "08:00");
        store.toggle_completed(3, "08:00");
        // An unfinished exam session does not block the study goal
        store.toggle_slot(4, "08:00", SessionType::Exam);

        let summary = store.goal_summary();

        assert_eq!(summary.progress_percentage, 100.0);
        assert_eq!(summary.remaining, 0);
        assert!(summary.all_complete());
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut store = ScheduleStore::new();
        store.toggle_slot(0, "06:00", SessionType::Study);
        store.toggle_slot(1, "06:00", SessionType::Work);

        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.goal_summary(), GoalSummary::default());
    }
}
