mod store;
mod week;

pub use store::{GoalSummary, ScheduleStore, SessionType, Slot};
pub use week::{
    is_today, shift_week, time_slots, week_days, week_start, WeekDirection, DAY_NAMES,
};
