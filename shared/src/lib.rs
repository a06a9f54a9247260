use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A habit the user can mark complete on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitDefinition {
    pub id: String,
    pub title: String,
}

/// Response shape of `GET /day?date=YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResponse {
    /// Ids of the habits already completed on the requested day
    pub completed_habits: Vec<String>,
    /// Habits that existed on the requested day and can be completed
    pub possible_habits: Vec<HabitDefinition>,
}

/// One entry of the `GET /summary` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryDay {
    pub id: String,
    /// RFC 3339 timestamp; only the calendar-day part is meaningful
    pub date: String,
    /// Habits that could have been completed on this day
    pub amount: u32,
    /// Habits actually completed on this day
    pub completed: u32,
}

impl SummaryDay {
    /// Calendar day of this entry, ignoring the time-of-day component
    pub fn day(&self) -> Option<NaiveDate> {
        parse_day(&self.date)
    }
}

/// Parse the calendar-day part of an ISO 8601 / RFC 3339 date string
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    let day_part = value.split('T').next()?;
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
}

/// Weeks shown in the summary heat-map grid
pub const SUMMARY_GRID_WEEKS: usize = 18;

/// Total number of cells in the summary heat-map grid
pub const SUMMARY_GRID_CAPACITY: usize = SUMMARY_GRID_WEEKS * 7;

/// Completion percentage for a day, rounded to the nearest integer.
///
/// A day with no possible habits reports 0 rather than dividing by zero,
/// and `completed` is clamped to `total` so a malformed summary entry can
/// never push a progress bar past 100.
pub fn progress_percentage(total: u32, completed: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    ((completed as f64 / total as f64) * 100.0).round() as u8
}

/// Every calendar day from January 1 of `today`'s year through `today`,
/// inclusive. The caller captures `today` once per session so the grid
/// layout stays stable while the app is open.
pub fn dates_from_year_start(today: NaiveDate) -> Vec<NaiveDate> {
    let year_start = today.with_ordinal(1).unwrap_or(today);
    year_start
        .iter_days()
        .take_while(|day| *day <= today)
        .collect()
}

/// Placeholder cells needed after `len` real days to fill the grid
pub fn grid_padding(len: usize) -> usize {
    SUMMARY_GRID_CAPACITY.saturating_sub(len)
}

/// Whether `date` falls strictly before `today`, at day granularity
pub fn is_past_day(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Set of habit ids completed on the viewed day.
///
/// Toggles are applied optimistically: `begin_toggle` flips membership
/// immediately and records the membership last acknowledged by the server,
/// which `fail` restores if the toggle request is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionSet {
    completed: BTreeSet<String>,
    /// Habit id -> membership last acknowledged by the server
    pending: BTreeMap<String, bool>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole set from a fetched day; every entry is confirmed
    pub fn reset<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.completed = ids.into_iter().map(Into::into).collect();
        self.pending.clear();
    }

    /// Optimistically flip membership of `id`, remembering the confirmed
    /// membership so a rejected request can be rolled back
    pub fn begin_toggle(&mut self, id: &str) {
        let was_completed = self.completed.contains(id);
        self.pending.entry(id.to_string()).or_insert(was_completed);
        if was_completed {
            self.completed.remove(id);
        } else {
            self.completed.insert(id.to_string());
        }
    }

    /// Server acknowledged the toggle; current membership becomes confirmed
    pub fn confirm(&mut self, id: &str) {
        self.pending.remove(id);
    }

    /// Server rejected the toggle; revert to the last confirmed membership
    pub fn fail(&mut self, id: &str) {
        if let Some(confirmed) = self.pending.remove(id) {
            if confirmed {
                self.completed.insert(id.to_string());
            } else {
                self.completed.remove(id);
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    /// Whether a toggle of `id` is still waiting for acknowledgment
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percentage_known_values() {
        assert_eq!(progress_percentage(4, 2), 50);
        assert_eq!(progress_percentage(3, 1), 33);
        assert_eq!(progress_percentage(0, 0), 0);
        assert_eq!(progress_percentage(5, 0), 0);
        assert_eq!(progress_percentage(5, 5), 100);
    }

    #[test]
    fn test_progress_percentage_in_range_and_monotonic() {
        for total in 0..=10u32 {
            let mut last = 0;
            for completed in 0..=total {
                let pct = progress_percentage(total, completed);
                assert!(pct <= 100);
                assert!(pct >= last);
                last = pct;
            }
        }
    }

    #[test]
    fn test_progress_percentage_clamps_overflowing_completed() {
        assert_eq!(progress_percentage(3, 7), 100);
        assert_eq!(progress_percentage(0, 7), 0);
    }

    #[test]
    fn test_dates_from_year_start_length_is_day_of_year() {
        let day_50 = NaiveDate::from_yo_opt(2023, 50).unwrap();
        let dates = dates_from_year_start(day_50);
        assert_eq!(dates.len(), 50);
        assert_eq!(dates.first().copied(), NaiveDate::from_ymd_opt(2023, 1, 1));
        assert_eq!(dates.last().copied(), Some(day_50));
    }

    #[test]
    fn test_dates_from_year_start_is_contiguous() {
        let today = NaiveDate::from_ymd_opt(2023, 3, 15).unwrap();
        let dates = dates_from_year_start(today);
        assert_eq!(dates.len(), today.ordinal() as usize);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], chrono::Duration::days(1));
        }
    }

    #[test]
    fn test_dates_from_year_start_on_january_first() {
        let jan_first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(dates_from_year_start(jan_first), vec![jan_first]);
    }

    #[test]
    fn test_dates_from_year_start_covers_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let dates = dates_from_year_start(today);
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert!(dates.contains(&leap_day));
        assert_eq!(dates.len(), 61);
    }

    #[test]
    fn test_grid_padding() {
        assert_eq!(grid_padding(50), 76);
        assert_eq!(grid_padding(0), SUMMARY_GRID_CAPACITY);
        assert_eq!(grid_padding(SUMMARY_GRID_CAPACITY), 0);
        assert_eq!(grid_padding(SUMMARY_GRID_CAPACITY + 10), 0);
    }

    #[test]
    fn test_is_past_day_at_day_granularity() {
        let today = NaiveDate::from_ymd_opt(2023, 6, 10).unwrap();
        assert!(is_past_day(today.pred_opt().unwrap(), today));
        assert!(!is_past_day(today, today));
        assert!(!is_past_day(today.succ_opt().unwrap(), today));
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(
            parse_day("2023-01-08T03:00:00.000Z"),
            NaiveDate::from_ymd_opt(2023, 1, 8)
        );
        assert_eq!(parse_day("2023-01-08"), NaiveDate::from_ymd_opt(2023, 1, 8));
        assert_eq!(parse_day("not a date"), None);
    }

    #[test]
    fn test_summary_day_matches_at_day_granularity() {
        let entry = SummaryDay {
            id: "summary::1".to_string(),
            date: "2023-01-08T03:00:00.000Z".to_string(),
            amount: 5,
            completed: 2,
        };
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2023, 1, 8));
    }

    #[test]
    fn test_day_response_wire_field_names() {
        let payload = r#"{
            "completedHabits": ["habit::1"],
            "possibleHabits": [{"id": "habit::1", "title": "Drink water"}]
        }"#;
        let day: DayResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(day.completed_habits, vec!["habit::1".to_string()]);
        assert_eq!(day.possible_habits.len(), 1);
        assert_eq!(day.possible_habits[0].title, "Drink water");
    }

    #[test]
    fn test_completion_set_double_toggle_restores_membership() {
        let mut set = CompletionSet::new();
        set.reset(["habit::1"]);

        set.begin_toggle("habit::1");
        set.confirm("habit::1");
        assert!(!set.contains("habit::1"));

        set.begin_toggle("habit::1");
        set.confirm("habit::1");
        assert!(set.contains("habit::1"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_completion_set_fail_reverts_to_confirmed() {
        let mut set = CompletionSet::new();
        set.reset(["habit::1"]);

        set.begin_toggle("habit::2");
        assert!(set.contains("habit::2"));
        set.fail("habit::2");
        assert!(!set.contains("habit::2"));

        set.begin_toggle("habit::1");
        assert!(!set.contains("habit::1"));
        set.fail("habit::1");
        assert!(set.contains("habit::1"));
    }

    #[test]
    fn test_completion_set_fail_without_pending_is_noop() {
        let mut set = CompletionSet::new();
        set.reset(["habit::1"]);
        set.fail("habit::1");
        assert!(set.contains("habit::1"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_completion_set_reset_clears_pending() {
        let mut set = CompletionSet::new();
        set.begin_toggle("habit::1");
        assert!(set.is_pending("habit::1"));

        set.reset(["habit::2", "habit::3"]);
        assert!(!set.is_pending("habit::1"));
        assert!(!set.contains("habit::1"));
        assert!(set.contains("habit::2"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_completion_set_keeps_confirmed_baseline_across_repeat_toggles() {
        let mut set = CompletionSet::new();
        set.reset(["habit::1"]);

        // Two flips before any acknowledgment arrives
        set.begin_toggle("habit::1");
        set.begin_toggle("habit::1");
        assert!(set.contains("habit::1"));

        // The rollback target is still the membership the server last saw
        set.fail("habit::1");
        assert!(set.contains("habit::1"));
    }
}
