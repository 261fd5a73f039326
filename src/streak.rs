//! Daily streak and badge bookkeeping.
//!
//! Dates are whole days since the Unix epoch; the UI derives "today"
//! from `js_sys::Date::now()` so this module stays pure and testable
//! off-browser.

use serde::{Deserialize, Serialize};

pub const BADGE_FIRST_GAME: &str = "first-game";
pub const BADGE_STREAK_3: &str = "streak-3";
pub const BADGE_STREAK_7: &str = "streak-7";
pub const BADGE_STREAK_30: &str = "streak-30";
pub const BADGE_DEDICATED_100: &str = "dedicated-100";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StreakState {
    pub last_played_day: Option<u32>,
    pub current_streak: u32,
    pub best_streak: u32,
    pub days_played: u32,
    pub badges: Vec<String>,
}

impl StreakState {
    /// Register that the player completed a round on `today`.
    ///
    /// At most one increment per calendar day; a day played right after
    /// the previous one extends the streak, any gap resets it to 1.
    /// Badges are appended once and never revoked.
    pub fn record_play(&mut self, today: u32) {
        if self.last_played_day == Some(today) {
            return;
        }

        let continues = self
            .last_played_day
            .is_some_and(|last| last.checked_add(1) == Some(today));
        self.current_streak = if continues { self.current_streak + 1 } else { 1 };
        self.best_streak = self.best_streak.max(self.current_streak);
        self.days_played += 1;
        self.last_played_day = Some(today);

        self.award(BADGE_FIRST_GAME);
        if self.current_streak >= 3 {
            self.award(BADGE_STREAK_3);
        }
        if self.current_streak >= 7 {
            self.award(BADGE_STREAK_7);
        }
        if self.current_streak >= 30 {
            self.award(BADGE_STREAK_30);
        }
        if self.days_played >= 100 {
            self.award(BADGE_DEDICATED_100);
        }
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|badge| badge == id)
    }

    fn award(&mut self, id: &str) {
        if !self.has_badge(id) {
            self.badges.push(id.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_play_starts_a_streak() {
        let mut streak = StreakState::default();
        streak.record_play(20_000);
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.best_streak, 1);
        assert_eq!(streak.days_played, 1);
        assert!(streak.has_badge(BADGE_FIRST_GAME));
        assert!(!streak.has_badge(BADGE_STREAK_3));
    }

    #[test]
    fn same_day_plays_count_once() {
        let mut streak = StreakState::default();
        streak.record_play(20_000);
        let snapshot = streak.clone();
        streak.record_play(20_000);
        assert_eq!(streak, snapshot);
    }

    #[test]
    fn consecutive_days_extend_and_gaps_reset() {
        let mut streak = StreakState::default();
        streak.record_play(100);
        streak.record_play(101);
        streak.record_play(102);
        assert_eq!(streak.current_streak, 3);
        assert!(streak.has_badge(BADGE_STREAK_3));

        streak.record_play(110);
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.best_streak, 3);
        assert_eq!(streak.days_played, 4);
        // Earned badges survive the reset.
        assert!(streak.has_badge(BADGE_STREAK_3));
    }

    #[test]
    fn week_and_month_badges() {
        let mut streak = StreakState::default();
        for day in 0..30 {
            streak.record_play(day);
        }
        assert!(streak.has_badge(BADGE_STREAK_7));
        assert!(streak.has_badge(BADGE_STREAK_30));
        assert_eq!(streak.best_streak, 30);
    }

    #[test]
    fn hundred_days_played_need_not_be_consecutive() {
        let mut streak = StreakState::default();
        for day in 0..100 {
            streak.record_play(day * 2);
        }
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.days_played, 100);
        assert!(streak.has_badge(BADGE_DEDICATED_100));
    }

    #[test]
    fn badges_are_not_duplicated() {
        let mut streak = StreakState::default();
        for day in 0..10 {
            streak.record_play(day);
        }
        let count = streak
            .badges
            .iter()
            .filter(|badge| *badge == BADGE_STREAK_3)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn malformed_state_deserializes_to_defaults_per_field() {
        let state: StreakState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, StreakState::default());

        let state: StreakState =
            serde_json::from_str(r#"{"currentStreak": 4, "badges": ["first-game"]}"#).unwrap();
        assert_eq!(state.current_streak, 4);
        assert!(state.has_badge(BADGE_FIRST_GAME));
        assert_eq!(state.last_played_day, None);
    }
}
