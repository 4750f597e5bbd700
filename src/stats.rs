//! Play statistics kept across runs
//!
//! Counters are cumulative except the `today_*` ones, which reset when the
//! stored login date is not today's date. The JSON field names are the
//! on-disk format and stay stable even where the Rust names differ.

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::game::ModeEvent;
use crate::save::Saveable;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameStats {
    #[serde(rename = "total_play_time")]
    pub total_play_seconds: u64,
    #[serde(rename = "today_play_time")]
    pub today_play_seconds: u64,
    /// `YYYY-MM-DD` of the day the daily counters belong to
    pub last_login_date: String,
    pub fish_caught: u32,
    #[serde(rename = "pacman_wins_today")]
    pub chase_wins_today: u32,
    pub focus_sessions: u32,
    pub focus_seconds: u64,
    pub bamboo_eaten: u32,
}

impl Saveable for GameStats {
    const FILE_NAME: &'static str = "panda_stats.json";
}

impl GameStats {
    /// Reset the daily counters if `today` is a new day
    ///
    /// Returns true when a reset happened.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        let today = today.format(DATE_FORMAT).to_string();
        if self.last_login_date == today {
            return false;
        }

        if !self.last_login_date.is_empty() {
            info!("New day ({} -> {}), resetting daily stats", self.last_login_date, today);
        }
        self.today_play_seconds = 0;
        self.chase_wins_today = 0;
        self.last_login_date = today;
        true
    }

    /// One more second of play time
    pub fn record_second(&mut self) {
        self.total_play_seconds += 1;
        self.today_play_seconds += 1;
    }

    /// Fold a mode event into the counters
    pub fn apply(&mut self, event: &ModeEvent) {
        match event {
            ModeEvent::FishCaught => self.fish_caught += 1,
            ModeEvent::ChaseWon => self.chase_wins_today += 1,
            ModeEvent::FocusCompleted { seconds } => {
                self.focus_sessions += 1;
                self.focus_seconds += seconds;
            }
            ModeEvent::BambooEaten => self.bamboo_eaten += 1,
            ModeEvent::SwitchMode(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_launch_sets_date() {
        let mut stats = GameStats::default();
        assert!(stats.roll_over(day(2026, 10, 18)));
        assert_eq!(stats.last_login_date, "2026-10-18");
    }

    #[test]
    fn test_same_day_keeps_counters() {
        let mut stats = GameStats {
            today_play_seconds: 120,
            chase_wins_today: 3,
            last_login_date: "2026-10-18".to_string(),
            ..Default::default()
        };

        assert!(!stats.roll_over(day(2026, 10, 18)));
        assert_eq!(stats.today_play_seconds, 120);
        assert_eq!(stats.chase_wins_today, 3);
    }

    #[test]
    fn test_new_day_resets_daily_counters_only() {
        let mut stats = GameStats {
            total_play_seconds: 5_000,
            today_play_seconds: 120,
            chase_wins_today: 3,
            fish_caught: 9,
            last_login_date: "2026-10-17".to_string(),
            ..Default::default()
        };

        assert!(stats.roll_over(day(2026, 10, 18)));
        assert_eq!(stats.today_play_seconds, 0);
        assert_eq!(stats.chase_wins_today, 0);
        assert_eq!(stats.total_play_seconds, 5_000);
        assert_eq!(stats.fish_caught, 9);
        assert_eq!(stats.last_login_date, "2026-10-18");
    }

    #[test]
    fn test_apply_events() {
        let mut stats = GameStats::default();
        stats.apply(&ModeEvent::FishCaught);
        stats.apply(&ModeEvent::ChaseWon);
        stats.apply(&ModeEvent::FocusCompleted { seconds: 1_500 });
        stats.apply(&ModeEvent::BambooEaten);
        stats.record_second();

        assert_eq!(stats.fish_caught, 1);
        assert_eq!(stats.chase_wins_today, 1);
        assert_eq!(stats.focus_sessions, 1);
        assert_eq!(stats.focus_seconds, 1_500);
        assert_eq!(stats.bamboo_eaten, 1);
        assert_eq!(stats.total_play_seconds, 1);
        assert_eq!(stats.today_play_seconds, 1);
    }

    #[test]
    fn test_json_field_names() {
        let stats = GameStats {
            total_play_seconds: 61,
            chase_wins_today: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();

        assert_eq!(json["total_play_time"], 61);
        assert_eq!(json["pacman_wins_today"], 2);
        assert!(json.get("chase_wins_today").is_none());
    }

    #[test]
    fn test_older_files_load_with_defaults() {
        let json = r#"{
            "total_play_time": 300,
            "today_play_time": 60,
            "last_login_date": "2026-10-18",
            "fish_caught": 4,
            "pacman_wins_today": 1
        }"#;
        let stats: GameStats = serde_json::from_str(json).unwrap();

        assert_eq!(stats.total_play_seconds, 300);
        assert_eq!(stats.fish_caught, 4);
        assert_eq!(stats.focus_sessions, 0);
        assert_eq!(stats.bamboo_eaten, 0);
    }
}
