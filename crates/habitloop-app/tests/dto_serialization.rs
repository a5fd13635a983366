/// DTOs are the crate's wire contract; pin their serialized shape.
use habitloop_app::application::dtos::{ProgressDayDto, StreakInfoDto, ToggleOutcomeDto};

#[test]
fn toggle_outcome_serializes_expected_fields() {
    let outcome = ToggleOutcomeDto {
        completed: true,
        current_streak: 3,
        longest_streak: 5,
        achievement_unlocked: None,
    };

    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["completed"], true);
    assert_eq!(json["current_streak"], 3);
    assert_eq!(json["longest_streak"], 5);
    assert!(json["achievement_unlocked"].is_null());
}

#[test]
fn streak_info_round_trips() {
    let info = StreakInfoDto {
        current_streak: 2,
        longest_streak: 9,
        today_completed: false,
        total_completed_days: 11,
    };

    let json = serde_json::to_string(&info).unwrap();
    let back: StreakInfoDto = serde_json::from_str(&json).unwrap();

    assert_eq!(back.current_streak, 2);
    assert_eq!(back.longest_streak, 9);
    assert!(!back.today_completed);
    assert_eq!(back.total_completed_days, 11);
}

#[test]
fn progress_day_uses_plain_date_string() {
    let day = ProgressDayDto {
        date: "2025-06-15".to_string(),
        completed: true,
        day_name: "Sun".to_string(),
    };

    let json = serde_json::to_value(&day).unwrap();
    assert_eq!(json["date"], "2025-06-15");
    assert_eq!(json["day_name"], "Sun");
}
