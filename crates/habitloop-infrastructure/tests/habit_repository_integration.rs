use std::sync::Arc;

use chrono::{TimeZone, Utc};

use habitloop_domain::habit::{Habit, HabitColor, HabitRepository};
use habitloop_domain::shared::{HabitId, UserId};
use habitloop_infrastructure::persistence::repositories::SqliteHabitRepository;

mod test_helpers;

fn sample_habit(user_id: &UserId) -> Habit {
    Habit::new(
        user_id.clone(),
        "Morning run".to_string(),
        Some("30 minutes before work".to_string()),
        HabitColor::Teal,
        "🏃".to_string(),
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
    )
    .expect("create habit")
}

#[tokio::test]
async fn habit_repo_save_and_find_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let user_id = UserId::new();
    let habit = sample_habit(&user_id);
    repo.save(&habit).await.expect("save habit");

    let loaded = repo
        .find_by_id(habit.id())
        .await
        .expect("find habit")
        .expect("habit should exist");

    assert_eq!(loaded.id(), habit.id());
    assert_eq!(loaded.name(), "Morning run");
    assert_eq!(loaded.description(), Some("30 minutes before work"));
    assert_eq!(loaded.color(), HabitColor::Teal);
    assert!(loaded.is_active());
    assert_eq!(loaded.current_streak(), 0);
}

#[tokio::test]
async fn habit_repo_find_for_user_enforces_ownership() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let owner = UserId::new();
    let habit = sample_habit(&owner);
    repo.save(&habit).await.expect("save habit");

    let found = repo
        .find_by_id_for_user(habit.id(), &owner)
        .await
        .expect("find for owner");
    assert!(found.is_some());

    let other = UserId::new();
    let found = repo
        .find_by_id_for_user(habit.id(), &other)
        .await
        .expect("find for other user");
    assert!(found.is_none(), "habit must not be visible to another user");

    let missing = repo
        .find_by_id_for_user(&HabitId::new(), &owner)
        .await
        .expect("find unknown habit");
    assert!(missing.is_none());
}

#[tokio::test]
async fn habit_repo_list_active_skips_archived_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let user_id = UserId::new();

    let older = Habit::new(
        user_id.clone(),
        "Read".to_string(),
        None,
        HabitColor::Blue,
        "📚".to_string(),
        Utc.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap(),
    )
    .unwrap();
    let newer = Habit::new(
        user_id.clone(),
        "Stretch".to_string(),
        None,
        HabitColor::Green,
        "🧘".to_string(),
        Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap(),
    )
    .unwrap();
    let mut archived = Habit::new(
        user_id.clone(),
        "Old habit".to_string(),
        None,
        HabitColor::Red,
        "🗑".to_string(),
        Utc.with_ymd_and_hms(2025, 5, 1, 8, 0, 0).unwrap(),
    )
    .unwrap();
    archived.archive();

    repo.save(&older).await.unwrap();
    repo.save(&newer).await.unwrap();
    repo.save(&archived).await.unwrap();

    let listed = repo.list_active_for_user(&user_id).await.expect("list");

    let names: Vec<&str> = listed.iter().map(|h| h.name()).collect();
    assert_eq!(names, vec!["Stretch", "Read"]);
}

#[tokio::test]
async fn habit_repo_save_persists_streak_state() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let user_id = UserId::new();
    let mut habit = sample_habit(&user_id);

    habit.apply_streaks(&habitloop_domain::streak::StreakComputation {
        current_streak: 3,
        longest_streak: 5,
        total_completed_days: 8,
        last_completed_day: None,
    });
    let completed_at = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
    habit.record_completion(completed_at);
    repo.save(&habit).await.expect("save updated habit");

    let loaded = repo
        .find_by_id(habit.id())
        .await
        .expect("find habit")
        .expect("habit should exist");

    assert_eq!(loaded.current_streak(), 3);
    assert_eq!(loaded.longest_streak(), 5);
    assert_eq!(loaded.last_completed_at(), Some(completed_at));
}
