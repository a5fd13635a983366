use std::sync::Arc;

use chrono::{NaiveDate, TimeZone, Utc};

use habitloop_domain::completion::CompletionLedger;
use habitloop_domain::shared::{HabitId, UserId};
use habitloop_infrastructure::persistence::repositories::SqliteCompletionLedger;

mod test_helpers;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn ledger_first_toggle_creates_completed_record() {
    let pool = test_helpers::setup_in_memory_db().await;
    let ledger = SqliteCompletionLedger::new(Arc::new(pool));

    let habit_id = HabitId::new();
    let user_id = UserId::new();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    let record = ledger
        .toggle(&habit_id, &user_id, day(2025, 6, 15), now)
        .await
        .expect("first toggle");

    assert!(record.is_completed());
    assert_eq!(record.completed_at(), Some(now));

    let found = ledger
        .find_by_habit_and_day(&habit_id, day(2025, 6, 15))
        .await
        .expect("find record")
        .expect("record should exist");
    assert!(found.is_completed());
}

#[tokio::test]
async fn ledger_second_toggle_flips_in_place() {
    let pool = test_helpers::setup_in_memory_db().await;
    let ledger = SqliteCompletionLedger::new(Arc::new(pool));

    let habit_id = HabitId::new();
    let user_id = UserId::new();
    let target = day(2025, 6, 15);
    let t1 = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();

    let first = ledger.toggle(&habit_id, &user_id, target, t1).await.unwrap();
    let second = ledger.toggle(&habit_id, &user_id, target, t2).await.unwrap();

    // Same record mutated, not a second row.
    assert_eq!(first.id(), second.id());
    assert!(!second.is_completed());
    assert!(second.completed_at().is_none());

    // An uncompleted day is excluded from the completed-day history but the
    // record itself is retained.
    let days = ledger
        .completed_days_descending(&habit_id)
        .await
        .expect("completed days");
    assert!(days.is_empty());

    let kept = ledger
        .find_by_habit_and_day(&habit_id, target)
        .await
        .unwrap();
    assert!(kept.is_some());
}

#[tokio::test]
async fn ledger_double_toggle_restores_completed_state() {
    let pool = test_helpers::setup_in_memory_db().await;
    let ledger = SqliteCompletionLedger::new(Arc::new(pool));

    let habit_id = HabitId::new();
    let user_id = UserId::new();
    let target = day(2025, 6, 15);
    let t1 = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap();
    let t3 = Utc.with_ymd_and_hms(2025, 6, 15, 11, 0, 0).unwrap();

    ledger.toggle(&habit_id, &user_id, target, t1).await.unwrap();
    ledger.toggle(&habit_id, &user_id, target, t2).await.unwrap();
    let third = ledger.toggle(&habit_id, &user_id, target, t3).await.unwrap();

    assert!(third.is_completed());
    assert_eq!(third.completed_at(), Some(t3));

    let days = ledger
        .completed_days_descending(&habit_id)
        .await
        .expect("completed days");
    assert_eq!(days, vec![target]);
}

#[tokio::test]
async fn ledger_completed_days_are_descending_and_scoped() {
    let pool = test_helpers::setup_in_memory_db().await;
    let ledger = SqliteCompletionLedger::new(Arc::new(pool));

    let habit_id = HabitId::new();
    let other_habit = HabitId::new();
    let user_id = UserId::new();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    for d in [day(2025, 6, 13), day(2025, 6, 15), day(2025, 6, 14)] {
        ledger.toggle(&habit_id, &user_id, d, now).await.unwrap();
    }
    ledger
        .toggle(&other_habit, &user_id, day(2025, 6, 15), now)
        .await
        .unwrap();

    let days = ledger
        .completed_days_descending(&habit_id)
        .await
        .expect("completed days");

    assert_eq!(
        days,
        vec![day(2025, 6, 15), day(2025, 6, 14), day(2025, 6, 13)]
    );
}

#[tokio::test]
async fn ledger_queries_for_unknown_habit_return_empty() {
    let pool = test_helpers::setup_in_memory_db().await;
    let ledger = SqliteCompletionLedger::new(Arc::new(pool));

    let unknown = HabitId::new();

    let days = ledger
        .completed_days_descending(&unknown)
        .await
        .expect("completed days");
    assert!(days.is_empty());

    let records = ledger
        .list_in_range(&unknown, day(2025, 6, 1), day(2025, 6, 30))
        .await
        .expect("range query");
    assert!(records.is_empty());

    let record = ledger
        .find_by_habit_and_day(&unknown, day(2025, 6, 15))
        .await
        .expect("find");
    assert!(record.is_none());
}

#[tokio::test]
async fn ledger_range_query_is_inclusive_and_ascending() {
    let pool = test_helpers::setup_in_memory_db().await;
    let ledger = SqliteCompletionLedger::new(Arc::new(pool));

    let habit_id = HabitId::new();
    let user_id = UserId::new();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    for d in [
        day(2025, 6, 10),
        day(2025, 6, 12),
        day(2025, 6, 15),
        day(2025, 6, 20),
    ] {
        ledger.toggle(&habit_id, &user_id, d, now).await.unwrap();
    }

    let records = ledger
        .list_in_range(&habit_id, day(2025, 6, 12), day(2025, 6, 15))
        .await
        .expect("range query");

    let days: Vec<NaiveDate> = records.iter().map(|r| r.day()).collect();
    assert_eq!(days, vec![day(2025, 6, 12), day(2025, 6, 15)]);
}

#[tokio::test]
async fn ledger_unique_index_rejects_duplicate_day_rows() {
    let pool = test_helpers::setup_in_memory_db().await;
    let ledger = SqliteCompletionLedger::new(Arc::new(pool.clone()));

    let habit_id = HabitId::new();
    let user_id = UserId::new();
    let now = Utc.with_ymd_and_hms(2025, 6, 15, 9, 0, 0).unwrap();

    let record = ledger
        .toggle(&habit_id, &user_id, day(2025, 6, 15), now)
        .await
        .expect("first toggle");

    // A raw duplicate insert for the same (habit, day) must trip the index.
    let result = sqlx::query(
        "INSERT INTO habit_logs (id, habit_id, user_id, date, completed, completed_at)
         VALUES (?1, ?2, ?3, ?4, 1, NULL)",
    )
    .bind("duplicate-row")
    .bind(record.habit_id().as_str())
    .bind(record.user_id().as_str())
    .bind(record.day())
    .execute(&pool)
    .await;

    assert!(result.is_err(), "duplicate (habit, day) row must be rejected");
}
