use habitloop_infrastructure::persistence::Database;

#[tokio::test]
async fn database_creates_file_and_runs_migrations() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let db_path = dir.path().join("data").join("habitloop.db");

    let database = Database::new(db_path.to_str().unwrap())
        .await
        .expect("open database");
    database.run_migrations().await.expect("run migrations");

    assert!(db_path.exists(), "database file should be created");

    // Schema is in place: the core tables are queryable.
    let habit_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM habits")
        .fetch_one(database.pool())
        .await
        .expect("query habits");
    assert_eq!(habit_count, 0);

    let log_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM habit_logs")
        .fetch_one(database.pool())
        .await
        .expect("query habit_logs");
    assert_eq!(log_count, 0);

    // Re-running migrations is a no-op.
    database.run_migrations().await.expect("idempotent migrations");
}
