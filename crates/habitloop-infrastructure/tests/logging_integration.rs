use habitloop_infrastructure::logging;

#[test]
fn logger_initializes_once_and_reports_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let log_dir = dir.path().join("logs");

    logging::init_logger(log_dir.clone()).expect("first init");
    assert!(log_dir.exists(), "log directory should be created");
    assert_eq!(logging::get_log_dir(), Some(log_dir.clone()));

    // Re-initialization is a no-op, even with a different directory.
    let other_dir = dir.path().join("other-logs");
    logging::init_logger(other_dir).expect("second init is a no-op");
    assert_eq!(logging::get_log_dir(), Some(log_dir));

    tracing::info!(target: "habitloop::test", "logger smoke event");
    log::info!("[test] log-to-tracing bridge smoke event");
}
