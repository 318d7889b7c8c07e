use fulfill_logger::{LevelFilter, Logger, LoggerError};
use std::fs;
use std::time::Duration;

#[test]
fn missing_log_directory_is_created_and_subscriber_is_exclusive() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let log_dir = tmp_dir.path().join("var").join("fulfill").join("logs");
    assert!(!log_dir.exists());

    let logger = Logger::builder()
        .name("fulfill-cli")
        .console(false)
        .level(LevelFilter::WARN)
        .path(&log_dir)
        .max_files(2)
        .init()
        .unwrap();
    assert!(log_dir.is_dir());

    tracing::info!("below the configured level");
    tracing::warn!(code = "STATUS_CHECK_FAILED", "status check failed");

    let err = Logger::builder().name("fulfill-second").init().unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber { .. }));

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .find(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("fulfill-cli"))
        })
        .expect("log file named after the logger");

    let contents = fs::read_to_string(log_file).unwrap();
    assert!(contents.contains("status check failed"));
    assert!(contents.contains("STATUS_CHECK_FAILED"));
    assert!(!contents.contains("below the configured level"));
    assert!(!contents.trim_start().starts_with('{'), "plain text unless json is enabled");
}
