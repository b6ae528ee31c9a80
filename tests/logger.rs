use swipedeck::constants::LOG_BUFFER_CAPACITY;
use swipedeck::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());
    assert!(logger.log_file_path().is_none());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
    assert!(logs[0].starts_with('['));
}

#[test]
fn test_logs_are_newest_first() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());
    logger.log("third".to_string());

    let logs = logger.get_logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[0].ends_with("third"));
    assert!(logs[2].ends_with("first"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from clone".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}

#[test]
fn test_buffer_is_capped() {
    let logger = Logger::default();
    for i in 0..LOG_BUFFER_CAPACITY + 10 {
        logger.log(format!("entry {}", i));
    }

    let logs = logger.get_logs();
    assert_eq!(logs.len(), LOG_BUFFER_CAPACITY);
    assert!(logs[0].ends_with(&format!("entry {}", LOG_BUFFER_CAPACITY + 9)));
    assert!(logs[LOG_BUFFER_CAPACITY - 1].ends_with("entry 10"));
}

#[test]
fn test_log_file_path_location() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("swipedeck/swipedeck.log"));
    }
}
