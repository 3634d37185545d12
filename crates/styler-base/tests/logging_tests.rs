use log::{LevelFilter, Log};
use std::fs;
use styler_base::logging::{format_line, init_stdout_logger, FileLogger, StdoutLogger};

fn record_at<'a>(level: log::Level, args: std::fmt::Arguments<'a>) -> log::Record<'a> {
    log::RecordBuilder::new()
        .level(level)
        .target("styler_test")
        .file(Some("test.rs"))
        .line(Some(7))
        .args(args)
        .build()
}

#[test]
fn test_stdout_logger_respects_max_level() {
    let logger = StdoutLogger::new(LevelFilter::Info);

    let info = log::MetadataBuilder::new().level(log::Level::Info).build();
    let debug = log::MetadataBuilder::new().level(log::Level::Debug).build();

    assert!(logger.enabled(&info));
    assert!(!logger.enabled(&debug));

    // must not panic
    logger.log(&record_at(log::Level::Info, format_args!("frame converted")));
    logger.flush();
}

#[test]
fn test_format_line_contains_level_target_and_message() {
    let start = std::time::Instant::now();
    let line = format_line(start, &record_at(log::Level::Warn, format_args!("slow frame")));
    assert!(line.starts_with("[+0."));
    assert!(line.contains("WARN"));
    assert!(line.contains("styler_test"));
    assert!(line.ends_with("slow frame"));
}

#[test]
fn test_file_logger_writes_lines() {
    let dir = std::env::temp_dir().join(format!("styler-log-test-{}-write", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("styler.log");

    let logger = FileLogger::new(&path, LevelFilter::Debug).expect("Failed to create FileLogger");
    logger.log(&record_at(log::Level::Error, format_args!("engine failure")));
    logger.log(&record_at(log::Level::Trace, format_args!("filtered out")));
    logger.flush();

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("ERROR"));
    assert!(content.contains("engine failure"));
    assert!(!content.contains("filtered out"));
    assert_eq!(content.lines().count(), 1);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_logger_appends() {
    let dir = std::env::temp_dir().join(format!("styler-log-test-{}-append", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("styler.log");

    for message in ["first", "second"] {
        let logger = FileLogger::new(&path, LevelFilter::Info).unwrap();
        logger.log(&record_at(log::Level::Info, format_args!("{}", message)));
        logger.flush();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_file_logger_invalid_path_returns_error() {
    let result = FileLogger::new("/proc/nonexistent/styler.log", LevelFilter::Info);
    assert!(result.is_err());
}

#[test]
fn test_init_stdout_logger_twice_is_harmless() {
    init_stdout_logger(LevelFilter::Debug);
    init_stdout_logger(LevelFilter::Error);
    log::info!("logged through the global logger");
}
