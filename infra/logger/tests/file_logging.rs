use bitsd_domain::config::LoggingConfig;
use bitsd_logger::Logger;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn configured_directory_receives_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "info".to_owned(),
        json: true,
        directory: Some(log_dir.clone()),
        env_filter: None,
    };

    let logger = Logger::builder()
        .name("integration-file-logging")
        .console(false)
        .apply(&config)?
        .init()?;
    assert!(logger.guard().is_some(), "file output should hold a worker guard");

    tracing::info!(sensor = 3, "temperature sample mapped");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().next().expect("log file should not be empty");
    assert!(line.starts_with('{'), "expected a JSON line, got {line}");
    assert!(line.contains("temperature sample mapped"));

    Ok(())
}
