use std::env;

use chrono::Local;
use log::LevelFilter;

pub fn get_log_level() -> LevelFilter {
    match env::var("LOG_LEVEL").as_deref() {
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("warn") => LevelFilter::Warn,
        Ok("error") => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

/// Logs go to stderr so that manifests and schemas printed on stdout can be piped.
pub fn setup_logging() -> Result<(), fern::InitError> {
    setup_logging_with_level(get_log_level())
}

pub fn setup_logging_with_level(level: LevelFilter) -> Result<(), fern::InitError> {
    let stderr_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr());

    fern::Dispatch::new().chain(stderr_config).apply()?;

    Ok(())
}
