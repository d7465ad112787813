use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;
use crate::initialization::Log;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Sets up log4rs with a console appender and, if a log path is configured, a file appender
///
/// # Arguments
///
/// * 'log' - logging section of the configuration
pub fn setup_logger(log: &Log) -> Result<(), ConfigError> {
    let level = LevelFilter::from_str(&log.level)
        .map_err(|_| ConfigError(format!("invalid log level '{}'", log.level)))?;

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder = log4rs::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)));
    let mut root = Root::builder().appender("stdout");

    if let Some(path) = &log.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(path)?;

        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    let config = builder.build(root.build(level))?;
    log4rs::init_config(config)?;

    Ok(())
}
