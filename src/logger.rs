use std::io::{self, Write};

use colored::{Color, Colorize};
use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;

static CONSOLE_LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::default);

pub fn init() -> Result<(), String> {
    init_with_config(LoggerConfig::default())
}

pub fn init_with_config(config: LoggerConfig) -> Result<(), String> {
    let max_level = config.min_level;
    CONSOLE_LOGGER.update_config(config);

    log::set_logger(&*CONSOLE_LOGGER).map_err(|e| format!("Failed to set logger: {e:?}"))?;
    log::set_max_level(max_level);
    Ok(())
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LevelFilter,
    pub show_colors: bool,
    pub show_timestamp: bool,
    pub timestamp_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LevelFilter::Info,
            show_colors: true,
            show_timestamp: true,
            timestamp_format: "%H:%M:%S%.3f".to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.show_colors = enabled;
        self
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Trace => Color::Cyan,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

/// Console logger: info and below go to stdout, warnings and errors to
/// stderr.
pub struct ConsoleLogger {
    config: std::sync::Mutex<LoggerConfig>,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self {
            config: std::sync::Mutex::new(LoggerConfig::default()),
        }
    }
}

impl ConsoleLogger {
    fn update_config(&self, new_config: LoggerConfig) {
        if let Ok(mut config) = self.config.lock() {
            *config = new_config;
        }
    }

    fn format_line(&self, record: &Record, config: &LoggerConfig) -> String {
        let mut line = String::new();

        if config.show_timestamp {
            let timestamp = chrono::Local::now().format(&config.timestamp_format);
            if config.show_colors {
                line.push_str(&format!("{} ", timestamp.to_string().bright_black()));
            } else {
                line.push_str(&format!("{timestamp} "));
            }
        }

        let level = record.level();
        if config.show_colors {
            line.push_str(&format!(
                "[{}] ",
                level.as_str().color(level_color(level)).bold()
            ));
        } else {
            line.push_str(&format!("[{}] ", level.as_str()));
        }

        line.push_str(&record.args().to_string());
        line
    }
}

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if let Ok(config) = self.config.lock() {
            metadata.level() <= config.min_level
        } else {
            true
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(config) = self.config.lock() {
            let line = self.format_line(record, &config);
            if record.level() <= Level::Warn {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}
