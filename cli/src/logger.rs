use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::HashMap;
use std::io::Write;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

/// Writes to stderr so that stdout stays empty for callers that capture it.
pub struct OvertoastLogger {
    level: LevelFilter,
    target_colors: Mutex<HashMap<String, usize>>,
    next_color_index: AtomicUsize,
}

impl OvertoastLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            target_colors: Mutex::new(HashMap::new()),
            next_color_index: AtomicUsize::new(0),
        }
    }

    fn color_for_target(&self, target: &str) -> ColoredString {
        let colors: &[fn(&str) -> ColoredString] = &[
            |s| s.green(),
            |s| s.yellow(),
            |s| s.blue(),
            |s| s.magenta(),
            |s| s.cyan(),
        ];

        let color_index = match self.target_colors.lock() {
            Ok(mut target_colors) => {
                let next = &self.next_color_index;
                *target_colors
                    .entry(target.to_string())
                    .or_insert_with(|| next.fetch_add(1, Ordering::SeqCst) % colors.len())
            }
            Err(_) => 0,
        };

        colors[color_index](target)
    }

    fn format_log(&self, record: &Record) -> String {
        let level_str = level_tag(record.level());
        let target = short_target(record.target());

        let message = match target {
            Some(target) => format!(
                "{} [{}] {}",
                level_str,
                self.color_for_target(target).dimmed(),
                record.args()
            ),
            None => format!("{} {}", level_str, record.args()),
        };

        match record.level() {
            Level::Error => message.red().bold().to_string(),
            Level::Warn => message.yellow().bold().to_string(),
            level => {
                let colored_level = match level {
                    Level::Info => level_str.green().bold(),
                    Level::Debug => level_str.blue().bold(),
                    _ => level_str.white().bold(),
                };
                message.replacen(level_str, &colored_level.to_string(), 1)
            }
        }
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "[E]",
        Level::Warn => "[W]",
        Level::Info => "[I]",
        Level::Debug => "[D]",
        Level::Trace => "[T]",
    }
}

fn short_target(target: &str) -> Option<&str> {
    if target.is_empty() {
        return None;
    }
    target.split("::").last()
}

impl Log for OvertoastLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let formatted = self.format_log(record);
            let _ = writeln!(std::io::stderr(), "{}", formatted);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Only warnings and errors by default; a successful toast prints nothing.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn init_logger(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(OvertoastLogger::new(level)))?;
    log::set_max_level(level);
    Ok(())
}
