use crossterm::{ExecutableCommand, cursor, terminal};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;
use std::time::Instant;

pub struct Logger {
    start_time: Instant,
    quiet: bool,
    interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Debug,
    Shell,
    /// Command banner, printed as given.
    Header,
}

impl Logger {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self {
            start_time: Instant::now(),
            quiet,
            interactive: io::stdout().is_terminal(),
        }
    }

    /// Errors are printed even when quiet.
    #[must_use]
    pub const fn enabled(&self, level: LogLevel) -> bool {
        !self.quiet || matches!(level, LogLevel::Error)
    }

    fn clear_current_line(&self) {
        if self.quiet || !self.interactive {
            return;
        }

        let mut stdout = io::stdout();
        let _ = stdout.execute(cursor::MoveToColumn(0));
        let _ = stdout.execute(terminal::Clear(terminal::ClearType::CurrentLine));
        let _ = stdout.flush();
    }

    pub fn finish_line(&self, message: &str) {
        if self.quiet {
            return;
        }

        self.clear_current_line();
        println!("{message}");
    }

    #[must_use]
    pub fn format(level: LogLevel, message: &str) -> String {
        if matches!(level, LogLevel::Header) {
            return message.to_string();
        }

        let (prefix, colored_message) = match level {
            LogLevel::Info => (
                "[gnv]".bright_cyan().bold().to_string(),
                message.bright_cyan().to_string(),
            ),
            LogLevel::Success => (
                "✓".bright_green().bold().to_string(),
                message.bright_green().to_string(),
            ),
            LogLevel::Warning => (
                "⚠".bright_yellow().bold().to_string(),
                message.bright_yellow().to_string(),
            ),
            LogLevel::Error => (
                "✗".bright_red().bold().to_string(),
                message.bright_red().to_string(),
            ),
            LogLevel::Debug => (
                "•".bright_black().bold().to_string(),
                message.bright_black().to_string(),
            ),
            LogLevel::Shell => (
                ">".bright_blue().bold().to_string(),
                message.bright_black().to_string(),
            ),
            LogLevel::Header => (String::new(), message.to_string()),
        };

        format!("{prefix} {colored_message}")
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        self.clear_current_line();

        if matches!(level, LogLevel::Error) {
            eprintln!("{}", Self::format(level, message));
        } else {
            println!("{}", Self::format(level, message));
        }
    }

    pub fn finish(&self, message: &str) {
        let elapsed = self.start_time.elapsed();
        let time_str = if elapsed.as_millis() < 1000 {
            format!("{}ms", elapsed.as_millis())
        } else {
            format!("{:.2}s", elapsed.as_secs_f64())
        };

        let final_message = format!(
            "{} {} {}",
            "✓".bright_green().bold(),
            message.bright_green(),
            format!("[{time_str}]").bright_black()
        );

        self.finish_line(&final_message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&self, message: &str) {
        self.log(LogLevel::Success, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    pub fn debug(&self, message: &str, debug_enabled: bool) {
        if debug_enabled {
            self.log(LogLevel::Debug, message);
        }
    }

    pub fn shell(&self, command: &str) {
        self.log(LogLevel::Shell, command);
    }

    pub fn header(&self, message: &str) {
        if !self.enabled(LogLevel::Header) {
            return;
        }

        self.log(LogLevel::Header, message);
        println!();
    }
}

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs the process-wide logger. Only the first call has an effect.
pub fn init_logger(quiet: bool) {
    let _ = LOGGER.set(Logger::new(quiet));
}

fn get_logger() -> &'static Logger {
    LOGGER.get_or_init(|| Logger::new(false))
}

pub fn info(message: &str) {
    get_logger().info(message);
}

pub fn success(message: &str) {
    get_logger().success(message);
}

pub fn warn(message: &str) {
    get_logger().warn(message);
}

pub fn error(message: &str) {
    get_logger().error(message);
}

pub fn debug(message: &str, debug_enabled: bool) {
    get_logger().debug(message, debug_enabled);
}

pub fn shell(command: &str) {
    get_logger().shell(command);
}

pub fn finish(message: &str) {
    get_logger().finish(message);
}

pub fn header(message: &str) {
    get_logger().header(message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_logger_still_reports_errors() {
        let logger = Logger::new(true);
        assert!(logger.enabled(LogLevel::Error));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Shell));
    }

    #[test]
    fn test_quiet_logger_suppresses_headers() {
        assert!(!Logger::new(true).enabled(LogLevel::Header));
        assert!(Logger::new(false).enabled(LogLevel::Header));
    }

    #[test]
    fn test_header_is_printed_without_prefix() {
        assert_eq!(Logger::format(LogLevel::Header, "gnv add foo"), "gnv add foo");
    }

    #[test]
    fn test_format_keeps_message_text() {
        let line = Logger::format(LogLevel::Shell, "npm link -f --no-save --silent");
        assert!(line.contains("npm link -f --no-save --silent"));
    }
}
