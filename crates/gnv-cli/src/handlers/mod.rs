pub mod add;
pub mod help;
pub mod install;
pub mod list;
pub mod remove;

pub use add::AddHandler;
pub use help::HelpHandler;
pub use install::InstallHandler;
pub use list::ListHandler;
pub use remove::RemoveHandler;

use owo_colors::OwoColorize;

use gnv_constants::BIN_NAME;

fn print_header(command: &str, args: &[String]) {
    gnv_logger::header(&header_line(command, args));
}

fn header_line(command: &str, args: &[String]) -> String {
    if args.is_empty() {
        format!("{} {}", BIN_NAME.bright_cyan().bold(), command.bright_white())
    } else {
        format!(
            "{} {} {}",
            BIN_NAME.bright_cyan().bold(),
            command.bright_white(),
            args.join(" ").bright_white()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_line_lists_arguments() {
        let line = header_line("add", &["foo@1.0.0".to_string(), "bar".to_string()]);
        assert!(line.contains("add"));
        assert!(line.contains("foo@1.0.0 bar"));
    }
}
