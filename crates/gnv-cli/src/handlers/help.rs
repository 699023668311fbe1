use anyhow::Result;
use clap::CommandFactory;
use owo_colors::OwoColorize;

use crate::commands::Cli;
use gnv_constants::{BIN_NAME, COMMANDS, DESCRIPTION, EXAMPLES, VERSION};

pub struct HelpHandler;

impl HelpHandler {
    pub fn handle_help(command: Option<&str>) -> Result<()> {
        match command {
            Some(cmd) => Self::show_command_help(cmd),
            None => {
                Self::show_general_help();
                Ok(())
            }
        }
    }

    fn show_command_help(command: &str) -> Result<()> {
        let mut cmd = Cli::command();

        if let Some(subcommand) = cmd.find_subcommand_mut(command) {
            subcommand.print_help()?;
        } else {
            println!(
                "{}: Unknown command '{}'",
                "Error".bright_red().bold(),
                command
            );
            println!();
            Self::show_general_help();
        }

        println!();
        Ok(())
    }

    fn show_general_help() {
        println!("{}", DESCRIPTION.bright_white().bold());
        println!(
            "{} {}",
            "Version:".bright_white().bold(),
            VERSION.bright_black().bold()
        );
        println!();

        println!("{}", "Usage:".bright_magenta().bold());
        println!(
            "  {} {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "<COMMAND>".bright_white(),
            "<OPTIONS>".bright_black().bold(),
            "[ARGS]".bright_black().bold()
        );
        println!();

        println!("{}", "Commands:".bright_magenta().bold());
        let rows: Vec<(String, &str)> = COMMANDS
            .iter()
            .map(|(cmd, desc, aliases)| {
                let label = if aliases.is_empty() {
                    (*cmd).to_string()
                } else {
                    format!("{cmd} [{}]", aliases.join(", "))
                };
                (label, *desc)
            })
            .collect();
        Self::print_rows(&rows);
        println!();

        println!("{}", "Options:".bright_magenta().bold());
        Self::print_rows(&[
            ("--dir <DIR>".to_string(), "Project directory"),
            ("--indent <N>".to_string(), "package.json indentation width"),
            ("--debug".to_string(), "Verbose output"),
            ("-q, --quiet".to_string(), "Only print errors"),
            ("-V, --version".to_string(), "Print version"),
        ]);
        println!();

        println!("{}", "Examples:".bright_magenta().bold());
        let examples: Vec<(String, &str)> = EXAMPLES
            .iter()
            .map(|(cmd, desc)| ((*cmd).to_string(), *desc))
            .collect();
        Self::print_rows(&examples);
        println!();

        println!(
            "{}",
            "For more information about a specific command, use:".bright_magenta()
        );
        println!(
            "  {} {} {}",
            BIN_NAME.bright_cyan().bold(),
            "help".bright_white(),
            "<command>".bright_black().bold()
        );
    }

    fn print_rows(rows: &[(String, &str)]) {
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

        for (label, desc) in rows {
            let padding = " ".repeat(width - label.len());
            println!(
                "  {}{padding}  # {}",
                label.bright_cyan().bold(),
                desc.bright_black().bold()
            );
        }
    }
}
