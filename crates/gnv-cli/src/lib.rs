pub mod commands;
pub mod handlers;

use clap::Parser;
use std::env;

use commands::{Cli, Commands};
use gnv_core::GnvConfig;
use handlers::{AddHandler, HelpHandler, InstallHandler, ListHandler, RemoveHandler};

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gnv_logger::init_logger(cli.quiet);

    let project_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => env::current_dir()?,
    };
    let config = GnvConfig::from_env(project_dir)
        .with_debug(cli.debug)
        .with_indent_width(cli.indent);

    match &cli.command {
        Commands::Add { packages, peer } => AddHandler::handle_add(&config, packages, *peer),
        Commands::Remove { packages, peer } => {
            RemoveHandler::handle_remove(&config, packages, *peer)
        }
        Commands::Install { dev } => InstallHandler::handle_install(&config, *dev),
        Commands::List => ListHandler::handle_list(&config),
        Commands::Help { command } => HelpHandler::handle_help(command.as_deref()),
    }
}
