use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gnv_constants::{DEFAULT_INDENT_WIDTH, DESCRIPTION, VERSION};

#[derive(Parser, Debug)]
#[command(name = "gnv")]
#[command(version = VERSION)]
#[command(propagate_version = true)]
#[command(about = DESCRIPTION, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Project directory containing package.json (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
    /// Indentation width used when rewriting package.json
    #[arg(long, global = true, value_name = "N", default_value_t = DEFAULT_INDENT_WIDTH)]
    pub indent: usize,
    /// Enable debug mode for verbose output
    #[arg(long, global = true)]
    pub debug: bool,
    /// Only print errors
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Records packages as gnv (local) or peer dependencies and installs them
    #[command(alias = "a")]
    Add {
        /// Packages to add (e.g. chalk@5.3.0, @org/tool)
        #[arg(required = true)]
        packages: Vec<String>,
        /// Record as peerDependency (installed globally, then linked)
        #[arg(short = 'P', long = "peer")]
        peer: bool,
    },
    /// Removes packages from gnvDependencies or peerDependencies
    #[command(alias = "rm")]
    Remove {
        /// Packages to remove
        #[arg(required = true)]
        packages: Vec<String>,
        /// Remove from peerDependencies instead of gnvDependencies
        #[arg(short = 'P', long = "peer")]
        peer: bool,
    },
    /// Links this CLI and installs peer (and with --dev, local) dependencies
    #[command(alias = "i")]
    Install {
        /// Also install gnvDependencies into node_modules
        #[arg(short = 'D', long = "dev")]
        dev: bool,
    },
    /// Lists gnv and peer dependencies
    #[command(alias = "ls")]
    List,
    /// Shows help information for gnv or a specific command
    Help {
        /// The command to show help for (optional)
        #[arg()]
        command: Option<String>,
    },
}
