//! The npm subprocess boundary.

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

use gnv_constants::{NPM_FORCE_FLAG, NPM_GLOBAL_FLAG, NPM_QUIET_FLAGS};
use gnv_error::ExitInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpmVerb {
    /// `npm link` of the project itself into the global bin.
    LinkSelf,
    /// `npm i` into the project's node_modules.
    Install,
    /// `npm i -g`.
    InstallGlobal,
    /// `npm link <keys>` of globally installed packages into the project.
    LinkMany,
}

impl NpmVerb {
    const fn subcommand(self) -> &'static str {
        match self {
            Self::LinkSelf | Self::LinkMany => "link",
            Self::Install | Self::InstallGlobal => "i",
        }
    }

    const fn mode_flag(self) -> &'static str {
        match self {
            Self::InstallGlobal => NPM_GLOBAL_FLAG,
            Self::LinkSelf | Self::Install | Self::LinkMany => NPM_FORCE_FLAG,
        }
    }
}

/// One npm invocation: the verb, its flags and the packages it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmCommand {
    pub verb: NpmVerb,
    pub extra_args: Vec<String>,
    pub operands: Vec<String>,
}

impl NpmCommand {
    fn new(verb: NpmVerb, operands: Vec<String>) -> Self {
        let extra_args = std::iter::once(verb.mode_flag())
            .chain(NPM_QUIET_FLAGS.iter().copied())
            .map(String::from)
            .collect();

        Self {
            verb,
            extra_args,
            operands,
        }
    }

    pub fn link_self() -> Self {
        Self::new(NpmVerb::LinkSelf, Vec::new())
    }

    pub fn install(package_strings: Vec<String>) -> Self {
        Self::new(NpmVerb::Install, package_strings)
    }

    pub fn install_global(package_strings: Vec<String>) -> Self {
        Self::new(NpmVerb::InstallGlobal, package_strings)
    }

    pub fn link_many(package_keys: Vec<String>) -> Self {
        Self::new(NpmVerb::LinkMany, package_keys)
    }

    pub fn args(&self) -> Vec<String> {
        std::iter::once(self.verb.subcommand().to_string())
            .chain(self.extra_args.iter().cloned())
            .chain(self.operands.iter().cloned())
            .collect()
    }

    pub fn command_line(&self, program: &str) -> String {
        format!("{program} {}", self.args().join(" "))
    }
}

/// Runs npm commands. Resolves once the process has exited.
#[allow(async_fn_in_trait)]
pub trait NpmRunner {
    async fn run(&self, project_dir: &Path, command: &NpmCommand) -> Result<(), ExitInfo>;
}

/// Spawns the real npm executable.
#[derive(Debug, Clone)]
pub struct SystemNpm {
    program: String,
    show_output: bool,
}

impl SystemNpm {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            show_output: false,
        }
    }

    /// Also forward npm's stdout. Stderr is always forwarded.
    #[must_use]
    pub const fn show_output(mut self, show_output: bool) -> Self {
        self.show_output = show_output;
        self
    }
}

impl NpmRunner for SystemNpm {
    async fn run(&self, project_dir: &Path, command: &NpmCommand) -> Result<(), ExitInfo> {
        let stdout = if self.show_output {
            Stdio::inherit()
        } else {
            Stdio::null()
        };

        let status = Command::new(&self.program)
            .args(command.args())
            .current_dir(project_dir)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ExitInfo::Spawn(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(status.code().map_or(ExitInfo::Signal, ExitInfo::Code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_self_args() {
        assert_eq!(
            NpmCommand::link_self().args(),
            vec!["link", "-f", "--no-save", "--silent"]
        );
    }

    #[test]
    fn test_install_args() {
        let command = NpmCommand::install(vec!["foo@1.0.0".to_string(), "@org/bar@latest".to_string()]);
        assert_eq!(
            command.args(),
            vec!["i", "-f", "--no-save", "--silent", "foo@1.0.0", "@org/bar@latest"]
        );
    }

    #[test]
    fn test_install_global_args() {
        let command = NpmCommand::install_global(vec!["tool@2".to_string()]);
        assert_eq!(
            command.args(),
            vec!["i", "-g", "--no-save", "--silent", "tool@2"]
        );
    }

    #[test]
    fn test_link_many_uses_keys() {
        let command = NpmCommand::link_many(vec!["tool".to_string(), "@org/cli".to_string()]);
        assert_eq!(
            command.command_line("npm"),
            "npm link -f --no-save --silent tool @org/cli"
        );
    }

    #[tokio::test]
    async fn test_missing_program_is_a_spawn_failure() {
        let npm = SystemNpm::new("gnv-test-definitely-not-a-real-program");
        let dir = std::env::temp_dir();
        let result = npm.run(&dir, &NpmCommand::link_self()).await;
        assert!(matches!(result, Err(ExitInfo::Spawn(_))));
    }
}
