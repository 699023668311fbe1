use std::path::Path;

use crate::config::GnvConfig;
use crate::npm::{NpmCommand, NpmRunner, SystemNpm};
use gnv_constants::{BIN_NAME, DEFAULT_VERSION};
use gnv_error::{GnvError, Result};
use gnv_project::{DependencyCollection, DependencyMap, read_manifest};

/// The steps of an install, in the only order they may run.
///
/// npm's install removes bin links created by unrelated links, so linking the
/// project itself has to come before anything is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStep {
    SelfLink,
    LocalInstall,
    GlobalInstallAndLink,
}

impl InstallStep {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SelfLink => "self-link",
            Self::LocalInstall => "local-install",
            Self::GlobalInstallAndLink => "global-install-and-link",
        }
    }

    pub fn plan(options: InstallOptions) -> Vec<Self> {
        let mut steps = vec![Self::SelfLink];
        if options.install_local_also {
            steps.push(Self::LocalInstall);
        }
        steps.push(Self::GlobalInstallAndLink);
        steps
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallOptions {
    /// Install `gnvDependencies` as well as peer dependencies (`--dev`).
    pub install_local_also: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Linked,
    Installed { packages: usize },
    NothingToInstall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: InstallStep,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub steps: Vec<StepOutcome>,
}

impl InstallReport {
    pub fn status(&self, step: InstallStep) -> Option<&StepStatus> {
        self.steps
            .iter()
            .find(|outcome| outcome.step == step)
            .map(|outcome| &outcome.status)
    }

    pub fn installed_packages(&self) -> usize {
        self.steps
            .iter()
            .map(|outcome| match outcome.status {
                StepStatus::Installed { packages } => packages,
                StepStatus::Linked | StepStatus::NothingToInstall => 0,
            })
            .sum()
    }
}

pub struct InstallManager<R = SystemNpm> {
    config: GnvConfig,
    runner: R,
}

impl InstallManager<SystemNpm> {
    pub fn new(config: GnvConfig) -> Self {
        let runner = SystemNpm::new(config.npm_program.clone()).show_output(config.debug);
        Self { config, runner }
    }
}

impl<R: NpmRunner> InstallManager<R> {
    pub const fn with_runner(config: GnvConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub const fn config(&self) -> &GnvConfig {
        &self.config
    }

    pub fn install(&self, options: InstallOptions) -> Result<InstallReport> {
        let rt = tokio::runtime::Runtime::new().map_err(|e| GnvError::Runtime(e.to_string()))?;
        rt.block_on(self.install_async(options))
    }

    /// Runs the install plan. A failing step stops the plan; steps that
    /// already ran are left as they are, and running again is safe.
    pub async fn install_async(&self, options: InstallOptions) -> Result<InstallReport> {
        if !options.install_local_also {
            gnv_logger::info("Release mode: installing peer dependencies only.");
        }

        let mut report = InstallReport::default();
        for step in InstallStep::plan(options) {
            gnv_logger::debug(&format!("Running step {}", step.name()), self.config.debug);
            let status = match step {
                InstallStep::SelfLink => self.link_self().await?,
                InstallStep::LocalInstall => self.install_local().await?,
                InstallStep::GlobalInstallAndLink => self.install_global_and_link().await?,
            };
            report.steps.push(StepOutcome { step, status });
        }

        Ok(report)
    }

    async fn link_self(&self) -> Result<StepStatus> {
        gnv_logger::info("Linking this package to global bin...");
        self.call(InstallStep::SelfLink, &NpmCommand::link_self())
            .await?;
        Ok(StepStatus::Linked)
    }

    async fn install_local(&self) -> Result<StepStatus> {
        let manifest = read_manifest(self.project_dir())?;
        let packages = encode_all(&manifest.local);

        if packages.is_empty() {
            gnv_logger::info(&format!(
                "No {} to install.",
                DependencyCollection::Local.field()
            ));
            return Ok(StepStatus::NothingToInstall);
        }

        gnv_logger::info("Adding local gnv deps to node_modules:");
        let count = packages.len();
        self.call(InstallStep::LocalInstall, &NpmCommand::install(packages))
            .await?;
        gnv_logger::success(&format!("Installed {count} packages."));

        Ok(StepStatus::Installed { packages: count })
    }

    async fn install_global_and_link(&self) -> Result<StepStatus> {
        let manifest = read_manifest(self.project_dir())?;
        let packages = encode_all(&manifest.peer);

        if packages.is_empty() {
            gnv_logger::info(&format!(
                "No {} to install.",
                DependencyCollection::Peer.field()
            ));
            return Ok(StepStatus::NothingToInstall);
        }

        // Linked by key so whatever version is installed globally is picked up.
        let keys: Vec<String> = manifest.peer.keys().cloned().collect();
        let count = packages.len();

        gnv_logger::info("Adding global peerDeps:");
        self.call(
            InstallStep::GlobalInstallAndLink,
            &NpmCommand::install_global(packages),
        )
        .await?;
        gnv_logger::success(&format!("Installed {count} packages."));

        gnv_logger::info("Linking peer dependencies locally...");
        self.call(InstallStep::GlobalInstallAndLink, &NpmCommand::link_many(keys))
            .await?;

        gnv_logger::finish(&format!(
            "Done! Your development CLI should be ready at `{}`.",
            manifest.name().unwrap_or(BIN_NAME)
        ));
        Ok(StepStatus::Installed { packages: count })
    }

    async fn call(&self, step: InstallStep, command: &NpmCommand) -> Result<()> {
        let command_line = command.command_line(&self.config.npm_program);
        gnv_logger::shell(&command_line);

        self.runner
            .run(self.project_dir(), command)
            .await
            .map_err(|exit| GnvError::InstallStepFailed {
                step: step.name(),
                command: command_line,
                exit,
            })
    }

    fn project_dir(&self) -> &Path {
        self.config.project_dir()
    }
}

/// Install operands use the manifest keys as written, the same keys that
/// `link_many` receives.
fn encode_all(deps: &DependencyMap) -> Vec<String> {
    deps.iter()
        .map(|(key, version)| {
            let version = if version.is_empty() {
                DEFAULT_VERSION
            } else {
                version.as_str()
            };
            format!("{key}@{version}")
        })
        .collect()
}
