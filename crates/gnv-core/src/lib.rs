pub mod add;
pub mod config;
pub mod install;
pub mod list;
pub mod npm;
pub mod remove;

#[cfg(test)]
mod test_support;

pub use add::AddManager;
pub use config::GnvConfig;
pub use install::{InstallManager, InstallOptions, InstallReport, InstallStep, StepStatus};
pub use list::{ListEntry, ListManager};
pub use npm::{NpmCommand, NpmRunner, NpmVerb, SystemNpm};
pub use remove::RemoveManager;

use gnv_project::DependencyCollection;

pub fn add_deps(config: &GnvConfig, descriptors: &[String], peer: bool) -> anyhow::Result<()> {
    let manager = AddManager::new(config.clone());
    manager
        .add(descriptors, DependencyCollection::from_peer_flag(peer))
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn remove_deps(config: &GnvConfig, descriptors: &[String], peer: bool) -> anyhow::Result<()> {
    let manager = RemoveManager::new(config.clone());
    manager
        .remove(descriptors, DependencyCollection::from_peer_flag(peer))
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn install(config: &GnvConfig, dev: bool) -> anyhow::Result<()> {
    let manager = InstallManager::new(config.clone());
    manager
        .install(InstallOptions {
            install_local_also: dev,
        })
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}

pub fn list_deps(config: &GnvConfig) -> anyhow::Result<()> {
    let manager = ListManager::new(config.clone());
    manager.list_deps().map_err(|e| anyhow::anyhow!(e))
}
