use crate::config::GnvConfig;
use crate::install::{InstallManager, InstallOptions, InstallReport};
use crate::npm::{NpmRunner, SystemNpm};
use gnv_error::{GnvError, Result};
use gnv_project::{
    Change, DependencyClassifier, DependencyCollection, WriteOutcome, read_manifest,
    write_manifest,
};
use gnv_utils::DependencyDescriptor;

pub struct AddManager<R = SystemNpm> {
    installer: InstallManager<R>,
}

impl AddManager<SystemNpm> {
    pub fn new(config: GnvConfig) -> Self {
        Self {
            installer: InstallManager::new(config),
        }
    }
}

impl<R: NpmRunner> AddManager<R> {
    pub const fn with_installer(installer: InstallManager<R>) -> Self {
        Self { installer }
    }

    pub fn add(
        &self,
        descriptors: &[String],
        collection: DependencyCollection,
    ) -> Result<InstallReport> {
        let rt = tokio::runtime::Runtime::new().map_err(|e| GnvError::Runtime(e.to_string()))?;
        rt.block_on(self.add_async(descriptors, collection))
    }

    /// Records each descriptor in `collection`, then installs.
    ///
    /// The manifest is written after every descriptor. The first malformed
    /// descriptor aborts the batch; descriptors recorded before it stay
    /// recorded and nothing is installed.
    pub async fn add_async(
        &self,
        descriptors: &[String],
        collection: DependencyCollection,
    ) -> Result<InstallReport> {
        let config = self.installer.config();
        let project_dir = config.project_dir();
        let mut manifest = read_manifest(project_dir)?;
        let mut recorded = Vec::with_capacity(descriptors.len());

        for raw in descriptors {
            let descriptor = DependencyDescriptor::decode(raw)?;
            let outcome = DependencyClassifier::classify(&mut manifest, &descriptor, collection);

            match &outcome.change {
                Change::Added => gnv_logger::debug(
                    &format!("Recording {descriptor} in {collection}"),
                    config.debug,
                ),
                Change::Updated { previous } => gnv_logger::debug(
                    &format!("Updating {} in {collection}: {previous} -> {}", outcome.key, descriptor.version),
                    config.debug,
                ),
                Change::Unchanged => gnv_logger::debug(
                    &format!("{descriptor} is already in {collection}"),
                    config.debug,
                ),
            }

            if let Some(other) = outcome.also_in {
                gnv_logger::warn(&format!(
                    "{} is also listed in {other}; both entries are kept",
                    outcome.key
                ));
            }

            match write_manifest(project_dir, &manifest, config.write_options())? {
                WriteOutcome::Written => recorded.push(descriptor.encode()),
                WriteOutcome::Skipped => gnv_logger::warn(&format!(
                    "No package.json in {}; {} was not recorded",
                    project_dir.display(),
                    outcome.key
                )),
            }
        }

        if !recorded.is_empty() {
            gnv_logger::success(&format!("Added {} to package.json.", recorded.join(" ")));
        }

        self.installer
            .install_async(InstallOptions {
                install_local_also: true,
            })
            .await
    }
}
