use owo_colors::OwoColorize;

use crate::config::GnvConfig;
use gnv_error::Result;
use gnv_project::{DependencyCollection, read_manifest};
use gnv_utils::get_installed_package_path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub collection: DependencyCollection,
    pub key: String,
    pub version: String,
    /// Present in node_modules (installed or linked).
    pub installed: bool,
}

pub struct ListManager {
    config: GnvConfig,
}

impl ListManager {
    pub const fn new(config: GnvConfig) -> Self {
        Self { config }
    }

    pub fn entries(&self) -> Result<Vec<ListEntry>> {
        let project_dir = self.config.project_dir();
        let manifest = read_manifest(project_dir)?;

        let entries = DependencyCollection::ALL
            .into_iter()
            .flat_map(|collection| {
                manifest
                    .collection(collection)
                    .iter()
                    .map(move |(key, version)| ListEntry {
                        collection,
                        key: key.clone(),
                        version: version.clone(),
                        installed: get_installed_package_path(project_dir, key).exists(),
                    })
            })
            .collect();

        Ok(entries)
    }

    pub fn list_deps(&self) -> Result<()> {
        let entries = self.entries()?;

        if entries.is_empty() {
            gnv_logger::info("No gnv or peer dependencies recorded.");
            return Ok(());
        }

        for collection in DependencyCollection::ALL {
            let mut section = entries
                .iter()
                .filter(|entry| entry.collection == collection)
                .peekable();
            if section.peek().is_none() {
                continue;
            }

            gnv_logger::info(&format!("{collection}:"));
            for entry in section {
                let marker = if entry.installed {
                    "✓".bright_green().to_string()
                } else {
                    "✗".bright_red().to_string()
                };
                println!(
                    "  {marker} {} {}",
                    entry.key.bright_white(),
                    entry.version.bright_black()
                );
            }
        }

        Ok(())
    }
}
