use crate::config::GnvConfig;
use gnv_error::Result;
use gnv_project::{DependencyClassifier, DependencyCollection, read_manifest, write_manifest};
use gnv_utils::DependencyDescriptor;

pub struct RemoveManager {
    config: GnvConfig,
}

impl RemoveManager {
    pub const fn new(config: GnvConfig) -> Self {
        Self { config }
    }

    /// Deletes each package from `collection` and returns the keys that were
    /// present. Versions in the descriptors are ignored; packages that are not
    /// recorded are skipped. Nothing is uninstalled.
    pub fn remove(
        &self,
        descriptors: &[String],
        collection: DependencyCollection,
    ) -> Result<Vec<String>> {
        let project_dir = self.config.project_dir();
        let mut manifest = read_manifest(project_dir)?;
        let mut removed = Vec::new();

        for raw in descriptors {
            let key = DependencyDescriptor::decode(raw)?.key();

            let Some(version) = DependencyClassifier::declassify(&mut manifest, &key, collection)
            else {
                if DependencyClassifier::locate(&manifest, &key).contains(&collection.other()) {
                    gnv_logger::warn(&format!(
                        "{key} is only listed in {}; nothing removed",
                        collection.other()
                    ));
                } else {
                    gnv_logger::debug(
                        &format!("{key} is not in {collection}, nothing to remove"),
                        self.config.debug,
                    );
                }
                continue;
            };

            // The key came from package.json, so the file exists to be written.
            write_manifest(project_dir, &manifest, self.config.write_options())?;

            gnv_logger::debug(&format!("Removed {key}@{version} from {collection}"), self.config.debug);
            removed.push(key);
        }

        if removed.is_empty() {
            gnv_logger::info(&format!("Nothing to remove from {collection}."));
        } else {
            gnv_logger::success(&format!(
                "Removed {} from {collection}.",
                removed.join(" ")
            ));
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{project_with, read_json};
    use gnv_error::GnvError;
    use serde_json::json;

    #[test]
    fn test_remove_deletes_key_from_target_collection() {
        let project = project_with(json!({
            "name": "demo",
            "gnvDependencies": { "foo": "1.0.0", "bar": "2.0.0" },
            "peerDependencies": { "foo": "3.0.0" }
        }));
        let manager = RemoveManager::new(GnvConfig::new(project.path()));

        let removed = manager
            .remove(&["foo@9.9.9".to_string()], DependencyCollection::Local)
            .unwrap();

        assert_eq!(removed, vec!["foo"]);
        assert_eq!(
            read_json(project.path()),
            json!({
                "name": "demo",
                "gnvDependencies": { "bar": "2.0.0" },
                "peerDependencies": { "foo": "3.0.0" }
            })
        );
    }

    #[test]
    fn test_remove_absent_key_is_a_no_op() {
        let original = json!({ "name": "demo", "peerDependencies": { "@org/tool": "1.0.0" } });
        let project = project_with(original.clone());
        let manager = RemoveManager::new(GnvConfig::new(project.path()));

        let removed = manager
            .remove(&["missing".to_string()], DependencyCollection::Peer)
            .unwrap();
        assert!(removed.is_empty());

        let removed = manager
            .remove(&["@org/tool".to_string()], DependencyCollection::Peer)
            .unwrap();
        assert_eq!(removed, vec!["@org/tool"]);

        let removed = manager
            .remove(&["@org/tool".to_string()], DependencyCollection::Peer)
            .unwrap();
        assert!(removed.is_empty());
        assert_eq!(
            read_json(project.path()),
            json!({ "name": "demo", "peerDependencies": {} })
        );
    }

    #[test]
    fn test_remove_rejects_malformed_descriptor() {
        let project = project_with(json!({ "name": "demo" }));
        let manager = RemoveManager::new(GnvConfig::new(project.path()));

        let result = manager.remove(&["@".to_string()], DependencyCollection::Local);
        assert!(matches!(result, Err(GnvError::MalformedDescriptor(_))));
    }

    #[test]
    fn test_remove_without_manifest() {
        let project = tempfile::TempDir::new().unwrap();
        let manager = RemoveManager::new(GnvConfig::new(project.path()));

        let removed = manager
            .remove(&["foo".to_string()], DependencyCollection::Local)
            .unwrap();
        assert!(removed.is_empty());
        assert!(!project.path().join("package.json").exists());
    }
}
