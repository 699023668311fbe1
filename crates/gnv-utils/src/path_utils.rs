use std::path::{Path, PathBuf};

use gnv_constants::MANIFEST_FILE;

/// Get the package.json path for a project
pub fn get_package_json_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE)
}

/// Get the node_modules directory for a project
pub fn get_node_modules_path(project_dir: &Path) -> PathBuf {
    project_dir.join("node_modules")
}

/// Where npm places a package inside node_modules, handling `@scope/name` keys
pub fn get_installed_package_path(project_dir: &Path, package_key: &str) -> PathBuf {
    let node_modules = get_node_modules_path(project_dir);
    match package_key.split_once('/') {
        Some((scope, name)) if scope.starts_with('@') => node_modules.join(scope).join(name),
        _ => node_modules.join(package_key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoped_package_path_is_nested() {
        let path = get_installed_package_path(Path::new("/proj"), "@types/node");
        assert_eq!(
            path,
            Path::new("/proj").join("node_modules").join("@types").join("node")
        );
    }

    #[test]
    fn test_unscoped_package_path() {
        let path = get_installed_package_path(Path::new("/proj"), "chalk");
        assert_eq!(path, Path::new("/proj").join("node_modules").join("chalk"));
    }
}
