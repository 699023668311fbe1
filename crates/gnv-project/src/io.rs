//! Reading and writing the project manifest.
//!
//! Every write replaces the whole file through a temporary file in the same
//! directory, so a failed write leaves the old manifest in place. There is no
//! locking: two processes
//! doing read-modify-write against the same package.json will lose updates
//! (last write wins), so only one gnv process should run per project.

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

use crate::manifest::Manifest;
use gnv_constants::DEFAULT_INDENT_WIDTH;
use gnv_error::{GnvError, Result};
use gnv_utils::get_package_json_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    pub indent_width: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    /// No package.json exists in the directory; nothing was created.
    Skipped,
}

/// Loads `<project_dir>/package.json`. A missing file is an empty manifest.
pub fn read_manifest(project_dir: &Path) -> Result<Manifest> {
    let path = get_package_json_path(project_dir);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Manifest::default()),
        Err(e) => return Err(GnvError::manifest_read(path.display(), e)),
    };

    serde_json::from_str(&content).map_err(|e| GnvError::manifest_read(path.display(), e))
}

/// Overwrites `<project_dir>/package.json` with `manifest`.
pub fn write_manifest(
    project_dir: &Path,
    manifest: &Manifest,
    options: WriteOptions,
) -> Result<WriteOutcome> {
    let path = get_package_json_path(project_dir);
    let content = to_json(manifest, options.indent_width)
        .map_err(|e| GnvError::write(path.display(), e))?;

    // Never create the manifest: a directory without one is not a package.
    let permissions = match fs::metadata(&path) {
        Ok(metadata) => metadata.permissions(),
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(WriteOutcome::Skipped),
        Err(e) => return Err(GnvError::write(path.display(), e)),
    };

    replace_contents(&path, |file| {
        file.write_all(&content)?;
        file.as_file().set_permissions(permissions)
    })
    .map_err(|e| GnvError::write(path.display(), e))?;

    Ok(WriteOutcome::Written)
}

/// Writes a sibling temporary file and renames it over `path`. The temporary
/// file is removed if `fill` or the rename fails.
fn replace_contents<F>(path: &Path, fill: F) -> io::Result<()>
where
    F: FnOnce(&mut NamedTempFile) -> io::Result<()>,
{
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = NamedTempFile::new_in(dir)?;
    fill(&mut file)?;
    file.flush()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn to_json(manifest: &Manifest, indent_width: usize) -> serde_json::Result<Vec<u8>> {
    let indent = " ".repeat(indent_width);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    manifest.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn write_raw(dir: &Path, content: &str) {
        fs::write(get_package_json_path(dir), content).unwrap();
    }

    fn read_raw(dir: &Path) -> String {
        fs::read_to_string(get_package_json_path(dir)).unwrap()
    }

    #[test]
    fn test_missing_manifest_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let manifest = read_manifest(dir.path()).unwrap();
        assert!(manifest.local.is_empty());
        assert!(manifest.peer.is_empty());
        assert_eq!(manifest.extra_fields().count(), 0);
    }

    #[test]
    fn test_invalid_json_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        write_raw(dir.path(), "{ not json");
        let result = read_manifest(dir.path());
        assert!(matches!(result, Err(GnvError::ManifestRead { .. })));
    }

    #[test]
    fn test_non_object_manifest_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        write_raw(dir.path(), "[1, 2, 3]");
        let result = read_manifest(dir.path());
        assert!(matches!(result, Err(GnvError::ManifestRead { .. })));
    }

    #[test]
    fn test_write_preserves_unknown_fields() {
        let dir = TempDir::new().unwrap();
        write_raw(
            dir.path(),
            r#"{"name":"demo","license":"MIT","scripts":{"test":"mocha"}}"#,
        );

        let mut manifest = read_manifest(dir.path()).unwrap();
        manifest.local.insert("foo".to_string(), "1.0.0".to_string());
        let outcome = write_manifest(dir.path(), &manifest, WriteOptions::default()).unwrap();
        assert_eq!(outcome, WriteOutcome::Written);

        let written: Value = serde_json::from_str(&read_raw(dir.path())).unwrap();
        assert_eq!(
            written,
            json!({
                "name": "demo",
                "license": "MIT",
                "scripts": { "test": "mocha" },
                "gnvDependencies": { "foo": "1.0.0" }
            })
        );
    }

    #[test]
    fn test_write_does_not_create_manifest() {
        let dir = TempDir::new().unwrap();
        let mut manifest = Manifest::default();
        manifest.peer.insert("foo".to_string(), "latest".to_string());

        let outcome = write_manifest(dir.path(), &manifest, WriteOptions::default()).unwrap();
        assert_eq!(outcome, WriteOutcome::Skipped);
        assert!(!get_package_json_path(dir.path()).exists());
    }

    #[test]
    fn test_indent_width_is_honoured() {
        let dir = TempDir::new().unwrap();
        write_raw(dir.path(), r#"{"name":"demo"}"#);

        let manifest = read_manifest(dir.path()).unwrap();
        write_manifest(dir.path(), &manifest, WriteOptions { indent_width: 4 }).unwrap();

        assert_eq!(read_raw(dir.path()), "{\n    \"name\": \"demo\"\n}\n");
    }

    #[test]
    fn test_write_into_unwritable_target_fails() {
        let dir = TempDir::new().unwrap();
        // A file cannot be renamed over a directory named package.json.
        fs::create_dir(get_package_json_path(dir.path())).unwrap();

        let result = write_manifest(dir.path(), &Manifest::default(), WriteOptions::default());
        assert!(matches!(result, Err(GnvError::Write { .. })));
    }

    #[test]
    fn test_failed_write_keeps_existing_manifest() {
        let dir = TempDir::new().unwrap();
        let original = r#"{"name":"demo","license":"MIT"}"#;
        write_raw(dir.path(), original);
        let path = get_package_json_path(dir.path());

        let result = replace_contents(&path, |file| {
            file.write_all(b"{\n  \"name\": ")?;
            Err(io::Error::other("no space left on device"))
        });

        assert!(result.is_err());
        assert_eq!(read_raw(dir.path()), original);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_keeps_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write_raw(dir.path(), r#"{"name":"demo"}"#);
        let path = get_package_json_path(dir.path());
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let manifest = read_manifest(dir.path()).unwrap();
        write_manifest(dir.path(), &manifest, WriteOptions::default()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_read_write_round_trip_keeps_text() {
        let dir = TempDir::new().unwrap();
        let original = "{\n  \"name\": \"demo\",\n  \"peerDependencies\": {\n    \"@org/tool\": \"1.2.3\"\n  },\n  \"license\": \"MIT\"\n}\n";
        write_raw(dir.path(), original);

        let manifest = read_manifest(dir.path()).unwrap();
        write_manifest(dir.path(), &manifest, WriteOptions::default()).unwrap();

        assert_eq!(read_raw(dir.path()), original);
    }
}
