pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Local and peer dependency manager layered on top of npm";
pub const BIN_NAME: &str = "gnv";

pub const MANIFEST_FILE: &str = "package.json";
pub const LOCAL_DEPENDENCIES_FIELD: &str = "gnvDependencies";
pub const PEER_DEPENDENCIES_FIELD: &str = "peerDependencies";
pub const DEFAULT_VERSION: &str = "latest";
pub const DEFAULT_INDENT_WIDTH: usize = 2;

pub const NPM_ENV_VAR: &str = "GNV_NPM";
#[cfg(target_os = "windows")]
pub const DEFAULT_NPM_PROGRAM: &str = "npm.cmd";
#[cfg(not(target_os = "windows"))]
pub const DEFAULT_NPM_PROGRAM: &str = "npm";

/// Flags passed to every npm call so that npm never rewrites the manifest.
pub const NPM_QUIET_FLAGS: &[&str] = &["--no-save", "--silent"];
pub const NPM_FORCE_FLAG: &str = "-f";
pub const NPM_GLOBAL_FLAG: &str = "-g";

pub const COMMANDS: &[(&str, &str, &[&str])] = &[
    (
        "add",
        "Records packages as gnv (local) or peer dependencies and installs them",
        &["a"],
    ),
    (
        "remove",
        "Removes packages from gnvDependencies or peerDependencies",
        &["rm"],
    ),
    (
        "install",
        "Links this CLI and installs peer (and with --dev, local) dependencies",
        &["i"],
    ),
    ("list", "Lists gnv and peer dependencies", &["ls"]),
];
pub const EXAMPLES: &[(&str, &str)] = &[
    ("gnv add chalk@5.3.0", "Install chalk into node_modules only"),
    ("gnv add @babel/core --peer", "Install globally and link into the project"),
    ("gnv install", "Link gnv and install peer dependencies"),
    ("gnv install --dev", "Also install gnv (local) dependencies"),
    ("gnv remove chalk", "Forget a gnv dependency"),
    ("gnv list", "List gnv and peer dependencies"),
];
