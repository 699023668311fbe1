use std::env;
use std::path::{Path, PathBuf};

use gnv_constants::{DEFAULT_INDENT_WIDTH, DEFAULT_NPM_PROGRAM, NPM_ENV_VAR};
use gnv_project::WriteOptions;

/// Settings shared by every gnv operation on one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GnvConfig {
    pub project_dir: PathBuf,
    pub indent_width: usize,
    pub npm_program: String,
    pub debug: bool,
}

impl GnvConfig {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            indent_width: DEFAULT_INDENT_WIDTH,
            npm_program: DEFAULT_NPM_PROGRAM.to_string(),
            debug: false,
        }
    }

    /// Like [`GnvConfig::new`], with the npm executable taken from `GNV_NPM` when set.
    pub fn from_env(project_dir: impl Into<PathBuf>) -> Self {
        let mut config = Self::new(project_dir);
        if let Ok(program) = env::var(NPM_ENV_VAR) {
            let program = program.trim();
            if !program.is_empty() {
                config.npm_program = program.to_string();
            }
        }
        config
    }

    #[must_use]
    pub const fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub const fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub const fn write_options(&self) -> WriteOptions {
        WriteOptions {
            indent_width: self.indent_width,
        }
    }
}
