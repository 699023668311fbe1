use std::fmt;

use thiserror::Error;

/// How an npm subprocess ended when it did not succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitInfo {
    Code(i32),
    /// Terminated without an exit code (killed by a signal on unix).
    Signal,
    /// The process could not be started at all.
    Spawn(String),
}

impl fmt::Display for ExitInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "exited with code {code}"),
            Self::Signal => write!(f, "terminated by signal"),
            Self::Spawn(reason) => write!(f, "failed to start: {reason}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GnvError {
    #[error("Malformed package descriptor: '{0}'")]
    MalformedDescriptor(String),

    #[error("Could not read manifest {path}: {reason}")]
    ManifestRead { path: String, reason: String },

    #[error("Could not write manifest {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Install step '{step}' failed ({exit}) while running `{command}`")]
    InstallStepFailed {
        step: &'static str,
        command: String,
        exit: ExitInfo,
    },

    #[error("Failed to create async runtime: {0}")]
    Runtime(String),
}

impl GnvError {
    pub fn manifest_read(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self::ManifestRead {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn write(path: impl fmt::Display, reason: impl fmt::Display) -> Self {
        Self::Write {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Name of the install step that failed, if this is a step failure.
    #[must_use]
    pub const fn failed_step(&self) -> Option<&'static str> {
        match self {
            Self::InstallStepFailed { step, .. } => Some(*step),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GnvError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_failure_message_names_step_and_command() {
        let err = GnvError::InstallStepFailed {
            step: "self-link",
            command: "npm link -f --no-save --silent".to_string(),
            exit: ExitInfo::Code(1),
        };

        let message = err.to_string();
        assert!(message.contains("self-link"));
        assert!(message.contains("exited with code 1"));
        assert!(message.contains("npm link"));
        assert_eq!(err.failed_step(), Some("self-link"));
    }

    #[test]
    fn test_non_step_errors_have_no_step() {
        let err = GnvError::MalformedDescriptor("@".to_string());
        assert_eq!(err.failed_step(), None);
        assert_eq!(err.to_string(), "Malformed package descriptor: '@'");
    }

    #[test]
    fn test_spawn_exit_info_display() {
        let exit = ExitInfo::Spawn("No such file or directory".to_string());
        assert_eq!(
            exit.to_string(),
            "failed to start: No such file or directory"
        );
    }
}
