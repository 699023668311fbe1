//! Compact package descriptors of the form `[@scope/]name[@version]`.

use std::fmt;
use std::str::FromStr;

use gnv_constants::DEFAULT_VERSION;
use gnv_error::{GnvError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyDescriptor {
    pub name: String,
    /// Scope without the leading `@`, empty when unscoped.
    pub scope: String,
    pub version: String,
}

impl DependencyDescriptor {
    pub fn new(scope: &str, name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            scope: scope.to_string(),
            version: version.to_string(),
        }
    }

    /// Parses a descriptor. A missing version becomes `latest`.
    pub fn decode(descriptor: &str) -> Result<Self> {
        let descriptor = descriptor.trim();
        let malformed = || GnvError::MalformedDescriptor(descriptor.to_string());

        let (scope, rest) = match descriptor.strip_prefix('@') {
            Some(scoped) => {
                let (scope, rest) = scoped.split_once('/').ok_or_else(malformed)?;
                if scope.is_empty() {
                    return Err(malformed());
                }
                (scope, rest)
            }
            None => ("", descriptor),
        };

        let (name, version) = rest.split_once('@').unwrap_or((rest, ""));
        if name.is_empty() {
            return Err(malformed());
        }

        let version = if version.is_empty() {
            DEFAULT_VERSION
        } else {
            version
        };

        Ok(Self::new(scope, name, version))
    }

    /// `@scope/name@version` or `name@version`.
    pub fn encode(&self) -> String {
        format!("{}@{}", self.key(), self.version)
    }

    /// The manifest key: `@scope/name` or `name`.
    pub fn key(&self) -> String {
        if self.scope.is_empty() {
            self.name.clone()
        } else {
            format!("@{}/{}", self.scope, self.name)
        }
    }
}

impl fmt::Display for DependencyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for DependencyDescriptor {
    type Err = GnvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
