use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use gnv_constants::{LOCAL_DEPENDENCIES_FIELD, PEER_DEPENDENCIES_FIELD};

/// Package key (`@scope/name` or `name`) to version.
pub type DependencyMap = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyCollection {
    /// Installed into the project's node_modules only (`gnvDependencies`).
    Local,
    /// Installed globally, then linked into the project (`peerDependencies`).
    Peer,
}

impl DependencyCollection {
    pub const ALL: [Self; 2] = [Self::Local, Self::Peer];

    #[must_use]
    pub const fn from_peer_flag(peer: bool) -> Self {
        if peer { Self::Peer } else { Self::Local }
    }

    /// The manifest field backing this collection.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Local => LOCAL_DEPENDENCIES_FIELD,
            Self::Peer => PEER_DEPENDENCIES_FIELD,
        }
    }

    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Local => Self::Peer,
            Self::Peer => Self::Local,
        }
    }
}

impl fmt::Display for DependencyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// A project manifest (package.json).
///
/// The two dependency collections are typed; every other top-level field is
/// kept verbatim in `fields` together with its position, so writing a manifest
/// back only changes what gnv owns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Manifest {
    pub local: DependencyMap,
    pub peer: DependencyMap,
    fields: Map<String, Value>,
}

impl Manifest {
    #[must_use]
    pub const fn collection(&self, collection: DependencyCollection) -> &DependencyMap {
        match collection {
            DependencyCollection::Local => &self.local,
            DependencyCollection::Peer => &self.peer,
        }
    }

    pub fn collection_mut(&mut self, collection: DependencyCollection) -> &mut DependencyMap {
        match collection {
            DependencyCollection::Local => &mut self.local,
            DependencyCollection::Peer => &mut self.peer,
        }
    }

    /// Top-level fields gnv does not own, in file order.
    pub fn extra_fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields
            .iter()
            .filter(|(key, _)| !Self::is_owned_field(key))
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        if Self::is_owned_field(key) {
            return None;
        }
        self.fields.get(key)
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    fn is_owned_field(key: &str) -> bool {
        DependencyCollection::ALL
            .iter()
            .any(|collection| collection.field() == key)
    }

    fn parse_collection(
        fields: &Map<String, Value>,
        collection: DependencyCollection,
    ) -> Result<DependencyMap, String> {
        match fields.get(collection.field()) {
            None | Some(Value::Null) => Ok(DependencyMap::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                format!(
                    "'{}' must map package names to version strings ({e})",
                    collection.field()
                )
            }),
        }
    }
}

impl TryFrom<Map<String, Value>> for Manifest {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let local = Self::parse_collection(&fields, DependencyCollection::Local)?;
        let peer = Self::parse_collection(&fields, DependencyCollection::Peer)?;

        Ok(Self {
            local,
            peer,
            fields,
        })
    }
}

impl From<Manifest> for Map<String, Value> {
    fn from(manifest: Manifest) -> Self {
        let Manifest {
            local,
            peer,
            mut fields,
        } = manifest;

        for (collection, deps) in [
            (DependencyCollection::Local, local),
            (DependencyCollection::Peer, peer),
        ] {
            // Existing fields keep their position; new ones go last.
            if deps.is_empty() && !fields.contains_key(collection.field()) {
                continue;
            }
            let deps = deps
                .into_iter()
                .map(|(name, version)| (name, Value::String(version)))
                .collect();
            fields.insert(collection.field().to_string(), Value::Object(deps));
        }

        fields
    }
}
