use crate::manifest::{DependencyCollection, Manifest};
use gnv_utils::DependencyDescriptor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added,
    Updated { previous: String },
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyOutcome {
    pub key: String,
    pub change: Change,
    /// Set when the same key is also recorded in the other collection.
    pub also_in: Option<DependencyCollection>,
}

pub struct DependencyClassifier;

impl DependencyClassifier {
    /// Record `descriptor` in `collection`. The last version recorded wins.
    pub fn classify(
        manifest: &mut Manifest,
        descriptor: &DependencyDescriptor,
        collection: DependencyCollection,
    ) -> ClassifyOutcome {
        let key = descriptor.key();
        let previous = manifest
            .collection_mut(collection)
            .insert(key.clone(), descriptor.version.clone());

        let change = match previous {
            None => Change::Added,
            Some(previous) if previous == descriptor.version => Change::Unchanged,
            Some(previous) => Change::Updated { previous },
        };

        let other = collection.other();
        let also_in = manifest.collection(other).contains_key(&key).then_some(other);

        ClassifyOutcome {
            key,
            change,
            also_in,
        }
    }

    /// Remove `key` from `collection`, returning the version it had.
    pub fn declassify(
        manifest: &mut Manifest,
        key: &str,
        collection: DependencyCollection,
    ) -> Option<String> {
        manifest.collection_mut(collection).shift_remove(key)
    }

    /// Collections that currently record `key`.
    pub fn locate(manifest: &Manifest, key: &str) -> Vec<DependencyCollection> {
        DependencyCollection::ALL
            .into_iter()
            .filter(|collection| manifest.collection(*collection).contains_key(key))
            .collect()
    }
}
