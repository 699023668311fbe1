pub mod dependency_classifier;
pub mod io;
pub mod manifest;

pub use dependency_classifier::{Change, ClassifyOutcome, DependencyClassifier};
pub use io::{WriteOptions, WriteOutcome, read_manifest, write_manifest};
pub use manifest::{DependencyCollection, DependencyMap, Manifest};
