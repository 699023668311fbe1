pub mod package_spec;
pub mod path_utils;

pub use package_spec::DependencyDescriptor;
pub use path_utils::*;
