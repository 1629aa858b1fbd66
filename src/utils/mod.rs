//! Shared helpers

pub mod path_resolver;

pub use path_resolver::{normalize_path, split_package_specifier, ModuleResolver};
