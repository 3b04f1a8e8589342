mod catalog;
mod loader;

pub use catalog::builtin_catalog;
pub use loader::{load_catalog_from_json, parse_catalog, LoadError};
