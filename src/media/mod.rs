pub mod catalog;

pub use catalog::{load_lineup, CatalogError, ManifestCatalog, ManifestEntry, MediaCatalog};
