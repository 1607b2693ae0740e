// Asset catalog
//
// The simulation core never decodes images or sound; it only needs to
// know which animation frames exist so actors can assemble their
// sequences at construction time. The presentation layer implements
// `SpriteCatalog` against its real asset store; `StaticCatalog` ships
// the stock forest inventory for the default build and for tests.

mod catalog;

pub use catalog::{SpriteCatalog, StaticCatalog};

/// Asset lookup errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("no frames found for sequence: {0}")]
    MissingSequence(String),
}
