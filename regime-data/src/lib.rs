//! File input for the regime comparison: slab tables for new financial years
//! and taxpayer profiles, one per TOML document or many per CSV batch.

pub mod profile_document;
pub mod profile_loader;
mod slab_loader;

pub use profile_document::{ProfileDocument, ProfileDocumentError, RentDetails};
pub use profile_loader::{NamedProfile, ProfileLoadError};
pub use slab_loader::{SlabLoaderError, SlabRecord, SlabTableLoader, SlabTables};
