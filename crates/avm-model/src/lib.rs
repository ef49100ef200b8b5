//! AVM subject category data model definitions.

pub mod distance;
pub mod label;
pub mod record;
pub mod tables;
pub mod taxonomy;

pub use distance::{DistanceValue, Letter};
pub use label::{
    INTERACTING_GALAXY, MAGELLANIC_CLOUD_LABELS, PreparedLabel, Sentinel, is_magellanic_cloud,
};
pub use record::{InputRecord, RegistryEntry, ResolvedRecord};
pub use tables::{NumberTable, ReferenceTables, WordTable};
pub use taxonomy::{CategoryLabel, ENTRY_SEPARATOR, TaxonomyNumber, TaxonomyWord};
