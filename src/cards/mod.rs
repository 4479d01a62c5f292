//! Card catalog: vocabularies, records, loading, and the catalog store.
//!
//! ## Key Types
//!
//! - `Facet` / `FacetSet`: closed vocabularies and bitsets over them
//! - `CardId`: Stable card identifier
//! - `Card`: Immutable catalog record
//! - `Costs` / `CostState`: Resource costs and the derived cost state
//! - `CardRegistry`: Catalog store in catalog order with id lookup

pub mod attributes;
pub mod definition;
pub mod loader;
pub mod registry;

pub use attributes::{
    AbilityType, CardType, CostFacet, Expansion, Facet, FacetSet, Personality, Region, Resource,
    Size,
};
pub use definition::{Card, CardId, CostState, Costs};
pub use loader::{load_catalog, parse_catalog};
pub use registry::CardRegistry;
