//! # dragon-search
//!
//! Search, filter, and sort over a fixed catalog of dragon and cave cards.
//!
//! ## Design Principles
//!
//! 1. **Build Once**: The catalog store and text index are built at startup
//!    and never mutated. Share them behind `Arc`.
//!
//! 2. **Queries Are Values**: A `Query` is replaced wholesale on every
//!    interaction; the pipeline recomputes the result from scratch.
//!
//! 3. **Total Functions**: Filtering, sorting, searching and paging cannot
//!    fail. Only catalog loading returns errors.
//!
//! ## Pipeline
//!
//! - **Candidates**: every card for blank text, otherwise text index hits.
//! - **Filter**: the facet predicate (`search::include`).
//! - **Sort**: a stable sort by number, name, victory points, or size.
//!
//! ## Modules
//!
//! - `core`: Configuration and errors
//! - `cards`: Vocabularies, card records, JSON loading, the catalog store
//! - `search`: Text index, query, predicate, comparator, pipeline, stats, pager
//! - `browser`: Query/result state for a UI layer

pub mod core;
pub mod cards;
pub mod search;
pub mod browser;

// Re-export commonly used types
pub use crate::core::{BrowserConfig, CatalogError, UnknownValue};

pub use crate::cards::{
    AbilityType, Card, CardId, CardRegistry, CardType, CostFacet, CostState, Costs, Expansion,
    Facet, FacetSet, Personality, Region, Resource, Size,
};

pub use crate::search::{
    compare, compare_directed, include, run, FacetStats, FacetValue, IndexedField, Pager, Query,
    SearchResult, SortKey, SortOrder, TextIndex,
};

pub use crate::browser::CardBrowser;
