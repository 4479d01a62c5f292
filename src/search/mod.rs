//! Search over the card catalog.
//!
//! ## Key Types
//!
//! - `TextIndex`: Substring inverted index over name, ability, number
//! - `Query`: Free text, facet inclusion sets, sort key and direction
//! - `include`: Facet predicate for one card
//! - `compare` / `compare_directed`: Sort comparator
//! - `run`: The pipeline, producing a `SearchResult`
//! - `FacetStats`: Per-facet counts over a result
//! - `Pager`: Incremental reveal of a result

pub mod filter;
pub mod index;
pub mod pager;
pub mod pipeline;
pub mod query;
pub mod sort;
pub mod stats;

pub use filter::include;
pub use index::{tokenize, IndexedField, TextIndex};
pub use pager::Pager;
pub use pipeline::{run, SearchResult};
pub use query::{Query, SortKey, SortOrder};
pub use sort::{compare, compare_directed};
pub use stats::{FacetStats, FacetValue};
