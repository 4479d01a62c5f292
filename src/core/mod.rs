//! Core types: configuration and errors.

pub mod config;
pub mod error;

pub use config::{BrowserConfig, DEFAULT_PAGE_INCREMENT};
pub use error::{CatalogError, Result, UnknownValue};
