//! Platform-independent data layer: catalog, parsing, transforms, fetch.

pub mod catalog;
pub mod error;
pub mod fetch;
pub mod format;
pub mod metadata;
pub mod scores;
