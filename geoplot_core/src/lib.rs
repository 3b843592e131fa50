//! Shared building blocks for geoplot.
//!
//! Currently this is the JSON value tree that every scene is serialized into before it is
//! embedded into an HTML page.

pub mod json;
