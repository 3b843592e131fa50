//! Point normalization for geoplot.
//!
//! Map objects accept points in several shapes (a [`GeoPoint`], a `[lat, lon]` or
//! `[lat, lon, weight]` sequence, a `"lat, lon"` string, or a dynamic [`JsonValue`]). This crate
//! turns all of them into one canonical [`GeoPoint`] and derives the JSON records the map
//! renderer expects: bare coordinate pairs, point features and feature collections.
//!
//! ```rust
//! use geoplot_geometry::{normalize_many, CoordinateCollection};
//!
//! let records = normalize_many(["55.7, 37.6", "55.8, 37.7"]).unwrap();
//! assert!(matches!(records, CoordinateCollection::Plain(_)));
//! assert_eq!(records.to_json().stringify(), "[[55.7,37.6],[55.8,37.7]]");
//! ```
//!
//! [`JsonValue`]: geoplot_core::json::JsonValue

mod collection;
mod coordinates;
mod error;
mod feature;
mod normalize;
mod point;
mod raw;

pub use collection::*;
pub use coordinates::*;
pub use error::*;
pub use feature::*;
pub use normalize::*;
pub use point::*;
pub use raw::*;
