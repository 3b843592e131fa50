//! # geoplot scene
//!
//! Builds interactive map scenes and renders them as HTML for the Yandex Maps JS API.
//!
//! A [`GeoMap`] holds the view state (center, zoom) and an ordered list of drawable
//! [`MapObject`]s. Every `add_*` method normalizes its points first and only appends the object
//! when all of them are valid.
//!
//! ```rust
//! use geoplot_scene::{GeoMap, PlacemarkOptions, ShapeStyle};
//!
//! let mut map = GeoMap::default();
//! map.add_placemark("55.7, 37.6", PlacemarkOptions {
//!     hint: Some("Kremlin".into()),
//!     ..PlacemarkOptions::default()
//! }).unwrap();
//! map.add_circle([55.75, 37.62], 500.0, ShapeStyle::default()).unwrap();
//!
//! let json = map.to_json().stringify();
//! assert!(json.contains(r#""type":"Placemark""#));
//! ```

pub mod config;
pub mod html;
mod map;
mod objects;
pub mod tabular;

pub use map::*;
pub use objects::*;
