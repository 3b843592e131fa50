//! HTML rendering of a [`GeoMap`](crate::GeoMap).
//!
//! The fragment produced by [`map_to_html`] loads the Yandex Maps API and its heatmap module,
//! defines a small bootstrap script and calls `show_map(id, scene)` with the serialized scene.
//! [`standalone_html`] wraps such a fragment into a complete page.

mod options;
mod render;

pub use options::HtmlOptions;
pub use render::{map_to_html, standalone_html};
