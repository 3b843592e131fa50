//! YAML scene descriptions.
//!
//! ```yaml
//! show_click_coords: true
//! state: { center: [55.76, 37.64], zoom: 10 }
//! html: { width: 800, height: 600 }
//! objects:
//!   - type: placemark
//!     point: "55.75, 37.62"
//!     hint: Kremlin
//!   - type: circle
//!     center: [55.75, 37.62]
//!     radius: 1000
//!     style: { color: "#ff0000" }
//! ```

mod html;
mod object;
mod scene;

pub use html::HtmlConfig;
pub use object::*;
pub use scene::{SceneConfig, StateConfig};
