//! Drawable map objects.
//!
//! Each object stores its points already normalized, together with the style options it was
//! created with. [`MapObject::to_json`] produces the record the browser-side renderer dispatches
//! on via its `type` field.

mod circle;
mod heatmap;
mod line;
mod placemark;
mod polygon;
mod style;

pub use circle::*;
pub use heatmap::*;
pub use line::*;
pub use placemark::*;
pub use polygon::*;
pub use style::*;

use geoplot_core::json::JsonObject;

#[derive(Clone, Debug, PartialEq)]
pub enum MapObject {
	Placemark(Placemark),
	Line(Line),
	Heatmap(Heatmap),
	Circle(Circle),
	Polygon(Polygon),
}

impl MapObject {
	/// The value of the `type` field in the serialized record.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			MapObject::Placemark(_) => "Placemark",
			MapObject::Line(_) => "Line",
			MapObject::Heatmap(_) => "Heatmap",
			MapObject::Circle(_) => "Circle",
			MapObject::Polygon(_) => "Polygon",
		}
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = match self {
			MapObject::Placemark(o) => o.to_json(),
			MapObject::Line(o) => o.to_json(),
			MapObject::Heatmap(o) => o.to_json(),
			MapObject::Circle(o) => o.to_json(),
			MapObject::Polygon(o) => o.to_json(),
		};
		obj.set("type", self.type_name());
		obj
	}
}

macro_rules! impl_from_object {
	($($variant:ident),+ $(,)?) => {
		$(
			impl From<$variant> for MapObject {
				fn from(value: $variant) -> Self {
					MapObject::$variant(value)
				}
			}
		)+
	};
}

impl_from_object!(Placemark, Line, Heatmap, Circle, Polygon);

/// Keep a string option only if it holds a non-empty value.
fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}
