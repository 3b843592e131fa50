use super::non_empty;
use geoplot_core::json::JsonObject;
use geoplot_geometry::{CoordinateRecord, PointResult, RawPoint, normalize_coordinates};

pub const DEFAULT_PRESET: &str = "islands#icon";

#[derive(Clone, Debug, PartialEq)]
pub struct PlacemarkOptions {
	/// Shown on hover.
	pub hint: Option<String>,
	/// Shown in the balloon when the placemark is clicked. May contain HTML.
	pub content: Option<String>,
	/// Icon preset; `None` or an empty string leaves it to the renderer.
	pub preset: Option<String>,
	pub icon_color: Option<String>,
}

impl Default for PlacemarkOptions {
	fn default() -> Self {
		Self {
			hint: None,
			content: None,
			preset: Some(DEFAULT_PRESET.to_string()),
			icon_color: None,
		}
	}
}

/// A single marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Placemark {
	pub point: CoordinateRecord,
	pub hint: Option<String>,
	pub content: Option<String>,
	pub preset: Option<String>,
	pub icon_color: Option<String>,
}

impl Placemark {
	pub fn new(point: impl Into<RawPoint>, options: PlacemarkOptions) -> PointResult<Self> {
		Ok(Self {
			point: normalize_coordinates(point)?,
			hint: options.hint,
			content: options.content,
			preset: non_empty(options.preset),
			icon_color: non_empty(options.icon_color),
		})
	}

	/// `hint` and `content` are always written (possibly `null`), `preset` and `iconColor` only
	/// when set.
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("point", self.point.to_json());
		obj.set("hint", self.hint.clone());
		obj.set("content", self.content.clone());
		obj.set_optional("preset", self.preset.clone());
		obj.set_optional("iconColor", self.icon_color.clone());
		obj
	}
}
