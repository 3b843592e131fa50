use geoplot_core::json::JsonObject;
use serde::Deserialize;

/// Styling shared by circles and polygons.
///
/// The `fill_*` and `stroke_*` overrides fall back to `color` and `opacity` when left empty.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ShapeStyle {
	pub hint: Option<String>,
	pub content: Option<String>,
	pub fill: bool,
	pub color: String,
	pub opacity: f64,
	pub width: f64,
	pub fill_color: Option<String>,
	pub fill_opacity: Option<f64>,
	pub stroke_color: Option<String>,
	pub stroke_opacity: Option<f64>,
}

impl Default for ShapeStyle {
	fn default() -> Self {
		Self {
			hint: None,
			content: None,
			fill: true,
			color: String::from("#000000"),
			opacity: 0.5,
			width: 1.0,
			fill_color: None,
			fill_opacity: None,
			stroke_color: None,
			stroke_opacity: None,
		}
	}
}

impl ShapeStyle {
	#[must_use]
	pub fn resolve(self) -> ResolvedStyle {
		ResolvedStyle {
			fill_color: self.fill_color.unwrap_or_else(|| self.color.clone()),
			fill_opacity: self.fill_opacity.unwrap_or(self.opacity),
			stroke_color: self.stroke_color.unwrap_or_else(|| self.color.clone()),
			stroke_opacity: self.stroke_opacity.unwrap_or(self.opacity),
			hint: self.hint,
			content: self.content,
			fill: self.fill,
			width: self.width,
		}
	}
}

/// A [`ShapeStyle`] with every override filled in.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
	pub hint: Option<String>,
	pub content: Option<String>,
	pub fill: bool,
	pub width: f64,
	pub fill_color: String,
	pub fill_opacity: f64,
	pub stroke_color: String,
	pub stroke_opacity: f64,
}

impl ResolvedStyle {
	pub(crate) fn write_json(&self, obj: &mut JsonObject) {
		obj.set("hint", self.hint.clone());
		obj.set("content", self.content.clone());
		obj.set("fill", self.fill);
		obj.set("width", self.width);
		obj.set("fillColor", self.fill_color.as_str());
		obj.set("fillOpacity", self.fill_opacity);
		obj.set("strokeColor", self.stroke_color.as_str());
		obj.set("strokeOpacity", self.stroke_opacity);
	}
}
