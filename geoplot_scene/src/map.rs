use crate::{
	Circle, Heatmap, HeatmapOptions, Line, LineOptions, MapObject, Placemark, PlacemarkOptions, Polygon, ShapeStyle,
	html::{HtmlOptions, map_to_html, standalone_html},
};
use anyhow::{Context, Result};
use geoplot_core::json::{JsonObject, JsonValue};
use geoplot_geometry::{PointResult, RawPoint};
use std::path::Path;

pub const DEFAULT_CENTER: [f64; 2] = [55.76, 37.64];
pub const DEFAULT_ZOOM: u32 = 8;

/// An interactive map scene: the view state plus the objects drawn on it, in drawing order.
///
/// Every `add_*` method normalizes its points first. If a point is invalid the error is returned
/// and the scene is left untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoMap {
	center: [f64; 2],
	zoom: u32,
	show_click_coords: bool,
	objects: Vec<MapObject>,
}

impl Default for GeoMap {
	fn default() -> Self {
		Self::new(false)
	}
}

impl GeoMap {
	/// An empty map at the default view. With `show_click_coords` set, clicks open a balloon
	/// showing the clicked coordinates.
	#[must_use]
	pub fn new(show_click_coords: bool) -> Self {
		Self {
			center: DEFAULT_CENTER,
			zoom: DEFAULT_ZOOM,
			show_click_coords,
			objects: Vec::new(),
		}
	}

	pub fn set_state(&mut self, center: [f64; 2], zoom: u32) {
		self.center = center;
		self.zoom = zoom;
	}

	pub fn add_object(&mut self, object: impl Into<MapObject>) {
		let object = object.into();
		log::debug!("add {} as object #{}", object.type_name(), self.objects.len());
		self.objects.push(object);
	}

	pub fn add_placemark(&mut self, point: impl Into<RawPoint>, options: PlacemarkOptions) -> PointResult<()> {
		self.add_object(Placemark::new(point, options)?);
		Ok(())
	}

	pub fn add_line<I>(&mut self, points: I, options: LineOptions) -> PointResult<()>
	where
		I: IntoIterator,
		I::Item: Into<RawPoint>,
	{
		self.add_object(Line::new(points, options)?);
		Ok(())
	}

	pub fn add_heatmap<I>(&mut self, points: I, options: HeatmapOptions) -> PointResult<()>
	where
		I: IntoIterator,
		I::Item: Into<RawPoint>,
	{
		self.add_object(Heatmap::new(points, options)?);
		Ok(())
	}

	pub fn add_circle(&mut self, center: impl Into<RawPoint>, radius: f64, style: ShapeStyle) -> PointResult<()> {
		self.add_object(Circle::new(center, radius, style)?);
		Ok(())
	}

	pub fn add_polygon<I, J>(&mut self, points_outer: I, points_inner: Option<J>, style: ShapeStyle) -> PointResult<()>
	where
		I: IntoIterator,
		I::Item: Into<RawPoint>,
		J: IntoIterator,
		J::Item: Into<RawPoint>,
	{
		self.add_object(Polygon::new(points_outer, points_inner, style)?);
		Ok(())
	}

	#[must_use]
	pub fn center(&self) -> [f64; 2] {
		self.center
	}

	#[must_use]
	pub fn zoom(&self) -> u32 {
		self.zoom
	}

	#[must_use]
	pub fn show_click_coords(&self) -> bool {
		self.show_click_coords
	}

	#[must_use]
	pub fn objects(&self) -> &[MapObject] {
		&self.objects
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.objects.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.objects.is_empty()
	}

	/// The scene document handed to the browser-side renderer.
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut state = JsonObject::new();
		state.set("center", self.center);
		state.set("zoom", self.zoom);

		let objects = self.objects.iter().map(|o| JsonValue::from(o.to_json())).collect::<Vec<_>>();

		let mut obj = JsonObject::new();
		obj.set("state", state);
		obj.set("objects", objects);
		obj.set("showClickCoords", self.show_click_coords);
		obj
	}

	/// HTML fragment showing the map, see [`map_to_html`].
	pub fn to_html(&self, options: &HtmlOptions) -> Result<String> {
		map_to_html(self, options)
	}

	/// A complete HTML page showing the map.
	pub fn to_standalone_html(&self, options: &HtmlOptions) -> Result<String> {
		Ok(standalone_html(&self.to_html(options)?))
	}

	pub fn save_html(&self, path: &Path, options: &HtmlOptions) -> Result<()> {
		let html = self.to_standalone_html(options)?;
		std::fs::write(path, html).with_context(|| format!("Failed to write map to {path:?}"))?;
		log::debug!("saved map with {} objects to {path:?}", self.objects.len());
		Ok(())
	}
}
