use super::{ResolvedStyle, ShapeStyle};
use geoplot_core::json::JsonObject;
use geoplot_geometry::{CoordinateRecord, PointResult, RawPoint, normalize_coordinates};

/// A circle around `center`; `radius` is in meters.
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
	pub center: CoordinateRecord,
	pub radius: f64,
	pub style: ResolvedStyle,
}

impl Circle {
	pub fn new(center: impl Into<RawPoint>, radius: f64, style: ShapeStyle) -> PointResult<Self> {
		Ok(Self {
			center: normalize_coordinates(center)?,
			radius,
			style: style.resolve(),
		})
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("center", self.center.to_json());
		obj.set("radius", self.radius);
		self.style.write_json(&mut obj);
		obj
	}
}
