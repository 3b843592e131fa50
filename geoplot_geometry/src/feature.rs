use super::{Coordinates, GeoPoint};
use geoplot_core::json::{JsonObject, JsonValue};

/// A weighted point expressed as a GeoJSON-style `Feature` with a `Point` geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct PointFeature {
	pub coordinates: Coordinates,
	pub weight: f64,
}

impl PointFeature {
	#[must_use]
	pub fn new(coordinates: Coordinates, weight: f64) -> Self {
		Self { coordinates, weight }
	}

	/// `{"type":"Feature","geometry":{"type":"Point","coordinates":[lat,lon]},"properties":{"weight":w}}`
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut geometry = JsonObject::new();
		geometry.set("type", "Point");
		geometry.set("coordinates", self.coordinates.to_json());

		let mut properties = JsonObject::new();
		properties.set("weight", self.weight);

		let mut obj = JsonObject::new();
		obj.set("type", "Feature");
		obj.set("geometry", geometry);
		obj.set("properties", properties);
		obj
	}
}

/// The serialized form of one normalized point.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinateRecord {
	/// Unweighted point, written as a bare `[lat, lon]` pair.
	Pair(Coordinates),
	/// Weighted point, written as a `Feature`.
	Feature(PointFeature),
}

impl CoordinateRecord {
	#[must_use]
	pub fn is_feature(&self) -> bool {
		matches!(self, CoordinateRecord::Feature(_))
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		match self {
			CoordinateRecord::Pair(coordinates) => coordinates.to_json(),
			CoordinateRecord::Feature(feature) => JsonValue::from(feature.to_json()),
		}
	}
}

impl From<GeoPoint> for CoordinateRecord {
	fn from(point: GeoPoint) -> Self {
		match point.weight {
			Some(weight) => CoordinateRecord::Feature(PointFeature::new(point.to_coord(), weight)),
			None => CoordinateRecord::Pair(point.to_coord()),
		}
	}
}
