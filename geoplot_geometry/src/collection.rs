use super::CoordinateRecord;
use geoplot_core::json::{JsonObject, JsonValue};

/// The serialized form of a list of normalized points.
#[derive(Clone, Debug, PartialEq)]
pub enum CoordinateCollection {
	/// Written as a bare JSON array of records.
	Plain(Vec<CoordinateRecord>),
	/// Written as `{"type":"FeatureCollection","features":[...]}`.
	///
	/// The records keep their own shape, so bare pairs and features may be mixed.
	FeatureCollection(Vec<CoordinateRecord>),
}

impl CoordinateCollection {
	/// Choose the collection shape from the records.
	///
	/// Only the first record decides: a leading feature wraps the whole list in a
	/// feature collection, anything else stays a plain array.
	#[must_use]
	pub fn from_records(records: Vec<CoordinateRecord>) -> Self {
		if records.first().is_some_and(CoordinateRecord::is_feature) {
			CoordinateCollection::FeatureCollection(records)
		} else {
			CoordinateCollection::Plain(records)
		}
	}

	#[must_use]
	pub fn records(&self) -> &[CoordinateRecord] {
		match self {
			CoordinateCollection::Plain(records) | CoordinateCollection::FeatureCollection(records) => records,
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.records().len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.records().is_empty()
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		let features = self.records().iter().map(CoordinateRecord::to_json).collect::<Vec<_>>();
		match self {
			CoordinateCollection::Plain(_) => JsonValue::from(features),
			CoordinateCollection::FeatureCollection(_) => {
				let mut obj = JsonObject::new();
				obj.set("type", "FeatureCollection");
				obj.set("features", features);
				JsonValue::from(obj)
			}
		}
	}
}
