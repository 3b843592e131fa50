use super::GeoPoint;
use geoplot_core::json::JsonValue;
use serde::Deserialize;

/// A point in any of the encodings the map objects accept.
///
/// Normalizing a `RawPoint` (see [`crate::normalize`]) dispatches on the variant and either
/// yields a [`GeoPoint`] or fails with [`crate::InvalidPointError`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(from = "RawPointRepr")]
pub enum RawPoint {
	/// Already normalized, passed through unchanged.
	Point(GeoPoint),
	/// `[lat, lon]` or `[lat, lon, weight]`.
	Sequence(Vec<f64>),
	/// `"lat,lon"` or `"lat,lon,weight"`.
	Text(String),
	/// Untyped input, e.g. a cell of a table or a value taken from a parsed document.
	Value(JsonValue),
}

impl RawPoint {
	/// Render the raw value for error messages.
	#[must_use]
	pub fn describe(&self) -> String {
		match self {
			RawPoint::Point(point) => format!("{point:?}"),
			RawPoint::Sequence(values) => format!("{values:?}"),
			RawPoint::Text(text) => format!("{text:?}"),
			RawPoint::Value(value) => value.stringify(),
		}
	}
}

/// Wire shapes accepted when a point is read from YAML or JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPointRepr {
	Sequence(Vec<f64>),
	Text(String),
}

impl From<RawPointRepr> for RawPoint {
	fn from(value: RawPointRepr) -> Self {
		match value {
			RawPointRepr::Sequence(values) => RawPoint::Sequence(values),
			RawPointRepr::Text(text) => RawPoint::Text(text),
		}
	}
}

impl From<GeoPoint> for RawPoint {
	fn from(value: GeoPoint) -> Self {
		RawPoint::Point(value)
	}
}

impl From<&GeoPoint> for RawPoint {
	fn from(value: &GeoPoint) -> Self {
		RawPoint::Point(*value)
	}
}

impl<const N: usize> From<[f64; N]> for RawPoint {
	fn from(value: [f64; N]) -> Self {
		RawPoint::Sequence(value.to_vec())
	}
}

impl<const N: usize> From<&[f64; N]> for RawPoint {
	fn from(value: &[f64; N]) -> Self {
		RawPoint::Sequence(value.to_vec())
	}
}

impl From<(f64, f64)> for RawPoint {
	fn from(value: (f64, f64)) -> Self {
		RawPoint::Sequence(vec![value.0, value.1])
	}
}

impl From<(f64, f64, f64)> for RawPoint {
	fn from(value: (f64, f64, f64)) -> Self {
		RawPoint::Sequence(vec![value.0, value.1, value.2])
	}
}

impl From<Vec<f64>> for RawPoint {
	fn from(value: Vec<f64>) -> Self {
		RawPoint::Sequence(value)
	}
}

impl From<&[f64]> for RawPoint {
	fn from(value: &[f64]) -> Self {
		RawPoint::Sequence(value.to_vec())
	}
}

impl From<&str> for RawPoint {
	fn from(value: &str) -> Self {
		RawPoint::Text(value.to_string())
	}
}

impl From<String> for RawPoint {
	fn from(value: String) -> Self {
		RawPoint::Text(value)
	}
}

impl From<&String> for RawPoint {
	fn from(value: &String) -> Self {
		RawPoint::Text(value.clone())
	}
}

impl From<JsonValue> for RawPoint {
	fn from(value: JsonValue) -> Self {
		RawPoint::Value(value)
	}
}

impl From<&RawPoint> for RawPoint {
	fn from(value: &RawPoint) -> Self {
		value.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn conversions_pick_the_right_variant() {
		assert_eq!(RawPoint::from([1.0, 2.0]), RawPoint::Sequence(vec![1.0, 2.0]));
		assert_eq!(RawPoint::from(&[1.0, 2.0, 3.0]), RawPoint::Sequence(vec![1.0, 2.0, 3.0]));
		assert_eq!(RawPoint::from((1.0, 2.0)), RawPoint::Sequence(vec![1.0, 2.0]));
		assert_eq!(RawPoint::from((1.0, 2.0, 3.0)), RawPoint::Sequence(vec![1.0, 2.0, 3.0]));
		assert_eq!(RawPoint::from(vec![4.0]), RawPoint::Sequence(vec![4.0]));
		assert_eq!(RawPoint::from("1,2"), RawPoint::Text("1,2".to_string()));
		assert_eq!(RawPoint::from(String::from("1,2")), RawPoint::Text("1,2".to_string()));
		assert_eq!(
			RawPoint::from(GeoPoint::new(1.0, 2.0)),
			RawPoint::Point(GeoPoint::new(1.0, 2.0))
		);
		assert_eq!(RawPoint::from(JsonValue::Null), RawPoint::Value(JsonValue::Null));
	}

	#[test]
	fn describe() {
		assert_eq!(RawPoint::from("a,b").describe(), "\"a,b\"");
		assert_eq!(RawPoint::from(vec![1.0]).describe(), "[1.0]");
		assert_eq!(RawPoint::from(JsonValue::new_object()).describe(), "{}");
		assert_eq!(RawPoint::from(JsonValue::Null).describe(), "null");
	}

	#[test]
	fn deserialize_from_yaml() {
		let points: Vec<RawPoint> = serde_yaml_ng::from_str("- [55.7, 37.6]\n- \"55.7, 37.6\"\n- [1, 2, 3]\n").unwrap();
		assert_eq!(
			points,
			vec![
				RawPoint::Sequence(vec![55.7, 37.6]),
				RawPoint::Text("55.7, 37.6".to_string()),
				RawPoint::Sequence(vec![1.0, 2.0, 3.0]),
			]
		);
	}

	#[test]
	fn deserialize_rejects_other_shapes() {
		assert!(serde_yaml_ng::from_str::<RawPoint>("{ lat: 1, lon: 2 }").is_err());
	}
}
