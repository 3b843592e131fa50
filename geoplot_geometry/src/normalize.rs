use super::{CoordinateCollection, CoordinateRecord, GeoPoint, InvalidPointError, PointResult, RawPoint};
use geoplot_core::json::JsonValue;

/// Convert any accepted point encoding into a [`GeoPoint`].
///
/// ```rust
/// use geoplot_geometry::{normalize, GeoPoint};
///
/// assert_eq!(normalize("55.7, 37.6").unwrap(), GeoPoint::new(55.7, 37.6));
/// assert_eq!(normalize([1.0, 2.0, 5.0]).unwrap(), GeoPoint::new_weighted(1.0, 2.0, 5.0));
/// assert!(normalize([1.0]).is_err());
/// ```
pub fn normalize(raw: impl Into<RawPoint>) -> PointResult<GeoPoint> {
	GeoPoint::try_from(raw.into())
}

/// Normalize a point and express it as a bare pair (unweighted) or a feature (weighted).
pub fn normalize_coordinates(raw: impl Into<RawPoint>) -> PointResult<CoordinateRecord> {
	normalize(raw).map(CoordinateRecord::from)
}

/// Normalize every point in order.
///
/// The result is a feature collection when the first point carries a weight and a plain list
/// otherwise. The first invalid point aborts the whole call.
pub fn normalize_many<I>(raw_points: I) -> PointResult<CoordinateCollection>
where
	I: IntoIterator,
	I::Item: Into<RawPoint>,
{
	let records = raw_points
		.into_iter()
		.map(normalize_coordinates)
		.collect::<PointResult<Vec<_>>>()?;
	log::trace!("normalized {} points", records.len());
	Ok(CoordinateCollection::from_records(records))
}

impl TryFrom<RawPoint> for GeoPoint {
	type Error = InvalidPointError;

	fn try_from(raw: RawPoint) -> Result<Self, Self::Error> {
		let invalid = |raw: &RawPoint| InvalidPointError::new(raw.describe());
		match &raw {
			RawPoint::Point(point) => Ok(*point),
			RawPoint::Sequence(values) => GeoPoint::from_slice(values).ok_or_else(|| invalid(&raw)),
			RawPoint::Text(text) => text.parse(),
			RawPoint::Value(JsonValue::String(text)) => text.parse(),
			RawPoint::Value(JsonValue::Array(array)) => array
				.iter()
				.map(|value| value.as_number().ok())
				.collect::<Option<Vec<f64>>>()
				.and_then(|values| GeoPoint::from_slice(&values))
				.ok_or_else(|| invalid(&raw)),
			RawPoint::Value(_) => Err(invalid(&raw)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Coordinates, PointFeature};
	use geoplot_core::json::JsonArray;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(vec![55.7, 37.6])]
	#[case(vec![-90.0, 180.0])]
	#[case(vec![1.0, 2.0, 3.0])]
	#[case(vec![0.0, 0.0, 0.0])]
	fn sequence_fields(#[case] values: Vec<f64>) {
		let point = normalize(values.clone()).unwrap();
		assert_eq!(point.lat, values[0]);
		assert_eq!(point.lon, values[1]);
		assert_eq!(point.weight, values.get(2).copied());
	}

	#[rstest]
	#[case("55.7,37.6", vec![55.7, 37.6])]
	#[case(" 55.7,37.6 ", vec![55.7, 37.6])]
	#[case("1,2,3", vec![1.0, 2.0, 3.0])]
	#[case("\n1, 2, 3\t", vec![1.0, 2.0, 3.0])]
	fn text_equals_sequence(#[case] text: &str, #[case] values: Vec<f64>) {
		assert_eq!(normalize(text).unwrap(), normalize(values).unwrap());
	}

	#[test]
	fn point_passes_through() {
		let point = GeoPoint::new_weighted(1.0, 2.0, 3.0);
		assert_eq!(normalize(point).unwrap(), point);
	}

	#[rstest]
	#[case(RawPoint::from(JsonValue::Null), "null")]
	#[case(RawPoint::from(JsonValue::new_object()), "{}")]
	#[case(RawPoint::from("not,numeric,x"), "\"not,numeric,x\"")]
	#[case(RawPoint::from(vec![1.0]), "[1.0]")]
	#[case(RawPoint::from(vec![1.0, 2.0, 3.0, 4.0]), "[1.0, 2.0, 3.0, 4.0]")]
	#[case(RawPoint::from(JsonValue::from(true)), "true")]
	#[case(RawPoint::from(JsonValue::from(vec![JsonValue::from(1), JsonValue::from("a")])), "[1,\"a\"]")]
	fn invalid_inputs(#[case] raw: RawPoint, #[case] description: &str) {
		let error = normalize(raw).unwrap_err();
		assert_eq!(error, InvalidPointError::new(description));
	}

	#[test]
	fn dynamic_values() {
		assert_eq!(
			normalize(JsonValue::from([55.7, 37.6])).unwrap(),
			GeoPoint::new(55.7, 37.6)
		);
		assert_eq!(
			normalize(JsonValue::from(JsonArray::from(vec![1, 2, 5]))).unwrap(),
			GeoPoint::new_weighted(1.0, 2.0, 5.0)
		);
		assert_eq!(normalize(JsonValue::from("3,4")).unwrap(), GeoPoint::new(3.0, 4.0));
	}

	#[test]
	fn coordinates_pair_or_feature() {
		assert_eq!(
			normalize_coordinates([1.0, 2.0]).unwrap(),
			CoordinateRecord::Pair(Coordinates::new(1.0, 2.0))
		);
		assert_eq!(
			normalize_coordinates([1.0, 2.0, 5.0]).unwrap(),
			CoordinateRecord::Feature(PointFeature::new(Coordinates::new(1.0, 2.0), 5.0))
		);
	}

	#[test]
	fn many_unweighted_is_plain() {
		assert_eq!(
			normalize_many([[1.0, 2.0], [3.0, 4.0]]).unwrap(),
			CoordinateCollection::Plain(vec![
				CoordinateRecord::Pair(Coordinates::new(1.0, 2.0)),
				CoordinateRecord::Pair(Coordinates::new(3.0, 4.0)),
			])
		);
	}

	#[test]
	fn many_with_leading_weight_is_feature_collection() {
		let points: Vec<RawPoint> = vec![RawPoint::from([1.0, 2.0, 9.0]), RawPoint::from([3.0, 4.0])];
		assert_eq!(
			normalize_many(points).unwrap(),
			CoordinateCollection::FeatureCollection(vec![
				CoordinateRecord::Feature(PointFeature::new(Coordinates::new(1.0, 2.0), 9.0)),
				CoordinateRecord::Pair(Coordinates::new(3.0, 4.0)),
			])
		);
	}

	#[test]
	fn many_mixed_encodings() {
		let points = vec![
			RawPoint::from("1,2"),
			RawPoint::from(GeoPoint::new(3.0, 4.0)),
			RawPoint::from((5.0, 6.0)),
		];
		assert_eq!(normalize_many(&points).unwrap().to_json().stringify(), "[[1,2],[3,4],[5,6]]");
	}

	#[test]
	fn many_fails_on_first_invalid_point() {
		let error = normalize_many(["1,2", "oops", "also bad"]).unwrap_err();
		assert_eq!(error.value, "\"oops\"");
	}

	#[test]
	fn many_empty() {
		let empty: Vec<RawPoint> = Vec::new();
		assert!(normalize_many(empty).unwrap().is_empty());
	}
}
