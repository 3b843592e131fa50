use super::{ResolvedStyle, ShapeStyle};
use geoplot_core::json::JsonObject;
use geoplot_geometry::{CoordinateCollection, PointResult, RawPoint, normalize_many};

/// A filled shape bounded by `points_outer`, with an optional inner ring cut out of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
	pub points_outer: CoordinateCollection,
	pub points_inner: Option<CoordinateCollection>,
	pub style: ResolvedStyle,
}

impl Polygon {
	/// Both rings accept the same point encodings. Without an inner ring pass
	/// `None::<Vec<RawPoint>>`.
	pub fn new<I, J>(points_outer: I, points_inner: Option<J>, style: ShapeStyle) -> PointResult<Self>
	where
		I: IntoIterator,
		I::Item: Into<RawPoint>,
		J: IntoIterator,
		J::Item: Into<RawPoint>,
	{
		let points_outer = normalize_many(points_outer)?;
		let points_inner = points_inner.map(normalize_many).transpose()?;
		Ok(Self {
			points_outer,
			points_inner,
			style: style.resolve(),
		})
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		obj.set("pointsOuter", self.points_outer.to_json());
		obj.set_optional("pointsInner", self.points_inner.as_ref().map(CoordinateCollection::to_json));
		self.style.write_json(&mut obj);
		obj
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn without_inner_ring() {
		let json = Polygon::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]], None::<Vec<RawPoint>>, ShapeStyle::default())
			.unwrap()
			.to_json();
		assert!(!json.contains_key("pointsInner"));
		assert_eq!(json.get("pointsOuter").unwrap().stringify(), "[[0,0],[1,0],[1,1]]");
		assert_eq!(json.get("strokeOpacity").unwrap().as_number().unwrap(), 0.5);
	}

	#[test]
	fn with_inner_ring() {
		let inner = ["0.2,0.2", "0.4,0.2", "0.4,0.4"];
		let json = Polygon::new([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]], Some(inner), ShapeStyle::default())
			.unwrap()
			.to_json();
		assert_eq!(
			json.get("pointsInner").unwrap().stringify(),
			"[[0.2,0.2],[0.4,0.2],[0.4,0.4]]"
		);
	}

	#[test]
	fn rings_accept_different_encodings() {
		let outer = vec![RawPoint::from("0,0"), RawPoint::from([1.0, 0.0]), RawPoint::from((1.0, 1.0))];
		let inner = [[0.2, 0.2], [0.4, 0.2], [0.4, 0.4]];
		let polygon = Polygon::new(&outer, Some(&inner), ShapeStyle::default()).unwrap();
		assert_eq!(polygon.points_outer.to_json().stringify(), "[[0,0],[1,0],[1,1]]");
		assert_eq!(
			polygon.points_inner.unwrap().to_json().stringify(),
			"[[0.2,0.2],[0.4,0.2],[0.4,0.4]]"
		);
	}

	#[test]
	fn invalid_inner_ring_fails() {
		let inner = ["bad"];
		let error = Polygon::new([[0.0, 0.0]], Some(inner), ShapeStyle::default()).unwrap_err();
		assert_eq!(error.value, "\"bad\"");
	}
}
