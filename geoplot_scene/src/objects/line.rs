use geoplot_core::json::JsonObject;
use geoplot_geometry::{CoordinateCollection, PointResult, RawPoint, normalize_many};

#[derive(Clone, Debug, PartialEq)]
pub struct LineOptions {
	pub hint: Option<String>,
	pub content: Option<String>,
	pub color: String,
	pub width: f64,
	pub opacity: f64,
}

impl Default for LineOptions {
	fn default() -> Self {
		Self {
			hint: None,
			content: None,
			color: String::from("#000000"),
			width: 4.0,
			opacity: 0.5,
		}
	}
}

/// A polyline through the given points.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
	pub points: CoordinateCollection,
	pub options: LineOptions,
}

impl Line {
	pub fn new<I>(points: I, options: LineOptions) -> PointResult<Self>
	where
		I: IntoIterator,
		I::Item: Into<RawPoint>,
	{
		Ok(Self {
			points: normalize_many(points)?,
			options,
		})
	}

	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let o = &self.options;
		let mut obj = JsonObject::new();
		obj.set("points", self.points.to_json());
		obj.set("hint", o.hint.clone());
		obj.set("content", o.content.clone());
		obj.set("color", o.color.clone());
		obj.set("width", o.width);
		obj.set("opacity", o.opacity);
		obj
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn defaults() {
		let line = Line::new(["0,0", "1,1"], LineOptions::default()).unwrap();
		assert_eq!(
			line.to_json().stringify(),
			r##"{"color":"#000000","content":null,"hint":null,"opacity":0.5,"points":[[0,0],[1,1]],"width":4}"##
		);
	}

	#[test]
	fn empty_line_is_accepted() {
		let line = Line::new(Vec::<[f64; 2]>::new(), LineOptions::default()).unwrap();
		assert!(line.points.is_empty());
		assert_eq!(line.to_json().get("points").unwrap().stringify(), "[]");
	}

	#[test]
	fn custom_style() {
		let options = LineOptions {
			hint: Some("route".into()),
			color: "#ff0000".into(),
			width: 2.5,
			opacity: 1.0,
			..LineOptions::default()
		};
		let json = Line::new([[0.0, 0.0], [1.0, 1.0]], options).unwrap().to_json();
		assert_eq!(json.get("hint").unwrap().as_str().unwrap(), "route");
		assert_eq!(json.get("width").unwrap().as_number().unwrap(), 2.5);
		assert_eq!(json.get("opacity").unwrap().as_number().unwrap(), 1.0);
	}
}
