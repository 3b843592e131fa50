use geoplot_core::json::JsonObject;
use geoplot_geometry::{CoordinateCollection, PointResult, RawPoint, normalize_many};
use serde::Deserialize;

const DEFAULT_GRADIENT: [(f64, &str); 4] = [
	(0.1, "rgba(128, 255, 0, 0.7)"),
	(0.2, "rgba(255, 255, 0, 0.8)"),
	(0.7, "rgba(234, 72, 58, 0.9)"),
	(1.0, "rgba(162, 36, 25, 1)"),
];

/// Color stops of a heatmap, from low to high intensity.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Gradient(pub Vec<(f64, String)>);

impl Gradient {
	/// Stops are written as object keys; `1.0` keeps its fractional digit (`"1.0"`).
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		let mut obj = JsonObject::new();
		for (stop, color) in &self.0 {
			obj.set(&format_stop(*stop), color.as_str());
		}
		obj
	}
}

impl Default for Gradient {
	fn default() -> Self {
		Gradient(
			DEFAULT_GRADIENT
				.iter()
				.map(|(stop, color)| (*stop, (*color).to_string()))
				.collect(),
		)
	}
}

fn format_stop(stop: f64) -> String {
	if stop.fract() == 0.0 {
		format!("{stop:.1}")
	} else {
		stop.to_string()
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapOptions {
	pub intensity_of_midpoint: f64,
	pub radius: f64,
	pub dissipating: bool,
	pub gradient: Gradient,
}

impl Default for HeatmapOptions {
	fn default() -> Self {
		Self {
			intensity_of_midpoint: 0.2,
			radius: 10.0,
			dissipating: false,
			gradient: Gradient::default(),
		}
	}
}

/// Intensity map over the given (optionally weighted) points.
#[derive(Clone, Debug, PartialEq)]
pub struct Heatmap {
	pub points: CoordinateCollection,
	pub options: HeatmapOptions,
}

impl Heatmap {
	pub fn new<I>(points: I, options: HeatmapOptions) -> PointResult<Self>
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
		obj.set("intensityOfMidpoint", o.intensity_of_midpoint);
		obj.set("radius", o.radius);
		obj.set("dissipating", o.dissipating);
		obj.set("gradient", o.gradient.to_json());
		obj
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn default_gradient() {
		assert_eq!(
			Gradient::default().to_json().stringify(),
			r#"{"0.1":"rgba(128, 255, 0, 0.7)","0.2":"rgba(255, 255, 0, 0.8)","0.7":"rgba(234, 72, 58, 0.9)","1.0":"rgba(162, 36, 25, 1)"}"#
		);
	}

	#[test]
	fn default_gradient_is_not_shared() {
		let mut first = HeatmapOptions::default();
		first.gradient.0.clear();
		assert_eq!(HeatmapOptions::default().gradient.0.len(), 4);
	}

	#[rstest]
	#[case(0.1, "0.1")]
	#[case(1.0, "1.0")]
	#[case(0.0, "0.0")]
	#[case(0.25, "0.25")]
	fn stop_keys(#[case] stop: f64, #[case] expected: &str) {
		assert_eq!(format_stop(stop), expected);
	}

	#[test]
	fn defaults() {
		let json = Heatmap::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]], HeatmapOptions::default())
			.unwrap()
			.to_json();
		assert_eq!(json.get("intensityOfMidpoint").unwrap().as_number().unwrap(), 0.2);
		assert_eq!(json.get("radius").unwrap().as_number().unwrap(), 10.0);
		assert_eq!(json.get("dissipating").unwrap().stringify(), "false");
		assert!(!json.contains_key("hint"));
		assert!(!json.contains_key("content"));
		assert_eq!(
			json.get("points").unwrap().as_object().unwrap().get("type").unwrap().as_str().unwrap(),
			"FeatureCollection"
		);
	}

	#[test]
	fn gradient_from_yaml() {
		let gradient: Gradient = serde_yaml_ng::from_str("- [0.5, red]\n- [1, blue]\n").unwrap();
		assert_eq!(gradient.to_json().stringify(), r#"{"0.5":"red","1.0":"blue"}"#);
	}
}
