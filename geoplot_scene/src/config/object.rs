use crate::{GeoMap, Gradient, HeatmapOptions, LineOptions, PlacemarkOptions, ShapeStyle};
use geoplot_geometry::{PointResult, RawPoint};
use serde::Deserialize;

/// One drawable object of a scene description, selected by its `type` field.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ObjectConfig {
	Placemark(PlacemarkConfig),
	Line(LineConfig),
	Heatmap(HeatmapConfig),
	Circle(CircleConfig),
	Polygon(PolygonConfig),
}

impl ObjectConfig {
	/// Add the described object to `map`.
	pub fn add_to(&self, map: &mut GeoMap) -> PointResult<()> {
		match self {
			ObjectConfig::Placemark(c) => map.add_placemark(&c.point, c.options()),
			ObjectConfig::Line(c) => map.add_line(&c.points, c.options()),
			ObjectConfig::Heatmap(c) => map.add_heatmap(&c.points, c.options()),
			ObjectConfig::Circle(c) => map.add_circle(&c.center, c.radius, c.style.clone()),
			ObjectConfig::Polygon(c) => map.add_polygon(&c.points_outer, c.points_inner.as_ref(), c.style.clone()),
		}
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlacemarkConfig {
	pub point: RawPoint,
	pub hint: Option<String>,
	pub content: Option<String>,
	/// An empty string disables the default preset.
	pub preset: Option<String>,
	pub icon_color: Option<String>,
}

impl PlacemarkConfig {
	fn options(&self) -> PlacemarkOptions {
		let defaults = PlacemarkOptions::default();
		PlacemarkOptions {
			hint: self.hint.clone(),
			content: self.content.clone(),
			preset: self.preset.clone().or(defaults.preset),
			icon_color: self.icon_color.clone(),
		}
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LineConfig {
	pub points: Vec<RawPoint>,
	pub hint: Option<String>,
	pub content: Option<String>,
	pub color: Option<String>,
	pub width: Option<f64>,
	pub opacity: Option<f64>,
}

impl LineConfig {
	fn options(&self) -> LineOptions {
		let defaults = LineOptions::default();
		LineOptions {
			hint: self.hint.clone(),
			content: self.content.clone(),
			color: self.color.clone().unwrap_or(defaults.color),
			width: self.width.unwrap_or(defaults.width),
			opacity: self.opacity.unwrap_or(defaults.opacity),
		}
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HeatmapConfig {
	pub points: Vec<RawPoint>,
	pub intensity_of_midpoint: Option<f64>,
	pub radius: Option<f64>,
	pub dissipating: Option<bool>,
	/// List of `[stop, color]` pairs.
	pub gradient: Option<Gradient>,
}

impl HeatmapConfig {
	fn options(&self) -> HeatmapOptions {
		let defaults = HeatmapOptions::default();
		HeatmapOptions {
			intensity_of_midpoint: self.intensity_of_midpoint.unwrap_or(defaults.intensity_of_midpoint),
			radius: self.radius.unwrap_or(defaults.radius),
			dissipating: self.dissipating.unwrap_or(defaults.dissipating),
			gradient: self.gradient.clone().unwrap_or(defaults.gradient),
		}
	}
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CircleConfig {
	pub center: RawPoint,
	/// Meters.
	pub radius: f64,
	#[serde(default)]
	pub style: ShapeStyle,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PolygonConfig {
	pub points_outer: Vec<RawPoint>,
	pub points_inner: Option<Vec<RawPoint>>,
	#[serde(default)]
	pub style: ShapeStyle,
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn parse(yaml: &str) -> anyhow::Result<ObjectConfig> {
		Ok(serde_yaml_ng::from_str(yaml)?)
	}

	#[test]
	fn placemark_defaults() {
		let config = parse("type: placemark\npoint: '1, 2'").unwrap();
		let ObjectConfig::Placemark(placemark) = &config else {
			panic!("expected a placemark, got {config:?}");
		};
		assert_eq!(placemark.point, RawPoint::from("1, 2"));
		assert_eq!(placemark.options(), PlacemarkOptions::default());
	}

	#[test]
	fn placemark_empty_preset() {
		let mut map = GeoMap::default();
		parse("type: placemark\npoint: [1, 2]\npreset: ''")
			.unwrap()
			.add_to(&mut map)
			.unwrap();
		assert!(!map.objects()[0].to_json().contains_key("preset"));
	}

	#[test]
	fn line_options() {
		let config = parse("type: line\npoints: [[1, 2], '3, 4']\ncolor: '#ff0000'\nwidth: 2").unwrap();
		let ObjectConfig::Line(line) = &config else {
			panic!("expected a line, got {config:?}");
		};
		assert_eq!(line.points.len(), 2);
		assert_eq!(
			line.options(),
			LineOptions {
				color: "#ff0000".into(),
				width: 2.0,
				..LineOptions::default()
			}
		);
	}

	#[test]
	fn heatmap_gradient() {
		let config = parse("type: heatmap\npoints: [[1, 2, 3]]\nradius: 20\ngradient: [[0.5, red], [1, blue]]").unwrap();
		let ObjectConfig::Heatmap(heatmap) = &config else {
			panic!("expected a heatmap, got {config:?}");
		};
		let options = heatmap.options();
		assert_eq!(options.radius, 20.0);
		assert_eq!(options.intensity_of_midpoint, 0.2);
		assert_eq!(options.gradient.0, vec![(0.5, "red".to_string()), (1.0, "blue".to_string())]);
	}

	#[test]
	fn circle_and_polygon_styles() {
		let mut map = GeoMap::default();
		parse("type: circle\ncenter: [0, 0]\nradius: 5\nstyle: { fill_color: '#00ff00' }")
			.unwrap()
			.add_to(&mut map)
			.unwrap();
		parse("type: polygon\npoints_outer: [[0, 0], [1, 0], [1, 1]]\npoints_inner: [[0.2, 0.2]]")
			.unwrap()
			.add_to(&mut map)
			.unwrap();

		let circle = map.objects()[0].to_json();
		assert_eq!(circle.get("fillColor").unwrap().as_str().unwrap(), "#00ff00");
		assert_eq!(circle.get("strokeColor").unwrap().as_str().unwrap(), "#000000");
		assert!(map.objects()[1].to_json().contains_key("pointsInner"));
	}

	#[test]
	fn rejects_unknown_types_and_fields() {
		assert!(parse("type: triangle\npoints: []").is_err());
		assert!(parse("type: circle\ncenter: [0, 0]\nradius: 5\ncolour: red").is_err());
		assert!(parse("type: line").is_err());
	}

	#[test]
	fn invalid_points_surface_on_add() {
		let mut map = GeoMap::default();
		let error = parse("type: line\npoints: ['1, 2', 'a, b']")
			.unwrap()
			.add_to(&mut map)
			.unwrap_err();
		assert_eq!(error.value, "\"a, b\"");
		assert!(map.is_empty());
	}
}
