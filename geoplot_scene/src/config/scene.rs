use super::{HtmlConfig, ObjectConfig};
use crate::{DEFAULT_CENTER, DEFAULT_ZOOM, GeoMap, html::HtmlOptions};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// A complete scene: view state, HTML layout and the objects to draw.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
	/// Open a balloon with the coordinates of every click.
	#[serde(default)]
	pub show_click_coords: bool,

	#[serde(default)]
	pub state: StateConfig,

	#[serde(default)]
	pub html: HtmlConfig,

	/// Drawn in the listed order.
	#[serde(default)]
	pub objects: Vec<ObjectConfig>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StateConfig {
	/// `[lat, lon]`
	pub center: [f64; 2],
	pub zoom: u32,
}

impl Default for StateConfig {
	fn default() -> Self {
		Self {
			center: DEFAULT_CENTER,
			zoom: DEFAULT_ZOOM,
		}
	}
}

impl SceneConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("Failed to open scene file {path:?}"))?;
		SceneConfig::from_reader(BufReader::new(file)).with_context(|| format!("Failed to parse scene file {path:?}"))
	}

	/// Build the map. Fails on the first object with an invalid point.
	pub fn build(&self) -> Result<GeoMap> {
		let mut map = GeoMap::new(self.show_click_coords);
		map.set_state(self.state.center, self.state.zoom);
		for (index, object) in self.objects.iter().enumerate() {
			object
				.add_to(&mut map)
				.with_context(|| format!("Failed to add object #{index}"))?;
		}
		log::debug!("built scene with {} objects", map.len());
		Ok(map)
	}

	#[must_use]
	pub fn html_options(&self) -> HtmlOptions {
		self.html.to_options()
	}
}
