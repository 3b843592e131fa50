use crate::html::HtmlOptions;
use serde::Deserialize;

/// Overrides for [`HtmlOptions`]; absent values keep the defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HtmlConfig {
	pub width: Option<u32>,
	pub height: Option<u32>,
	pub resizeable: Option<bool>,
	pub container_id: Option<String>,
}

impl HtmlConfig {
	#[must_use]
	pub fn to_options(&self) -> HtmlOptions {
		let defaults = HtmlOptions::default();
		HtmlOptions {
			width: self.width.unwrap_or(defaults.width),
			height: self.height.unwrap_or(defaults.height),
			resizeable: self.resizeable.unwrap_or(defaults.resizeable),
			container_id: self.container_id.clone(),
		}
	}
}
