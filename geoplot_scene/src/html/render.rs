use super::HtmlOptions;
use crate::GeoMap;
use anyhow::{Result, ensure};
use uuid::Uuid;

const SHOW_MAP_JS: &str = include_str!("../../assets/show_map.js");
const RESIZE_JS: &str = include_str!("../../assets/resize.js");
const MAP_HTML: &str = include_str!("../../assets/map.html");
const STANDALONE_HTML: &str = include_str!("../../assets/standalone.html");

/// Render the map as an HTML fragment: a container `<div>` plus the scripts that draw into it.
pub fn map_to_html(map: &GeoMap, options: &HtmlOptions) -> Result<String> {
	let container_id = container_id(options.container_id.as_deref())?;
	let map_json = escape_script(&map.to_json().stringify());

	let resize_hook = if options.resizeable {
		RESIZE_JS.replace("{{ container_id }}", &container_id)
	} else {
		String::new()
	};

	log::debug!(
		"render map {container_id} ({}x{}) with {} objects",
		options.width,
		options.height,
		map.len()
	);

	// the scene goes in last, so placeholders inside user strings stay untouched
	Ok(MAP_HTML
		.replace("{{ container_id }}", &container_id)
		.replace("{{ width }}", &options.width.to_string())
		.replace("{{ height }}", &options.height.to_string())
		.replace("{{ js_code }}", SHOW_MAP_JS)
		.replace("{{ resize_hook }}", &resize_hook)
		.replace("{{ map_json }}", &map_json))
}

/// Wrap an HTML fragment into a page that loads require.js, jQuery and the map scripts.
#[must_use]
pub fn standalone_html(body: &str) -> String {
	STANDALONE_HTML.replace("{{ body }}", body)
}

fn container_id(requested: Option<&str>) -> Result<String> {
	match requested {
		Some(id) => {
			ensure!(!id.is_empty(), "container id must not be empty");
			ensure!(
				id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'),
				"container id may only contain ASCII letters, digits, '_' and '-': {id:?}"
			);
			Ok(id.to_string())
		}
		None => Ok(format!("map_{}", Uuid::new_v4().simple())),
	}
}

/// Keep user strings from ending or re-opening the surrounding script element.
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same character.
fn escape_script(json: &str) -> String {
	json.replace('<', "\\u003c")
}
