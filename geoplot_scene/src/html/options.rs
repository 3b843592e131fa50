/// Layout of the rendered map container.
#[derive(Clone, Debug, PartialEq)]
pub struct HtmlOptions {
	/// Width in pixels.
	pub width: u32,
	/// Height in pixels.
	pub height: u32,
	/// Let the user resize the container (needs jQuery UI on the page).
	pub resizeable: bool,
	/// Id of the container `<div>`. Generated when `None`; must not contain whitespace.
	pub container_id: Option<String>,
}

impl Default for HtmlOptions {
	fn default() -> Self {
		Self {
			width: 640,
			height: 480,
			resizeable: false,
			container_id: None,
		}
	}
}
