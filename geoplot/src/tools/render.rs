use anyhow::Result;
use geoplot_scene::{config::SceneConfig, html::standalone_html};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// scene description (YAML)
	#[arg()]
	scene_file: PathBuf,

	/// HTML file to write
	#[arg()]
	output_file: PathBuf,

	/// write only the map fragment instead of a complete page
	#[arg(long, display_order = 1)]
	fragment: bool,

	/// width of the map in pixels, overrides the scene file
	#[arg(long, value_name = "int", display_order = 2)]
	width: Option<u32>,

	/// height of the map in pixels, overrides the scene file
	#[arg(long, value_name = "int", display_order = 2)]
	height: Option<u32>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = SceneConfig::from_path(&arguments.scene_file)?;
	let map = config.build()?;

	let mut options = config.html_options();
	if let Some(width) = arguments.width {
		options.width = width;
	}
	if let Some(height) = arguments.height {
		options.height = height;
	}

	let fragment = map.to_html(&options)?;
	let html = if arguments.fragment {
		fragment
	} else {
		standalone_html(&fragment)
	};
	super::write_output(&arguments.output_file, &html)?;

	log::info!(
		"rendered {} objects from {:?} to {:?}",
		map.len(),
		arguments.scene_file,
		arguments.output_file
	);
	Ok(())
}
