use anyhow::{Context, Result};
use geoplot_geometry::GeoPoint;
use geoplot_scene::{
	GeoMap,
	html::HtmlOptions,
	tabular::{PlacemarkColumns, add_placemarks_from_csv},
};
use std::{fs::File, io::BufReader, path::PathBuf};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// CSV table with a header row
	#[arg()]
	input_file: PathBuf,

	/// HTML file to write
	#[arg()]
	output_file: PathBuf,

	/// column holding the latitude
	#[arg(long, value_name = "COLUMN", display_order = 1)]
	lat: String,

	/// column holding the longitude
	#[arg(long, value_name = "COLUMN", display_order = 1)]
	lon: String,

	/// column holding the icon preset
	#[arg(long, value_name = "COLUMN", display_order = 2)]
	preset_col: Option<String>,

	/// column holding the icon color
	#[arg(long, value_name = "COLUMN", display_order = 2)]
	color_col: Option<String>,

	/// do not use the row number as hint
	#[arg(long, display_order = 3)]
	no_index_hint: bool,

	/// do not show the row in the balloon
	#[arg(long, display_order = 3)]
	no_row_content: bool,

	/// map center
	#[arg(long, value_name = "LAT,LON", value_parser = parse_center, allow_hyphen_values = true, display_order = 4)]
	center: Option<[f64; 2]>,

	/// zoom level
	#[arg(long, value_name = "int", display_order = 4)]
	zoom: Option<u32>,

	/// show the coordinates of every click
	#[arg(long, display_order = 4)]
	show_click_coords: bool,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut map = GeoMap::new(arguments.show_click_coords);
	map.set_state(
		arguments.center.unwrap_or(map.center()),
		arguments.zoom.unwrap_or(map.zoom()),
	);

	let columns = PlacemarkColumns {
		index_hint: !arguments.no_index_hint,
		row_content: !arguments.no_row_content,
		preset: arguments.preset_col.clone(),
		color: arguments.color_col.clone(),
		..PlacemarkColumns::new(&arguments.lat, &arguments.lon)
	};

	let file = File::open(&arguments.input_file)
		.with_context(|| format!("Failed to open CSV file {:?}", arguments.input_file))?;
	let count = add_placemarks_from_csv(&mut map, BufReader::new(file), &columns)
		.with_context(|| format!("Failed to read placemarks from {:?}", arguments.input_file))?;

	let html = map.to_standalone_html(&HtmlOptions::default())?;
	super::write_output(&arguments.output_file, &html)?;

	log::info!("wrote {count} placemarks to {:?}", arguments.output_file);
	Ok(())
}

fn parse_center(text: &str) -> Result<[f64; 2], String> {
	let point: GeoPoint = text.parse().map_err(|e| format!("{e}"))?;
	if point.is_weighted() {
		return Err(format!("expected LAT,LON, got {text:?}"));
	}
	Ok([point.lat, point.lon])
}
