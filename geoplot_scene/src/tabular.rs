//! Placemarks from tabular data.

use crate::{GeoMap, PlacemarkOptions};
use anyhow::{Context, Result};
use std::io::Read;

/// Which columns of a table feed the placemarks.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacemarkColumns {
	pub lat: String,
	pub lon: String,
	/// Use the zero-based row number as hint.
	pub index_hint: bool,
	/// Show all cells of the row as an HTML table in the balloon.
	pub row_content: bool,
	/// Column holding the icon preset. Without it no preset is set at all.
	pub preset: Option<String>,
	/// Column holding the icon color.
	pub color: Option<String>,
}

impl PlacemarkColumns {
	#[must_use]
	pub fn new(lat: &str, lon: &str) -> Self {
		Self {
			lat: lat.to_string(),
			lon: lon.to_string(),
			index_hint: true,
			row_content: true,
			preset: None,
			color: None,
		}
	}
}

/// Add one placemark per row of a CSV table with a header line.
///
/// Returns the number of placemarks added. Rows before a failing row stay on the map.
pub fn add_placemarks_from_csv(map: &mut GeoMap, reader: impl Read, columns: &PlacemarkColumns) -> Result<usize> {
	let mut csv_reader = csv::Reader::from_reader(reader);
	let header: Vec<String> = csv_reader
		.headers()
		.context("Failed to read CSV headers")?
		.iter()
		.map(ToString::to_string)
		.collect();

	let find = |name: &str| {
		header
			.iter()
			.position(|h| h == name)
			.with_context(|| format!("CSV has no column {name:?}"))
	};
	let lat_index = find(&columns.lat)?;
	let lon_index = find(&columns.lon)?;
	let preset_index = columns.preset.as_deref().map(find).transpose()?;
	let color_index = columns.color.as_deref().map(find).transpose()?;

	let mut count = 0;
	for (row, record) in csv_reader.records().enumerate() {
		let record = record.with_context(|| format!("Failed to read CSV row {row}"))?;
		let cell = |index: usize| record.get(index).unwrap_or_default();

		let lat = parse_coordinate(cell(lat_index)).with_context(|| format!("Invalid latitude in row {row}"))?;
		let lon = parse_coordinate(cell(lon_index)).with_context(|| format!("Invalid longitude in row {row}"))?;

		let options = PlacemarkOptions {
			hint: columns.index_hint.then(|| row.to_string()),
			content: columns.row_content.then(|| row_table(&header, &record)),
			preset: preset_index.map(|i| cell(i).to_string()),
			icon_color: color_index.map(|i| cell(i).to_string()),
		};
		map.add_placemark([lat, lon], options)
			.with_context(|| format!("Failed to add placemark for row {row}"))?;
		count += 1;
	}

	log::debug!("added {count} placemarks from CSV");
	Ok(count)
}

fn parse_coordinate(text: &str) -> Result<f64> {
	text.trim()
		.parse::<f64>()
		.with_context(|| format!("{text:?} is not a number"))
}

fn row_table(header: &[String], record: &csv::StringRecord) -> String {
	let mut html = String::from("<table>");
	for (key, value) in header.iter().zip(record.iter()) {
		html += &format!("<tr><td><b>{}</b></td><td>{}</td></tr>", escape_html(key), escape_html(value));
	}
	html += "</table>";
	html
}

fn escape_html(text: &str) -> String {
	text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
