use super::{Coordinates, InvalidPointError};
use std::{fmt::Debug, str::FromStr};

/// A single geographic location, optionally carrying an intensity weight (e.g. for heatmaps).
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
	pub lat: f64,
	pub lon: f64,
	pub weight: Option<f64>,
}

impl GeoPoint {
	#[must_use]
	pub fn new(lat: f64, lon: f64) -> Self {
		Self { lat, lon, weight: None }
	}

	#[must_use]
	pub fn new_weighted(lat: f64, lon: f64, weight: f64) -> Self {
		Self {
			lat,
			lon,
			weight: Some(weight),
		}
	}

	/// Build a point from two (`lat, lon`) or three (`lat, lon, weight`) numbers.
	///
	/// Returns `None` for any other length.
	#[must_use]
	pub fn from_slice(values: &[f64]) -> Option<Self> {
		match *values {
			[lat, lon] => Some(Self::new(lat, lon)),
			[lat, lon, weight] => Some(Self::new_weighted(lat, lon, weight)),
			_ => None,
		}
	}

	#[must_use]
	pub fn to_coord(&self) -> Coordinates {
		Coordinates::new(self.lat, self.lon)
	}

	#[must_use]
	pub fn is_weighted(&self) -> bool {
		self.weight.is_some()
	}
}

/// Parses `"lat,lon"` or `"lat,lon,weight"`; whitespace around the numbers is ignored.
impl FromStr for GeoPoint {
	type Err = InvalidPointError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let invalid = || InvalidPointError::new(format!("{text:?}"));
		let values = text
			.trim()
			.split(',')
			.map(|part| part.trim().parse::<f64>())
			.collect::<Result<Vec<f64>, _>>()
			.map_err(|_| invalid())?;
		GeoPoint::from_slice(&values).ok_or_else(invalid)
	}
}

impl Debug for GeoPoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self.weight {
			Some(weight) => write!(f, "GeoPoint({}, {}, weight: {})", self.lat, self.lon, weight),
			None => write!(f, "GeoPoint({}, {})", self.lat, self.lon),
		}
	}
}
