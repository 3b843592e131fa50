use thiserror::Error;

/// A raw point value did not match any accepted point encoding.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("cannot convert {value} to a point")]
pub struct InvalidPointError {
	/// The offending input, rendered for diagnostics.
	pub value: String,
}

impl InvalidPointError {
	pub fn new(value: impl Into<String>) -> Self {
		Self { value: value.into() }
	}
}

pub type PointResult<T> = std::result::Result<T, InvalidPointError>;
