//! Conversions from Rust numeric types into `JsonValue::Number`.

use super::JsonValue;

impl From<f64> for JsonValue {
	fn from(input: f64) -> Self {
		JsonValue::Number(input)
	}
}

macro_rules! impl_from_number_lossless {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(f64::from(input))
				}
			}
		)+
	};
}

macro_rules! impl_from_number_lossy {
	($($t:ty),+ $(,)?) => {
		$(
			impl From<$t> for JsonValue {
				fn from(input: $t) -> Self {
					JsonValue::Number(input as f64)
				}
			}
		)+
	};
}

impl_from_number_lossless!(f32, u8, u16, u32, i8, i16, i32);
impl_from_number_lossy!(u64, usize, i64, isize);

/// Format a number the way JavaScript's `JSON.stringify` would accept it.
///
/// Integral values lose their fractional part (`8.0` becomes `8`); NaN and the infinities have no
/// JSON representation and are written as `null`.
#[must_use]
pub fn format_number(value: f64) -> String {
	if value.is_finite() {
		value.to_string()
	} else {
		String::from("null")
	}
}
