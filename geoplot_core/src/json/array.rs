//! JSON array type.
use super::{JsonValue, stringify, stringify_pretty_multi_line, stringify_pretty_single_line};
use std::fmt::Debug;

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	pub fn push<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.push(JsonValue::from(value));
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	/// Serialize the array to a compact string without extra whitespace.
	///
	/// ```rust
	/// use geoplot_core::json::{JsonArray, JsonValue};
	/// let arr = JsonArray(vec![JsonValue::from(1), JsonValue::from(2)]);
	/// assert_eq!(arr.stringify(), "[1,2]");
	/// ```
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// E.g. `[ 1, 2, 3 ]`.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.0.is_empty() {
			return String::from("[]");
		}
		let items = self.0.iter().map(stringify_pretty_single_line).collect::<Vec<_>>();
		format!("[ {} ]", items.join(", "))
	}

	/// `max_width` controls when to break lines, `depth` sets the indentation level.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|value| {
				format!(
					"{indent}  {}",
					stringify_pretty_multi_line(value, max_width, depth + 1, depth * 2 + 2)
				)
			})
			.collect::<Vec<_>>();
		format!("[\n{}\n{}]", items.join(",\n"), indent)
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl FromIterator<JsonValue> for JsonArray {
	fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
		JsonArray(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify_mixed() {
		let array = JsonArray(vec![
			JsonValue::from("hello"),
			JsonValue::from(42.0),
			JsonValue::from(true),
		]);
		assert_eq!(array.stringify(), r#"["hello",42,true]"#);
	}

	#[test]
	fn push_and_len() {
		let mut array = JsonArray::new();
		assert!(array.is_empty());
		array.push(1);
		array.push("two");
		assert_eq!(array.len(), 2);
		assert_eq!(array.iter().next(), Some(&JsonValue::Number(1.0)));
	}

	#[test]
	fn collect_from_iterator() {
		let array: JsonArray = (1..=3).map(JsonValue::from).collect();
		assert_eq!(array, JsonArray::from(vec![1, 2, 3]));
	}

	#[test]
	fn debug_impl() {
		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42.0)]);
		assert_eq!(format!("{array:?}"), r#"[String("debug"), Number(42.0)]"#);
	}

	#[test]
	fn pretty_single_line() {
		let array = JsonArray(vec![JsonValue::from("hello"), JsonValue::from(42.0)]);
		assert_eq!(array.stringify_pretty_single_line(), "[ \"hello\", 42 ]");
		assert_eq!(JsonArray::new().stringify_pretty_single_line(), "[]");
	}

	#[test]
	fn pretty_multi_line() {
		let array = JsonArray(vec![JsonValue::from("a"), JsonValue::from("b")]);
		assert_eq!(array.stringify_pretty_multi_line(80, 0), "[\n  \"a\",\n  \"b\"\n]");
	}
}
