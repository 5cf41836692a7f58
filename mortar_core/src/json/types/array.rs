//! JSON array type.
use crate::json::*;
use std::fmt::Debug;

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Compact JSON text, e.g. `[1,2]`.
	///
	/// ```rust
	/// use mortar_core::json::{JsonArray, JsonValue};
	/// let arr = JsonArray(vec![JsonValue::from(1), JsonValue::from(2)]);
	/// assert_eq!(arr.stringify(), "[1,2]");
	/// ```
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.0.is_empty() {
			return String::from("[]");
		}
		let items = self.0.iter().map(stringify_pretty_single_line).collect::<Vec<_>>();
		format!("[ {} ]", items.join(", "))
	}

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
		format!("[\n{}\n{indent}]", items.join(",\n"))
	}

	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	#[must_use]
	pub fn get(&self, index: usize) -> Option<&JsonValue> {
		self.0.get(index)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn push<T>(&mut self, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.push(JsonValue::from(value));
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl FromIterator<JsonValue> for JsonArray {
	fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
		JsonArray(iter.into_iter().collect())
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		input.into_iter().map(JsonValue::from).collect()
	}
}

impl<T> From<&Vec<T>> for JsonArray
where
	JsonValue: From<T>,
	T: Clone,
{
	fn from(input: &Vec<T>) -> Self {
		input.iter().cloned().map(JsonValue::from).collect()
	}
}

impl<T, const N: usize> From<&[T; N]> for JsonArray
where
	JsonValue: From<T>,
	T: Copy,
{
	fn from(input: &[T; N]) -> Self {
		input.iter().copied().map(JsonValue::from).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify_variants() {
		let array = JsonArray(vec![JsonValue::from("hello"), JsonValue::from(42.0), JsonValue::from(true)]);
		assert_eq!(array.stringify(), r#"["hello",42,true]"#);
		assert_eq!(array.stringify_pretty_single_line(), r#"[ "hello", 42, true ]"#);
		assert_eq!(
			JsonArray::from(vec!["a", "b"]).stringify_pretty_multi_line(80, 0),
			"[\n  \"a\",\n  \"b\"\n]"
		);
		assert_eq!(JsonArray::new().stringify_pretty_single_line(), "[]");
	}

	#[test]
	fn push_get_and_iterate() {
		let mut array = JsonArray::new();
		assert!(array.is_empty());
		array.push(1);
		array.push("two");
		assert_eq!(array.len(), 2);
		assert_eq!(array.get(1), Some(&JsonValue::from("two")));
		assert_eq!(array.get(2), None);
		let kinds: Vec<&str> = array.iter().map(JsonValue::type_as_str).collect();
		assert_eq!(kinds, vec!["number", "string"]);
	}

	#[test]
	fn from_references() {
		let v = vec![1, 2, 3];
		assert_eq!(JsonArray::from(&v).0, vec![JsonValue::from(1), JsonValue::from(2), JsonValue::from(3)]);
		assert_eq!(JsonArray::from(&[4, 5]).len(), 2);
	}

	#[test]
	fn debug_format() {
		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42.0)]);
		assert_eq!(format!("{array:?}"), r#"[String("debug"), Number(42.0)]"#);
	}
}
