//! JSON object with insertion-ordered keys.
use crate::json::*;
use anyhow::Result;
use std::fmt::{Debug, Display};

/// A JSON object that keeps its keys in insertion order.
///
/// Setting an existing key replaces its value in place, so a key occurs at most once.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub Vec<(String, JsonValue)>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(Vec::new())
	}

	/// Returns the value stored under `key`, if present.
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
	}

	/// `Ok(None)` if `key` is missing, an error if it holds something other than a string.
	pub fn get_string(&self, key: &str) -> Result<Option<String>> {
		self.get(key).map(JsonValue::as_string).transpose()
	}

	/// Stores `value` under `key`, replacing an existing entry without changing its position.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		let value = JsonValue::from(value);
		match self.0.iter_mut().find(|(k, _)| k == key) {
			Some(entry) => entry.1 = value,
			None => self.0.push((key.to_owned(), value)),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter().map(|(k, v)| (k, v))
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		if self.0.is_empty() {
			return String::from("{}");
		}
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\": {}", escape_json_string(key), stringify_pretty_single_line(value)))
			.collect::<Vec<_>>();
		format!("{{ {} }}", items.join(", "))
	}

	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				let prefix = format!("{indent}  \"{}\": ", escape_json_string(key));
				let value = stringify_pretty_multi_line(value, max_width, depth + 1, prefix.len());
				format!("{prefix}{value}")
			})
			.collect::<Vec<_>>();
		format!("{{\n{}\n{indent}}}", items.join(",\n"))
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		let mut object = JsonObject::new();
		for (key, value) in input {
			object.set(key, value);
		}
		object
	}
}
