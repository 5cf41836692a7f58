use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};

/// Parses a complete JSON document. Trailing non-whitespace is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_text(json);
	let value = parse_json_iter(&mut iter).context("while parsing JSON")?;
	iter.skip_whitespace();
	if !iter.is_done() {
		return Err(iter.format_error("unexpected trailing characters")).context("while parsing JSON");
	}
	Ok(value)
}

/// Deepest nesting of arrays and objects that the parser accepts.
pub const MAX_DEPTH: usize = 256;

/// Parses one JSON value starting at the iterator position.
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_value(iter, 0)
}

fn parse_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	let peeked = iter.expect_peeked_byte()?;
	if matches!(peeked, b'[' | b'{') && depth >= MAX_DEPTH {
		return Err(iter.format_error(&format!("nested deeper than {MAX_DEPTH} levels")));
	}
	match peeked {
		b'[' => parse_array_entries(iter, |iter2| parse_value(iter2, depth + 1))
			.map(|values| JsonValue::Array(JsonArray(values))),
		b'{' => parse_json_object(iter, depth + 1).map(JsonValue::Object),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonObject> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter2| {
		object.set(&key, parse_value(iter2, depth)?);
		Ok(())
	})?;
	Ok(object)
}
