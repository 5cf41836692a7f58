use super::JsonValue;

/// Compact JSON text. Non-finite numbers have no JSON form and are written as `null`.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) if n.is_finite() => n.to_string(),
		JsonValue::Number(_) | JsonValue::Null => String::from("null"),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

#[must_use]
pub fn stringify_pretty_single_line(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(arr) => arr.stringify_pretty_single_line(),
		JsonValue::Object(obj) => obj.stringify_pretty_single_line(),
		_ => stringify(json),
	}
}

/// Indented JSON text. `indention` is the number of columns already used on the current
/// line; a container that fits into the remaining width is kept on one line.
#[must_use]
pub fn stringify_pretty_multi_line(json: &JsonValue, max_width: usize, depth: usize, indention: usize) -> String {
	let single_line = stringify_pretty_single_line(json);
	if single_line.len() + indention <= max_width {
		return single_line;
	}
	match json {
		JsonValue::Array(arr) if !arr.is_empty() => arr.stringify_pretty_multi_line(max_width, depth),
		JsonValue::Object(obj) if !obj.is_empty() => obj.stringify_pretty_multi_line(max_width, depth),
		_ => single_line,
	}
}

#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut output = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => output.push_str("\\\""),
			'\\' => output.push_str("\\\\"),
			'\n' => output.push_str("\\n"),
			'\r' => output.push_str("\\r"),
			'\t' => output.push_str("\\t"),
			'\u{08}' => output.push_str("\\b"),
			'\u{0c}' => output.push_str("\\f"),
			c if c.is_control() => output.push_str(&format!("\\u{:04x}", c as u32)),
			c => output.push(c),
		}
	}
	output
}
