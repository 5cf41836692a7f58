//! Token-level helpers for reading JSON text from a [`ByteIterator`].
//!
//! Every helper leaves the iterator on the first byte after the token it read, so they
//! can be chained by the tree parser in [`crate::json`].

use super::iterator::ByteIterator;
use anyhow::{Context, Result, bail};
use std::str::FromStr;

/// Consumes exactly the ASCII bytes of `tag`, e.g. `true` or `null`.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u16> {
	let mut value: u16 = 0;
	for _ in 0..4 {
		let digit = match iter.expect_next_byte()? {
			b @ b'0'..=b'9' => b - b'0',
			b @ b'a'..=b'f' => b - b'a' + 10,
			b @ b'A'..=b'F' => b - b'A' + 10,
			_ => return Err(iter.format_error("invalid unicode code point")),
		};
		value = (value << 4) | u16::from(digit);
	}
	Ok(value)
}

/// Reads a quoted JSON string, resolving escapes including `\uXXXX` surrogate pairs.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		bail!(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut units = vec![parse_hex4(iter)?];
					if (0xD800..0xDC00).contains(&units[0]) {
						parse_tag(iter, "\\u")?;
						units.push(parse_hex4(iter)?);
					}
					let text = String::from_utf16(&units).map_err(|_| iter.format_error("invalid unicode code point"))?;
					bytes.extend_from_slice(text.as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).context("while parsing a quoted JSON string")
}

/// Reads the text of a JSON number: sign, integer digits, optional fraction and exponent.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	fn digits(iter: &mut ByteIterator, number: &mut String) -> usize {
		let mut count = 0;
		while let Some(b @ b'0'..=b'9') = iter.peek() {
			number.push(char::from(b));
			iter.advance();
			count += 1;
		}
		count
	}

	let mut number = String::with_capacity(16);

	if let Some(b'-') = iter.peek() {
		number.push('-');
		iter.advance();
	}

	if digits(iter, &mut number) == 0 {
		return Err(iter.format_error("expected digits in number"));
	}

	if let Some(b'.') = iter.peek() {
		number.push('.');
		iter.advance();
		if digits(iter, &mut number) == 0 {
			return Err(iter.format_error("expected digits after decimal point"));
		}
	}

	if let Some(b @ (b'e' | b'E')) = iter.peek() {
		number.push(char::from(b));
		iter.advance();
		if let Some(b @ (b'+' | b'-')) = iter.peek() {
			number.push(char::from(b));
			iter.advance();
		}
		if digits(iter, &mut number) == 0 {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(number)
}

/// Reads a JSON number and converts it with `R::from_str`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks the entries of a JSON object, handing each key to `parse_value`, which must
/// consume the value that follows it.
pub fn parse_object_entries(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<()>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		bail!(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
}

/// Walks the elements of a JSON array and collects what `parse_value` returns for each.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		bail!(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(result),
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
}
