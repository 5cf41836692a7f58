//! A cursor over an in-memory byte slice with one byte of lookahead.
//!
//! Errors produced through [`ByteIterator::format_error`] carry the byte position and a
//! short excerpt of the text preceding it, which keeps parser messages readable.

use anyhow::{Error, Result, anyhow};

const EXCERPT_LENGTH: usize = 16;

/// Iterates over the bytes of a borrowed buffer.
///
/// `peek` never consumes. `advance`, `consume` and `expect_next_byte` move the cursor
/// forward by one byte.
pub struct ByteIterator<'a> {
	bytes: &'a [u8],
	position: usize,
}

impl<'a> ByteIterator<'a> {
	/// Creates an iterator positioned at the first byte of `bytes`.
	#[must_use]
	pub fn new(bytes: &'a [u8]) -> Self {
		ByteIterator { bytes, position: 0 }
	}

	/// Creates an iterator over the UTF-8 bytes of `text`.
	#[must_use]
	pub fn from_text(text: &'a str) -> Self {
		Self::new(text.as_bytes())
	}

	/// Builds an error that names the current position and shows the bytes read just before it.
	#[must_use]
	pub fn format_error(&self, msg: &str) -> Error {
		let end = self.position.min(self.bytes.len());
		let start = end.saturating_sub(EXCERPT_LENGTH);
		let mut excerpt = String::from_utf8_lossy(&self.bytes[start..end]).into_owned();
		if self.peek().is_none() {
			excerpt.push_str("<EOF>");
		}
		anyhow!("{msg} at position {}: {excerpt}", self.position)
	}

	#[inline]
	#[must_use]
	pub fn position(&self) -> usize {
		self.position
	}

	#[inline]
	#[must_use]
	pub fn peek(&self) -> Option<u8> {
		self.bytes.get(self.position).copied()
	}

	#[inline]
	pub fn advance(&mut self) {
		if self.position < self.bytes.len() {
			self.position += 1;
		}
	}

	/// Returns the current byte and moves past it.
	#[inline]
	pub fn consume(&mut self) -> Option<u8> {
		let byte = self.peek();
		self.advance();
		byte
	}

	/// Like [`consume`](Self::consume), but the end of input is an error.
	#[inline]
	pub fn expect_next_byte(&mut self) -> Result<u8> {
		match self.consume() {
			Some(byte) => Ok(byte),
			None => Err(self.format_error("unexpected end")),
		}
	}

	/// Like [`peek`](Self::peek), but the end of input is an error.
	#[inline]
	pub fn expect_peeked_byte(&self) -> Result<u8> {
		self.peek().ok_or_else(|| self.format_error("unexpected end"))
	}

	pub fn skip_whitespace(&mut self) {
		while self.peek().is_some_and(|byte| byte.is_ascii_whitespace()) {
			self.advance();
		}
	}

	/// Returns `true` once every byte has been consumed.
	#[must_use]
	pub fn is_done(&self) -> bool {
		self.position >= self.bytes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn peek_and_consume() {
		let mut b = ByteIterator::from_text("123");
		assert_eq!(b.peek(), Some(b'1'));
		assert_eq!(b.consume(), Some(b'1'));
		assert_eq!(b.peek(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'2'));
		assert_eq!(b.consume(), Some(b'3'));
		assert_eq!(b.peek(), None);
		assert_eq!(b.consume(), None);
		assert!(b.is_done());
	}

	#[test]
	fn expect_next_byte() {
		let mut b = ByteIterator::from_text("AB");
		assert_eq!(b.expect_next_byte().unwrap(), b'A');
		assert_eq!(b.expect_next_byte().unwrap(), b'B');
		assert!(b.expect_next_byte().is_err());
	}

	#[test]
	fn expect_peeked_byte() {
		let mut b = ByteIterator::from_text("X");
		assert_eq!(b.expect_peeked_byte().unwrap(), b'X');
		b.advance();
		assert_eq!(
			b.expect_peeked_byte().unwrap_err().to_string(),
			"unexpected end at position 1: X<EOF>"
		);
	}

	#[test]
	fn skip_whitespace() {
		let mut b = ByteIterator::from_text(" \t\r\nAB");
		b.skip_whitespace();
		assert_eq!(b.position(), 4);
		assert_eq!(b.consume(), Some(b'A'));
	}

	#[test]
	fn error_excerpt_is_limited() {
		let text = "abcdefghijklmnopqrstuvwxyz";
		let mut b = ByteIterator::from_text(text);
		for _ in 0..20 {
			b.advance();
		}
		assert_eq!(
			b.format_error("oops").to_string(),
			"oops at position 20: efghijklmnopqrst"
		);
	}
}
