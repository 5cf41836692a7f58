//! Translation of single coordinates.
//!
//! Output carries `x` and `y` only. Input may carry `x`, `y` and `z`, each of
//! them optional and defaulting to `0.0`. Values that are not finite are rejected.

use crate::{CodecError, Coordinate};
use anyhow::Result;
use mortar_core::json::JsonValue;

pub fn coordinate_to_json(coordinate: &Coordinate) -> JsonValue {
	JsonValue::from(vec![("x", coordinate.x), ("y", coordinate.y)])
}

/// Reads `{x, y, z}`. A node that is not an object has no fields and gives the origin.
pub fn coordinate_from_json(node: &JsonValue) -> Result<Coordinate> {
	Ok(Coordinate::new_3d(
		read_component(node, "x")?,
		read_component(node, "y")?,
		read_component(node, "z")?,
	))
}

fn read_component(node: &JsonValue, field: &'static str) -> Result<f64> {
	match node.get(field) {
		None => Ok(0.0),
		Some(value) => as_f64(value).filter(|number| number.is_finite()).ok_or_else(|| {
			CodecError::MalformedNumeric {
				field,
				value: describe(value),
			}
			.into()
		}),
	}
}

/// Lenient numeric reading: numbers and numeric strings as they are, booleans as 1 or 0, null as 0.
fn as_f64(value: &JsonValue) -> Option<f64> {
	match value {
		JsonValue::Number(number) => Some(*number),
		JsonValue::String(text) => text.trim().parse::<f64>().ok(),
		JsonValue::Boolean(flag) => Some(if *flag { 1.0 } else { 0.0 }),
		JsonValue::Null => Some(0.0),
		JsonValue::Array(_) | JsonValue::Object(_) => None,
	}
}

/// JSON text of a rejected value. An overflowing number would be written as `null`.
fn describe(value: &JsonValue) -> String {
	match value {
		JsonValue::Number(number) => number.to_string(),
		_ => value.stringify(),
	}
}
