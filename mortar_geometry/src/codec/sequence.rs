//! Helpers for the nested coordinate arrays that encoder and decoder share.

use super::coordinate::{coordinate_from_json, coordinate_to_json};
use crate::{Coordinate, PolygonGeometry};
use anyhow::{Context, Result};
use mortar_core::json::{JsonArray, JsonValue};

/// `[ {x,y}, ... ]`
pub fn coordinates_to_json(coordinates: &[Coordinate]) -> JsonValue {
	JsonValue::Array(coordinates.iter().map(coordinate_to_json).collect())
}

/// `[ [outer], [inner 1], ... ]`
pub fn rings_to_json(polygon: &PolygonGeometry) -> JsonArray {
	polygon.rings().map(|ring| coordinates_to_json(&ring.0)).collect()
}

pub fn coordinates_from_json(node: &JsonValue) -> Result<Vec<Coordinate>> {
	map_elements(node, coordinate_from_json)
}

/// Applies `read` to every element of the array `node`, failing if `node` is not an array.
pub fn map_elements<R>(node: &JsonValue, read: impl Fn(&JsonValue) -> Result<R>) -> Result<Vec<R>> {
	node
		.as_array()?
		.iter()
		.enumerate()
		.map(|(index, element)| read(element).with_context(|| format!("at index {index}")))
		.collect()
}
