use super::{
	COORDS_FIELD, CodecConfig, GEOMETRIES_FIELD, MultiPolygonLayout, TYPE_FIELD,
	sequence::{coordinates_to_json, rings_to_json},
};
use crate::{geometry::*, CodecError};
use anyhow::{Context, Result};
use mortar_core::json::{JsonArray, JsonObject, JsonValue};

fn node(geometry_type: GeometryType, field: &str, value: JsonValue) -> JsonValue {
	let mut object = JsonObject::new();
	object.set(TYPE_FIELD, geometry_type.as_str());
	object.set(field, value);
	JsonValue::Object(object)
}

pub fn encode_point(geometry: &PointGeometry) -> JsonValue {
	node(GeometryType::Point, COORDS_FIELD, coordinates_to_json(&[geometry.0]))
}

pub fn encode_multi_point(geometry: &MultiPointGeometry) -> JsonValue {
	node(GeometryType::MultiPoint, COORDS_FIELD, coordinates_to_json(&geometry.0))
}

pub fn encode_line_string(geometry: &LineStringGeometry) -> JsonValue {
	node(GeometryType::LineString, COORDS_FIELD, coordinates_to_json(&geometry.0))
}

pub fn encode_multi_line_string(geometry: &MultiLineStringGeometry) -> JsonValue {
	let lines: JsonArray = geometry.0.iter().map(|line| coordinates_to_json(&line.0)).collect();
	node(GeometryType::MultiLineString, COORDS_FIELD, JsonValue::Array(lines))
}

pub fn encode_polygon(geometry: &PolygonGeometry) -> JsonValue {
	node(
		GeometryType::Polygon,
		COORDS_FIELD,
		JsonValue::Array(rings_to_json(geometry)),
	)
}

pub fn encode_multi_polygon(geometry: &MultiPolygonGeometry, layout: MultiPolygonLayout) -> JsonValue {
	let coords: JsonArray = match layout {
		MultiPolygonLayout::Flattened => geometry
			.0
			.iter()
			.flat_map(|polygon| rings_to_json(polygon).0)
			.collect(),
		MultiPolygonLayout::Grouped => geometry
			.0
			.iter()
			.map(|polygon| JsonValue::Array(rings_to_json(polygon)))
			.collect(),
	};
	node(GeometryType::MultiPolygon, COORDS_FIELD, JsonValue::Array(coords))
}

/// Fails with [`CodecError::UnsupportedVariant`] if a member is absent.
pub fn encode_geometry_collection(geometry: &GeometryCollection, config: &CodecConfig) -> Result<JsonValue> {
	let members = geometry
		.0
		.iter()
		.enumerate()
		.map(|(index, member)| match member {
			Some(member) => encode(member, config).with_context(|| format!("geometry collection member {index}")),
			None => Err(CodecError::UnsupportedVariant(format!("absent geometry collection member at index {index}")).into()),
		})
		.collect::<Result<JsonArray>>()?;
	Ok(node(
		GeometryType::GeometryCollection,
		GEOMETRIES_FIELD,
		JsonValue::Array(members),
	))
}

pub fn encode(geometry: &Geometry, config: &CodecConfig) -> Result<JsonValue> {
	log::trace!("encoding {}", geometry.geometry_type());
	Ok(match geometry {
		Geometry::Point(g) => encode_point(g),
		Geometry::MultiPoint(g) => encode_multi_point(g),
		Geometry::LineString(g) => encode_line_string(g),
		Geometry::MultiLineString(g) => encode_multi_line_string(g),
		Geometry::Polygon(g) => encode_polygon(g),
		Geometry::MultiPolygon(g) => encode_multi_polygon(g, config.multi_polygon_layout),
		Geometry::GeometryCollection(g) => encode_geometry_collection(g, config)?,
	})
}
