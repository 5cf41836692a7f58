//! Reconstruction of geometries from tree nodes.
//!
//! The typed entry points (`decode_point`, `decode_polygon`, ...) trust the caller
//! about the kind of geometry: they ignore the `type` field and return `Ok(None)`
//! when `coords` is missing. [`decode_tagged`] picks the entry point from the `type`
//! field and is just as tolerant. Members of a geometry collection are dispatched on
//! their `type` field too, but there a missing field is an error.

use super::{
	COORDS_FIELD, GEOMETRIES_FIELD, TYPE_FIELD,
	sequence::{coordinates_from_json, map_elements},
};
use crate::{CodecError, GeometryFactory, geometry::*};
use anyhow::{Context, Result};
use mortar_core::json::JsonValue;

/// The `coords` field of `node`, if it has one.
fn coords_of(node: &JsonValue, expected: GeometryType) -> Option<&JsonValue> {
	let found = node.get(TYPE_FIELD).and_then(|value| value.as_str().ok());
	if let Some(found) = found.filter(|found| *found != expected.as_str()) {
		log::debug!("decoding a node of type '{found}' as {expected}");
	}
	let coords = node.get(COORDS_FIELD);
	if coords.is_none() {
		log::debug!("{expected} node without '{COORDS_FIELD}', nothing to decode");
	}
	coords
}

fn point(coords: &JsonValue, factory: &GeometryFactory) -> Result<PointGeometry> {
	factory.point_from_coordinates(&coordinates_from_json(coords)?)
}

fn multi_point(coords: &JsonValue, factory: &GeometryFactory) -> Result<MultiPointGeometry> {
	Ok(factory.multi_point(coordinates_from_json(coords)?))
}

fn line_string(coords: &JsonValue, factory: &GeometryFactory) -> Result<LineStringGeometry> {
	factory.line_string(coordinates_from_json(coords)?)
}

fn multi_line_string(coords: &JsonValue, factory: &GeometryFactory) -> Result<MultiLineStringGeometry> {
	let lines = map_elements(coords, |line| line_string(line, factory))?;
	Ok(factory.multi_line_string(lines))
}

fn ring(coords: &JsonValue, factory: &GeometryFactory) -> Result<RingGeometry> {
	factory.linear_ring(coordinates_from_json(coords)?)
}

/// Element 0 is the exterior ring, the remaining elements are holes.
fn polygon(coords: &JsonValue, factory: &GeometryFactory) -> Result<PolygonGeometry> {
	let rings = map_elements(coords, |r| ring(r, factory))?;
	factory.polygon_from_rings(rings)
}

/// Every element is a complete polygon: `[outer, inner...]`.
fn multi_polygon(coords: &JsonValue, factory: &GeometryFactory) -> Result<MultiPolygonGeometry> {
	let polygons = map_elements(coords, |p| polygon(p, factory))?;
	Ok(factory.multi_polygon(polygons))
}

fn geometry_collection(geometries: &JsonValue, factory: &GeometryFactory) -> Result<GeometryCollection> {
	let members = map_elements(geometries, |member| decode_member(member, factory))?;
	Ok(factory.geometry_collection(members))
}

macro_rules! typed_entry_point {
	($($name:ident, $build:ident, $t:ty, $geometry_type:expr;)*) => {$(
		/// Decodes the `coords` of `node`, or returns `Ok(None)` if there are none.
		pub fn $name(node: &JsonValue, factory: &GeometryFactory) -> Result<Option<$t>> {
			log::trace!("decoding {}", $geometry_type);
			coords_of(node, $geometry_type)
				.map(|coords| $build(coords, factory))
				.transpose()
				.with_context(|| format!("while decoding a {}", $geometry_type))
		}
	)*};
}

typed_entry_point!(
	decode_point, point, PointGeometry, GeometryType::Point;
	decode_multi_point, multi_point, MultiPointGeometry, GeometryType::MultiPoint;
	decode_line_string, line_string, LineStringGeometry, GeometryType::LineString;
	decode_multi_line_string, multi_line_string, MultiLineStringGeometry, GeometryType::MultiLineString;
	decode_polygon, polygon, PolygonGeometry, GeometryType::Polygon;
	decode_multi_polygon, multi_polygon, MultiPolygonGeometry, GeometryType::MultiPolygon;
);

/// Decodes the `geometries` of `node`. Unlike the other entry points a missing field is an error.
pub fn decode_geometry_collection(node: &JsonValue, factory: &GeometryFactory) -> Result<GeometryCollection> {
	log::trace!("decoding {}", GeometryType::GeometryCollection);
	let geometries = node
		.get(GEOMETRIES_FIELD)
		.ok_or(CodecError::MissingField(GEOMETRIES_FIELD))?;
	geometry_collection(geometries, factory).context("while decoding a GeometryCollection")
}

/// Decodes `node` as `geometry_type`, ignoring its `type` field.
pub fn decode_as(node: &JsonValue, geometry_type: GeometryType, factory: &GeometryFactory) -> Result<Option<Geometry>> {
	Ok(match geometry_type {
		GeometryType::Point => decode_point(node, factory)?.map(Geometry::from),
		GeometryType::MultiPoint => decode_multi_point(node, factory)?.map(Geometry::from),
		GeometryType::LineString => decode_line_string(node, factory)?.map(Geometry::from),
		GeometryType::MultiLineString => decode_multi_line_string(node, factory)?.map(Geometry::from),
		GeometryType::Polygon => decode_polygon(node, factory)?.map(Geometry::from),
		GeometryType::MultiPolygon => decode_multi_polygon(node, factory)?.map(Geometry::from),
		GeometryType::GeometryCollection => Some(decode_geometry_collection(node, factory)?.into()),
	})
}

/// The kind named by the `type` field, or `None` for a name that is not a geometry kind.
fn type_of(node: &JsonValue) -> Result<Option<GeometryType>> {
	let name = node
		.as_object()?
		.get_string(TYPE_FIELD)?
		.ok_or(CodecError::MissingField(TYPE_FIELD))?;
	let geometry_type = GeometryType::from_type_name(&name);
	if geometry_type.is_none() {
		log::warn!("skipping geometry of unknown type '{name}'");
	}
	Ok(geometry_type)
}

/// Decodes `node` as the kind named by its `type` field.
///
/// `Ok(None)` for an unknown `type`, or for a known type without `coords`.
/// A missing `type` is a [`CodecError::MissingField`].
pub fn decode_tagged(node: &JsonValue, factory: &GeometryFactory) -> Result<Option<Geometry>> {
	match type_of(node)? {
		Some(geometry_type) => decode_as(node, geometry_type, factory),
		None => Ok(None),
	}
}

/// A collection member: an unknown `type` is kept as an absent member, a known
/// type without its `coords` is a [`CodecError::MissingField`].
fn decode_member(node: &JsonValue, factory: &GeometryFactory) -> Result<Option<Geometry>> {
	let Some(geometry_type) = type_of(node)? else {
		return Ok(None);
	};
	match decode_as(node, geometry_type, factory)? {
		Some(geometry) => Ok(Some(geometry)),
		None => Err(CodecError::MissingField(COORDS_FIELD).into()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn parse(json: &str) -> JsonValue {
		JsonValue::parse_str(json).unwrap()
	}

	fn factory() -> GeometryFactory {
		GeometryFactory::default()
	}

	fn codec_error(error: &anyhow::Error) -> CodecError {
		match error.downcast_ref::<CodecError>() {
			Some(e) => e.clone(),
			None => panic!("not a codec error: {error:#}"),
		}
	}

	#[test]
	fn point_reads_z_and_ignores_extra_coordinates() {
		let node = parse(r#"{"type":"Point","coords":[{"x":1.5,"y":2.5,"z":9},{"x":7,"y":7}]}"#);
		let point = decode_point(&node, &factory()).unwrap().unwrap();
		assert_eq!(point.0, Coordinate::new_3d(1.5, 2.5, 9.0));
	}

	#[test]
	fn missing_coords_is_tolerated() {
		let node = parse(r#"{"type":"Point"}"#);
		assert_eq!(decode_point(&node, &factory()).unwrap(), None);
		assert_eq!(decode_polygon(&node, &factory()).unwrap(), None);
		assert_eq!(decode_as(&node, GeometryType::MultiPolygon, &factory()).unwrap(), None);
		assert_eq!(decode_line_string(&JsonValue::Null, &factory()).unwrap(), None);
	}

	#[test]
	fn typed_entry_points_ignore_type() {
		let node = parse(r#"{"type":"Polygon","coords":[{"x":1,"y":2},{"x":3,"y":4}]}"#);
		let line = decode_line_string(&node, &factory()).unwrap().unwrap();
		assert_eq!(line, LineStringGeometry::from(&[[1, 2], [3, 4]]));
	}

	#[rstest]
	#[case(r#"{"coords":[]}"#, "Point", "invalid geometry: a point needs one coordinate, found none")]
	#[case(r#"{"coords":[]}"#, "Polygon", "invalid geometry: a polygon needs an exterior ring, found no rings")]
	#[case(r#"{"coords":[{"x":1,"y":1}]}"#, "LineString", "invalid geometry: a line string needs at least 2 coordinates, found 1")]
	#[case(r#"{"coords":[[{"x":0,"y":0},{"x":1,"y":0},{"x":1,"y":1},{"x":0,"y":1}]]}"#, "Polygon", "invalid geometry: a ring must end where it starts")]
	fn builder_errors(#[case] json: &str, #[case] geometry_type: &str, #[case] message: &str) {
		let geometry_type = geometry_type.parse().unwrap();
		let error = decode_as(&parse(json), geometry_type, &factory()).unwrap_err();
		assert!(matches!(codec_error(&error), CodecError::GeometryInvariant(_)));
		assert_eq!(error.root_cause().to_string(), message);
	}

	#[test]
	fn wrong_field_kind_is_an_error() {
		let error = decode_point(&parse(r#"{"coords":5}"#), &factory()).unwrap_err();
		assert_eq!(format!("{error:#}"), "while decoding a Point: expected a JSON array, found a number");
	}

	#[test]
	fn polygon_with_holes() {
		let node = parse(
			r#"{"coords":[
				[{"x":0,"y":0},{"x":9,"y":0},{"x":9,"y":9},{"x":0,"y":0}],
				[{"x":1,"y":1},{"x":2,"y":1},{"x":2,"y":2},{"x":1,"y":1}],
				[{"x":5,"y":5},{"x":6,"y":5},{"x":6,"y":6},{"x":5,"y":5}]
			]}"#,
		);
		let polygon = decode_polygon(&node, &factory()).unwrap().unwrap();
		assert_eq!(polygon.exterior.len(), 4);
		assert_eq!(polygon.interiors.len(), 2);
		assert_eq!(polygon.interiors[1].0[1], Coordinate::new(6.0, 5.0));
	}

	#[test]
	fn multi_line_string() {
		let node = parse(r#"{"coords":[[{"x":0,"y":0},{"x":1,"y":1}],[{"x":2,"y":2},{"x":3,"y":3},{"x":4,"y":4}]]}"#);
		let multi = decode_multi_line_string(&node, &factory()).unwrap().unwrap();
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.0[1].len(), 3);
	}

	#[test]
	fn collection_requires_geometries() {
		let error = decode_geometry_collection(&parse(r#"{"type":"GeometryCollection"}"#), &factory()).unwrap_err();
		assert_eq!(codec_error(&error), CodecError::MissingField("geometries"));
	}

	#[test]
	fn collection_skips_unknown_types() {
		let node = parse(
			r#"{"geometries":[
				{"type":"Circle","radius":3},
				{"type":"Point","coords":[{"x":1,"y":2}]},
				{"type":"GeometryCollection","geometries":[]}
			]}"#,
		);
		let collection = decode_geometry_collection(&node, &factory()).unwrap();
		assert_eq!(
			collection.0,
			vec![
				None,
				Some(Geometry::new_point([1.0, 2.0])),
				Some(Geometry::GeometryCollection(GeometryCollection::default())),
			]
		);
	}

	#[rstest]
	#[case(r#"{"geometries":[{"coords":[]}]}"#, CodecError::MissingField("type"))]
	#[case(r#"{"geometries":[{"type":"Point"}]}"#, CodecError::MissingField("coords"))]
	#[case(r#"{"geometries":[{"type":"GeometryCollection"}]}"#, CodecError::MissingField("geometries"))]
	fn collection_members_are_strict(#[case] json: &str, #[case] expected: CodecError) {
		let error = decode_geometry_collection(&parse(json), &factory()).unwrap_err();
		assert_eq!(codec_error(&error), expected);
	}

	#[test]
	fn tagged_dispatch() {
		let node = parse(r#"{"type":"MultiPoint","coords":[{"x":1,"y":2}]}"#);
		assert_eq!(
			decode_tagged(&node, &factory()).unwrap(),
			Some(Geometry::new_multi_point(vec![[1.0, 2.0]]))
		);
		assert_eq!(decode_tagged(&parse(r#"{"type":"Circle"}"#), &factory()).unwrap(), None);
		assert!(decode_tagged(&parse(r#"{"type":7}"#), &factory()).is_err());
	}

	#[test]
	fn tagged_dispatch_tolerates_missing_coords() {
		assert_eq!(decode_tagged(&parse(r#"{"type":"Point"}"#), &factory()).unwrap(), None);
		assert_eq!(decode_tagged(&parse(r#"{"type":"MultiPolygon"}"#), &factory()).unwrap(), None);

		let error = decode_tagged(&parse(r#"{"coords":[]}"#), &factory()).unwrap_err();
		assert_eq!(codec_error(&error), CodecError::MissingField("type"));

		let error = decode_tagged(&parse(r#"{"type":"GeometryCollection"}"#), &factory()).unwrap_err();
		assert_eq!(codec_error(&error), CodecError::MissingField("geometries"));
	}
}
