//! The entry points of the codec: [`GeometryModule`] and the traits that register
//! every geometry type with it.

use super::{CodecConfig, decode, encode};
use crate::{GeometryFactory, geometry::*};
use anyhow::Result;
use lazy_static::lazy_static;
use mortar_core::json::JsonValue;

/// A geometry type that can be written as a tree node.
pub trait GeometrySerialize {
	fn serialize(&self, config: &CodecConfig) -> Result<JsonValue>;
}

/// A geometry type that can be read from a tree node.
///
/// `Output` is `Option<Self>` for the types that tolerate a missing `coords`
/// field. The collection has no such tolerance and decodes to itself.
pub trait GeometryDeserialize: Sized {
	type Output;

	fn deserialize(node: &JsonValue, factory: &GeometryFactory) -> Result<Self::Output>;
}

macro_rules! register {
	($($t:ty, $encode:expr, $decode:path;)*) => {$(
		impl GeometrySerialize for $t {
			fn serialize(&self, _config: &CodecConfig) -> Result<JsonValue> {
				Ok($encode(self))
			}
		}

		impl GeometryDeserialize for $t {
			type Output = Option<$t>;

			fn deserialize(node: &JsonValue, factory: &GeometryFactory) -> Result<Option<$t>> {
				$decode(node, factory)
			}
		}
	)*};
}

register!(
	PointGeometry, encode::encode_point, decode::decode_point;
	MultiPointGeometry, encode::encode_multi_point, decode::decode_multi_point;
	LineStringGeometry, encode::encode_line_string, decode::decode_line_string;
	MultiLineStringGeometry, encode::encode_multi_line_string, decode::decode_multi_line_string;
	PolygonGeometry, encode::encode_polygon, decode::decode_polygon;
);

impl GeometrySerialize for MultiPolygonGeometry {
	fn serialize(&self, config: &CodecConfig) -> Result<JsonValue> {
		Ok(encode::encode_multi_polygon(self, config.multi_polygon_layout))
	}
}

impl GeometryDeserialize for MultiPolygonGeometry {
	type Output = Option<MultiPolygonGeometry>;

	fn deserialize(node: &JsonValue, factory: &GeometryFactory) -> Result<Self::Output> {
		decode::decode_multi_polygon(node, factory)
	}
}

impl GeometrySerialize for GeometryCollection {
	fn serialize(&self, config: &CodecConfig) -> Result<JsonValue> {
		encode::encode_geometry_collection(self, config)
	}
}

impl GeometryDeserialize for GeometryCollection {
	type Output = GeometryCollection;

	fn deserialize(node: &JsonValue, factory: &GeometryFactory) -> Result<Self::Output> {
		decode::decode_geometry_collection(node, factory)
	}
}

impl GeometrySerialize for Geometry {
	fn serialize(&self, config: &CodecConfig) -> Result<JsonValue> {
		encode::encode(self, config)
	}
}

/// Dispatches on the node's `type` field. See [`GeometryModule::decode_tagged`].
impl GeometryDeserialize for Geometry {
	type Output = Option<Geometry>;

	fn deserialize(node: &JsonValue, factory: &GeometryFactory) -> Result<Self::Output> {
		decode::decode_tagged(node, factory)
	}
}

/// Encodes and decodes geometries with one configuration.
///
/// The module holds no state besides its configuration, so one instance can be
/// shared between threads.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryModule {
	config: CodecConfig,
	factory: GeometryFactory,
}

impl GeometryModule {
	#[must_use]
	pub fn new(config: CodecConfig) -> Self {
		Self {
			config,
			factory: GeometryFactory::new(config.srid),
		}
	}

	#[must_use]
	pub fn config(&self) -> &CodecConfig {
		&self.config
	}

	#[must_use]
	pub fn factory(&self) -> &GeometryFactory {
		&self.factory
	}

	pub fn encode<T: GeometrySerialize>(&self, geometry: &T) -> Result<JsonValue> {
		geometry.serialize(&self.config)
	}

	/// Decodes `node` as `T`:
	///
	/// ```rust
	/// use mortar_core::json::JsonValue;
	/// use mortar_geometry::{GeometryModule, PointGeometry};
	///
	/// let node = JsonValue::parse_str(r#"{"type":"Point","coords":[{"x":1,"y":2}]}"#).unwrap();
	/// let point = GeometryModule::default().decode::<PointGeometry>(&node).unwrap();
	/// assert_eq!(point, Some(PointGeometry::from([1.0, 2.0])));
	/// ```
	pub fn decode<T: GeometryDeserialize>(&self, node: &JsonValue) -> Result<T::Output> {
		T::deserialize(node, &self.factory)
	}

	/// Decodes `node` as `geometry_type`, whatever its `type` field says.
	pub fn decode_as(&self, node: &JsonValue, geometry_type: GeometryType) -> Result<Option<Geometry>> {
		decode::decode_as(node, geometry_type, &self.factory)
	}

	/// Decodes `node` as the kind named by its `type` field. `Ok(None)` if the kind is
	/// unknown or the node has no `coords`.
	pub fn decode_tagged(&self, node: &JsonValue) -> Result<Option<Geometry>> {
		decode::decode_tagged(node, &self.factory)
	}
}

lazy_static! {
	static ref DEFAULT_MODULE: GeometryModule = GeometryModule::default();
}

/// Encodes with the default configuration.
pub fn encode_geometry(geometry: &Geometry) -> Result<JsonValue> {
	DEFAULT_MODULE.encode(geometry)
}

/// Decodes with the default configuration. `Ok(None)` if `node` has no `coords`.
pub fn decode_geometry(node: &JsonValue, geometry_type: GeometryType) -> Result<Option<Geometry>> {
	DEFAULT_MODULE.decode_as(node, geometry_type)
}
