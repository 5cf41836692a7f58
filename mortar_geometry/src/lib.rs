//! Vector geometries and their codec to and from JSON trees.
//!
//! ```rust
//! use mortar_core::json::JsonValue;
//! use mortar_geometry::{GeometryType, decode_geometry, encode_geometry};
//!
//! let node = JsonValue::parse_str(r#"{"type":"Point","coords":[{"x":1.5,"y":2.5,"z":9}]}"#).unwrap();
//! let point = decode_geometry(&node, GeometryType::Point).unwrap().unwrap();
//! assert_eq!(
//! 	encode_geometry(&point).unwrap().stringify(),
//! 	r#"{"type":"Point","coords":[{"x":1.5,"y":2.5}]}"#
//! );
//! ```

mod codec;
mod error;
mod factory;
mod geometry;

pub use codec::*;
pub use error::CodecError;
pub use factory::*;
pub use geometry::*;
