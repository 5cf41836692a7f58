//! The codec between geometries and JSON tree nodes of the shape
//! `{"type": "...", "coords": [...]}`, or `{"type": "GeometryCollection", "geometries": [...]}`.

mod config;
mod coordinate;
mod decode;
mod encode;
mod module;
mod sequence;

pub use config::*;
pub use coordinate::{coordinate_from_json, coordinate_to_json};
pub use module::*;

/// Name of the field that holds the geometry kind.
pub const TYPE_FIELD: &str = "type";
/// Name of the field that holds the coordinates of all kinds except the collection.
pub const COORDS_FIELD: &str = "coords";
/// Name of the field that holds the members of a geometry collection.
pub const GEOMETRIES_FIELD: &str = "geometries";
