pub mod convert;
pub mod probe;

use anyhow::{Context, Result, bail};
use mortar_core::json::JsonValue;
use mortar_geometry::{CodecConfig, Geometry, GeometryModule, GeometryType};
use std::{fs, path::Path};

/// The codec configured from `config`, or with the defaults if there is none.
pub fn load_module(config: Option<&Path>) -> Result<GeometryModule> {
	let config = match config {
		Some(path) => CodecConfig::from_path(path)?,
		None => CodecConfig::default(),
	};
	log::debug!("using {config:?}");
	Ok(GeometryModule::new(config))
}

pub fn read_node(path: &Path) -> Result<JsonValue> {
	let text = fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
	JsonValue::parse_str(&text).with_context(|| format!("parsing {path:?}"))
}

/// Decodes `node` by its `type` field, or as `geometry_type` if one is given.
///
/// A node without coordinates is decoded to nothing, which is an error here.
pub fn decode_node(module: &GeometryModule, node: &JsonValue, geometry_type: Option<GeometryType>) -> Result<Geometry> {
	let geometry = match geometry_type {
		Some(geometry_type) => module.decode_as(node, geometry_type)?,
		None => module.decode_tagged(node)?,
	};
	match geometry {
		Some(geometry) => Ok(geometry),
		None => bail!("the node does not contain a geometry"),
	}
}
