use crate::DEFAULT_SRID;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

/// How the encoder nests the rings of a multi polygon in `coords`.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MultiPolygonLayout {
	/// The rings of all polygons in one flat list, without grouping per polygon.
	///
	/// This is the historical output. The decoder cannot read it back.
	#[default]
	Flattened,
	/// One array of rings per polygon, the shape the decoder expects.
	Grouped,
}

/// Settings shared by encoder and decoder.
///
/// ```yaml
/// srid: 4326
/// multi_polygon_layout: grouped
/// ```
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
	/// Spatial reference id given to every decoded geometry.
	#[serde(default = "default_srid")]
	pub srid: u32,

	#[serde(default)]
	pub multi_polygon_layout: MultiPolygonLayout,
}

fn default_srid() -> u32 {
	DEFAULT_SRID
}

impl Default for CodecConfig {
	fn default() -> Self {
		Self {
			srid: DEFAULT_SRID,
			multi_polygon_layout: MultiPolygonLayout::default(),
		}
	}
}

impl CodecConfig {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		CodecConfig::from_reader(BufReader::new(file)).with_context(|| format!("reading config file {path:?}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::io::Write;

	#[rstest]
	#[case("{}", 4326, MultiPolygonLayout::Flattened)]
	#[case("srid: 3857", 3857, MultiPolygonLayout::Flattened)]
	#[case("multi_polygon_layout: grouped", 4326, MultiPolygonLayout::Grouped)]
	#[case("srid: 25832\nmulti_polygon_layout: flattened", 25832, MultiPolygonLayout::Flattened)]
	fn from_string(#[case] text: &str, #[case] srid: u32, #[case] layout: MultiPolygonLayout) {
		assert_eq!(
			CodecConfig::from_string(text).unwrap(),
			CodecConfig {
				srid,
				multi_polygon_layout: layout
			}
		);
	}

	#[rstest]
	#[case("unknown: 1")]
	#[case("multi_polygon_layout: nested")]
	#[case("srid: -1")]
	fn rejects(#[case] text: &str) {
		assert!(CodecConfig::from_string(text).is_err());
	}

	#[test]
	fn default() {
		assert_eq!(CodecConfig::default().srid, 4326);
		assert_eq!(CodecConfig::default().multi_polygon_layout, MultiPolygonLayout::Flattened);
	}

	#[test]
	fn from_path() -> Result<()> {
		let mut file = tempfile::NamedTempFile::new()?;
		writeln!(file, "multi_polygon_layout: grouped")?;
		let config = CodecConfig::from_path(file.path())?;
		assert_eq!(config.multi_polygon_layout, MultiPolygonLayout::Grouped);

		let error = CodecConfig::from_path(Path::new("/does/not/exist.yml")).unwrap_err();
		assert!(error.to_string().starts_with("opening config file"));
		Ok(())
	}

	#[test]
	fn from_testdata() -> Result<()> {
		let config = CodecConfig::from_path(Path::new("../testdata/grouped.yml"))?;
		assert_eq!(config.multi_polygon_layout, MultiPolygonLayout::Grouped);
		assert_eq!(config.srid, 4326);
		Ok(())
	}
}
