use anyhow::{Result, anyhow};
use std::{fmt, str::FromStr};

/// The seven geometry kinds, named as they appear in the `type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeometryType {
	Point,
	MultiPoint,
	LineString,
	MultiLineString,
	Polygon,
	MultiPolygon,
	GeometryCollection,
}

impl GeometryType {
	pub const ALL: [GeometryType; 7] = [
		GeometryType::Point,
		GeometryType::MultiPoint,
		GeometryType::LineString,
		GeometryType::MultiLineString,
		GeometryType::Polygon,
		GeometryType::MultiPolygon,
		GeometryType::GeometryCollection,
	];

	#[must_use]
	pub fn as_str(&self) -> &'static str {
		match self {
			GeometryType::Point => "Point",
			GeometryType::MultiPoint => "MultiPoint",
			GeometryType::LineString => "LineString",
			GeometryType::MultiLineString => "MultiLineString",
			GeometryType::Polygon => "Polygon",
			GeometryType::MultiPolygon => "MultiPolygon",
			GeometryType::GeometryCollection => "GeometryCollection",
		}
	}

	/// Case-sensitive lookup of a `type` value. Unknown names give `None`.
	#[must_use]
	pub fn from_type_name(name: &str) -> Option<GeometryType> {
		GeometryType::ALL.into_iter().find(|t| t.as_str() == name)
	}
}

impl fmt::Display for GeometryType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for GeometryType {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		GeometryType::from_type_name(s).ok_or_else(|| {
			let names: Vec<&str> = GeometryType::ALL.iter().map(GeometryType::as_str).collect();
			anyhow!("unknown geometry type '{s}', expected one of: {}", names.join(", "))
		})
	}
}
