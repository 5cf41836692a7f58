//! Construction of validated geometries.

use crate::{CodecError, geometry::*};
use anyhow::{Result, ensure};

/// EPSG:4326, WGS 84.
pub const DEFAULT_SRID: u32 = 4326;

/// Builds geometries from coordinates and rejects those that break the
/// construction invariants: rings need 4 or more coordinates and must be closed,
/// line strings need 2 or more.
///
/// All geometries built by one factory share its spatial reference id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryFactory {
	srid: u32,
}

impl Default for GeometryFactory {
	fn default() -> Self {
		Self::new(DEFAULT_SRID)
	}
}

impl GeometryFactory {
	#[must_use]
	pub const fn new(srid: u32) -> Self {
		Self { srid }
	}

	#[must_use]
	pub const fn srid(&self) -> u32 {
		self.srid
	}

	#[must_use]
	pub fn point(&self, coordinate: Coordinate) -> PointGeometry {
		PointGeometry(coordinate)
	}

	/// A point at the first coordinate. Further coordinates are ignored.
	pub fn point_from_coordinates(&self, coordinates: &[Coordinate]) -> Result<PointGeometry> {
		match coordinates.first() {
			Some(coordinate) => Ok(self.point(*coordinate)),
			None => Err(CodecError::GeometryInvariant(String::from("a point needs one coordinate, found none")).into()),
		}
	}

	#[must_use]
	pub fn multi_point(&self, coordinates: Vec<Coordinate>) -> MultiPointGeometry {
		MultiPointGeometry(coordinates)
	}

	pub fn line_string(&self, coordinates: Vec<Coordinate>) -> Result<LineStringGeometry> {
		let line = LineStringGeometry(coordinates);
		line.verify()?;
		Ok(line)
	}

	pub fn linear_ring(&self, coordinates: Vec<Coordinate>) -> Result<RingGeometry> {
		let ring = RingGeometry(coordinates);
		ring.verify()?;
		Ok(ring)
	}

	#[must_use]
	pub fn polygon(&self, exterior: RingGeometry, interiors: Vec<RingGeometry>) -> PolygonGeometry {
		PolygonGeometry::new(exterior, interiors)
	}

	/// A polygon whose first ring is the exterior and whose other rings are holes.
	pub fn polygon_from_rings(&self, rings: Vec<RingGeometry>) -> Result<PolygonGeometry> {
		ensure!(
			!rings.is_empty(),
			CodecError::GeometryInvariant(String::from("a polygon needs an exterior ring, found no rings"))
		);
		let mut rings = rings.into_iter();
		let exterior = rings.next().unwrap_or_else(RingGeometry::new);
		Ok(self.polygon(exterior, rings.collect()))
	}

	#[must_use]
	pub fn multi_line_string(&self, lines: Vec<LineStringGeometry>) -> MultiLineStringGeometry {
		MultiLineStringGeometry(lines)
	}

	#[must_use]
	pub fn multi_polygon(&self, polygons: Vec<PolygonGeometry>) -> MultiPolygonGeometry {
		MultiPolygonGeometry(polygons)
	}

	#[must_use]
	pub fn geometry_collection(&self, members: Vec<Option<Geometry>>) -> GeometryCollection {
		GeometryCollection(members)
	}
}
