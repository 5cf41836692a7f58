use super::{Coordinate, GeometryTrait, RingGeometry};
use anyhow::Result;
use std::fmt::Debug;

/// An area bounded by one exterior ring, optionally with holes cut out by interior rings.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry {
	pub exterior: RingGeometry,
	pub interiors: Vec<RingGeometry>,
}

impl PolygonGeometry {
	#[must_use]
	pub fn new(exterior: RingGeometry, interiors: Vec<RingGeometry>) -> Self {
		Self { exterior, interiors }
	}

	/// All rings, the exterior first.
	pub fn rings(&self) -> impl Iterator<Item = &RingGeometry> {
		std::iter::once(&self.exterior).chain(self.interiors.iter())
	}

	#[must_use]
	pub fn num_rings(&self) -> usize {
		self.interiors.len() + 1
	}
}

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		self.rings().try_for_each(RingGeometry::verify)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		for ring in self.rings() {
			ring.for_each_coordinate(callback);
		}
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(self.rings()).finish()
	}
}

impl<'a, T, const N: usize> From<&'a [T; N]> for PolygonGeometry
where
	RingGeometry: From<&'a T>,
{
	/// The first element becomes the exterior ring, the others become holes.
	/// An empty array leaves the exterior empty, which fails [`GeometryTrait::verify`].
	fn from(value: &'a [T; N]) -> Self {
		let mut rings = value.iter().map(RingGeometry::from);
		let exterior = rings.next().unwrap_or_else(|| RingGeometry(Vec::new()));
		Self::new(exterior, rings.collect())
	}
}

impl<T> From<Vec<T>> for PolygonGeometry
where
	RingGeometry: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		let mut rings = value.into_iter().map(RingGeometry::from);
		let exterior = rings.next().unwrap_or_else(|| RingGeometry(Vec::new()));
		Self::new(exterior, rings.collect())
	}
}
