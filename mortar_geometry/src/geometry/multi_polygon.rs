use super::{Coordinate, GeometryTrait, PolygonGeometry};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered set of polygons.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	/// Number of rings over all polygons.
	#[must_use]
	pub fn num_rings(&self) -> usize {
		self.0.iter().map(PolygonGeometry::num_rings).sum()
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		self.0.iter().try_for_each(PolygonGeometry::verify)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		for polygon in &self.0 {
			polygon.for_each_coordinate(callback);
		}
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(MultiPolygonGeometry, PolygonGeometry);
crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn counts() {
		let multi = MultiPolygonGeometry::from(&[
			[
				[[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
				[[1, 1], [1, 2], [2, 2], [2, 1], [1, 1]],
			],
			[
				[[5, 5], [9, 5], [9, 9], [5, 9], [5, 5]],
				[[6, 6], [6, 7], [7, 7], [7, 6], [6, 6]],
			],
		]);
		assert_eq!(multi.len(), 2);
		assert_eq!(multi.num_rings(), 4);
		assert_eq!(multi.num_coordinates(), 20);
		assert!(multi.verify().is_ok());
	}
}
