use super::{Coordinate, GeometryTrait, PointGeometry};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered set of positions without any connection between them.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPointGeometry(pub Vec<Coordinate>);

impl MultiPointGeometry {
	/// The members as individual points.
	#[must_use]
	pub fn points(&self) -> Vec<PointGeometry> {
		self.0.iter().copied().map(PointGeometry::new).collect()
	}
}

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		self.0.iter().for_each(callback);
	}
}

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(MultiPointGeometry, Coordinate);
crate::impl_from_array!(MultiPointGeometry, Coordinate);
