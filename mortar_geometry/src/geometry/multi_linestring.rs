use super::{Coordinate, GeometryTrait, LineStringGeometry};
use anyhow::Result;
use std::fmt::Debug;

/// An ordered set of line strings.
#[derive(Clone, Default, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn verify(&self) -> Result<()> {
		self.0.iter().try_for_each(LineStringGeometry::verify)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		for line in &self.0 {
			line.for_each_coordinate(callback);
		}
	}
}

impl Debug for MultiLineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(MultiLineStringGeometry, LineStringGeometry);
crate::impl_from_array!(MultiLineStringGeometry, LineStringGeometry);
