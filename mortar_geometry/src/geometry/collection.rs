use super::{Coordinate, Geometry, GeometryTrait};
use anyhow::Result;
use std::fmt::Debug;

/// A heterogeneous list of geometries.
///
/// A member is `None` when it could not be recognized while decoding. Such a
/// collection can still be inspected but not encoded again.
#[derive(Clone, Default, PartialEq)]
pub struct GeometryCollection(pub Vec<Option<Geometry>>);

impl GeometryCollection {
	/// Iterates over the members that are present.
	pub fn present(&self) -> impl Iterator<Item = &Geometry> {
		self.0.iter().flatten()
	}

	#[must_use]
	pub fn num_absent(&self) -> usize {
		self.0.iter().filter(|member| member.is_none()).count()
	}
}

impl GeometryTrait for GeometryCollection {
	fn verify(&self) -> Result<()> {
		self.present().try_for_each(Geometry::verify)
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		for geometry in self.present() {
			geometry.for_each_coordinate(callback);
		}
	}
}

impl Debug for GeometryCollection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(GeometryCollection, Option<Geometry>);

impl From<Vec<Geometry>> for GeometryCollection {
	fn from(value: Vec<Geometry>) -> Self {
		Self(value.into_iter().map(Some).collect())
	}
}
