use super::{Coordinate, GeometryTrait};
use crate::CodecError;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A closed line: at least four positions, the last one repeating the first.
///
/// Rings are the boundaries of polygons.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinate>);

impl RingGeometry {
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}
}

impl GeometryTrait for RingGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 4,
			CodecError::GeometryInvariant(format!("a ring needs at least 4 coordinates, found {}", self.0.len()))
		);
		ensure!(
			self.is_closed(),
			CodecError::GeometryInvariant(String::from("a ring must end where it starts"))
		);
		Ok(())
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		self.0.iter().for_each(callback);
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(RingGeometry, Coordinate);
crate::impl_from_array!(RingGeometry, Coordinate);
