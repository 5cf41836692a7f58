use super::{Coordinate, GeometryTrait};
use crate::CodecError;
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A connected sequence of at least two positions.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinate>);

impl GeometryTrait for LineStringGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(
			self.0.len() >= 2,
			CodecError::GeometryInvariant(format!(
				"a line string needs at least 2 coordinates, found {}",
				self.0.len()
			))
		);
		Ok(())
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		self.0.iter().for_each(callback);
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_composite!(LineStringGeometry, Coordinate);
crate::impl_from_array!(LineStringGeometry, Coordinate);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn verify() {
		assert!(LineStringGeometry::from(&[[0, 0], [1, 1]]).verify().is_ok());

		let error = LineStringGeometry::from(&[[0, 0]]).verify().unwrap_err();
		assert_eq!(
			error.downcast_ref::<CodecError>(),
			Some(&CodecError::GeometryInvariant(
				"a line string needs at least 2 coordinates, found 1".into()
			))
		);
		assert!(LineStringGeometry::new().verify().is_err());
	}

	#[test]
	fn composite() {
		let line = LineStringGeometry::from(vec![[0.0, 0.0], [1.0, 2.0], [3.0, 4.0]]);
		assert_eq!(line.len(), 3);
		assert_eq!(line.first(), Some(&Coordinate::new(0.0, 0.0)));
		assert_eq!(line.num_coordinates(), 3);
		assert_eq!(format!("{line:?}"), "[[0.0, 0.0], [1.0, 2.0], [3.0, 4.0]]");
	}
}
