use super::{Coordinate, GeometryTrait};
use anyhow::Result;
use std::fmt::Debug;

/// A single position.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinate);

impl PointGeometry {
	#[must_use]
	pub fn new(coordinate: Coordinate) -> Self {
		Self(coordinate)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinate {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		callback(&self.0);
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinate: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinate::from(value))
	}
}
