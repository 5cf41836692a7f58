use std::fmt::Debug;

/// A 2D or 3D position. Two-dimensional positions carry `z = 0.0`.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Coordinate {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Coordinate {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y, z: 0.0 }
	}

	#[must_use]
	pub const fn new_3d(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	/// The same position with `z` reset to zero.
	#[must_use]
	pub const fn to_2d(&self) -> Self {
		Self::new(self.x, self.y)
	}
}

impl Debug for Coordinate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.z == 0.0 {
			[self.x, self.y].fmt(f)
		} else {
			[self.x, self.y, self.z].fmt(f)
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinate
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinate::new(value[0].into(), value[1].into())
	}
}

impl<'a, T> From<&'a [T; 3]> for Coordinate
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 3]) -> Self {
		Coordinate::new_3d(value[0].into(), value[1].into(), value[2].into())
	}
}

impl From<[f64; 2]> for Coordinate {
	fn from(value: [f64; 2]) -> Self {
		Coordinate::new(value[0], value[1])
	}
}

impl From<[f64; 3]> for Coordinate {
	fn from(value: [f64; 3]) -> Self {
		Coordinate::new_3d(value[0], value[1], value[2])
	}
}

impl From<(f64, f64)> for Coordinate {
	fn from(value: (f64, f64)) -> Self {
		Coordinate::new(value.0, value.1)
	}
}

impl From<&Coordinate> for Coordinate {
	fn from(value: &Coordinate) -> Self {
		*value
	}
}
