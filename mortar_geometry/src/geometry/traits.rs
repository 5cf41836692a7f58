use super::Coordinate;
use anyhow::Result;
use std::fmt::Debug;

/// Behavior shared by every geometry type.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Checks the construction invariants of the geometry: minimum sizes and ring closure.
	///
	/// Fails with [`CodecError::GeometryInvariant`](crate::CodecError::GeometryInvariant).
	fn verify(&self) -> Result<()>;

	/// Visits every coordinate in storage order.
	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate));

	/// Total number of coordinates, including the closing coordinate of every ring.
	fn num_coordinates(&self) -> usize {
		let mut count = 0;
		self.for_each_coordinate(&mut |_| count += 1);
		count
	}
}

/// Geometries that are an ordered list of simpler elements, e.g. a multi line string made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}
}
