use super::*;
use anyhow::Result;
use std::fmt::Debug;

/// Any of the seven geometry kinds.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinate: From<T>,
	{
		Self::Point(PointGeometry(Coordinate::from(value)))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}

	/// Number of top level parts: 1 for single geometries, the member count for
	/// multi geometries and collections (absent members included).
	#[must_use]
	pub fn num_parts(&self) -> usize {
		match self {
			Geometry::Point(_) | Geometry::LineString(_) | Geometry::Polygon(_) => 1,
			Geometry::MultiPoint(g) => g.len(),
			Geometry::MultiLineString(g) => g.len(),
			Geometry::MultiPolygon(g) => g.len(),
			Geometry::GeometryCollection(g) => g.len(),
		}
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

impl GeometryTrait for Geometry {
	fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(g) => g.verify(),
		}
	}

	fn for_each_coordinate(&self, callback: &mut dyn FnMut(&Coordinate)) {
		match self {
			Geometry::Point(g) => g.for_each_coordinate(callback),
			Geometry::MultiPoint(g) => g.for_each_coordinate(callback),
			Geometry::LineString(g) => g.for_each_coordinate(callback),
			Geometry::MultiLineString(g) => g.for_each_coordinate(callback),
			Geometry::Polygon(g) => g.for_each_coordinate(callback),
			Geometry::MultiPolygon(g) => g.for_each_coordinate(callback),
			Geometry::GeometryCollection(g) => g.for_each_coordinate(callback),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.geometry_type().as_str()).field(inner).finish()
	}
}

macro_rules! impl_into_geometry {
	($($variant:ident($t:ty)),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}
	)*}
}

impl_into_geometry!(
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection)
);

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn collection() -> Geometry {
		Geometry::from(GeometryCollection(vec![
			Some(Geometry::new_point([1.0, 1.0])),
			None,
			Some(Geometry::new_example()),
		]))
	}

	#[rstest]
	#[case(Geometry::new_point([1.0, 2.0]), GeometryType::Point, 1, 1)]
	#[case(Geometry::new_multi_point(vec![[1.0, 2.0], [3.0, 4.0]]), GeometryType::MultiPoint, 2, 2)]
	#[case(Geometry::new_line_string(vec![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]), GeometryType::LineString, 1, 3)]
	#[case(Geometry::new_multi_line_string(vec![vec![[0.0, 0.0], [1.0, 1.0]]]), GeometryType::MultiLineString, 1, 2)]
	#[case(Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]), GeometryType::Polygon, 1, 4)]
	#[case(Geometry::new_example(), GeometryType::MultiPolygon, 2, 18)]
	#[case(collection(), GeometryType::GeometryCollection, 3, 19)]
	fn type_parts_and_coordinates(
		#[case] geometry: Geometry,
		#[case] geometry_type: GeometryType,
		#[case] parts: usize,
		#[case] coordinates: usize,
	) {
		assert_eq!(geometry.geometry_type(), geometry_type);
		assert_eq!(geometry.num_parts(), parts);
		assert_eq!(geometry.num_coordinates(), coordinates);
		assert!(geometry.verify().is_ok());
	}

	#[test]
	fn verify_forwards_errors() {
		let geometry = Geometry::new_polygon(vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]]);
		assert!(geometry.verify().is_err());
	}

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", Geometry::new_point([1.0, 2.0])), "Point([1.0, 2.0])");
		assert_eq!(
			format!("{:?}", Geometry::new_multi_point(vec![[1.0, 2.0]])),
			"MultiPoint([[1.0, 2.0]])"
		);
		assert_eq!(
			format!("{:?}", collection()).split(", None, ").next(),
			Some("GeometryCollection([Some(Point([1.0, 1.0]))")
		);
	}
}
