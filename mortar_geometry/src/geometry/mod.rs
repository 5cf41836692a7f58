//! The geometry model: coordinates, the seven geometry kinds and the traits they share.
//!
//! The types only store coordinates. Validation happens in [`GeometryTrait::verify`],
//! which [`GeometryFactory`](crate::GeometryFactory) runs for every geometry it builds.

mod collection;
mod coordinate;
#[allow(clippy::module_inception)]
mod geometry;
mod geometry_type;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use collection::*;
pub use coordinate::*;
pub use geometry::*;
pub use geometry_type::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
