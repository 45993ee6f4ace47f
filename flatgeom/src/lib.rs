//! Geometry core: coordinate layouts, flat coordinate storage and bounding boxes.
//!
//! Every geometry in this crate has a [`Layout`] that tells which axes its coordinates have (`X`, `Y` and optionally
//! `Z` and `M`) and so how many `f64` values each coordinate takes. Path-like geometries ([`LineString`],
//! [`LinearRing`], [`MultiPoint`]) keep all their coordinates in a single contiguous buffer, a [`FlatPath`], together
//! with a cached [`Bounds`] that is kept current on every mutation.
//!
//! ```
//! use flatgeom::{Axis, Geometry, Layout, LineString};
//!
//! let mut line = LineString::from_coords(Layout::XYM, &[[0.0, 0.0, 0.0], [10.0, 0.0, 10.0]]).unwrap();
//! line.push_coord(&[10.0, 10.0, 20.0]).unwrap();
//!
//! assert_eq!(line.num_coords(), 3);
//! assert_eq!(line.bounds().range(Axis::M), Some((0.0, 20.0)));
//! assert_eq!(line.interpolate(15.0, 2), (1, 0.5));
//! ```
//!
//! Geometries of different layouts can be gathered in a [`GeometryCollection`], whose layout and bounds are the merge
//! of its members.
//!
//! # Features
//!
//! * `serde` (default) - `Serialize` and `Deserialize` for all the types. Deserialized geometries and bounds are
//!   validated: wrong coordinate lengths and mismatching sub-geometry layouts are rejected.
//! * `geo-types` (default) - conversions to and from [`geo_types`](https://docs.rs/geo-types) geometries.

mod bounds;
mod coord;
mod error;
mod flat;
mod geometry;
mod geometry_type;
pub mod impls;
mod layout;

#[cfg(feature = "geo-types")]
mod geo_types;

pub use bounds::Bounds;
pub use coord::Coord;
pub use error::FlatGeomError;
pub use flat::FlatPath;
pub use geometry::{Geom, Geometry, Srid};
pub use geometry_type::GeometryType;
pub use impls::*;
pub use layout::{Axis, Layout};
