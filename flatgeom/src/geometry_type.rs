//! See documentation for [`GeometryType`].
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Kind of a concrete geometry, as reported by [`Geometry::geometry_type`](crate::Geometry::geometry_type).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GeometryType {
    /// [`Point`](crate::Point).
    Point,
    /// [`LineString`](crate::LineString).
    LineString,
    /// [`LinearRing`](crate::LinearRing).
    LinearRing,
    /// [`Polygon`](crate::Polygon).
    Polygon,
    /// [`MultiPoint`](crate::MultiPoint).
    MultiPoint,
    /// [`MultiLineString`](crate::MultiLineString).
    MultiLineString,
    /// [`MultiPolygon`](crate::MultiPolygon).
    MultiPolygon,
    /// [`GeometryCollection`](crate::GeometryCollection).
    GeometryCollection,
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::LinearRing => "LinearRing",
            Self::Polygon => "Polygon",
            Self::MultiPoint => "MultiPoint",
            Self::MultiLineString => "MultiLineString",
            Self::MultiPolygon => "MultiPolygon",
            Self::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{name}")
    }
}
