//! The [`Geometry`] capability trait and the [`Geom`] enum over all concrete geometries.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::geometry_type::GeometryType;
use crate::impls::{
    GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::layout::Layout;

/// Spatial reference identifier. Opaque to this crate; `0` means "not specified".
pub type Srid = i32;

/// Common interface of all geometries.
///
/// This is the contract external consumers (encoders, predicates, indexes) rely on.
pub trait Geometry {
    /// Layout of the geometry coordinates.
    fn layout(&self) -> Layout;

    /// Number of components in each coordinate.
    fn stride(&self) -> usize {
        self.layout().stride()
    }

    /// Bounding box of all the coordinates of the geometry.
    fn bounds(&self) -> Bounds;

    /// Total number of coordinates in the geometry.
    fn num_coords(&self) -> usize;

    /// Returns `index`-th coordinate of the geometry, or `None` if the index is out of range.
    fn coord(&self, index: usize) -> Option<Coord>;

    /// Whether the geometry has no coordinates.
    fn is_empty(&self) -> bool {
        self.num_coords() == 0
    }

    /// Spatial reference identifier of the geometry.
    fn srid(&self) -> Srid;

    /// Kind of the geometry.
    fn geometry_type(&self) -> GeometryType;
}

/// Any of the concrete geometries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geom {
    /// Point.
    Point(Point),
    /// LineString.
    LineString(LineString),
    /// LinearRing.
    LinearRing(LinearRing),
    /// Polygon.
    Polygon(Polygon),
    /// MultiPoint.
    MultiPoint(MultiPoint),
    /// MultiLineString.
    MultiLineString(MultiLineString),
    /// MultiPolygon.
    MultiPolygon(MultiPolygon),
    /// GeometryCollection.
    GeometryCollection(GeometryCollection),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Geom::Point($inner) => $body,
            Geom::LineString($inner) => $body,
            Geom::LinearRing($inner) => $body,
            Geom::Polygon($inner) => $body,
            Geom::MultiPoint($inner) => $body,
            Geom::MultiLineString($inner) => $body,
            Geom::MultiPolygon($inner) => $body,
            Geom::GeometryCollection($inner) => $body,
        }
    };
}

impl Geometry for Geom {
    fn layout(&self) -> Layout {
        dispatch!(self, g => g.layout())
    }

    fn bounds(&self) -> Bounds {
        dispatch!(self, g => g.bounds())
    }

    fn num_coords(&self) -> usize {
        dispatch!(self, g => g.num_coords())
    }

    fn coord(&self, index: usize) -> Option<Coord> {
        dispatch!(self, g => Geometry::coord(g, index))
    }

    fn is_empty(&self) -> bool {
        dispatch!(self, g => Geometry::is_empty(g))
    }

    fn srid(&self) -> Srid {
        dispatch!(self, g => g.srid())
    }

    fn geometry_type(&self) -> GeometryType {
        dispatch!(self, g => g.geometry_type())
    }
}

impl Geom {
    /// Sets SRID of the inner geometry.
    pub fn set_srid(&mut self, srid: Srid) {
        dispatch!(self, g => {
            g.set_srid(srid);
        })
    }
}

impl From<Point> for Geom {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<LineString> for Geom {
    fn from(value: LineString) -> Self {
        Self::LineString(value)
    }
}

impl From<LinearRing> for Geom {
    fn from(value: LinearRing) -> Self {
        Self::LinearRing(value)
    }
}

impl From<Polygon> for Geom {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

impl From<MultiPoint> for Geom {
    fn from(value: MultiPoint) -> Self {
        Self::MultiPoint(value)
    }
}

impl From<MultiLineString> for Geom {
    fn from(value: MultiLineString) -> Self {
        Self::MultiLineString(value)
    }
}

impl From<MultiPolygon> for Geom {
    fn from(value: MultiPolygon) -> Self {
        Self::MultiPolygon(value)
    }
}

impl From<GeometryCollection> for Geom {
    fn from(value: GeometryCollection) -> Self {
        Self::GeometryCollection(value)
    }
}
