#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::flat::FlatPath;
use crate::geometry::{Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::impls::Point;
use crate::layout::Layout;

/// Set of points sharing one layout, stored as a single [`FlatPath`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MultiPoint {
    path: FlatPath,
    srid: Srid,
}

impl MultiPoint {
    /// Creates a multipoint without points.
    pub fn new(layout: Layout) -> Self {
        Self {
            path: FlatPath::new(layout),
            srid: 0,
        }
    }

    /// Creates a multipoint from a list of coordinates.
    pub fn from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Result<Self, FlatGeomError> {
        Ok(Self {
            path: FlatPath::from_coords(layout, coords)?,
            srid: 0,
        })
    }

    /// Sets the SRID.
    pub fn with_srid(mut self, srid: Srid) -> Self {
        self.srid = srid;
        self
    }

    /// Sets the SRID.
    pub fn set_srid(&mut self, srid: Srid) -> &mut Self {
        self.srid = srid;
        self
    }

    /// Adds a point. The point must have the layout of the multipoint; an empty point is skipped.
    pub fn push(&mut self, point: &Point) -> Result<&mut Self, FlatGeomError> {
        if point.layout() != self.path.layout() {
            return Err(FlatGeomError::LayoutMismatch {
                got: point.layout(),
                want: self.path.layout(),
            });
        }

        if !point.flat_coords().is_empty() {
            self.path.push_coord(point.flat_coords())?;
        }
        Ok(self)
    }

    /// Number of points.
    pub fn num_points(&self) -> usize {
        self.path.num_coords()
    }

    /// Returns `index`-th point with the SRID of the multipoint.
    pub fn point(&self, index: usize) -> Option<Point> {
        let coord = self.path.coord(index)?;
        Some(Point::from_flat_coords_unchecked(self.path.layout(), coord.into_inner()).with_srid(self.srid))
    }

    /// Iterates over the points.
    pub fn iter_points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.num_points()).filter_map(|i| self.point(i))
    }

    /// Underlying coordinate storage.
    pub fn path(&self) -> &FlatPath {
        &self.path
    }

    /// Mutable access to the underlying coordinate storage.
    pub fn path_mut(&mut self) -> &mut FlatPath {
        &mut self.path
    }
}

impl From<FlatPath> for MultiPoint {
    fn from(path: FlatPath) -> Self {
        Self { path, srid: 0 }
    }
}

impl Geometry for MultiPoint {
    fn layout(&self) -> Layout {
        self.path.layout()
    }

    fn bounds(&self) -> Bounds {
        self.path.bounds()
    }

    fn num_coords(&self) -> usize {
        self.path.num_coords()
    }

    fn coord(&self, index: usize) -> Option<Coord> {
        self.path.coord(index)
    }

    fn srid(&self) -> Srid {
        self.srid
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPoint
    }
}
