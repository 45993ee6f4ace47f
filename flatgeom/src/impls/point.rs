#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::geometry::{Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::layout::{Axis, Layout};

/// A single coordinate, or nothing for an empty point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPoint")
)]
pub struct Point {
    layout: Layout,
    flat_coords: Vec<f64>,
    srid: Srid,
}

impl Point {
    /// Creates a point at the origin.
    pub fn new(layout: Layout) -> Self {
        Self::from_flat_coords_unchecked(layout, vec![0.0; layout.stride()])
    }

    /// Creates a point without a coordinate.
    pub fn empty(layout: Layout) -> Self {
        Self::from_flat_coords_unchecked(layout, vec![])
    }

    /// Creates a point with the given coordinate.
    pub fn from_coord(layout: Layout, coord: &[f64]) -> Result<Self, FlatGeomError> {
        let mut point = Self::empty(layout);
        point.set_coord(coord)?;
        Ok(point)
    }

    pub(crate) fn from_flat_coords_unchecked(layout: Layout, flat_coords: Vec<f64>) -> Self {
        Self {
            layout,
            flat_coords,
            srid: 0,
        }
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

    /// Replaces the coordinate of the point. The point is left unchanged on stride mismatch.
    pub fn set_coord(&mut self, coord: &[f64]) -> Result<&mut Self, FlatGeomError> {
        if coord.len() != self.layout.stride() {
            return Err(FlatGeomError::StrideMismatch {
                got: coord.len(),
                want: self.layout.stride(),
            });
        }

        self.flat_coords.clear();
        self.flat_coords.extend_from_slice(coord);
        Ok(self)
    }

    /// Coordinate of the point, `None` for an empty point.
    pub fn to_coord(&self) -> Option<Coord> {
        if self.flat_coords.is_empty() {
            None
        } else {
            Some(Coord::from(&self.flat_coords[..]))
        }
    }

    /// Flat buffer with the point components. Empty for an empty point.
    pub fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    /// X coordinate.
    pub fn x(&self) -> Option<f64> {
        self.component(Axis::X)
    }

    /// Y coordinate.
    pub fn y(&self) -> Option<f64> {
        self.component(Axis::Y)
    }

    /// Z coordinate, if the layout has one.
    pub fn z(&self) -> Option<f64> {
        self.component(Axis::Z)
    }

    /// Measure, if the layout has one.
    pub fn m(&self) -> Option<f64> {
        self.component(Axis::M)
    }

    fn component(&self, axis: Axis) -> Option<f64> {
        let index = self.layout.axis_index(axis)?;
        self.flat_coords.get(index).copied()
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPoint {
    layout: Layout,
    flat_coords: Vec<f64>,
    srid: Srid,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoint> for Point {
    type Error = FlatGeomError;

    fn try_from(value: RawPoint) -> Result<Self, Self::Error> {
        let mut point = Point::empty(value.layout).with_srid(value.srid);
        if !value.flat_coords.is_empty() {
            point.set_coord(&value.flat_coords)?;
        }
        Ok(point)
    }
}

impl Geometry for Point {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_flat_coords(self.layout, &self.flat_coords)
    }

    fn num_coords(&self) -> usize {
        if self.flat_coords.is_empty() {
            0
        } else {
            1
        }
    }

    fn coord(&self, index: usize) -> Option<Coord> {
        match index {
            0 => self.to_coord(),
            _ => None,
        }
    }

    fn srid(&self) -> Srid {
        self.srid
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Point
    }
}
