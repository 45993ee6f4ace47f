#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::flat::FlatPath;
use crate::geometry::{Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::layout::Layout;

/// Sequence of coordinates connected by straight segments.
///
/// Dereferences to [`FlatPath`] for coordinate access and mutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineString {
    path: FlatPath,
    srid: Srid,
}

impl LineString {
    /// Creates an empty line string.
    pub fn new(layout: Layout) -> Self {
        Self {
            path: FlatPath::new(layout),
            srid: 0,
        }
    }

    /// Creates a line string from a list of coordinates. See [`FlatPath::set_coords`].
    pub fn from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Result<Self, FlatGeomError> {
        Ok(FlatPath::from_coords(layout, coords)?.into())
    }

    /// Creates a line string from a flat buffer. See [`FlatPath::from_flat_coords`].
    pub fn from_flat_coords(layout: Layout, flat_coords: Vec<f64>) -> Result<Self, FlatGeomError> {
        Ok(FlatPath::from_flat_coords(layout, flat_coords)?.into())
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

    /// Consumes the line string and returns the underlying path.
    pub fn into_path(self) -> FlatPath {
        self.path
    }
}

impl From<FlatPath> for LineString {
    fn from(path: FlatPath) -> Self {
        Self { path, srid: 0 }
    }
}

impl std::ops::Deref for LineString {
    type Target = FlatPath;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl std::ops::DerefMut for LineString {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.path
    }
}

impl Geometry for LineString {
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
        GeometryType::LineString
    }
}
