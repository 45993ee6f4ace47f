#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::flat::FlatPath;
use crate::geometry::{Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::layout::Layout;

/// Closed sequence of coordinates, used as a boundary of a [`Polygon`](crate::Polygon).
///
/// The first and the last coordinates are expected to be equal, but this is not enforced.
///
/// Dereferences to [`FlatPath`] for coordinate access and mutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearRing {
    path: FlatPath,
    srid: Srid,
}

impl LinearRing {
    /// Creates an empty ring.
    pub fn new(layout: Layout) -> Self {
        Self {
            path: FlatPath::new(layout),
            srid: 0,
        }
    }

    /// Creates a ring from a list of coordinates. See [`FlatPath::set_coords`].
    pub fn from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Result<Self, FlatGeomError> {
        Ok(FlatPath::from_coords(layout, coords)?.into())
    }

    /// Creates a ring from a flat buffer. See [`FlatPath::from_flat_coords`].
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

    /// Whether the first and the last coordinates are equal. An empty ring is not closed.
    ///
    /// Closure is not required by any operation of this crate.
    pub fn is_closed(&self) -> bool {
        let n = self.path.num_coords();
        n > 0 && self.path.coord(0) == self.path.coord(n - 1)
    }

    pub(crate) fn from_flat_coords_unchecked(layout: Layout, flat_coords: Vec<f64>) -> Self {
        FlatPath::from_flat_coords_unchecked(layout, flat_coords).into()
    }

    /// Consumes the ring and returns the underlying path.
    pub fn into_path(self) -> FlatPath {
        self.path
    }
}

impl From<FlatPath> for LinearRing {
    fn from(path: FlatPath) -> Self {
        Self { path, srid: 0 }
    }
}

impl std::ops::Deref for LinearRing {
    type Target = FlatPath;

    fn deref(&self) -> &Self::Target {
        &self.path
    }
}

impl std::ops::DerefMut for LinearRing {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.path
    }
}

impl Geometry for LinearRing {
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
        GeometryType::LinearRing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat::aliases;

    #[test]
    fn linear_ring() {
        let ring = LinearRing::from_coords(
            Layout::XYZM,
            &[[1.0, 2.0, 3.0, 4.0], [5.0, 6.0, 7.0, 8.0], [9.0, 10.0, 11.0, 12.0]],
        )
        .unwrap();
        assert_eq!(ring.verify(), Ok(()));
        assert_eq!(Geometry::stride(&ring), 4);
        assert_eq!(Geometry::num_coords(&ring), 3);
        assert_eq!(ring.coord(2), Some(Coord::from([9.0, 10.0, 11.0, 12.0])));
        assert_eq!(
            Geometry::bounds(&ring),
            Bounds::from_values(Layout::XYZM, &[1.0, 2.0, 3.0, 4.0, 9.0, 10.0, 11.0, 12.0])
        );
        assert_eq!(ring.geometry_type(), GeometryType::LinearRing);
    }

    #[test]
    fn stride_mismatch() {
        assert_eq!(
            LinearRing::from_coords(Layout::XY, &[vec![1.0, 2.0], vec![]]),
            Err(FlatGeomError::StrideMismatch { got: 0, want: 2 })
        );
        assert_eq!(
            LinearRing::from_coords(Layout::XY, &[vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]),
            Err(FlatGeomError::StrideMismatch { got: 3, want: 2 })
        );
        assert!(LinearRing::from_coords::<Coord>(Layout::XY, &[]).is_ok());
    }

    #[test]
    fn closure_is_reported_not_enforced() {
        let open = LinearRing::from_coords(Layout::XY, &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]).unwrap();
        assert!(!open.is_closed());

        let closed = LinearRing::from_coords(
            Layout::XY,
            &[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]],
        )
        .unwrap();
        assert!(closed.is_closed());
        assert!(!LinearRing::new(Layout::XY).is_closed());
    }

    #[test]
    fn clone_does_not_alias() {
        let ring = LinearRing::from_coords(Layout::XY, &[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        assert!(!aliases(ring.flat_coords(), ring.clone().flat_coords()));
    }
}
