#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::geometry::{Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::impls::LinearRing;
use crate::layout::Layout;

/// Polygon: an outer ring followed by zero or more rings describing holes.
///
/// Orientation and closure of the rings are not checked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawPolygon")
)]
pub struct Polygon {
    layout: Layout,
    rings: Vec<LinearRing>,
    srid: Srid,
}

impl Polygon {
    /// Creates a polygon without rings.
    pub fn new(layout: Layout) -> Self {
        Self::from_rings_unchecked(layout, vec![])
    }

    /// Creates a polygon from rings. Every ring must have the layout of the polygon.
    pub fn from_rings(layout: Layout, rings: Vec<LinearRing>) -> Result<Self, FlatGeomError> {
        if let Some(ring) = rings.iter().find(|r| r.layout() != layout) {
            return Err(FlatGeomError::LayoutMismatch {
                got: ring.layout(),
                want: layout,
            });
        }

        Ok(Self::from_rings_unchecked(layout, rings))
    }

    /// Creates a polygon from coordinates of its rings. See [`Polygon::set_coords`].
    pub fn from_coords(layout: Layout, rings: &[Vec<Coord>]) -> Result<Self, FlatGeomError> {
        let mut polygon = Self::new(layout);
        polygon.set_coords(rings)?;
        Ok(polygon)
    }

    pub(crate) fn from_rings_unchecked(layout: Layout, rings: Vec<LinearRing>) -> Self {
        Self {
            layout,
            rings,
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

    /// Replaces all the rings of the polygon.
    ///
    /// All rings are built before the polygon is changed, so on stride mismatch the polygon keeps its previous rings.
    pub fn set_coords(&mut self, rings: &[Vec<Coord>]) -> Result<&mut Self, FlatGeomError> {
        let layout = self.layout;
        self.rings = rings
            .iter()
            .map(|coords| LinearRing::from_coords(layout, coords))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    /// Appends a ring.
    pub fn push_ring(&mut self, ring: LinearRing) -> Result<&mut Self, FlatGeomError> {
        if ring.layout() != self.layout {
            return Err(FlatGeomError::LayoutMismatch {
                got: ring.layout(),
                want: self.layout,
            });
        }

        self.rings.push(ring);
        Ok(self)
    }

    /// Number of rings.
    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// Returns `index`-th ring. The first ring is the outer one.
    pub fn ring(&self, index: usize) -> Option<&LinearRing> {
        self.rings.get(index)
    }

    /// All rings, starting with the outer one.
    pub fn rings(&self) -> &[LinearRing] {
        &self.rings
    }

    /// Iterates over coordinates of all rings as flat slices.
    pub fn iter_coords(&self) -> impl Iterator<Item = &[f64]> {
        self.rings.iter().flat_map(|ring| ring.iter_coords())
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawPolygon {
    layout: Layout,
    rings: Vec<LinearRing>,
    srid: Srid,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPolygon> for Polygon {
    type Error = FlatGeomError;

    fn try_from(value: RawPolygon) -> Result<Self, Self::Error> {
        Ok(Polygon::from_rings(value.layout, value.rings)?.with_srid(value.srid))
    }
}

impl Geometry for Polygon {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(self.layout);
        for ring in &self.rings {
            bounds.extend(ring);
        }
        bounds
    }

    fn num_coords(&self) -> usize {
        self.rings.iter().map(|ring| ring.num_coords()).sum()
    }

    fn coord(&self, index: usize) -> Option<Coord> {
        self.iter_coords().nth(index).map(Coord::from)
    }

    fn srid(&self) -> Srid {
        self.srid
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::Polygon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn coords(values: &[[f64; 2]]) -> Vec<Coord> {
        values.iter().copied().map(Coord::from).collect()
    }

    #[test]
    fn polygon_with_hole() {
        let polygon = Polygon::from_coords(
            Layout::XY,
            &[
                coords(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0], [0.0, 0.0]]),
                coords(&[[2.0, 2.0], [2.0, 3.0], [3.0, 3.0], [2.0, 2.0]]),
            ],
        )
        .unwrap();

        assert_eq!(polygon.num_rings(), 2);
        assert_eq!(polygon.num_coords(), 9);
        assert_eq!(polygon.coord(5), Some(Coord::from([2.0, 2.0])));
        assert_eq!(polygon.coord(9), None);
        assert_eq!(
            polygon.bounds(),
            Bounds::from_values(Layout::XY, &[0.0, 0.0, 10.0, 10.0])
        );
        assert!(polygon.rings().iter().all(LinearRing::is_closed));
    }

    #[test]
    fn empty() {
        let polygon = Polygon::new(Layout::XY);
        assert!(polygon.is_empty());
        assert_eq!(polygon.bounds(), Bounds::new(Layout::XY));

        let polygon = Polygon::from_rings(Layout::XY, vec![LinearRing::new(Layout::XY)]).unwrap();
        assert!(polygon.is_empty());
    }

    #[test]
    fn set_coords_is_all_or_nothing() {
        let mut polygon =
            Polygon::from_coords(Layout::XY, &[coords(&[[0.0, 0.0], [1.0, 1.0]])]).unwrap();
        let before = polygon.clone();

        let result = polygon.set_coords(&[
            coords(&[[5.0, 5.0], [6.0, 6.0]]),
            vec![Coord::from([1.0, 2.0, 3.0])],
        ]);
        assert_matches!(result, Err(FlatGeomError::StrideMismatch { got: 3, want: 2 }));
        assert_eq!(polygon, before);
    }

    #[test]
    fn ring_layout_must_match() {
        let mut polygon = Polygon::new(Layout::XYZ);
        assert_matches!(
            polygon.push_ring(LinearRing::new(Layout::XYM)),
            Err(FlatGeomError::LayoutMismatch { .. })
        );
        assert_matches!(
            Polygon::from_rings(Layout::XY, vec![LinearRing::new(Layout::XYZ)]),
            Err(FlatGeomError::LayoutMismatch {
                got: Layout::XYZ,
                want: Layout::XY
            })
        );
        assert!(polygon.push_ring(LinearRing::new(Layout::XYZ)).is_ok());
        assert_eq!(polygon.num_rings(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_rings() {
        let polygon = Polygon::from_coords(Layout::XY, &[coords(&[[0.0, 0.0], [1.0, 1.0], [0.0, 0.0]])])
            .unwrap()
            .with_srid(3857);
        let json = serde_json::to_string(&polygon).unwrap();
        assert_eq!(serde_json::from_str::<Polygon>(&json).unwrap(), polygon);

        let other_layout = r#"{"layout":"XY","rings":[{"path":{"layout":"XYZ","flat_coords":[1.0,2.0,3.0]},"srid":0}],"srid":0}"#;
        assert!(serde_json::from_str::<Polygon>(other_layout).is_err());

        let bad_stride = r#"{"layout":"XY","rings":[{"path":{"layout":"XY","flat_coords":[1.0,2.0,3.0]},"srid":0}],"srid":0}"#;
        assert!(serde_json::from_str::<Polygon>(bad_stride).is_err());
    }
}
