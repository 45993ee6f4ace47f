#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::geometry::{Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::impls::Polygon;
use crate::layout::Layout;

/// Ordered set of polygons sharing one layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawMultiPolygon")
)]
pub struct MultiPolygon {
    layout: Layout,
    polygons: Vec<Polygon>,
    srid: Srid,
}

impl MultiPolygon {
    /// Creates a multipolygon without polygons.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            polygons: vec![],
            srid: 0,
        }
    }

    /// Creates a multipolygon from polygons, all of which must have the given layout.
    pub fn from_polygons(layout: Layout, polygons: Vec<Polygon>) -> Result<Self, FlatGeomError> {
        if let Some(polygon) = polygons.iter().find(|p| p.layout() != layout) {
            return Err(FlatGeomError::LayoutMismatch {
                got: polygon.layout(),
                want: layout,
            });
        }

        Ok(Self {
            layout,
            polygons,
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

    /// Replaces all the polygons, given as lists of ring coordinates. On error the previous polygons are kept.
    pub fn set_coords(&mut self, polygons: &[Vec<Vec<Coord>>]) -> Result<&mut Self, FlatGeomError> {
        let layout = self.layout;
        self.polygons = polygons
            .iter()
            .map(|rings| Polygon::from_coords(layout, rings))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    /// Appends a polygon. Its layout must match the layout of the multipolygon.
    pub fn push(&mut self, polygon: Polygon) -> Result<&mut Self, FlatGeomError> {
        if polygon.layout() != self.layout {
            return Err(FlatGeomError::LayoutMismatch {
                got: polygon.layout(),
                want: self.layout,
            });
        }

        self.polygons.push(polygon);
        Ok(self)
    }

    /// Number of polygons.
    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `index`-th polygon.
    pub fn polygon(&self, index: usize) -> Option<&Polygon> {
        self.polygons.get(index)
    }

    /// All the polygons.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMultiPolygon {
    layout: Layout,
    polygons: Vec<Polygon>,
    srid: Srid,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMultiPolygon> for MultiPolygon {
    type Error = FlatGeomError;

    fn try_from(value: RawMultiPolygon) -> Result<Self, Self::Error> {
        Ok(MultiPolygon::from_polygons(value.layout, value.polygons)?.with_srid(value.srid))
    }
}

impl Geometry for MultiPolygon {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(self.layout);
        for polygon in &self.polygons {
            bounds.extend(polygon);
        }
        bounds
    }

    fn num_coords(&self) -> usize {
        self.polygons.iter().map(Geometry::num_coords).sum()
    }

    fn coord(&self, index: usize) -> Option<Coord> {
        self.polygons
            .iter()
            .flat_map(|polygon| polygon.iter_coords())
            .nth(index)
            .map(Coord::from)
    }

    fn srid(&self) -> Srid {
        self.srid
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiPolygon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f64, y: f64, size: f64) -> Vec<Vec<Coord>> {
        vec![vec![
            Coord::from([x, y]),
            Coord::from([x, y + size]),
            Coord::from([x + size, y + size]),
            Coord::from([x + size, y]),
            Coord::from([x, y]),
        ]]
    }

    #[test]
    fn polygons() {
        let mut multi_polygon = MultiPolygon::new(Layout::XY);
        multi_polygon
            .set_coords(&[square(0.0, 0.0, 1.0), square(10.0, -10.0, 2.0)])
            .unwrap();

        assert_eq!(multi_polygon.num_polygons(), 2);
        assert_eq!(multi_polygon.num_coords(), 10);
        assert_eq!(multi_polygon.coord(5), Some(Coord::from([10.0, -10.0])));
        assert_eq!(
            multi_polygon.bounds(),
            Bounds::from_values(Layout::XY, &[0.0, -10.0, 12.0, 1.0])
        );
    }

    #[test]
    fn layouts_must_match() {
        let polygons = vec![Polygon::new(Layout::XY), Polygon::new(Layout::XYZ)];
        assert!(MultiPolygon::from_polygons(Layout::XY, polygons).is_err());

        let mut multi_polygon = MultiPolygon::new(Layout::XYZ);
        assert!(multi_polygon.push(Polygon::new(Layout::XY)).is_err());
        assert!(multi_polygon.push(Polygon::new(Layout::XYZ)).is_ok());
        assert!(multi_polygon.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_polygons() {
        let mut multi_polygon = MultiPolygon::new(Layout::XY);
        multi_polygon.set_coords(&[square(0.0, 0.0, 1.0)]).unwrap();
        let json = serde_json::to_string(&multi_polygon).unwrap();
        assert_eq!(
            serde_json::from_str::<MultiPolygon>(&json).unwrap(),
            multi_polygon
        );

        let other_layout = r#"{"layout":"XY","polygons":[{"layout":"XYZ","rings":[],"srid":0}],"srid":0}"#;
        assert!(serde_json::from_str::<MultiPolygon>(other_layout).is_err());
    }
}
