//! Conversions between this crate's geometries and [`geo_types`].
//!
//! `geo_types` geometries are two-dimensional, so only `X` and `Y` survive the conversion to them. Geometries coming
//! from `geo_types` always have [`Layout::XY`] and SRID `0`.

use geo_types::{coord, CoordNum};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::flat::FlatPath;
use crate::geometry::Geom;
use crate::impls::{
    GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};
use crate::layout::{Axis, Layout};

fn xy_coords(path: &FlatPath) -> Vec<geo_types::Coord<f64>> {
    if path.stride() < 2 {
        return vec![];
    }

    path.iter_coords()
        .map(|c| coord!(x: c[0], y: c[1]))
        .collect()
}

fn xy_flat_coords<T: CoordNum + Into<f64>>(
    coords: impl IntoIterator<Item = geo_types::Coord<T>>,
) -> Vec<f64> {
    coords
        .into_iter()
        .flat_map(|c| [c.x.into(), c.y.into()])
        .collect()
}

impl From<&LineString> for geo_types::LineString<f64> {
    fn from(value: &LineString) -> Self {
        geo_types::LineString::new(xy_coords(value))
    }
}

impl From<&LinearRing> for geo_types::LineString<f64> {
    fn from(value: &LinearRing) -> Self {
        geo_types::LineString::new(xy_coords(value))
    }
}

impl From<&Polygon> for geo_types::Polygon<f64> {
    /// The first ring becomes the exterior, the rest become interiors.
    fn from(value: &Polygon) -> Self {
        let mut rings = value.rings().iter().map(geo_types::LineString::<f64>::from);
        let exterior = rings
            .next()
            .unwrap_or_else(|| geo_types::LineString::new(vec![]));
        geo_types::Polygon::new(exterior, rings.collect())
    }
}

impl From<&MultiPoint> for geo_types::MultiPoint<f64> {
    fn from(value: &MultiPoint) -> Self {
        geo_types::MultiPoint::new(
            xy_coords(value.path())
                .into_iter()
                .map(geo_types::Point::from)
                .collect(),
        )
    }
}

impl From<&MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: &MultiLineString) -> Self {
        geo_types::MultiLineString::new(value.lines().iter().map(Into::into).collect())
    }
}

impl From<&MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: &MultiPolygon) -> Self {
        geo_types::MultiPolygon::new(value.polygons().iter().map(Into::into).collect())
    }
}

impl TryFrom<&Point> for geo_types::Point<f64> {
    type Error = FlatGeomError;

    fn try_from(value: &Point) -> Result<Self, Self::Error> {
        match (value.x(), value.y()) {
            (Some(x), Some(y)) => Ok(geo_types::Point::new(x, y)),
            _ => Err(FlatGeomError::EmptyPoint),
        }
    }
}

impl TryFrom<&GeometryCollection> for geo_types::GeometryCollection<f64> {
    type Error = FlatGeomError;

    fn try_from(value: &GeometryCollection) -> Result<Self, Self::Error> {
        value
            .iter()
            .map(geo_types::Geometry::<f64>::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(geo_types::GeometryCollection)
    }
}

impl TryFrom<&Geom> for geo_types::Geometry<f64> {
    type Error = FlatGeomError;

    /// Fails only for empty points, which `geo_types` cannot represent.
    fn try_from(value: &Geom) -> Result<Self, Self::Error> {
        Ok(match value {
            Geom::Point(v) => geo_types::Geometry::Point(v.try_into()?),
            Geom::LineString(v) => geo_types::Geometry::LineString(v.into()),
            Geom::LinearRing(v) => geo_types::Geometry::LineString(v.into()),
            Geom::Polygon(v) => geo_types::Geometry::Polygon(v.into()),
            Geom::MultiPoint(v) => geo_types::Geometry::MultiPoint(v.into()),
            Geom::MultiLineString(v) => geo_types::Geometry::MultiLineString(v.into()),
            Geom::MultiPolygon(v) => geo_types::Geometry::MultiPolygon(v.into()),
            Geom::GeometryCollection(v) => geo_types::Geometry::GeometryCollection(v.try_into()?),
        })
    }
}

impl Bounds {
    /// `XY` projection of the box as a [`geo_types::Rect`]. Returns `None` for an empty box or a box without `X`
    /// and `Y` axes.
    pub fn to_rect(&self) -> Option<geo_types::Rect<f64>> {
        if self.is_empty() {
            return None;
        }

        let (x_min, x_max) = self.range(Axis::X)?;
        let (y_min, y_max) = self.range(Axis::Y)?;
        Some(geo_types::Rect::new(
            coord!(x: x_min, y: y_min),
            coord!(x: x_max, y: y_max),
        ))
    }
}

impl<T: CoordNum + Into<f64>> From<geo_types::Coord<T>> for Coord {
    fn from(value: geo_types::Coord<T>) -> Self {
        Coord::new(vec![value.x.into(), value.y.into()])
    }
}

impl<T: CoordNum + Into<f64>> From<geo_types::Point<T>> for Point {
    fn from(value: geo_types::Point<T>) -> Self {
        Point::from_flat_coords_unchecked(Layout::XY, xy_flat_coords([value.0]))
    }
}

impl<T: CoordNum + Into<f64>> From<&geo_types::LineString<T>> for LineString {
    fn from(value: &geo_types::LineString<T>) -> Self {
        FlatPath::from_flat_coords_unchecked(Layout::XY, xy_flat_coords(value.coords().copied()))
            .into()
    }
}

impl<T: CoordNum + Into<f64>> From<&geo_types::LineString<T>> for LinearRing {
    fn from(value: &geo_types::LineString<T>) -> Self {
        FlatPath::from_flat_coords_unchecked(Layout::XY, xy_flat_coords(value.coords().copied()))
            .into()
    }
}

impl<T: CoordNum + Into<f64>> From<&geo_types::Polygon<T>> for Polygon {
    fn from(value: &geo_types::Polygon<T>) -> Self {
        let rings = std::iter::once(value.exterior())
            .chain(value.interiors())
            .map(LinearRing::from)
            .collect();
        Polygon::from_rings_unchecked(Layout::XY, rings)
    }
}

impl<T: CoordNum + Into<f64>> From<&geo_types::MultiPoint<T>> for MultiPoint {
    fn from(value: &geo_types::MultiPoint<T>) -> Self {
        let flat_coords = xy_flat_coords(value.iter().map(|p| p.0));
        FlatPath::from_flat_coords_unchecked(Layout::XY, flat_coords).into()
    }
}

impl<T: CoordNum + Into<f64>> From<geo_types::Rect<T>> for Bounds {
    fn from(value: geo_types::Rect<T>) -> Self {
        let min = value.min();
        let max = value.max();
        Bounds::from_coords(
            Layout::XY,
            &[min.x.into(), min.y.into()],
            &[max.x.into(), max.y.into()],
        )
    }
}
