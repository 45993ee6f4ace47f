#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::geometry::{Geometry, Srid};
use crate::geometry_type::GeometryType;
use crate::impls::LineString;
use crate::layout::Layout;

/// Ordered set of line strings sharing one layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawMultiLineString")
)]
pub struct MultiLineString {
    layout: Layout,
    lines: Vec<LineString>,
    srid: Srid,
}

impl MultiLineString {
    /// Creates a multi line string without lines.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            lines: vec![],
            srid: 0,
        }
    }

    /// Creates a multi line string from coordinates of its lines. See [`MultiLineString::set_coords`].
    pub fn from_coords(layout: Layout, lines: &[Vec<Coord>]) -> Result<Self, FlatGeomError> {
        let mut multi_line_string = Self::new(layout);
        multi_line_string.set_coords(lines)?;
        Ok(multi_line_string)
    }

    /// Creates a multi line string from lines, all of which must have the given layout.
    pub fn from_lines(layout: Layout, lines: Vec<LineString>) -> Result<Self, FlatGeomError> {
        if let Some(line) = lines.iter().find(|l| l.layout() != layout) {
            return Err(FlatGeomError::LayoutMismatch {
                got: line.layout(),
                want: layout,
            });
        }

        Ok(Self {
            layout,
            lines,
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

    /// Replaces all the lines. On error the previous lines are kept.
    pub fn set_coords(&mut self, lines: &[Vec<Coord>]) -> Result<&mut Self, FlatGeomError> {
        let layout = self.layout;
        self.lines = lines
            .iter()
            .map(|coords| LineString::from_coords(layout, coords))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    /// Appends a line. Its layout must match the layout of the multi line string.
    pub fn push(&mut self, line: LineString) -> Result<&mut Self, FlatGeomError> {
        if line.layout() != self.layout {
            return Err(FlatGeomError::LayoutMismatch {
                got: line.layout(),
                want: self.layout,
            });
        }

        self.lines.push(line);
        Ok(self)
    }

    /// Number of lines.
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Returns `index`-th line.
    pub fn line(&self, index: usize) -> Option<&LineString> {
        self.lines.get(index)
    }

    /// All the lines.
    pub fn lines(&self) -> &[LineString] {
        &self.lines
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawMultiLineString {
    layout: Layout,
    lines: Vec<LineString>,
    srid: Srid,
}

#[cfg(feature = "serde")]
impl TryFrom<RawMultiLineString> for MultiLineString {
    type Error = FlatGeomError;

    fn try_from(value: RawMultiLineString) -> Result<Self, Self::Error> {
        Ok(MultiLineString::from_lines(value.layout, value.lines)?.with_srid(value.srid))
    }
}

impl Geometry for MultiLineString {
    fn layout(&self) -> Layout {
        self.layout
    }

    fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new(self.layout);
        for line in &self.lines {
            bounds.extend(line);
        }
        bounds
    }

    fn num_coords(&self) -> usize {
        self.lines.iter().map(|line| line.num_coords()).sum()
    }

    fn coord(&self, index: usize) -> Option<Coord> {
        self.lines
            .iter()
            .flat_map(|line| line.iter_coords())
            .nth(index)
            .map(Coord::from)
    }

    fn srid(&self) -> Srid {
        self.srid
    }

    fn geometry_type(&self) -> GeometryType {
        GeometryType::MultiLineString
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn lines() {
        let multi_line_string = MultiLineString::from_coords(
            Layout::XYM,
            &[
                vec![Coord::from([0.0, 0.0, 0.0]), Coord::from([1.0, 1.0, 1.0])],
                vec![Coord::from([5.0, -5.0, 2.0])],
            ],
        )
        .unwrap();

        assert_eq!(multi_line_string.num_lines(), 2);
        assert_eq!(multi_line_string.num_coords(), 3);
        assert_eq!(
            multi_line_string.coord(2),
            Some(Coord::from([5.0, -5.0, 2.0]))
        );
        assert_eq!(
            multi_line_string.bounds(),
            Bounds::from_values(Layout::XYM, &[0.0, -5.0, 0.0, 5.0, 1.0, 2.0])
        );
        assert_eq!(multi_line_string.line(1).map(|l| l.num_coords()), Some(1));
    }

    #[test]
    fn push_checks_layout() {
        let mut multi_line_string = MultiLineString::new(Layout::XY);
        assert_matches!(
            multi_line_string.push(LineString::new(Layout::XYZ)),
            Err(FlatGeomError::LayoutMismatch { .. })
        );
        multi_line_string.push(LineString::new(Layout::XY)).unwrap();
        assert_eq!(multi_line_string.num_lines(), 1);
        assert!(multi_line_string.is_empty());
    }

    #[test]
    fn from_lines_checks_layout() {
        assert_matches!(
            MultiLineString::from_lines(
                Layout::XY,
                vec![LineString::new(Layout::XY), LineString::new(Layout::XYM)]
            ),
            Err(FlatGeomError::LayoutMismatch {
                got: Layout::XYM,
                want: Layout::XY
            })
        );
        let multi_line_string =
            MultiLineString::from_lines(Layout::XYM, vec![LineString::new(Layout::XYM)]).unwrap();
        assert_eq!(multi_line_string.num_lines(), 1);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_validates_lines() {
        let multi_line_string = MultiLineString::from_coords(
            Layout::XY,
            &[vec![Coord::from([0.0, 0.0]), Coord::from([1.0, 1.0])]],
        )
        .unwrap();
        let json = serde_json::to_string(&multi_line_string).unwrap();
        assert_eq!(
            serde_json::from_str::<MultiLineString>(&json).unwrap(),
            multi_line_string
        );

        let other_layout = r#"{"layout":"XY","lines":[{"path":{"layout":"XYM","flat_coords":[]},"srid":0}],"srid":0}"#;
        assert!(serde_json::from_str::<MultiLineString>(other_layout).is_err());
    }
}
