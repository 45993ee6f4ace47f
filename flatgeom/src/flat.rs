//! Ordered coordinate sequences stored in a single contiguous buffer.
//!
//! [`FlatPath`] is the storage shared by [`LineString`](crate::LineString), [`LinearRing`](crate::LinearRing) and
//! [`MultiPoint`](crate::MultiPoint). Coordinates are stored back to back: a path of `n` coordinates with stride `s`
//! holds exactly `n * s` values. The bounding box of the path is cached and kept in sync on every mutation.

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::bounds::Bounds;
use crate::coord::Coord;
use crate::error::FlatGeomError;
use crate::layout::Layout;

/// Ordered sequence of coordinates in one owned buffer.
///
/// Cloning a path copies the buffer, so a clone never shares storage with the original.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawFlatPath", into = "RawFlatPath")
)]
pub struct FlatPath {
    layout: Layout,
    flat_coords: Vec<f64>,
    bounds: Bounds,
}

impl FlatPath {
    /// Creates an empty path.
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            flat_coords: vec![],
            bounds: Bounds::new(layout),
        }
    }

    /// Creates a path from a flat buffer.
    ///
    /// Fails with [`FlatGeomError::StrideMismatch`] if the buffer length is not a multiple of the layout stride. In
    /// this case `got` is the number of trailing values that do not form a whole coordinate.
    pub fn from_flat_coords(layout: Layout, flat_coords: Vec<f64>) -> Result<Self, FlatGeomError> {
        let stride = layout.stride();
        let remainder = match stride {
            0 => flat_coords.len(),
            _ => flat_coords.len() % stride,
        };
        if remainder != 0 {
            debug!(
                "Rejected flat buffer of {} values for layout {layout}",
                flat_coords.len()
            );
            return Err(FlatGeomError::StrideMismatch {
                got: remainder,
                want: stride,
            });
        }

        Ok(Self::from_flat_coords_unchecked(layout, flat_coords))
    }

    /// Creates a path from a list of coordinates. See [`FlatPath::set_coords`].
    pub fn from_coords<C: AsRef<[f64]>>(layout: Layout, coords: &[C]) -> Result<Self, FlatGeomError> {
        let mut path = Self::new(layout);
        path.set_coords(coords)?;
        Ok(path)
    }

    pub(crate) fn from_flat_coords_unchecked(layout: Layout, flat_coords: Vec<f64>) -> Self {
        let bounds = Bounds::from_flat_coords(layout, &flat_coords);
        Self {
            layout,
            flat_coords,
            bounds,
        }
    }

    /// Layout of the path.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of components in each coordinate.
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// Number of coordinates in the path.
    pub fn num_coords(&self) -> usize {
        match self.stride() {
            0 => 0,
            stride => self.flat_coords.len() / stride,
        }
    }

    /// Whether the path has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.flat_coords.is_empty()
    }

    /// Bounding box of the path.
    pub fn bounds(&self) -> Bounds {
        self.bounds.clone()
    }

    /// Flat buffer with all the coordinates.
    pub fn flat_coords(&self) -> &[f64] {
        &self.flat_coords
    }

    /// Returns a copy of `index`-th coordinate, or `None` if the index is out of range.
    pub fn coord(&self, index: usize) -> Option<Coord> {
        self.coord_slice(index).map(Coord::from)
    }

    /// Iterates over coordinates of the path as slices of the flat buffer.
    pub fn iter_coords(&self) -> impl Iterator<Item = &[f64]> {
        self.flat_coords.chunks_exact(self.stride().max(1))
    }

    /// Returns copies of all the coordinates.
    pub fn coords(&self) -> Vec<Coord> {
        self.iter_coords().map(Coord::from).collect()
    }

    /// Replaces all the coordinates of the path.
    ///
    /// Every coordinate must have exactly `stride` components. The whole input is checked before anything is
    /// written: if any coordinate has a wrong length, [`FlatGeomError::StrideMismatch`] is returned for the first such
    /// coordinate and the path is left unchanged.
    pub fn set_coords<C: AsRef<[f64]>>(&mut self, coords: &[C]) -> Result<&mut Self, FlatGeomError> {
        let stride = self.stride();
        if let Some(invalid) = coords.iter().find(|c| c.as_ref().len() != stride) {
            debug!(
                "Rejected coordinate with {} components for layout {}",
                invalid.as_ref().len(),
                self.layout
            );
            return Err(FlatGeomError::StrideMismatch {
                got: invalid.as_ref().len(),
                want: stride,
            });
        }

        self.flat_coords.clear();
        for coord in coords {
            self.flat_coords.extend_from_slice(coord.as_ref());
        }
        self.bounds = Bounds::from_flat_coords(self.layout, &self.flat_coords);

        Ok(self)
    }

    /// Appends a coordinate to the end of the path.
    pub fn push_coord(&mut self, coord: &[f64]) -> Result<&mut Self, FlatGeomError> {
        if coord.len() != self.stride() {
            return Err(FlatGeomError::StrideMismatch {
                got: coord.len(),
                want: self.stride(),
            });
        }

        self.flat_coords.extend_from_slice(coord);
        self.bounds.include(coord);
        Ok(self)
    }

    /// Reserves buffer space for at least `additional` more coordinates.
    ///
    /// Does not change the coordinates of the path.
    pub fn reserve(&mut self, additional: usize) {
        self.flat_coords.reserve(additional * self.stride());
    }

    /// Finds the position of `value` along the axis with index `axis`.
    ///
    /// The coordinates are expected to be non-decreasing along that axis (e.g. M values of a measured line). Returns
    /// the index `i` of the segment start and the fraction of the way from coordinate `i` to coordinate `i + 1`:
    /// * values at or before the first coordinate give `(0, 0.0)`;
    /// * values at or after the last coordinate give `(num_coords - 1, 0.0)`;
    /// * a value equal to the value of coordinate `i` gives `(i, 0.0)`.
    ///
    /// An empty path gives `(0, 0.0)`.
    ///
    /// # Panics
    ///
    /// Panics if `axis` is not less than the stride of a non-empty path.
    pub fn interpolate(&self, value: f64, axis: usize) -> (usize, f64) {
        let n = self.num_coords();
        if n == 0 {
            return (0, 0.0);
        }

        let stride = self.stride();
        assert!(
            axis < stride,
            "axis index {axis} is out of range for layout {}",
            self.layout
        );
        let at = |i: usize| self.flat_coords[i * stride + axis];

        if value <= at(0) {
            return (0, 0.0);
        }
        if value >= at(n - 1) {
            return (n - 1, 0.0);
        }

        // Largest `lo` with at(lo) <= value. at(0) < value < at(n - 1) holds here.
        let (mut lo, mut hi) = (0, n - 1);
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if at(mid) <= value {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        let start = at(lo);
        if value == start {
            return (lo, 0.0);
        }

        (lo, (value - start) / (at(lo + 1) - start))
    }

    /// Checks internal consistency of the path: buffer length is a multiple of the stride and the cached bounds match
    /// the coordinates.
    pub fn verify(&self) -> Result<(), FlatGeomError> {
        if self.num_coords() * self.stride() != self.flat_coords.len() {
            return Err(FlatGeomError::Inconsistent(format!(
                "{} values do not form whole coordinates of stride {}",
                self.flat_coords.len(),
                self.stride()
            )));
        }

        let expected = Bounds::from_flat_coords(self.layout, &self.flat_coords);
        if self.bounds != expected {
            return Err(FlatGeomError::Inconsistent(format!(
                "cached bounds {:?} do not match computed bounds {expected:?}",
                self.bounds
            )));
        }

        Ok(())
    }

    fn coord_slice(&self, index: usize) -> Option<&[f64]> {
        let stride = self.stride();
        if stride == 0 {
            return None;
        }

        self.flat_coords.get(index * stride..(index + 1) * stride)
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawFlatPath {
    layout: Layout,
    flat_coords: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFlatPath> for FlatPath {
    type Error = FlatGeomError;

    fn try_from(value: RawFlatPath) -> Result<Self, Self::Error> {
        Self::from_flat_coords(value.layout, value.flat_coords)
    }
}

#[cfg(feature = "serde")]
impl From<FlatPath> for RawFlatPath {
    fn from(value: FlatPath) -> Self {
        Self {
            layout: value.layout,
            flat_coords: value.flat_coords,
        }
    }
}

/// Returns true if the two slices share any memory.
#[cfg(test)]
pub(crate) fn aliases(a: &[f64], b: &[f64]) -> bool {
    let a = a.as_ptr_range();
    let b = b.as_ptr_range();
    a.start < b.end && b.start < a.end
}
