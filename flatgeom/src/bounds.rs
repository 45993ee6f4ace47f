//! Axis-aligned bounding boxes over a [`Layout`].
//!
//! A [`Bounds`] is empty when, for any of its axes, the minimum is greater than the maximum. A box with equal minimum
//! and maximum (a single point) is not empty. All comparisons are exact.
//!
//! When boxes of different layouts are combined with [`Bounds::extend`] the result uses the merged layout. An axis
//! that the receiver already had keeps growing from its current extent, while an axis introduced for the first time
//! takes the extent of the geometry that introduced it.

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
#[cfg(feature = "serde")]
use crate::error::FlatGeomError;
use crate::geometry::Geometry;
use crate::impls::{LinearRing, Polygon};
use crate::layout::{Axis, Layout};

/// Axis-aligned bounding box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawBounds")
)]
pub struct Bounds {
    layout: Layout,
    min: Coord,
    max: Coord,
}

impl Bounds {
    /// Creates an empty box for the given layout.
    ///
    /// Minimums are set to `+inf` and maximums to `-inf`, so extending the box with any coordinate makes the box
    /// exactly that coordinate.
    pub fn new(layout: Layout) -> Self {
        let stride = layout.stride();
        Self {
            layout,
            min: Coord::new(vec![f64::INFINITY; stride]),
            max: Coord::new(vec![f64::NEG_INFINITY; stride]),
        }
    }

    /// Creates a box from `2 * stride` values: minimums first, then maximums.
    ///
    /// # Panics
    ///
    /// Panics if the number of values is not `2 * layout.stride()`.
    pub fn from_values(layout: Layout, values: &[f64]) -> Self {
        let mut bounds = Self::new(layout);
        bounds.set(values);
        bounds
    }

    /// Creates a box spanning the two corners. See [`Bounds::set_coords`].
    pub fn from_coords(layout: Layout, a: &[f64], b: &[f64]) -> Self {
        let mut bounds = Self::new(layout);
        bounds.set_coords(a, b);
        bounds
    }

    /// Bounds of a flat coordinate buffer of the given layout.
    pub fn from_flat_coords(layout: Layout, flat_coords: &[f64]) -> Self {
        let mut bounds = Self::new(layout);
        let stride = layout.stride();
        if stride > 0 {
            for coord in flat_coords.chunks_exact(stride) {
                bounds.include(coord);
            }
        }

        bounds
    }

    /// Layout of the box.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Number of values in each corner of the box.
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    /// Minimum corner.
    pub fn min_coord(&self) -> &Coord {
        &self.min
    }

    /// Maximum corner.
    pub fn max_coord(&self) -> &Coord {
        &self.max
    }

    /// Minimum value along the axis with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the stride.
    pub fn min(&self, index: usize) -> f64 {
        self.min[index]
    }

    /// Maximum value along the axis with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than the stride.
    pub fn max(&self, index: usize) -> f64 {
        self.max[index]
    }

    /// Minimum and maximum along the given axis, or `None` if the layout of the box does not have the axis.
    pub fn range(&self, axis: Axis) -> Option<(f64, f64)> {
        let index = self.layout.axis_index(axis)?;
        Some((*self.min.get(index)?, *self.max.get(index)?))
    }

    /// Sets the box from `2 * stride` values: minimums first, then maximums.
    ///
    /// The values are taken as given, no reordering is done.
    ///
    /// # Panics
    ///
    /// Panics if the number of values is not `2 * stride`. This is a programming error rather than bad input data.
    pub fn set(&mut self, values: &[f64]) -> &mut Self {
        let stride = self.layout.stride();
        if values.len() != 2 * stride {
            panic!(
                "bounds of layout {} expect {} values, got {}",
                self.layout,
                2 * stride,
                values.len()
            );
        }

        self.min = Coord::from(&values[..stride]);
        self.max = Coord::from(&values[stride..]);
        self
    }

    /// Sets the box to span the two corners.
    ///
    /// The corners do not need to be ordered: the minimum and maximum are taken component-wise, so
    /// `(20, 0), (0, 20)` gives a box from `(0, 0)` to `(20, 20)`.
    ///
    /// The stride is the common length of the corners. If it does not match the current layout, the layout is
    /// replaced with [`Layout::from_stride`] of it.
    ///
    /// # Panics
    ///
    /// Panics if the corners have different lengths, or if their length is not the stride of any layout.
    pub fn set_coords(&mut self, a: &[f64], b: &[f64]) -> &mut Self {
        if a.len() != b.len() {
            panic!(
                "bounds corners must have the same length, got {} and {}",
                a.len(),
                b.len()
            );
        }

        let stride = a.len();
        if self.layout.stride() != stride {
            let layout = Layout::from_stride(stride);
            if layout.stride() != stride {
                panic!("no layout has {stride} components");
            }
            self.layout = layout;
        }

        let (min, max): (Vec<f64>, Vec<f64>) = a
            .iter()
            .zip(b)
            .map(|(a, b)| (a.min(*b), a.max(*b)))
            .unzip();
        self.min = Coord::new(min);
        self.max = Coord::new(max);
        self
    }

    /// Extends the box to cover the geometry. See [`Bounds::extend_bounds`].
    pub fn extend<G: Geometry + ?Sized>(&mut self, geometry: &G) -> &mut Self {
        self.extend_bounds(&geometry.bounds())
    }

    /// Extends the box to cover a single coordinate of the given layout.
    pub fn extend_point(&mut self, layout: Layout, coord: &[f64]) -> &mut Self {
        self.extend_bounds(&Bounds {
            layout,
            min: Coord::from(coord),
            max: Coord::from(coord),
        })
    }

    /// Extends the box to cover `other`.
    ///
    /// The resulting layout is `self.layout().merge(other.layout())`. For every axis of the result:
    /// * if both boxes have the axis, the extents are combined;
    /// * if only `self` has it, the extent is left as is;
    /// * if only `other` has it, the extent is copied from `other`.
    ///
    /// An axis that `self` already constrained never shrinks.
    pub fn extend_bounds(&mut self, other: &Bounds) -> &mut Self {
        let layout = self.layout.merge(other.layout);
        if layout != self.layout {
            trace!("Promoting bounds layout from {} to {layout}", self.layout);
        }

        let stride = layout.stride();
        let mut min = Vec::with_capacity(stride);
        let mut max = Vec::with_capacity(stride);
        for axis in layout.axes() {
            let (lo, hi) = match (self.range(axis), other.range(axis)) {
                (Some((own_min, own_max)), Some((other_min, other_max))) => {
                    (own_min.min(other_min), own_max.max(other_max))
                }
                (Some(range), None) | (None, Some(range)) => range,
                (None, None) => (f64::INFINITY, f64::NEG_INFINITY),
            };
            min.push(lo);
            max.push(hi);
        }

        self.layout = layout;
        self.min = Coord::new(min);
        self.max = Coord::new(max);
        self
    }

    /// Returns true if the minimum is greater than the maximum along any axis. A box without a layout is always
    /// empty.
    pub fn is_empty(&self) -> bool {
        self.layout == Layout::NoLayout
            || self.min.iter().zip(self.max.iter()).any(|(min, max)| min > max)
    }

    /// Returns true if the boxes intersect along every axis up to the stride of `layout`.
    ///
    /// Touching boxes overlap. An axis missing from either box counts as not overlapping.
    pub fn overlaps(&self, layout: Layout, other: &Bounds) -> bool {
        (0..layout.stride()).all(|i| {
            match (
                self.min.get(i),
                self.max.get(i),
                other.min.get(i),
                other.max.get(i),
            ) {
                (Some(min), Some(max), Some(other_min), Some(other_max)) => {
                    min <= other_max && other_min <= max
                }
                _ => false,
            }
        })
    }

    /// Returns true if the coordinate is inside the box (boundary included) along every axis up to the stride of
    /// `layout`.
    pub fn overlaps_point(&self, layout: Layout, coord: &[f64]) -> bool {
        (0..layout.stride()).all(
            |i| match (self.min.get(i), self.max.get(i), coord.get(i)) {
                (Some(min), Some(max), Some(value)) => min <= value && value <= max,
                _ => false,
            },
        )
    }

    /// Rectangular `XY` polygon with the outline of the box.
    ///
    /// The ring goes `(min_x, min_y), (min_x, max_y), (max_x, max_y), (max_x, min_y)` and closes back on the first
    /// point. Z and M axes are dropped. A box without a layout, or an empty box, gives a polygon without rings.
    pub fn polygon(&self) -> Polygon {
        let (Some((x_min, x_max)), Some((y_min, y_max))) =
            (self.range(Axis::X), self.range(Axis::Y))
        else {
            return Polygon::new(Layout::XY);
        };

        if self.is_empty() {
            return Polygon::new(Layout::XY);
        }

        let ring = LinearRing::from_flat_coords_unchecked(
            Layout::XY,
            vec![
                x_min, y_min, x_min, y_max, x_max, y_max, x_max, y_min, x_min, y_min,
            ],
        );
        Polygon::from_rings_unchecked(Layout::XY, vec![ring])
    }

    /// Grows the box to cover `coord`, which must use the layout of the box.
    pub(crate) fn include(&mut self, coord: &[f64]) {
        for ((min, max), value) in self.min.iter_mut().zip(self.max.iter_mut()).zip(coord) {
            *min = min.min(*value);
            *max = max.max(*value);
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawBounds {
    layout: Layout,
    min: Coord,
    max: Coord,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBounds> for Bounds {
    type Error = FlatGeomError;

    fn try_from(value: RawBounds) -> Result<Self, Self::Error> {
        let want = value.layout.stride();
        for corner in [&value.min, &value.max] {
            if corner.len() != want {
                return Err(FlatGeomError::StrideMismatch {
                    got: corner.len(),
                    want,
                });
            }
        }

        Ok(Self {
            layout: value.layout,
            min: value.min,
            max: value.max,
        })
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Layout::NoLayout)
    }
}
