//! Coordinate layouts: which axes a coordinate carries and in what order.
//!
//! X and Y are always present (except for [`Layout::NoLayout`]), Z always directly follows Y and M is always the
//! last axis:
//!
//! | layout | stride | axes       |
//! |--------|--------|------------|
//! | XY     | 2      | x, y       |
//! | XYZ    | 3      | x, y, z    |
//! | XYM    | 3      | x, y, m    |
//! | XYZM   | 4      | x, y, z, m |

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single coordinate axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// First horizontal axis.
    X,
    /// Second horizontal axis.
    Y,
    /// Elevation.
    Z,
    /// Measure.
    M,
}

/// Set of axes a coordinate carries.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// No axes. Used by geometries that were never given any coordinates, e.g. an empty collection.
    #[default]
    NoLayout,
    /// Two-dimensional.
    XY,
    /// Three-dimensional.
    XYZ,
    /// Two-dimensional with a measure.
    XYM,
    /// Three-dimensional with a measure.
    XYZM,
}

impl Layout {
    /// Returns the layout with X and Y axes and the requested Z/M axes.
    pub const fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Self::XY,
            (true, false) => Self::XYZ,
            (false, true) => Self::XYM,
            (true, true) => Self::XYZM,
        }
    }

    /// Guesses a layout from the number of components of a coordinate.
    ///
    /// Three components are taken as `XYZ`. Any stride other than 2, 3 or 4 gives `NoLayout`.
    pub const fn from_stride(stride: usize) -> Self {
        match stride {
            2 => Self::XY,
            3 => Self::XYZ,
            4 => Self::XYZM,
            _ => Self::NoLayout,
        }
    }

    /// Number of components in a coordinate of this layout.
    pub const fn stride(&self) -> usize {
        match self {
            Self::NoLayout => 0,
            Self::XY => 2,
            Self::XYZ | Self::XYM => 3,
            Self::XYZM => 4,
        }
    }

    /// Whether the layout carries the Z axis.
    pub const fn has_z(&self) -> bool {
        matches!(self, Self::XYZ | Self::XYZM)
    }

    /// Whether the layout carries the M axis.
    pub const fn has_m(&self) -> bool {
        matches!(self, Self::XYM | Self::XYZM)
    }

    /// Index of the Z component in a coordinate, if the layout has one.
    pub const fn z_index(&self) -> Option<usize> {
        if self.has_z() {
            Some(2)
        } else {
            None
        }
    }

    /// Index of the M component in a coordinate, if the layout has one.
    pub const fn m_index(&self) -> Option<usize> {
        if self.has_m() {
            Some(self.stride() - 1)
        } else {
            None
        }
    }

    /// Index of the given axis in a coordinate, if the layout has it.
    pub const fn axis_index(&self, axis: Axis) -> Option<usize> {
        match (self, axis) {
            (Self::NoLayout, _) => None,
            (_, Axis::X) => Some(0),
            (_, Axis::Y) => Some(1),
            (_, Axis::Z) => self.z_index(),
            (_, Axis::M) => self.m_index(),
        }
    }

    /// Iterates over the axes of the layout in coordinate order.
    pub fn axes(&self) -> impl Iterator<Item = Axis> {
        let layout = *self;
        [Axis::X, Axis::Y, Axis::Z, Axis::M]
            .into_iter()
            .filter(move |axis| layout.axis_index(*axis).is_some())
    }

    /// Smallest layout carrying every axis of both `self` and `other`.
    ///
    /// The operation is commutative, associative and idempotent, and `NoLayout` is its identity.
    pub const fn merge(&self, other: Layout) -> Layout {
        match (self, other) {
            (Self::NoLayout, _) => other,
            (_, Self::NoLayout) => *self,
            _ => Self::from_flags(
                self.has_z() || other.has_z(),
                self.has_m() || other.has_m(),
            ),
        }
    }
}

impl Display for Layout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLayout => write!(f, "NoLayout"),
            Self::XY => write!(f, "XY"),
            Self::XYZ => write!(f, "XYZ"),
            Self::XYM => write!(f, "XYM"),
            Self::XYZM => write!(f, "XYZM"),
        }
    }
}
