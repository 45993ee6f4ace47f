//! Error type used by the crate.

use thiserror::Error;

use crate::layout::Layout;
use crate::Srid;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlatGeomError {
    /// A coordinate has a different number of components than the layout stride.
    #[error("stride mismatch: got {got}, want {want}")]
    StrideMismatch {
        /// Number of components in the rejected coordinate (or buffer remainder).
        got: usize,
        /// Stride of the layout in force.
        want: usize,
    },
    /// A sub-geometry uses a different layout than its parent.
    #[error("layout mismatch: got {got}, want {want}")]
    LayoutMismatch {
        /// Layout of the rejected sub-geometry.
        got: Layout,
        /// Layout of the parent geometry.
        want: Layout,
    },
    /// A geometry with a different SRID was pushed into a collection that rejects mismatches.
    #[error("srid mismatch: got {got}, want {want}")]
    SridMismatch {
        /// SRID of the rejected geometry.
        got: Srid,
        /// SRID of the collection.
        want: Srid,
    },
    /// An empty point cannot be represented by the target type.
    #[error("point is empty")]
    EmptyPoint,
    /// Internal invariant of a geometry does not hold.
    #[error("inconsistent geometry: {0}")]
    Inconsistent(String),
}
