use approx::AbsDiffEq;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single coordinate: an ordered list of components.
///
/// The coordinate does not know its own [`Layout`](crate::Layout); the geometry it is used with supplies it, and
/// checks that the number of components matches the layout stride.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord(Vec<f64>);

impl Coord {
    /// Creates a new coordinate from its components.
    pub fn new(components: Vec<f64>) -> Self {
        Self(components)
    }

    /// Coordinate with `stride` components all set to zero.
    pub fn zero(stride: usize) -> Self {
        Self(vec![0.0; stride])
    }

    /// Returns the components as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Consumes the coordinate and returns its components.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl std::ops::Deref for Coord {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Coord {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<[f64]> for Coord {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for Coord {
    fn from(value: Vec<f64>) -> Self {
        Self(value)
    }
}

impl From<&[f64]> for Coord {
    fn from(value: &[f64]) -> Self {
        Self(value.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Coord {
    fn from(value: [f64; N]) -> Self {
        Self(value.to_vec())
    }
}

impl AbsDiffEq for Coord {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.len() == other.0.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
