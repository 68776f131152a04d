//! Fixed-dimension coordinate points.

use approx::{AbsDiffEq, RelativeEq};

use crate::errors::{MathError, MathResult};
use crate::float_types::Real;

/// A point in `N`-dimensional space. The dimension is fixed at construction;
/// individual components remain mutable through the bounds-checked [`set`](Self::set).
///
/// [`Point2D`] and [`Point3D`] specialize this type with named `x`/`y`/`z`
/// accessors over the same indexed storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    coords: [Real; N],
}

/// A point in the plane.
pub type Point2D = Point<2>;
/// A point in 3-space.
pub type Point3D = Point<3>;

impl<const N: usize> Point<N> {
    /// Create a point from its raw component array.
    pub const fn from_coords(coords: [Real; N]) -> Self {
        Point { coords }
    }

    /// Number of dimensions of this point.
    pub const fn ndims(&self) -> usize {
        N
    }

    /// The component at `idx`, or `IndexOutOfBounds` if `idx >= N`.
    pub fn get(&self, idx: usize) -> MathResult<Real> {
        self.coords
            .get(idx)
            .copied()
            .ok_or(MathError::IndexOutOfBounds { axis: "component", index: idx, len: N })
    }

    /// Replace the component at `idx`, or `IndexOutOfBounds` if `idx >= N`.
    pub fn set(&mut self, idx: usize, value: Real) -> MathResult<()> {
        match self.coords.get_mut(idx) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(MathError::IndexOutOfBounds { axis: "component", index: idx, len: N }),
        }
    }

    /// Borrow the raw components.
    pub const fn coords(&self) -> &[Real; N] {
        &self.coords
    }

    /// The components as an independent flat list.
    pub fn to_vec(&self) -> Vec<Real> {
        self.coords.to_vec()
    }
}

impl<const N: usize> Default for Point<N> {
    /// The origin.
    fn default() -> Self {
        Point { coords: [0.0; N] }
    }
}

impl Point<2> {
    /// Create a 2D point from its coordinates.
    pub const fn new(x: Real, y: Real) -> Self {
        Point { coords: [x, y] }
    }

    pub const fn x(&self) -> Real {
        self.coords[0]
    }

    pub const fn y(&self) -> Real {
        self.coords[1]
    }

    pub const fn set_x(&mut self, val: Real) {
        self.coords[0] = val;
    }

    pub const fn set_y(&mut self, val: Real) {
        self.coords[1] = val;
    }
}

impl Point<3> {
    /// Create a 3D point from its coordinates.
    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Point { coords: [x, y, z] }
    }

    pub const fn x(&self) -> Real {
        self.coords[0]
    }

    pub const fn y(&self) -> Real {
        self.coords[1]
    }

    pub const fn z(&self) -> Real {
        self.coords[2]
    }

    pub const fn set_x(&mut self, val: Real) {
        self.coords[0] = val;
    }

    pub const fn set_y(&mut self, val: Real) {
        self.coords[1] = val;
    }

    pub const fn set_z(&mut self, val: Real) {
        self.coords[2] = val;
    }
}

impl<const N: usize> std::fmt::Display for Point<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> AbsDiffEq for Point<N> {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Point<N> {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn named_accessors_alias_indexed_storage() {
        let mut p = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.get(0).unwrap(), 1.0);

        p.set_z(9.0);
        assert_eq!(p.get(2).unwrap(), 9.0);

        p.set(1, -4.0).unwrap();
        assert_eq!(p.y(), -4.0);
    }

    #[test]
    fn out_of_bounds_component() {
        let mut p = Point2D::new(0.5, 0.5);
        assert_eq!(
            p.get(2),
            Err(MathError::IndexOutOfBounds { axis: "component", index: 2, len: 2 })
        );
        assert!(p.set(7, 1.0).is_err());
    }

    #[test]
    fn default_is_origin() {
        let p = Point3D::default();
        assert_eq!(p.to_vec(), vec![0.0, 0.0, 0.0]);
        assert_eq!(p.ndims(), 3);
    }
}
