//! Affine transforms in the plane, as 3×3 homogeneous matrices.

use super::apply_matrix;
use crate::errors::{MathError, MathResult};
use crate::float_types::Real;
use crate::matrix::Matrix;
use crate::point::Point2D;

/// The lines of reflection in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionLine {
    /// Across the x axis: y flips sign.
    X,
    /// Across the y axis: x flips sign.
    Y,
    /// Through the origin: both coordinates flip sign.
    Origin,
    /// Across the diagonal y = x: the coordinates swap.
    Diagonal,
}

/// One recorded operation in a 2D pipeline. Immutable once appended;
/// each variant knows its own matrix and its algebraic inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Counterclockwise rotation about the origin, in radians.
    Rotate { rads: Real },
    /// Per-axis scaling.
    Scale { x: Real, y: Real },
    /// `horizontal` adds `horizontal * y` to x; `vertical` adds
    /// `vertical * x` to y.
    Shear { horizontal: Real, vertical: Real },
    /// Per-axis offsets.
    Translate { dx: Real, dy: Real },
    /// Reflection across the named line.
    Reflect { line: ReflectionLine },
}

impl Step {
    /// The canonical homogeneous matrix for this operation.
    pub fn matrix(&self) -> Matrix {
        match *self {
            Step::Rotate { rads } => rotation_matrix(rads),
            Step::Scale { x, y } => scaling_matrix(x, y),
            Step::Shear { horizontal, vertical } => shearing_matrix(horizontal, vertical),
            Step::Translate { dx, dy } => translation_matrix(dx, dy),
            Step::Reflect { line } => reflection_matrix(line),
        }
    }

    /// The matrix of the operation that undoes this one: negated angle,
    /// reciprocal scale factors, negated shear coefficients, negated
    /// offsets; a reflection is its own inverse. Fails with
    /// `DivideByZero` for a zero scale factor, which has no reciprocal.
    pub fn inverse_matrix(&self) -> MathResult<Matrix> {
        match *self {
            Step::Rotate { rads } => Ok(rotation_matrix(-rads)),
            Step::Scale { x, y } => {
                if x == 0.0 || y == 0.0 {
                    return Err(MathError::DivideByZero);
                }
                Ok(scaling_matrix(1.0 / x, 1.0 / y))
            },
            Step::Shear { horizontal, vertical } => Ok(shearing_matrix(-horizontal, -vertical)),
            Step::Translate { dx, dy } => Ok(translation_matrix(-dx, -dy)),
            Step::Reflect { line } => Ok(reflection_matrix(line)),
        }
    }
}

/// The rotation matrix for a counterclockwise turn of `rads` radians.
pub fn rotation_matrix(rads: Real) -> Matrix {
    let (sin, cos) = rads.sin_cos();
    Matrix::from_raw(3, 3, vec![
        cos, -sin, 0.0, //
        sin, cos, 0.0, //
        0.0, 0.0, 1.0,
    ])
}

/// The diagonal scaling matrix for the given per-axis factors.
pub fn scaling_matrix(xscale: Real, yscale: Real) -> Matrix {
    Matrix::from_raw(3, 3, vec![
        xscale, 0.0, 0.0, //
        0.0, yscale, 0.0, //
        0.0, 0.0, 1.0,
    ])
}

/// The shearing matrix: `horizontal` adds `horizontal * y` to x,
/// `vertical` adds `vertical * x` to y.
pub fn shearing_matrix(horizontal: Real, vertical: Real) -> Matrix {
    Matrix::from_raw(3, 3, vec![
        1.0, horizontal, 0.0, //
        vertical, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ])
}

/// The translation matrix for the given offsets, encoded in the
/// homogeneous column.
pub fn translation_matrix(dx: Real, dy: Real) -> Matrix {
    Matrix::from_raw(3, 3, vec![
        1.0, 0.0, dx, //
        0.0, 1.0, dy, //
        0.0, 0.0, 1.0,
    ])
}

/// The reflection matrix across the given line.
pub fn reflection_matrix(line: ReflectionLine) -> Matrix {
    let data = match line {
        ReflectionLine::X => vec![
            1.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
        ReflectionLine::Y => vec![
            -1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
        ReflectionLine::Origin => vec![
            -1.0, 0.0, 0.0, //
            0.0, -1.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
        ReflectionLine::Diagonal => vec![
            0.0, 1.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0,
        ],
    };
    Matrix::from_raw(3, 3, data)
}

/// Rotate a single point counterclockwise about the origin.
pub fn rotate(pt: &Point2D, rads: Real) -> Point2D {
    apply_matrix(&rotation_matrix(rads), pt)
}

/// Scale a single point by the given per-axis factors.
pub fn scale(pt: &Point2D, xscale: Real, yscale: Real) -> Point2D {
    apply_matrix(&scaling_matrix(xscale, yscale), pt)
}

/// Shear a single point by the given coefficients.
pub fn shear(pt: &Point2D, horizontal: Real, vertical: Real) -> Point2D {
    apply_matrix(&shearing_matrix(horizontal, vertical), pt)
}

/// Translate a single point by the given offsets.
pub fn translate(pt: &Point2D, dx: Real, dy: Real) -> Point2D {
    apply_matrix(&translation_matrix(dx, dy), pt)
}

/// Reflect a single point across the given line.
pub fn reflect(pt: &Point2D, line: ReflectionLine) -> Point2D {
    apply_matrix(&reflection_matrix(line), pt)
}

/// Records an ordered list of 2D operations and compiles it into a single
/// transform matrix, so a whole pipeline costs one multiply per point.
///
/// Appending is deferred: no matrix work happens until [`build`](Self::build)
/// or [`build_reverse`](Self::build_reverse). Appending a step after a
/// build clears both cached matrices, and [`apply`](Self::apply) /
/// [`apply_reverse`](Self::apply_reverse) refuse to run against a stale or
/// absent cache with `NotBuilt`.
#[derive(Debug, Clone, Default)]
pub struct TransformBuilder {
    steps: Vec<Step>,
    forward: Option<Matrix>,
    reverse: Option<Matrix>,
}

impl TransformBuilder {
    /// An empty pipeline. Building it yields the identity.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, step: Step) -> Self {
        self.steps.push(step);
        // The cached matrices no longer reflect the step list.
        self.forward = None;
        self.reverse = None;
        self
    }

    /// Append a counterclockwise rotation, in radians.
    pub fn rotate(self, rads: Real) -> Self {
        self.push(Step::Rotate { rads })
    }

    /// Append a per-axis scale.
    pub fn scale(self, xscale: Real, yscale: Real) -> Self {
        self.push(Step::Scale { x: xscale, y: yscale })
    }

    /// Append a shear.
    pub fn shear(self, horizontal: Real, vertical: Real) -> Self {
        self.push(Step::Shear { horizontal, vertical })
    }

    /// Append a translation.
    pub fn translate(self, dx: Real, dy: Real) -> Self {
        self.push(Step::Translate { dx, dy })
    }

    /// Append a reflection.
    pub fn reflect(self, line: ReflectionLine) -> Self {
        self.push(Step::Reflect { line })
    }

    /// The recorded steps, in insertion order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether a current forward matrix is cached.
    pub fn is_built(&self) -> bool {
        self.forward.is_some()
    }

    /// Whether a current reverse matrix is cached.
    pub fn is_reverse_built(&self) -> bool {
        self.reverse.is_some()
    }

    /// Compile the forward matrix: starting from the identity, each step's
    /// matrix is left-multiplied onto the accumulator in insertion order,
    /// so steps apply to points in the order they were appended. Caches
    /// the result and returns a copy.
    pub fn build(&mut self) -> Matrix {
        let mtx = self
            .steps
            .iter()
            .fold(Matrix::identity(3), |acc, step| step.matrix().mul_unchecked(&acc));
        self.forward = Some(mtx.clone());
        mtx
    }

    /// Compile the reverse matrix: each step's algebraic inverse, composed
    /// in the reverse of insertion order. This is an exact closed-form
    /// undo, derived without numeric matrix inversion. Caches the result
    /// and returns a copy.
    pub fn build_reverse(&mut self) -> MathResult<Matrix> {
        let mut acc = Matrix::identity(3);
        for step in self.steps.iter().rev() {
            acc = step.inverse_matrix()?.mul_unchecked(&acc);
        }
        self.reverse = Some(acc.clone());
        Ok(acc)
    }

    /// Run a point through the compiled forward matrix. Fails with
    /// `NotBuilt` unless [`build`](Self::build) has run since the last
    /// append.
    pub fn apply(&self, pt: &Point2D) -> MathResult<Point2D> {
        let mtx = self.forward.as_ref().ok_or(MathError::NotBuilt)?;
        Ok(apply_matrix(mtx, pt))
    }

    /// Run a point through the compiled reverse matrix. Fails with
    /// `NotBuilt` unless [`build_reverse`](Self::build_reverse) has run
    /// since the last append.
    pub fn apply_reverse(&self, pt: &Point2D) -> MathResult<Point2D> {
        let mtx = self.reverse.as_ref().ok_or(MathError::NotBuilt)?;
        Ok(apply_matrix(mtx, pt))
    }
}
