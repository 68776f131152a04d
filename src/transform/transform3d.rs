//! Affine transforms in 3-space, as 4×4 homogeneous matrices.

use super::apply_matrix;
use crate::errors::{MathError, MathResult};
use crate::float_types::Real;
use crate::matrix::Matrix;
use crate::point::Point3D;

/// The coordinate axes a 3D rotation can turn about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    X,
    Y,
    Z,
}

/// The planes of reflection in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionPlane {
    /// The xy plane: z flips sign.
    Xy,
    /// The yz plane: x flips sign.
    Yz,
    /// The zx plane: y flips sign.
    Zx,
    /// Through the origin: all three coordinates flip sign.
    Origin,
}

/// Shear coefficients, one per ordered axis pair. Each coefficient mixes
/// the first axis into the second: `xy` adds `xy * x` to y, `yx` adds
/// `yx * y` to x, and so on. Unset coefficients default to zero.
///
/// ```
/// use xformrs::transform::transform3d::Shear;
/// let sh = Shear { yx: 3.0, yz: -2.0, ..Shear::default() };
/// assert_eq!(sh.xy, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Shear {
    /// Mixes x into y.
    pub xy: Real,
    /// Mixes x into z.
    pub xz: Real,
    /// Mixes y into x.
    pub yx: Real,
    /// Mixes y into z.
    pub yz: Real,
    /// Mixes z into x.
    pub zx: Real,
    /// Mixes z into y.
    pub zy: Real,
}

impl Shear {
    /// Every coefficient with its sign flipped.
    pub fn negated(&self) -> Self {
        Shear {
            xy: -self.xy,
            xz: -self.xz,
            yx: -self.yx,
            yz: -self.yz,
            zx: -self.zx,
            zy: -self.zy,
        }
    }
}

/// One recorded operation in a 3D pipeline. Immutable once appended;
/// each variant knows its own matrix and its algebraic inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Rotation about a coordinate axis, in radians.
    Rotate { axis: RotationAxis, rads: Real },
    /// Per-axis scaling.
    Scale { x: Real, y: Real, z: Real },
    /// Off-diagonal shear.
    Shear { coeffs: Shear },
    /// Per-axis offsets.
    Translate { dx: Real, dy: Real, dz: Real },
    /// Reflection across the named plane.
    Reflect { plane: ReflectionPlane },
}

impl Step {
    /// The canonical homogeneous matrix for this operation.
    pub fn matrix(&self) -> Matrix {
        match *self {
            Step::Rotate { axis, rads } => rotation_matrix(axis, rads),
            Step::Scale { x, y, z } => scaling_matrix(x, y, z),
            Step::Shear { coeffs } => shearing_matrix(coeffs),
            Step::Translate { dx, dy, dz } => translation_matrix(dx, dy, dz),
            Step::Reflect { plane } => reflection_matrix(plane),
        }
    }

    /// The matrix of the operation that undoes this one: negated angle,
    /// reciprocal scale factors, negated shear coefficients, negated
    /// offsets; a reflection is its own inverse. Fails with
    /// `DivideByZero` for a zero scale factor, which has no reciprocal.
    pub fn inverse_matrix(&self) -> MathResult<Matrix> {
        match *self {
            Step::Rotate { axis, rads } => Ok(rotation_matrix(axis, -rads)),
            Step::Scale { x, y, z } => {
                if x == 0.0 || y == 0.0 || z == 0.0 {
                    return Err(MathError::DivideByZero);
                }
                Ok(scaling_matrix(1.0 / x, 1.0 / y, 1.0 / z))
            },
            Step::Shear { coeffs } => Ok(shearing_matrix(coeffs.negated())),
            Step::Translate { dx, dy, dz } => Ok(translation_matrix(-dx, -dy, -dz)),
            Step::Reflect { plane } => Ok(reflection_matrix(plane)),
        }
    }
}

/// The rotation matrix about the given axis for a turn of `rads` radians.
pub fn rotation_matrix(axis: RotationAxis, rads: Real) -> Matrix {
    let (sin, cos) = rads.sin_cos();
    let data = match axis {
        RotationAxis::X => vec![
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, -sin, 0.0, //
            0.0, sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
        RotationAxis::Y => vec![
            cos, 0.0, sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            -sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
        RotationAxis::Z => vec![
            cos, -sin, 0.0, 0.0, //
            sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };
    Matrix::from_raw(4, 4, data)
}

/// The diagonal scaling matrix for the given per-axis factors.
pub fn scaling_matrix(xscale: Real, yscale: Real, zscale: Real) -> Matrix {
    Matrix::from_raw(4, 4, vec![
        xscale, 0.0, 0.0, 0.0, //
        0.0, yscale, 0.0, 0.0, //
        0.0, 0.0, zscale, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// The shearing matrix for the given coefficients; see [`Shear`] for how
/// each coefficient mixes one axis into another.
pub fn shearing_matrix(coeffs: Shear) -> Matrix {
    let Shear { xy, xz, yx, yz, zx, zy } = coeffs;
    Matrix::from_raw(4, 4, vec![
        1.0, yx, zx, 0.0, //
        xy, 1.0, zy, 0.0, //
        xz, yz, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// The translation matrix for the given offsets, encoded in the
/// homogeneous column.
pub fn translation_matrix(dx: Real, dy: Real, dz: Real) -> Matrix {
    Matrix::from_raw(4, 4, vec![
        1.0, 0.0, 0.0, dx, //
        0.0, 1.0, 0.0, dy, //
        0.0, 0.0, 1.0, dz, //
        0.0, 0.0, 0.0, 1.0,
    ])
}

/// The reflection matrix across the given plane.
pub fn reflection_matrix(plane: ReflectionPlane) -> Matrix {
    let diag = match plane {
        ReflectionPlane::Xy => [1.0, 1.0, -1.0],
        ReflectionPlane::Yz => [-1.0, 1.0, 1.0],
        ReflectionPlane::Zx => [1.0, -1.0, 1.0],
        ReflectionPlane::Origin => [-1.0, -1.0, -1.0],
    };
    scaling_matrix(diag[0], diag[1], diag[2])
}

/// Rotate a single point about the given axis.
pub fn rotate(pt: &Point3D, axis: RotationAxis, rads: Real) -> Point3D {
    apply_matrix(&rotation_matrix(axis, rads), pt)
}

/// Scale a single point by the given per-axis factors.
pub fn scale(pt: &Point3D, xscale: Real, yscale: Real, zscale: Real) -> Point3D {
    apply_matrix(&scaling_matrix(xscale, yscale, zscale), pt)
}

/// Shear a single point by the given coefficients.
pub fn shear(pt: &Point3D, coeffs: Shear) -> Point3D {
    apply_matrix(&shearing_matrix(coeffs), pt)
}

/// Translate a single point by the given offsets.
pub fn translate(pt: &Point3D, dx: Real, dy: Real, dz: Real) -> Point3D {
    apply_matrix(&translation_matrix(dx, dy, dz), pt)
}

/// Reflect a single point across the given plane.
pub fn reflect(pt: &Point3D, plane: ReflectionPlane) -> Point3D {
    apply_matrix(&reflection_matrix(plane), pt)
}

/// Records an ordered list of 3D operations and compiles it into a single
/// transform matrix, so a whole pipeline costs one multiply per point.
///
/// Appending is deferred: no matrix work happens until [`build`](Self::build)
/// or [`build_reverse`](Self::build_reverse). Appending a step after a
/// build clears both cached matrices, and [`apply`](Self::apply) /
/// [`apply_reverse`](Self::apply_reverse) refuse to run against a stale or
/// absent cache with `NotBuilt`.
///
/// ```
/// use xformrs::point::Point3D;
/// use xformrs::transform::transform3d::{RotationAxis, TransformBuilder};
///
/// let mut pipeline = TransformBuilder::new()
///     .translate(0.0, 0.0, -5.0)
///     .rotate(RotationAxis::Y, 0.25);
/// pipeline.build();
/// let projected = pipeline.apply(&Point3D::new(1.0, 2.0, 3.0)).unwrap();
/// # let _ = projected;
/// ```
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

    /// Append a rotation about the given axis, in radians.
    pub fn rotate(self, axis: RotationAxis, rads: Real) -> Self {
        self.push(Step::Rotate { axis, rads })
    }

    /// Append a per-axis scale.
    pub fn scale(self, xscale: Real, yscale: Real, zscale: Real) -> Self {
        self.push(Step::Scale { x: xscale, y: yscale, z: zscale })
    }

    /// Append a shear.
    pub fn shear(self, coeffs: Shear) -> Self {
        self.push(Step::Shear { coeffs })
    }

    /// Append a translation.
    pub fn translate(self, dx: Real, dy: Real, dz: Real) -> Self {
        self.push(Step::Translate { dx, dy, dz })
    }

    /// Append a reflection.
    pub fn reflect(self, plane: ReflectionPlane) -> Self {
        self.push(Step::Reflect { plane })
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
            .fold(Matrix::identity(4), |acc, step| step.matrix().mul_unchecked(&acc));
        self.forward = Some(mtx.clone());
        mtx
    }

    /// Compile the reverse matrix: each step's algebraic inverse, composed
    /// in the reverse of insertion order. This is an exact closed-form
    /// undo, derived without numeric matrix inversion. Caches the result
    /// and returns a copy.
    pub fn build_reverse(&mut self) -> MathResult<Matrix> {
        let mut acc = Matrix::identity(4);
        for step in self.steps.iter().rev() {
            acc = step.inverse_matrix()?.mul_unchecked(&acc);
        }
        self.reverse = Some(acc.clone());
        Ok(acc)
    }

    /// Run a point through the compiled forward matrix. Fails with
    /// `NotBuilt` unless [`build`](Self::build) has run since the last
    /// append.
    pub fn apply(&self, pt: &Point3D) -> MathResult<Point3D> {
        let mtx = self.forward.as_ref().ok_or(MathError::NotBuilt)?;
        Ok(apply_matrix(mtx, pt))
    }

    /// Run a point through the compiled reverse matrix. Fails with
    /// `NotBuilt` unless [`build_reverse`](Self::build_reverse) has run
    /// since the last append.
    pub fn apply_reverse(&self, pt: &Point3D) -> MathResult<Point3D> {
        let mtx = self.reverse.as_ref().ok_or(MathError::NotBuilt)?;
        Ok(apply_matrix(mtx, pt))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::float_types::{FRAC_PI_2, PI};
    use approx::assert_abs_diff_eq;

    #[test]
    fn axis_rotations() {
        let pt = Point3D::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(
            rotate(&pt, RotationAxis::X, FRAC_PI_2),
            Point3D::new(0.0, 0.0, 1.0),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            rotate(&pt, RotationAxis::Z, FRAC_PI_2),
            Point3D::new(-1.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        // Rotation about y leaves the y axis fixed.
        assert_abs_diff_eq!(rotate(&pt, RotationAxis::Y, 1.2), pt, epsilon = 1e-12);
    }

    #[test]
    fn one_shot_operations() {
        let pt = Point3D::new(1.0, 2.0, 3.0);
        assert_eq!(scale(&pt, 2.0, 3.0, 4.0), Point3D::new(2.0, 6.0, 12.0));
        assert_eq!(translate(&pt, -1.0, 0.5, 2.0), Point3D::new(0.0, 2.5, 5.0));
        assert_eq!(reflect(&pt, ReflectionPlane::Xy), Point3D::new(1.0, 2.0, -3.0));
        assert_eq!(reflect(&pt, ReflectionPlane::Origin), Point3D::new(-1.0, -2.0, -3.0));

        // yx mixes y into x, yz mixes y into z.
        let sheared = shear(&pt, Shear { yx: 3.0, yz: -2.0, ..Shear::default() });
        assert_eq!(sheared, Point3D::new(7.0, 2.0, -1.0));
    }

    #[test]
    fn builder_matches_step_by_step_application() {
        let mut builder = TransformBuilder::new()
            .shear(Shear { yx: 3.0, yz: -2.0, ..Shear::default() })
            .translate(-3.0, 10.0, 7.0)
            .scale(3.0, 3.0, 3.0)
            .rotate(RotationAxis::X, PI / 4.0)
            .reflect(ReflectionPlane::Origin);
        builder.build();

        let mut pt = Point3D::new(3.0, 1.0, 5.0);
        pt = shear(&pt, Shear { yx: 3.0, yz: -2.0, ..Shear::default() });
        pt = translate(&pt, -3.0, 10.0, 7.0);
        pt = scale(&pt, 3.0, 3.0, 3.0);
        pt = rotate(&pt, RotationAxis::X, PI / 4.0);
        pt = reflect(&pt, ReflectionPlane::Origin);

        let composed = builder.apply(&Point3D::new(3.0, 1.0, 5.0)).unwrap();
        assert_abs_diff_eq!(composed, pt, epsilon = 1e-9);
    }

    #[test]
    fn reverse_pipeline_restores_the_original_point() {
        let mut builder = TransformBuilder::new()
            .shear(Shear { yx: 3.0, yz: -2.0, ..Shear::default() })
            .translate(-3.0, 10.0, 7.0)
            .scale(3.0, 3.0, 3.0)
            .rotate(RotationAxis::X, PI / 4.0)
            .reflect(ReflectionPlane::Origin);
        builder.build();
        builder.build_reverse().unwrap();

        let original = Point3D::new(3.0, 1.0, 5.0);
        let projected = builder.apply(&original).unwrap();
        let restored = builder.apply_reverse(&projected).unwrap();
        assert_abs_diff_eq!(restored, original, epsilon = 1e-9);
    }

    #[test]
    fn reverse_agrees_with_numeric_inversion() {
        let mut builder = TransformBuilder::new()
            .shear(Shear { yx: 3.0, yz: -2.0, ..Shear::default() })
            .translate(-3.0, 10.0, 7.0)
            .scale(3.0, 3.0, 3.0)
            .rotate(RotationAxis::X, PI / 4.0)
            .reflect(ReflectionPlane::Origin);
        let forward = builder.build();
        let reverse = builder.build_reverse().unwrap();

        assert_abs_diff_eq!(reverse, forward.inverse().unwrap(), epsilon = 1e-9);
    }

    #[test]
    fn apply_requires_build() {
        let builder = TransformBuilder::new().translate(1.0, 2.0, 3.0);
        assert_eq!(builder.apply(&Point3D::default()), Err(MathError::NotBuilt));
        assert_eq!(builder.apply_reverse(&Point3D::default()), Err(MathError::NotBuilt));
    }

    #[test]
    fn append_invalidates_caches() {
        let mut builder = TransformBuilder::new().rotate(RotationAxis::Z, 1.0);
        builder.build();
        builder.build_reverse().unwrap();

        let stale = builder.scale(2.0, 2.0, 2.0);
        assert!(!stale.is_built());
        assert_eq!(stale.apply(&Point3D::default()), Err(MathError::NotBuilt));
    }

    #[test]
    fn reflections_are_involutions() {
        for plane in [
            ReflectionPlane::Xy,
            ReflectionPlane::Yz,
            ReflectionPlane::Zx,
            ReflectionPlane::Origin,
        ] {
            let step = Step::Reflect { plane };
            let twice = step.matrix().mul_unchecked(&step.inverse_matrix().unwrap());
            assert_eq!(twice, Matrix::identity(4));
        }
    }
}
