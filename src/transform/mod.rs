//! Composable affine transform pipelines.
//!
//! Each submodule pairs per-operation homogeneous matrix factories with a
//! recording [`TransformBuilder`](transform3d::TransformBuilder) that
//! compiles an ordered step list into a single forward matrix and,
//! independently, a closed-form reverse matrix.

pub mod transform2d;
pub mod transform3d;

use crate::matrix::Matrix;
use crate::point::Point;

/// Apply a homogeneous transform matrix to a point: pad the point with a
/// trailing 1 into an `(N+1)×1` column, left-multiply, and drop the
/// homogeneous component. Callers guarantee `mtx` is `(N+1)×(N+1)`.
pub(crate) fn apply_matrix<const N: usize>(mtx: &Matrix, pt: &Point<N>) -> Point<N> {
    debug_assert_eq!(mtx.dims(), (N + 1, N + 1));
    let column = Matrix::from_point_padded(pt);
    let transformed = mtx.mul_unchecked(&column);
    let values = transformed.to_vec();
    let mut coords = [0.0; N];
    coords.copy_from_slice(&values[..N]);
    Point::from_coords(coords)
}
