//! A small geometry toolkit: dense **matrix algebra** and composable
//! **affine transform pipelines**, built to project triangle-mesh vertices
//! into 2D screen space.
//!
//! The engine is deliberately simple — a flat row-major [`Matrix`] with
//! cofactor-expansion determinants and adjugate inverses, sized for the
//! 3×3/4×4 homogeneous matrices affine work produces — paired with a
//! recording [`transform::transform3d::TransformBuilder`] that compiles an
//! ordered operation list into one forward matrix and one closed-form
//! reverse matrix.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` import/export
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod matrix;
pub mod mesh;
pub mod point;
pub mod transform;
pub mod vector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::{MathError, MathResult};
pub use matrix::Matrix;
pub use mesh::{Facet, Mesh};
pub use point::{Point, Point2D, Point3D};
pub use vector::{Vector, Vector2D, Vector3D};
