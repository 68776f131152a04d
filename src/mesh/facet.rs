//! Triangular facets: three vertices and a winding normal.

use crate::errors::MathResult;
use crate::point::Point3D;
use crate::transform::transform3d::TransformBuilder;
use crate::vector::Vector3D;

/// A triangular mesh element: exactly three vertex points and one normal
/// vector. The normal is derived from the vertex winding and recomputed
/// whenever the vertices change.
#[derive(Debug, Clone, PartialEq)]
pub struct Facet {
    vertices: [Point3D; 3],
    normal: Vector3D,
}

impl Facet {
    /// Build a facet from its vertices, deriving the normal from the
    /// winding.
    pub fn new(v1: Point3D, v2: Point3D, v3: Point3D) -> Self {
        let vertices = [v1, v2, v3];
        Facet { normal: compute_normal(&vertices), vertices }
    }

    /// Build a facet from a supplied normal and vertices, trusting the
    /// normal as given (file import keeps whatever the file declared).
    pub const fn from_parts(normal: Vector3D, vertices: [Point3D; 3]) -> Self {
        Facet { vertices, normal }
    }

    pub const fn vertices(&self) -> &[Point3D; 3] {
        &self.vertices
    }

    pub const fn normal(&self) -> &Vector3D {
        &self.normal
    }

    /// Replace all three vertices and recompute the normal from the new
    /// winding.
    pub fn set_vertices(&mut self, v1: Point3D, v2: Point3D, v3: Point3D) {
        self.vertices = [v1, v2, v3];
        self.normal = compute_normal(&self.vertices);
    }

    /// Run every vertex through a built pipeline and recompute the normal.
    /// Fails with `NotBuilt` if the pipeline has not been compiled.
    pub fn transform(&self, pipeline: &TransformBuilder) -> MathResult<Facet> {
        let vertices = [
            pipeline.apply(&self.vertices[0])?,
            pipeline.apply(&self.vertices[1])?,
            pipeline.apply(&self.vertices[2])?,
        ];
        Ok(Facet { normal: compute_normal(&vertices), vertices })
    }
}

/// The winding normal: the cross product of the edges leaving the middle
/// vertex. Not normalized; callers that need a unit normal divide by the
/// magnitude themselves.
fn compute_normal(vertices: &[Point3D; 3]) -> Vector3D {
    let [v1, v2, v3] = vertices;
    Vector3D::between(v2, v1).cross(&Vector3D::between(v2, v3))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::transform::transform3d::RotationAxis;
    use approx::assert_abs_diff_eq;

    fn unit_triangle() -> Facet {
        Facet::new(
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn normal_follows_winding() {
        let facet = unit_triangle();
        // Edges out of the middle vertex: (-1, 0, 0) and (-1, 1, 0).
        assert_eq!(*facet.normal(), Vector3D::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn set_vertices_recomputes_normal() {
        let mut facet = unit_triangle();
        // Swap two vertices; the winding, and so the normal, flips.
        facet.set_vertices(
            Point3D::new(0.0, 1.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 0.0, 0.0),
        );
        assert_eq!(*facet.normal(), Vector3D::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn transform_maps_vertices_and_normal() {
        let facet = unit_triangle();
        let mut pipeline = TransformBuilder::new().rotate(RotationAxis::X, crate::float_types::FRAC_PI_2);

        // Not built yet: the facet refuses to transform.
        assert!(facet.transform(&pipeline).is_err());

        pipeline.build();
        let turned = facet.transform(&pipeline).unwrap();
        assert_abs_diff_eq!(turned.vertices()[2], Point3D::new(0.0, 0.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(*turned.normal(), Vector3D::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }
}
