//! Triangle meshes as ordered facet lists.

mod facet;
pub use facet::Facet;

use crate::errors::MathResult;
use crate::transform::transform3d::TransformBuilder;

/// An ordered collection of triangular facets, typically read from a model
/// file and projected through a transform pipeline for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    facets: Vec<Facet>,
}

impl Mesh {
    /// An empty mesh.
    pub const fn new() -> Self {
        Mesh { facets: Vec::new() }
    }

    /// A mesh over the given facets, in order.
    pub fn from_facets(facets: Vec<Facet>) -> Self {
        Mesh { facets }
    }

    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Append a facet.
    pub fn push(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Number of facets.
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Run every facet through a built pipeline, producing a new mesh.
    /// Fails with `NotBuilt` if the pipeline has not been compiled.
    pub fn transform(&self, pipeline: &TransformBuilder) -> MathResult<Mesh> {
        let facets = self
            .facets
            .iter()
            .map(|facet| facet.transform(pipeline))
            .collect::<MathResult<Vec<_>>>()?;
        Ok(Mesh { facets })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::point::Point3D;

    #[test]
    fn whole_mesh_transform() {
        let mut mesh = Mesh::new();
        mesh.push(Facet::new(
            Point3D::new(0.0, 0.0, 0.0),
            Point3D::new(1.0, 0.0, 0.0),
            Point3D::new(0.0, 1.0, 0.0),
        ));
        mesh.push(Facet::new(
            Point3D::new(1.0, 1.0, 1.0),
            Point3D::new(2.0, 1.0, 1.0),
            Point3D::new(1.0, 2.0, 1.0),
        ));
        assert_eq!(mesh.len(), 2);

        let mut pipeline = TransformBuilder::new().translate(0.0, 0.0, 10.0);
        assert!(mesh.transform(&pipeline).is_err(), "pipeline not built yet");

        pipeline.build();
        let moved = mesh.transform(&pipeline).unwrap();
        assert_eq!(moved.facets()[1].vertices()[0], Point3D::new(1.0, 1.0, 11.0));
        // Translation leaves normals untouched.
        assert_eq!(moved.facets()[0].normal(), mesh.facets()[0].normal());
    }
}
