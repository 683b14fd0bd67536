use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, UnitVector};
use core::fmt;
use na::Unit;

/// Indicated an inconsistency in the topology of a collision mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TopologyError {
    /// Found a triangle with two or three identical vertices.
    #[error("the triangle {0} has at least two identical vertices.")]
    BadTriangle(u32),
}

/// Indicated an inconsistency while building a collision mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum CollisionMeshBuilderError {
    /// A collision mesh must contain at least one triangle.
    #[error("A collision mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that doesn't exist.
    #[error("the triangle {triangle} references the vertex {index} which doesn't exist.")]
    IndexOutOfBounds {
        /// The triangle holding the bad index.
        triangle: u32,
        /// The bad vertex index.
        index: u32,
    },
    /// Indicated an inconsistency in the topology of a collision mesh.
    #[error("Topology Error: {0}")]
    TopologyError(TopologyError),
}

/// A triangle mesh used as the collision shape of a generated surface.
///
/// Only the vertex positions and the index buffer are kept: normals, tangents and texture
/// coordinates are irrelevant for collision detection.
#[derive(Clone)]
pub struct CollisionMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    local_aabb: Aabb,
}

impl fmt::Debug for CollisionMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CollisionMesh {{ vertices: {}, triangles: {} }}",
            self.vertices.len(),
            self.indices.len()
        )
    }
}

impl CollisionMesh {
    /// Creates a new collision mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, CollisionMeshBuilderError> {
        if indices.is_empty() {
            return Err(CollisionMeshBuilderError::EmptyIndices);
        }

        for (fid, idx) in indices.iter().enumerate() {
            if let Some(bad) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(CollisionMeshBuilderError::IndexOutOfBounds {
                    triangle: fid as u32,
                    index: *bad,
                });
            }

            if idx[0] == idx[1] || idx[0] == idx[2] || idx[1] == idx[2] {
                return Err(CollisionMeshBuilderError::TopologyError(
                    TopologyError::BadTriangle(fid as u32),
                ));
            }
        }

        let local_aabb = Aabb::from_points(vertices.iter().copied());

        Ok(Self {
            vertices,
            indices,
            local_aabb,
        })
    }

    /// Compute the axis-aligned bounding box of this collision mesh.
    pub fn aabb(&self, pos: &Isometry<Real>) -> Aabb {
        self.local_aabb.transform_by(pos)
    }

    /// Gets the local axis-aligned bounding box of this collision mesh.
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }

    /// The number of triangles forming this mesh.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Get the vertices of the `i`-th triangle of this mesh.
    pub fn triangle(&self, i: u32) -> [Point<Real>; 3] {
        let idx = self.indices[i as usize];
        [
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        ]
    }

    /// The normal of the `i`-th triangle, following its counter-clockwise winding.
    ///
    /// Returns `None` if the triangle has a zero area.
    pub fn triangle_normal(&self, i: u32) -> Option<UnitVector<Real>> {
        let [a, b, c] = self.triangle(i);
        Unit::try_new((b - a).cross(&(c - a)), crate::math::DEFAULT_EPSILON)
    }

    /// The vertex buffer of this mesh.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }
}
