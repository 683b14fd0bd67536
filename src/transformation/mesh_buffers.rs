use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Tangent, TexCoord, Vector};
use crate::shape::{CollisionMesh, CollisionMeshBuilderError};

/// The vertex and index buffers of a renderable triangle mesh.
///
/// Every vertex attribute buffer has one element per vertex. Triangles are
/// counter-clockwise when seen from the side their vertex normals point to.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBuffers {
    /// Vertex positions.
    pub vertices: Vec<Point<Real>>,
    /// Unit vertex normals.
    pub normals: Vec<Vector<Real>>,
    /// Unit vertex tangents, with the bitangent handedness sign stored in `w`.
    pub tangents: Vec<Tangent<Real>>,
    /// Texture coordinates.
    pub uvs: Vec<TexCoord<Real>>,
    /// Vertex indices of each triangle.
    pub indices: Vec<[u32; 3]>,
}

impl MeshBuffers {
    /// Empty buffers with room for `num_vertices` vertices and `num_triangles` triangles.
    pub fn with_capacity(num_vertices: usize, num_triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            normals: Vec::with_capacity(num_vertices),
            tangents: Vec::with_capacity(num_vertices),
            uvs: Vec::with_capacity(num_vertices),
            indices: Vec::with_capacity(num_triangles),
        }
    }

    /// Appends one vertex with all its attributes.
    #[inline]
    pub fn push_vertex(
        &mut self,
        position: Point<Real>,
        normal: Vector<Real>,
        tangent: Tangent<Real>,
        uv: TexCoord<Real>,
    ) {
        self.vertices.push(position);
        self.normals.push(normal);
        self.tangents.push(tangent);
        self.uvs.push(uv);
    }

    /// The number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// The number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if these buffers contain no vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The local axis-aligned bounding box of the vertices.
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }

    /// Builds a collision shape from the positions and triangles of these buffers.
    pub fn to_collision_mesh(&self) -> Result<CollisionMesh, CollisionMeshBuilderError> {
        CollisionMesh::new(self.vertices.clone(), self.indices.clone())
    }

    /// Copies the vertices in `range` and the triangles only referencing them.
    ///
    /// Indices of the returned buffers are rebased to start at zero.
    pub fn extract(&self, range: core::ops::Range<u32>) -> Self {
        let vtx = range.start as usize..range.end as usize;
        let indices = self
            .indices
            .iter()
            .filter(|idx| idx.iter().all(|i| range.contains(i)))
            .map(|idx| (*idx).map(|i| i - range.start))
            .collect();

        Self {
            vertices: self.vertices[vtx.clone()].to_vec(),
            normals: self.normals[vtx.clone()].to_vec(),
            tangents: self.tangents[vtx.clone()].to_vec(),
            uvs: self.uvs[vtx].to_vec(),
            indices,
        }
    }
}
