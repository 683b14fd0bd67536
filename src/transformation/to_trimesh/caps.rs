use crate::math::{Point, Real, TexCoord, Vector, Vector4};
use crate::shape::ShapeParameters;
use crate::transformation::utils;
use crate::transformation::MeshBuffers;

/// Scale of the planar projection mapping a cap onto its texture region.
pub const CAP_MAP_SCALE: Real = 0.47;

impl ShapeParameters {
    /// Discretizes the two flat disks closing this solid.
    ///
    /// Both disks share the returned buffers: the bottom ring is made of the first
    /// `circumferential_segments()` vertices, and the top ring of the following ones. Each ring
    /// is closed by a fan of `circumferential_segments() - 1` triangles sharing the first vertex
    /// of the ring.
    pub fn caps(&self) -> MeshBuffers {
        let nsubdiv = self.circumferential_segments();
        let half_height = self.half_height();

        let mut dirs = Vec::with_capacity(nsubdiv as usize + 1);
        utils::push_circle_directions(nsubdiv, &mut dirs);
        let ring = &dirs[..nsubdiv as usize];

        let mut buffers =
            MeshBuffers::with_capacity(nsubdiv as usize * 2, (nsubdiv as usize - 1) * 2);

        for dir in ring {
            buffers.push_vertex(
                Point::from(dir * self.base_radius - Vector::y() * half_height),
                -Vector::y(),
                Vector4::new(-1.0, 0.0, 0.0, 1.0),
                TexCoord::new(-dir.x * CAP_MAP_SCALE + 0.5, -dir.z * CAP_MAP_SCALE + 0.5),
            );
        }

        for dir in ring {
            buffers.push_vertex(
                Point::from(dir * self.top_radius + Vector::y() * half_height),
                Vector::y(),
                Vector4::new(1.0, 0.0, 0.0, 1.0),
                TexCoord::new(dir.x * CAP_MAP_SCALE + 0.5, -dir.z * CAP_MAP_SCALE + 0.5),
            );
        }

        utils::push_ring_fan_indices(0, nsubdiv, &mut buffers.indices);
        utils::push_ring_fan_indices(nsubdiv, nsubdiv, &mut buffers.indices);
        utils::reverse_clockwising(&mut buffers.indices[nsubdiv as usize - 1..]);

        buffers
    }
}

/// Splits the shared buffers returned by [`ShapeParameters::caps`] into the bottom and the
/// top disks.
///
/// The bottom ring is the first half of the vertices of `caps`, the top ring the second half.
pub fn split_cap_rings(caps: &MeshBuffers) -> (MeshBuffers, MeshBuffers) {
    let nsubdiv = caps.num_vertices() as u32 / 2;
    (caps.extract(0..nsubdiv), caps.extract(nsubdiv..nsubdiv * 2))
}
