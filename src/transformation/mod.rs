//! Mesh generation and mesh data.

pub use self::mesh_buffers::MeshBuffers;
pub use self::to_trimesh::{
    side_surface_from_profile, split_cap_rings, ProfileSample, CAP_MAP_SCALE,
};

mod mesh_buffers;
mod to_trimesh;
pub mod utils;

#[cfg(feature = "wavefront")]
pub mod wavefront;
