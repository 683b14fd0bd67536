//! Export of generated meshes to the Wavefront (`.obj`) format.

use crate::transformation::MeshBuffers;
use obj::{Group, IndexTuple, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

impl MeshBuffers {
    /// Outputs a Wavefront (`.obj`) file at the given path.
    ///
    /// Positions, texture coordinates and normals are all written; every face references the
    /// three of them with the same index.
    ///
    /// This function is enabled by the `wavefront` feature flag.
    pub fn to_obj_file(&self, path: &Path, name: &str) -> Result<(), ObjError> {
        let mut file = std::fs::File::create(path)?;

        ObjData {
            #[allow(clippy::unnecessary_cast)]
            position: self
                .vertices
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            #[allow(clippy::unnecessary_cast)]
            texture: self.uvs.iter().map(|uv| [uv.x as f32, uv.y as f32]).collect(),
            #[allow(clippy::unnecessary_cast)]
            normal: self
                .normals
                .iter()
                .map(|n| [n.x as f32, n.y as f32, n.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices
                        .iter()
                        .map(|tri| {
                            SimplePolygon(
                                tri.iter()
                                    .map(|i| {
                                        let i = *i as usize;
                                        IndexTuple(i, Some(i), Some(i))
                                    })
                                    .collect(),
                            )
                        })
                        .collect(),
                    name: name.to_string(),
                    index: 0,
                    material: None,
                }],
                name: name.to_string(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)
    }
}
