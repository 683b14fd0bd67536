use super::ProfileSample;
use crate::math::{Point, Real, TexCoord, Vector, Vector2, Vector4};
use crate::shape::{ShapeParameters, MIN_CIRCUMFERENTIAL_SEGMENTS};
use crate::transformation::utils;
use crate::transformation::MeshBuffers;
use na::Unit;

impl ShapeParameters {
    /// Discretizes the lateral surface of this solid.
    ///
    /// The surface is a grid of `circumferential_segments() + 1` columns and
    /// `longitudinal_segments() + 1` rows of vertices. The first and last columns have the same
    /// positions but different texture coordinates (`u = 0` and `u = 1`) so the texture wraps
    /// around without a seam.
    pub fn side_surface(&self) -> MeshBuffers {
        let profile = self.profile();
        side_surface_from_profile(&profile, self.circumferential_segments())
    }
}

/// Sweeps `profile` around the `y` axis with `nsubdiv` segments.
///
/// `nsubdiv` is clamped to [`MIN_CIRCUMFERENTIAL_SEGMENTS`]. `profile` must contain at least
/// two samples.
pub fn side_surface_from_profile(profile: &[ProfileSample], nsubdiv: u32) -> MeshBuffers {
    assert!(profile.len() >= 2);

    let nsubdiv = nsubdiv.max(MIN_CIRCUMFERENTIAL_SEGMENTS);

    let nrows = profile.len() as u32 - 1;
    let mut dirs = Vec::with_capacity(nsubdiv as usize + 1);
    utils::push_circle_directions(nsubdiv, &mut dirs);

    let mut buffers = MeshBuffers::with_capacity(
        dirs.len() * profile.len(),
        (nsubdiv * nrows * 2) as usize,
    );

    for (i, sample) in profile.iter().enumerate() {
        let normal = meridian_normal(profile, i);

        for (j, dir) in dirs.iter().enumerate() {
            buffers.push_vertex(
                Point::from(dir * sample.radius + Vector::y() * sample.y),
                dir * normal.x + Vector::y() * normal.y,
                Vector4::new(-dir.z, 0.0, dir.x, 1.0),
                TexCoord::new(j as Real / nsubdiv as Real, sample.tex_v),
            );
        }
    }

    utils::push_grid_indices(0, nsubdiv, nrows, &mut buffers.indices);
    buffers
}

/// The outward normal of the profile at its `i`-th sample, in `(radial, axial)` coordinates.
fn meridian_normal(profile: &[ProfileSample], i: usize) -> Unit<Vector2<Real>> {
    let (from, to) = if i == 0 {
        (&profile[0], &profile[1])
    } else if i == profile.len() - 1 {
        (&profile[i - 1], &profile[i])
    } else {
        (&profile[i - 1], &profile[i + 1])
    };

    let tangent = Vector2::new(to.radius - from.radius, to.y - from.y);
    Unit::try_new(Vector2::new(tangent.y, -tangent.x), crate::math::DEFAULT_EPSILON)
        // Both samples coincide: fall back to the normal of a cylinder.
        .unwrap_or_else(Vector2::x_axis)
}
