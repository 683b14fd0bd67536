//! Low-level utilities for mesh and geometry generation.
//!
//! These functions push vertex directions and triangle indices into caller-provided
//! buffers. They are the building blocks of the side surface and cap generators.

use crate::math::{Real, Vector};
use na::RealField;

/// Pushes `nsubdiv + 1` unit directions evenly spaced around the `y` axis.
///
/// The directions lie on the `xz` plane and start at `+x`. The last direction is an exact
/// copy of the first one so that a surface swept along them closes without a gap.
#[inline]
pub fn push_circle_directions(nsubdiv: u32, out: &mut Vec<Vector<Real>>) {
    assert!(nsubdiv > 0);
    let dtheta = Real::two_pi() / (nsubdiv as Real);

    for i in 0..nsubdiv {
        let theta = dtheta * (i as Real);
        out.push(Vector::new(theta.cos(), 0.0, theta.sin()));
    }

    out.push(out[out.len() - nsubdiv as usize]);
}

/// Pushes the two triangles of a quad with corners `(dl, dr, ul, ur)`.
///
/// `d*` are the corners of the lower edge and `u*` the corners of the upper edge. The quad
/// is split along its `dl-ur` diagonal.
#[inline]
pub fn push_quad_indices(dl: u32, dr: u32, ul: u32, ur: u32, out: &mut Vec<[u32; 3]>) {
    out.push([dl, ur, dr]);
    out.push([dl, ul, ur]);
}

/// Pushes the triangles of a grid of `ncols × nrows` quads.
///
/// The grid vertices start at `base` and are laid out row by row, each row having
/// `ncols + 1` vertices.
#[inline]
pub fn push_grid_indices(base: u32, ncols: u32, nrows: u32, out: &mut Vec<[u32; 3]>) {
    let stride = ncols + 1;

    for i in 0..nrows {
        let row = base + i * stride;

        for j in 0..ncols {
            let dl = row + j;
            push_quad_indices(dl, dl + 1, dl + stride, dl + stride + 1, out);
        }
    }
}

/// Pushes a triangle fan around the closed ring of `nsubdiv` vertices starting at `base`.
///
/// Every triangle has the first ring vertex as its apex. The fan has `nsubdiv - 1` triangles:
/// the last one wraps around onto the apex and has a zero area.
#[inline]
pub fn push_ring_fan_indices(base: u32, nsubdiv: u32, out: &mut Vec<[u32; 3]>) {
    assert!(nsubdiv > 0);

    for i in 1..nsubdiv {
        let next = (i + 1) % nsubdiv;
        out.push([base, base + i, base + next]);
    }
}

/// Flips the winding of the given triangles, keeping their first vertex in place.
#[inline]
pub fn reverse_clockwising(indices: &mut [[u32; 3]]) {
    indices.iter_mut().for_each(|idx| idx.swap(1, 2));
}
