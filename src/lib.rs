/*!
taper3d
========

**taper3d** generates the triangle meshes of tapered solids of revolution:
a side surface swept from a Bézier-shaped profile, the two flat caps closing
it, and a collision shape matching the side surface.

```
# #[cfg(feature = "f32")] {
use taper3d::shape::ShapeParameters;

let params = ShapeParameters::default();
let side = params.side_surface();
let caps = params.caps();

assert_eq!(side.num_vertices(), 25 * 11);
assert_eq!(caps.num_triangles(), 2 * 23);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod rebuild;
pub mod shape;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point2, Point3, UnitVector3, Vector2, Vector3, Vector4};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The type of texture coordinates.
    pub type TexCoord<N> = Point2<N>;

    /// The type of tangents: a unit direction and the handedness sign of the bitangent in `w`.
    pub type Tangent<N> = Vector4<N>;
}
