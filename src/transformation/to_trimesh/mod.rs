//! Triangle mesh generation for tapered solids of revolution.
//!
//! A [`ShapeParameters`](crate::shape::ShapeParameters) is discretized in three steps:
//!
//! 1. [`profile`](crate::shape::ShapeParameters::profile) samples the meridian curve, from the
//!    base to the top of the solid.
//! 2. [`side_surface`](crate::shape::ShapeParameters::side_surface) sweeps that profile around
//!    the `y` axis.
//! 3. [`caps`](crate::shape::ShapeParameters::caps) builds the two flat disks closing the solid.
//!
//! Each step returns fresh buffers: nothing is cached between calls.
//!
//! # Mesh Quality Control
//!
//! The tessellation is controlled by two independent segment counts:
//! - `circumferential_segments` (at least 3) around the axis,
//! - `longitudinal_segments` (at least 1) along the axis.
//!
//! Smaller values are clamped, never rejected.
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "f32")]
//! # {
//! use taper3d::shape::ShapeParameters;
//!
//! let params = ShapeParameters::new(1.25, 1.25, 1.875).with_segments(4, 1);
//! let side = params.side_surface();
//!
//! assert_eq!(side.num_vertices(), 10);
//! assert_eq!(side.num_triangles(), 8);
//! # }
//! ```

pub use self::caps::{split_cap_rings, CAP_MAP_SCALE};
pub use self::profile::ProfileSample;
pub use self::side_surface::side_surface_from_profile;

mod caps;
mod profile;
mod side_surface;
