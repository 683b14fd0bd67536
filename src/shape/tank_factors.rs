//! Host-side sizing factors of a stretchy tank.

use crate::math::Real;
use crate::shape::{ControlShape, ShapeParameters};

/// The radius, in meters, of a tank with a radial factor of `1.0`.
pub const RADIUS_UNIT: Real = 1.25;
/// The height, in meters, of a tank with a stretch factor of `1.0`.
pub const HEIGHT_UNIT: Real = 1.875;
/// The smallest allowed top factor.
pub const MIN_TOP_FACTOR: Real = 0.075;
/// The largest allowed top factor.
pub const MAX_TOP_FACTOR: Real = 7.5;
/// How much the top factor changes per unit of pointer motion.
pub const TOP_DRAG_SENSITIVITY: Real = 0.075;

/// Unitless sizing factors, as persisted and edited by the host application.
///
/// These are converted into a [`ShapeParameters`] with [`TankFactors::shape_parameters`]
/// before building any mesh.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct TankFactors {
    /// Scale of the base radius, in units of [`RADIUS_UNIT`].
    pub radial_factor: Real,
    /// Scale of the height, in units of [`HEIGHT_UNIT`].
    pub stretch_factor: Real,
    /// Scale of the top radius, in units of [`RADIUS_UNIT`].
    pub top_factor: Real,
    /// The profile of the tank.
    pub cone_shape: ControlShape,
    /// The number of segments around the tank axis.
    pub circle_segments: u32,
    /// The number of segments along the tank axis.
    pub height_segments: u32,
}

impl Default for TankFactors {
    fn default() -> Self {
        Self {
            radial_factor: 1.0,
            stretch_factor: 1.0,
            top_factor: 1.0,
            cone_shape: ControlShape::default(),
            circle_segments: 24,
            height_segments: 10,
        }
    }
}

impl TankFactors {
    /// The base radius, top radius and height of the tank, in meters.
    pub fn shape_parameters(&self) -> ShapeParameters {
        ShapeParameters {
            base_radius: self.radial_factor * RADIUS_UNIT,
            top_radius: self.top_factor * RADIUS_UNIT,
            height: self.stretch_factor * HEIGHT_UNIT,
            circumferential_segments: self.circle_segments,
            longitudinal_segments: self.height_segments,
            control_shape: self.cone_shape,
        }
    }

    /// Changes the top factor following a pointer motion of `(dx, dy)`.
    ///
    /// The new factor is clamped to `[MIN_TOP_FACTOR, MAX_TOP_FACTOR]`. Returns `true` if the
    /// factor changed, in which case the tank meshes must be rebuilt.
    pub fn drag_top_factor(&mut self, dx: Real, dy: Real) -> bool {
        let initial = self.top_factor;
        self.top_factor = (self.top_factor + (dx + dy) * TOP_DRAG_SENSITIVITY)
            .clamp(MIN_TOP_FACTOR, MAX_TOP_FACTOR);
        self.top_factor != initial
    }
}
