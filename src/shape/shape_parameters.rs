//! Dimensions and tessellation densities of tapered solids of revolution.

use crate::math::Real;
use crate::shape::ControlShape;

/// The smallest number of segments around the revolution axis.
pub const MIN_CIRCUMFERENTIAL_SEGMENTS: u32 = 3;
/// The smallest number of segments along the revolution axis.
pub const MIN_LONGITUDINAL_SEGMENTS: u32 = 1;

/// Indicates that a set of shape parameters can't describe a tapered solid.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeParametersError {
    /// The base or top radius is zero or negative.
    #[error("the base and top radii must be strictly positive.")]
    NonPositiveRadius,
    /// The height is zero or negative.
    #[error("the height must be strictly positive.")]
    NonPositiveHeight,
    /// A radius, the height or a profile control point is NaN or infinite.
    #[error("the radii, height and profile control points must be finite.")]
    NonFinite,
}

/// A tapered solid of revolution, with its principal axis aligned with the `y` axis.
///
/// The solid is centered on the origin: its base lies at `y = -height / 2` and its top at
/// `y = height / 2`. The radius varies from `base_radius` to `top_radius` following the
/// Bézier blend described by `control_shape`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ShapeParameters {
    /// The radius at the bottom of the solid.
    pub base_radius: Real,
    /// The radius at the top of the solid.
    pub top_radius: Real,
    /// The length of the solid along the `y` axis.
    pub height: Real,
    /// The number of segments around the revolution axis.
    ///
    /// Values smaller than [`MIN_CIRCUMFERENTIAL_SEGMENTS`] are clamped.
    pub circumferential_segments: u32,
    /// The number of segments along the revolution axis.
    ///
    /// Values smaller than [`MIN_LONGITUDINAL_SEGMENTS`] are clamped.
    pub longitudinal_segments: u32,
    /// The shape of the profile between the base and top radii.
    pub control_shape: ControlShape,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self {
            base_radius: 1.25,
            top_radius: 1.25,
            height: 1.875,
            circumferential_segments: 24,
            longitudinal_segments: 10,
            control_shape: ControlShape::default(),
        }
    }
}

impl ShapeParameters {
    /// Creates new shape parameters with the default control shape.
    ///
    /// # Arguments:
    /// * `base_radius` - the radius at `y = -height / 2`.
    /// * `top_radius` - the radius at `y = height / 2`.
    /// * `height` - the length of the solid along the `y` axis.
    pub fn new(base_radius: Real, top_radius: Real, height: Real) -> Self {
        Self {
            base_radius,
            top_radius,
            height,
            ..Self::default()
        }
    }

    /// Sets the tessellation densities.
    pub fn with_segments(mut self, circumferential: u32, longitudinal: u32) -> Self {
        self.circumferential_segments = circumferential;
        self.longitudinal_segments = longitudinal;
        self
    }

    /// Sets the profile control shape.
    pub fn with_control_shape(mut self, control_shape: ControlShape) -> Self {
        self.control_shape = control_shape;
        self
    }

    /// The number of segments around the axis, clamped to its minimum.
    #[inline]
    pub fn circumferential_segments(&self) -> u32 {
        self.circumferential_segments
            .max(MIN_CIRCUMFERENTIAL_SEGMENTS)
    }

    /// The number of segments along the axis, clamped to its minimum.
    #[inline]
    pub fn longitudinal_segments(&self) -> u32 {
        self.longitudinal_segments.max(MIN_LONGITUDINAL_SEGMENTS)
    }

    /// A copy of `self` with both segment counts clamped to their minimum.
    pub fn clamped(&self) -> Self {
        Self {
            circumferential_segments: self.circumferential_segments(),
            longitudinal_segments: self.longitudinal_segments(),
            ..*self
        }
    }

    /// The half length of the solid along the `y` axis.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height * 0.5
    }

    /// Checks that the radii and height are finite and strictly positive, and that the profile
    /// control points are finite.
    pub fn validate(&self) -> Result<(), ShapeParametersError> {
        if !self.base_radius.is_finite() || !self.top_radius.is_finite() || !self.height.is_finite()
        {
            return Err(ShapeParametersError::NonFinite);
        }

        if !self.control_shape.packed().iter().all(|c| c.is_finite()) {
            return Err(ShapeParametersError::NonFinite);
        }

        if self.base_radius <= 0.0 || self.top_radius <= 0.0 {
            return Err(ShapeParametersError::NonPositiveRadius);
        }

        if self.height <= 0.0 {
            return Err(ShapeParametersError::NonPositiveHeight);
        }

        Ok(())
    }
}
