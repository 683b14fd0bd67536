use crate::math::Real;
use crate::shape::ShapeParameters;
use approx::{AbsDiffEq, RelativeEq};

/// One sample of the meridian profile of a tapered solid.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ProfileSample {
    /// Distance to the revolution axis.
    pub radius: Real,
    /// Position along the revolution axis.
    pub y: Real,
    /// Texture `v` coordinate of the vertices swept from this sample.
    pub tex_v: Real,
}

impl ShapeParameters {
    /// Samples the meridian profile of this solid, from its base to its top.
    ///
    /// The profile has `longitudinal_segments() + 1` samples. The Bézier curve always runs
    /// from the narrow end to the wide end, so when the base is wider than the top it is
    /// evaluated backward and its height flipped.
    ///
    /// The texture coordinate of each sample is the height returned by the curve evaluation,
    /// before that flip.
    pub fn profile(&self) -> Vec<ProfileSample> {
        let nsegments = self.longitudinal_segments();
        let radius_delta = (self.base_radius - self.top_radius).abs();
        let min_radius = self.base_radius.min(self.top_radius);
        let widens_upward = self.base_radius <= self.top_radius;

        (0..=nsegments)
            .map(|i| {
                let v = i as Real / nsegments as Real;
                let (pt, tex_v) = if widens_upward {
                    let pt = self.control_shape.interp(v);
                    (pt, pt.y)
                } else {
                    let mut pt = self.control_shape.interp(1.0 - v);
                    let tex_v = pt.y;
                    pt.y = 1.0 - pt.y;
                    (pt, tex_v)
                };

                ProfileSample {
                    radius: radius_delta * pt.x + min_radius,
                    y: (pt.y - 0.5) * self.height,
                    tex_v,
                }
            })
            .collect()
    }
}

impl AbsDiffEq for ProfileSample {
    type Epsilon = Real;

    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.radius.abs_diff_eq(&other.radius, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.tex_v.abs_diff_eq(&other.tex_v, epsilon)
    }
}

impl RelativeEq for ProfileSample {
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.radius.relative_eq(&other.radius, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.tex_v.relative_eq(&other.tex_v, epsilon, max_relative)
    }
}
