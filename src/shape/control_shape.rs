//! Bézier blend used as the profile of tapered shapes.

use crate::math::{Point2, Real, Vector4};

/// The two free control points of a cubic Bézier curve going from `(0, 0)` to `(1, 1)`.
///
/// The curve lives in the unit square: its `x` coordinate blends between the narrow and the
/// wide radius of a tapered shape, and its `y` coordinate is the normalized height.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct ControlShape {
    /// The control point following the `(0, 0)` endpoint.
    pub p1: Point2<Real>,
    /// The control point preceding the `(1, 1)` endpoint.
    pub p2: Point2<Real>,
}

impl Default for ControlShape {
    fn default() -> Self {
        Self::new(Point2::new(0.3, 0.2), Point2::new(0.8, 0.7))
    }
}

impl ControlShape {
    /// Creates a control shape from its two free control points.
    pub fn new(p1: Point2<Real>, p2: Point2<Real>) -> Self {
        Self { p1, p2 }
    }

    /// Creates a control shape from its packed form `(p1.x, p1.y, p2.x, p2.y)`.
    pub fn from_packed(v: Vector4<Real>) -> Self {
        Self::new(Point2::new(v.x, v.y), Point2::new(v.z, v.w))
    }

    /// The packed form `(p1.x, p1.y, p2.x, p2.y)` of this control shape.
    pub fn packed(&self) -> Vector4<Real> {
        Vector4::new(self.p1.x, self.p1.y, self.p2.x, self.p2.y)
    }

    /// The control shape of a straight diagonal (linear taper).
    pub fn linear() -> Self {
        Self::new(
            Point2::new(1.0 / 3.0, 1.0 / 3.0),
            Point2::new(2.0 / 3.0, 2.0 / 3.0),
        )
    }

    /// Evaluates the curve at the parameter `t` with de Casteljau's algorithm.
    ///
    /// Values of `t` outside of `[0, 1]` extrapolate the curve.
    pub fn interp(&self, t: Real) -> Point2<Real> {
        let p0 = Point2::origin();
        let p3 = Point2::new(1.0, 1.0);

        let a = p0.lerp(&self.p1, t);
        let b = self.p1.lerp(&self.p2, t);
        let c = self.p2.lerp(&p3, t);

        let d = a.lerp(&b, t);
        let e = b.lerp(&c, t);

        d.lerp(&e, t)
    }
}
