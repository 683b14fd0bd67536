use approx::assert_relative_eq;
use taper3d::math::Real;
use taper3d::shape::ShapeParameters;

#[test]
fn narrowing_profile_is_the_reversed_widening_one() {
    let widening = ShapeParameters::new(2.0, 5.0, 3.0).profile();
    let narrowing = ShapeParameters::new(5.0, 2.0, 3.0).profile();

    let reversed: Vec<_> = widening.iter().rev().map(|s| s.radius).collect();
    let radii: Vec<_> = narrowing.iter().map(|s| s.radius).collect();

    assert_eq!(reversed.len(), radii.len());
    for (a, b) in reversed.iter().zip(radii.iter()) {
        assert_relative_eq!(*a, *b, epsilon = 1.0e-5);
    }
}

#[test]
fn radius_deviation_vanishes_with_the_taper() {
    let base = 1.25;
    let mut prev_dev = f64::MAX;

    for k in 1..6 {
        let top = base + (10.0 as Real).powi(-k);
        let dev = ShapeParameters::new(base, top, 1.875)
            .profile()
            .iter()
            .map(|s| ((s.radius - base) as f64).abs())
            .fold(0.0, f64::max);

        assert!(dev <= prev_dev);
        prev_dev = dev;
    }

    assert!(prev_dev < 1.0e-4);
}

// Pins the texture coordinates of a narrowing tank: `v` follows the curve evaluation and
// thus runs from 1 at the base to 0 at the top.
#[test]
fn narrowing_profile_texture_regression() {
    let profile = ShapeParameters::new(5.0, 2.0, 3.0)
        .with_segments(24, 2)
        .profile();

    let expected = [
        (5.0, -1.5, 1.0),
        (3.6125, 0.1125, 0.4625),
        (2.0, 1.5, 0.0),
    ];

    assert_eq!(profile.len(), expected.len());
    for (sample, (radius, y, tex_v)) in profile.iter().zip(expected) {
        assert_relative_eq!(sample.radius, radius, epsilon = 1.0e-5);
        assert_relative_eq!(sample.y, y, epsilon = 1.0e-5);
        assert_relative_eq!(sample.tex_v, tex_v, epsilon = 1.0e-6);
    }
}

#[test]
fn widening_profile_texture_regression() {
    let profile = ShapeParameters::new(2.0, 5.0, 3.0)
        .with_segments(24, 2)
        .profile();

    let expected = [
        (2.0, -1.5, 0.0),
        (3.6125, -0.1125, 0.4625),
        (5.0, 1.5, 1.0),
    ];

    for (sample, (radius, y, tex_v)) in profile.iter().zip(expected) {
        assert_relative_eq!(sample.radius, radius, epsilon = 1.0e-5);
        assert_relative_eq!(sample.y, y, epsilon = 1.0e-5);
        assert_relative_eq!(sample.tex_v, tex_v, epsilon = 1.0e-6);
    }
}
