use approx::assert_relative_eq;
use taper3d::shape::ShapeParameters;
use taper3d::transformation::split_cap_rings;

fn scenario() -> ShapeParameters {
    ShapeParameters::new(1.25, 1.25, 1.875).with_segments(4, 1)
}

#[test]
fn unit_tank_side_surface() {
    let side = scenario().side_surface();

    assert_eq!(side.num_vertices(), 10);
    assert_eq!(side.num_triangles(), 8);

    for pt in &side.vertices {
        assert_relative_eq!(pt.coords.xz().norm(), 1.25, epsilon = 1.0e-6);
        assert!(pt.y == -0.9375 || pt.y == 0.9375, "unexpected height {}", pt.y);
    }

    assert!(side.vertices[..5].iter().all(|pt| pt.y == -0.9375));
    assert!(side.vertices[5..].iter().all(|pt| pt.y == 0.9375));
}

#[test]
fn unit_tank_profile() {
    let profile = scenario().profile();

    assert_eq!(profile.len(), 2);
    assert_eq!(profile[0].radius, 1.25);
    assert_eq!(profile[1].radius, 1.25);
    assert_eq!(profile[0].y, -0.9375);
    assert_eq!(profile[1].y, 0.9375);
}

#[test]
fn unit_tank_caps() {
    let params = scenario();
    let caps = params.caps();

    assert_eq!(caps.num_vertices(), 8);
    assert_eq!(caps.num_triangles(), 6);

    let (bottom, top) = split_cap_rings(&caps);
    assert!(bottom.vertices.iter().all(|pt| pt.y == -0.9375));
    assert!(top.vertices.iter().all(|pt| pt.y == 0.9375));
}

#[test]
fn side_and_caps_share_their_boundary() {
    let params = ShapeParameters::new(0.8, 2.1, 3.0).with_segments(16, 5);
    let side = params.side_surface();
    let caps = params.caps();
    let (bottom, top) = split_cap_rings(&caps);

    let first_row = &side.vertices[..16];
    let last_row = &side.vertices[side.num_vertices() - 17..side.num_vertices() - 1];

    for (s, c) in first_row.iter().zip(bottom.vertices.iter()) {
        assert_relative_eq!(*s, *c, epsilon = 1.0e-5);
    }

    for (s, c) in last_row.iter().zip(top.vertices.iter()) {
        assert_relative_eq!(*s, *c, epsilon = 1.0e-5);
    }
}

#[test]
fn clamped_tessellation_matches_its_minimum() {
    let params = ShapeParameters::new(1.0, 0.3, 2.0);

    assert_eq!(
        params.with_segments(1, 3).side_surface(),
        params.with_segments(3, 3).side_surface()
    );
    assert_eq!(params.with_segments(0, 3).caps(), params.with_segments(3, 3).caps());
    assert_eq!(
        params.with_segments(6, 0).side_surface(),
        params.with_segments(6, 1).side_surface()
    );
}

#[test]
fn bounding_box_of_a_cone() {
    let params = ShapeParameters::new(2.0, 1.0, 4.0).with_segments(8, 4);
    let aabb = params.side_surface().local_aabb();

    assert_relative_eq!(aabb.mins.y, -2.0);
    assert_relative_eq!(aabb.maxs.y, 2.0);
    assert_relative_eq!(aabb.maxs.x, 2.0, epsilon = 1.0e-6);
    assert_relative_eq!(aabb.mins.x, -2.0, epsilon = 1.0e-6);
}
