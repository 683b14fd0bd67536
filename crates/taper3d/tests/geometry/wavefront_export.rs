use taper3d::shape::ShapeParameters;

#[test]
fn side_surface_to_obj_file() {
    let side = ShapeParameters::default().with_segments(6, 2).side_surface();
    let path = std::env::temp_dir().join("taper3d_side_surface.obj");

    side.to_obj_file(&path, "side").unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let count = |prefix: &str| content.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("v "), side.num_vertices());
    assert_eq!(count("vt "), side.num_vertices());
    assert_eq!(count("vn "), side.num_vertices());
    assert_eq!(count("f "), side.num_triangles());
}
