extern crate nalgebra as na;

use taper3d::rebuild::{rebuild_tank, MeshTarget, RebuildMode, TankModel};
use taper3d::shape::TankFactors;

fn main() {
    let mut factors = TankFactors {
        radial_factor: 1.5,
        stretch_factor: 2.0,
        ..TankFactors::default()
    };
    let mut model = TankModel::new();

    // Simulate a few frames of the user dragging the top of the tank.
    for frame in 0..5 {
        if frame == 0 || factors.drag_top_factor(-1.0, -0.5) {
            let report = rebuild_tank(
                &factors.shape_parameters(),
                RebuildMode::Interactive,
                &mut model,
            );
            assert!(report.is_complete());
        }
    }

    let _ = rebuild_tank(&factors.shape_parameters(), RebuildMode::Static, &mut model);

    for target in [MeshTarget::Side, MeshTarget::BottomCap, MeshTarget::TopCap] {
        let mesh = model.mesh(target).unwrap();
        let aabb = mesh.buffers().local_aabb();
        println!(
            "{}: {} vertices, {} triangles, extents {:?}",
            target,
            mesh.buffers().num_vertices(),
            mesh.buffers().num_triangles(),
            aabb.extents()
        );
    }

    let collider = model.side_shape().unwrap();
    let world_aabb = collider.aabb(&na::Isometry3::translation(0.0, 3.0, 0.0));
    println!("side collider: {:?}, world aabb: {:?}", collider, world_aabb);
}
