use taper3d::rebuild::{
    rebuild_tank, MeshSink, MeshTarget, RebuildError, RebuildMode, Renderable, SinkError,
    TankModel,
};
use taper3d::shape::{ShapeParameters, TankFactors};

#[test]
fn failed_rebuild_keeps_the_last_geometry() {
    let mut model = TankModel::new();
    let first = ShapeParameters::new(1.0, 2.0, 3.0);
    assert!(rebuild_tank(&first, RebuildMode::Interactive, &mut model).is_complete());

    // The side mesh resource disappears: only the caps follow the new parameters.
    model.side.as_mut().unwrap().mesh = None;
    let second = ShapeParameters::new(1.5, 0.5, 3.0);
    let report = rebuild_tank(&second, RebuildMode::Interactive, &mut model);

    assert_eq!(
        report.side,
        Err(RebuildError::Sink(SinkError::MissingMeshResource(
            MeshTarget::Side
        )))
    );
    assert!(report.bottom_cap.is_ok() && report.top_cap.is_ok());
    assert_eq!(model.mesh(MeshTarget::TopCap).unwrap().revision(), 2);

    // The collider was not touched either.
    assert_eq!(
        model.side_shape().unwrap().vertices(),
        &first.side_surface().vertices[..]
    );
}

#[test]
fn missing_renderables_are_reported_per_target() {
    let mut model = TankModel {
        side: None,
        bottom_cap: Some(Renderable::default()),
        top_cap: Some(Renderable::with_mesh()),
    };

    let report = rebuild_tank(
        &ShapeParameters::default(),
        RebuildMode::Interactive,
        &mut model,
    );

    assert_eq!(
        report.outcome(MeshTarget::Side),
        Err(SinkError::MissingRenderable(MeshTarget::Side).into())
    );
    assert_eq!(
        report.outcome(MeshTarget::BottomCap),
        Err(SinkError::MissingMeshResource(MeshTarget::BottomCap).into())
    );
    assert_eq!(report.outcome(MeshTarget::TopCap), Ok(()));
    assert!(!report.is_complete());
    assert!(model.side_collider().is_none());
}

#[test]
fn collider_is_replaced_not_merged() {
    let mut model = TankModel::new();
    let params = ShapeParameters::default().with_segments(16, 4);

    let _ = rebuild_tank(&params, RebuildMode::Interactive, &mut model);
    assert_eq!(model.side_shape().unwrap().num_triangles(), 16 * 4 * 2);

    let _ = rebuild_tank(&params.with_segments(5, 2), RebuildMode::Interactive, &mut model);
    assert_eq!(model.side_shape().unwrap().num_triangles(), 5 * 2 * 2);
    assert_eq!(model.side_shape().unwrap().vertices().len(), 6 * 3);
}

#[test]
fn static_hint_follows_the_mode() {
    let mut model = TankModel::new();
    let params = ShapeParameters::default();

    let _ = rebuild_tank(&params, RebuildMode::Static, &mut model);
    assert!(model.mesh(MeshTarget::Side).unwrap().is_optimized_for_static());
    assert!(model.mesh(MeshTarget::TopCap).unwrap().is_optimized_for_static());

    let _ = rebuild_tank(&params, RebuildMode::Interactive, &mut model);
    assert!(!model.mesh(MeshTarget::Side).unwrap().is_optimized_for_static());
    assert_eq!(model.mesh(MeshTarget::Side).unwrap().revision(), 2);
}

#[test]
fn dragging_the_top_resizes_the_top_cap() {
    let mut model = TankModel::new();
    let mut factors = TankFactors::default();
    let _ = rebuild_tank(
        &factors.shape_parameters(),
        RebuildMode::Interactive,
        &mut model,
    );

    if factors.drag_top_factor(2.0, 0.0) {
        let _ = rebuild_tank(
            &factors.shape_parameters(),
            RebuildMode::Interactive,
            &mut model,
        );
    }

    let top = model.mesh(MeshTarget::TopCap).unwrap().buffers();
    let bottom = model.mesh(MeshTarget::BottomCap).unwrap().buffers();
    let top_radius = top.vertices[0].coords.xz().norm();
    let bottom_radius = bottom.vertices[0].coords.xz().norm();

    assert_eq!(model.mesh(MeshTarget::TopCap).unwrap().revision(), 2);
    assert!((top_radius - 1.15 * 1.25).abs() < 1.0e-5);
    assert!((bottom_radius - 1.25).abs() < 1.0e-5);
}
