use crate::rebuild::{MeshSink, MeshTarget, RebuildError};
use crate::shape::ShapeParameters;
use crate::transformation::{split_cap_rings, MeshBuffers};

/// The context in which a tank is rebuilt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RebuildMode {
    /// The shape is being edited and will likely change again soon.
    #[default]
    Interactive,
    /// The shape is final: meshes are flagged for static-rendering optimizations.
    Static,
}

/// The outcome of [`rebuild_tank`] for each mesh target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RebuildReport {
    /// The outcome for the side surface and its collider.
    pub side: Result<(), RebuildError>,
    /// The outcome for the bottom cap.
    pub bottom_cap: Result<(), RebuildError>,
    /// The outcome for the top cap.
    pub top_cap: Result<(), RebuildError>,
}

impl RebuildReport {
    /// The outcome for the given target.
    pub fn outcome(&self, target: MeshTarget) -> Result<(), RebuildError> {
        match target {
            MeshTarget::Side => self.side,
            MeshTarget::BottomCap => self.bottom_cap,
            MeshTarget::TopCap => self.top_cap,
        }
    }

    /// Were all three targets rebuilt?
    pub fn is_complete(&self) -> bool {
        self.side.is_ok() && self.bottom_cap.is_ok() && self.top_cap.is_ok()
    }
}

/// Regenerates every mesh of a tank and installs them into `sink`.
///
/// Targets that can't be rebuilt keep their previous content; the failure is logged and
/// reported, and the other targets are still rebuilt. The side collider, if present, is
/// cleared before receiving the new side geometry.
pub fn rebuild_tank(
    params: &ShapeParameters,
    mode: RebuildMode,
    sink: &mut impl MeshSink,
) -> RebuildReport {
    if let Err(err) = params.validate() {
        log::error!("[taper3d] cannot rebuild tank: {}", err);
        let err = Err(RebuildError::from(err));
        return RebuildReport {
            side: err,
            bottom_cap: err,
            top_cap: err,
        };
    }

    let params = params.clamped();
    let optimize = mode == RebuildMode::Static;

    let side = rebuild_side(&params, optimize, sink);

    let caps = params.caps();
    let (bottom, top) = split_cap_rings(&caps);
    let bottom_cap = install(sink, MeshTarget::BottomCap, bottom, optimize);
    let top_cap = install(sink, MeshTarget::TopCap, top, optimize);

    let report = RebuildReport {
        side,
        bottom_cap,
        top_cap,
    };

    for target in [MeshTarget::Side, MeshTarget::BottomCap, MeshTarget::TopCap] {
        if let Err(err) = report.outcome(target) {
            log::error!("[taper3d] {} not rebuilt: {}", target, err);
        }
    }

    report
}

fn rebuild_side(
    params: &ShapeParameters,
    optimize: bool,
    sink: &mut impl MeshSink,
) -> Result<(), RebuildError> {
    let slot = sink.mesh_slot(MeshTarget::Side)?;
    let buffers = params.side_surface();
    let shape = buffers.to_collision_mesh()?;

    log::debug!(
        "[taper3d] side surface: {} vertices, {} triangles",
        buffers.num_vertices(),
        buffers.num_triangles()
    );
    slot.install(buffers, optimize);

    match sink.side_collider() {
        Some(collider) => {
            collider.clear();
            collider.set(shape);
        }
        None => log::warn!("[taper3d] the side surface has no collider to update"),
    }

    Ok(())
}

fn install(
    sink: &mut impl MeshSink,
    target: MeshTarget,
    buffers: MeshBuffers,
    optimize: bool,
) -> Result<(), RebuildError> {
    let slot = sink.mesh_slot(target)?;

    log::debug!(
        "[taper3d] {}: {} vertices, {} triangles",
        target,
        buffers.num_vertices(),
        buffers.num_triangles()
    );
    slot.install(buffers, optimize);

    Ok(())
}
