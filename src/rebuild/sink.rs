use crate::rebuild::SinkError;
use crate::shape::CollisionMesh;
use crate::transformation::MeshBuffers;
use core::fmt;

/// The three meshes making up a tank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MeshTarget {
    /// The lateral surface.
    Side,
    /// The disk closing the base.
    BottomCap,
    /// The disk closing the top.
    TopCap,
}

impl fmt::Display for MeshTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshTarget::Side => f.pad("side surface"),
            MeshTarget::BottomCap => f.pad("bottom cap"),
            MeshTarget::TopCap => f.pad("top cap"),
        }
    }
}

/// A mesh resource of the host scene, whose content is replaced on every rebuild.
#[derive(Clone, Debug, Default)]
pub struct MeshSlot {
    buffers: MeshBuffers,
    optimized_for_static: bool,
    revision: u64,
}

impl MeshSlot {
    /// An empty mesh resource.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the content of this mesh.
    ///
    /// `optimize_for_static` tells the renderer that the mesh won't change for a while and
    /// may be reorganized for faster rendering.
    pub fn install(&mut self, buffers: MeshBuffers, optimize_for_static: bool) {
        self.buffers = buffers;
        self.optimized_for_static = optimize_for_static;
        self.revision += 1;
    }

    /// The current content of this mesh.
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Was the current content installed with the static-rendering hint?
    pub fn is_optimized_for_static(&self) -> bool {
        self.optimized_for_static
    }

    /// The number of times a content was installed in this mesh.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// The collision shape attached to the side surface of a tank.
#[derive(Clone, Debug, Default)]
pub struct ColliderSlot {
    shape: Option<CollisionMesh>,
}

impl ColliderSlot {
    /// A collider without any shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the current shape, invalidating anything derived from it.
    pub fn clear(&mut self) {
        self.shape = None;
    }

    /// Sets the shape of this collider.
    pub fn set(&mut self, shape: CollisionMesh) {
        self.shape = Some(shape);
    }

    /// The current shape of this collider.
    pub fn shape(&self) -> Option<&CollisionMesh> {
        self.shape.as_ref()
    }
}

/// The host objects receiving the generated tank meshes.
pub trait MeshSink {
    /// The mesh resource bound to `target`.
    fn mesh_slot(&mut self, target: MeshTarget) -> Result<&mut MeshSlot, SinkError>;

    /// The collider attached to the side surface, if any.
    fn side_collider(&mut self) -> Option<&mut ColliderSlot>;
}

/// A renderable object of the host scene.
#[derive(Clone, Debug, Default)]
pub struct Renderable {
    /// The mesh drawn by this object.
    pub mesh: Option<MeshSlot>,
    /// The collider attached to this object.
    pub collider: Option<ColliderSlot>,
}

impl Renderable {
    /// A renderable with an empty mesh and no collider.
    pub fn with_mesh() -> Self {
        Self {
            mesh: Some(MeshSlot::new()),
            collider: None,
        }
    }

    /// A renderable with an empty mesh and an empty collider.
    pub fn with_mesh_and_collider() -> Self {
        Self {
            mesh: Some(MeshSlot::new()),
            collider: Some(ColliderSlot::new()),
        }
    }
}

/// An in-memory tank: a side surface renderable and its two cap renderables.
#[derive(Clone, Debug, Default)]
pub struct TankModel {
    /// The lateral surface, carrying the collider.
    pub side: Option<Renderable>,
    /// The disk closing the base.
    pub bottom_cap: Option<Renderable>,
    /// The disk closing the top.
    pub top_cap: Option<Renderable>,
}

impl TankModel {
    /// A tank where every renderable, mesh and collider is present.
    pub fn new() -> Self {
        Self {
            side: Some(Renderable::with_mesh_and_collider()),
            bottom_cap: Some(Renderable::with_mesh()),
            top_cap: Some(Renderable::with_mesh()),
        }
    }

    /// The renderable bound to `target`.
    pub fn renderable(&self, target: MeshTarget) -> Option<&Renderable> {
        match target {
            MeshTarget::Side => self.side.as_ref(),
            MeshTarget::BottomCap => self.bottom_cap.as_ref(),
            MeshTarget::TopCap => self.top_cap.as_ref(),
        }
    }

    /// The mesh bound to `target`, if both the renderable and its mesh exist.
    pub fn mesh(&self, target: MeshTarget) -> Option<&MeshSlot> {
        self.renderable(target)?.mesh.as_ref()
    }

    /// The collision shape of the side surface, if any.
    pub fn side_shape(&self) -> Option<&CollisionMesh> {
        self.side.as_ref()?.collider.as_ref()?.shape()
    }
}

impl MeshSink for TankModel {
    fn mesh_slot(&mut self, target: MeshTarget) -> Result<&mut MeshSlot, SinkError> {
        let renderable = match target {
            MeshTarget::Side => self.side.as_mut(),
            MeshTarget::BottomCap => self.bottom_cap.as_mut(),
            MeshTarget::TopCap => self.top_cap.as_mut(),
        };

        renderable
            .ok_or(SinkError::MissingRenderable(target))?
            .mesh
            .as_mut()
            .ok_or(SinkError::MissingMeshResource(target))
    }

    fn side_collider(&mut self) -> Option<&mut ColliderSlot> {
        self.side.as_mut()?.collider.as_mut()
    }
}
