use crate::rebuild::MeshTarget;
use crate::shape::{CollisionMeshBuilderError, ShapeParametersError};

/// Indicates that a mesh target is not available in the host scene.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SinkError {
    /// No mesh-bearing object is bound to the target.
    #[error("no model to reshape for the {0}.")]
    MissingRenderable(MeshTarget),
    /// The renderable bound to the target carries no mesh.
    #[error("no mesh to reshape for the {0}.")]
    MissingMeshResource(MeshTarget),
}

/// Error preventing the rebuild of one mesh target.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RebuildError {
    /// The target is not available in the host scene.
    #[error(transparent)]
    Sink(#[from] SinkError),
    /// The shape parameters don't describe a valid solid.
    #[error("invalid shape parameters: {0}")]
    InvalidParameters(#[from] ShapeParametersError),
    /// The collision shape of the side surface could not be built.
    #[error("invalid collision mesh: {0}")]
    Collider(#[from] CollisionMeshBuilderError),
}
