//! Installation of generated tank meshes into a host scene.
//!
//! The host owns the renderables and the collision shape of a tank. It exposes them through
//! the [`MeshSink`] trait, and [`rebuild_tank`] replaces their content every time the shape
//! parameters change. Each of the three targets (side surface, bottom cap, top cap) is
//! rebuilt independently: a missing renderable only prevents the update of its own target,
//! which keeps its previous geometry.

pub use self::error::{RebuildError, SinkError};
pub use self::rebuild_tank::{rebuild_tank, RebuildMode, RebuildReport};
pub use self::sink::{ColliderSlot, MeshSink, MeshSlot, MeshTarget, Renderable, TankModel};

mod error;
mod rebuild_tank;
mod sink;
