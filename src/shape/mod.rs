//! Shapes supported by taper3d.

pub use self::collision_mesh::{CollisionMesh, CollisionMeshBuilderError, TopologyError};
pub use self::control_shape::ControlShape;
pub use self::shape_parameters::{
    ShapeParameters, ShapeParametersError, MIN_CIRCUMFERENTIAL_SEGMENTS,
    MIN_LONGITUDINAL_SEGMENTS,
};
pub use self::tank_factors::{
    TankFactors, HEIGHT_UNIT, MAX_TOP_FACTOR, MIN_TOP_FACTOR, RADIUS_UNIT, TOP_DRAG_SENSITIVITY,
};

mod collision_mesh;
mod control_shape;
mod shape_parameters;
mod tank_factors;
